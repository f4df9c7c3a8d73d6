use super::{ops, CoordinateSequence, SequenceLayout};
use crate::{Coordinate, Envelope};

/// A view of a sequence in reverse order.
///
/// The view borrows the original mutably: position `i` of the view is position
/// `len - 1 - i` of the original, for reads and writes alike.  Nothing is copied.
pub struct ReversedSequence<'a> {
    inner: &'a mut dyn CoordinateSequence,
}

impl<'a> ReversedSequence<'a> {
    pub fn new(inner: &'a mut dyn CoordinateSequence) -> Self {
        ReversedSequence { inner }
    }

    fn flip(&self, index: usize) -> usize {
        self.inner.len() - 1 - index
    }
}

impl<'a> CoordinateSequence for ReversedSequence<'a> {
    fn layout(&self) -> &SequenceLayout {
        self.inner.layout()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get_ordinate(&self, index: usize, ordinate_index: usize) -> f64 {
        self.inner.get_ordinate(self.flip(index), ordinate_index)
    }

    fn set_ordinate(&mut self, index: usize, ordinate_index: usize, value: f64) {
        let index = self.flip(index);
        self.inner.set_ordinate(index, ordinate_index, value);
    }

    /// A reversed deep copy of the original.
    fn copy(&self) -> Option<Box<dyn CoordinateSequence>> {
        self.inner.reversed_copy().ok()
    }

    fn get_coordinate(&self, index: usize) -> Coordinate {
        self.inner.get_coordinate(self.flip(index))
    }

    fn to_coordinate_array(&self) -> Vec<Coordinate> {
        let mut coords = self.inner.to_coordinate_array();
        coords.reverse();
        coords
    }

    fn expand_envelope(&self, env: &mut Envelope) {
        self.inner.expand_envelope(env);
    }
}

impl<'a> std::fmt::Display for ReversedSequence<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ops::to_text(self))
    }
}
