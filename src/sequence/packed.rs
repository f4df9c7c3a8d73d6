use super::{CoordinateSequence, SequenceLayout};
use crate::errors::GeometryError;
use crate::{Coordinate, Envelope, NULL_ORDINATE};
use std::fmt;

/// Coordinates stored interleaved in one `Vec<f64>`: `x0 y0 [z0 ...] x1 y1 ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedSequence {
    coords: Vec<f64>,
    layout: SequenceLayout,
}

impl PackedSequence {
    pub fn new(coords: Vec<f64>, dimension: usize, measures: usize) -> Result<Self, GeometryError> {
        let layout = SequenceLayout::new(dimension, measures)?;
        if coords.len() % dimension != 0 {
            return Err(GeometryError::InvalidArgument(format!(
                "Packed array length {} is not a multiple of dimension {}",
                coords.len(),
                dimension
            )));
        }
        Ok(PackedSequence { coords, layout })
    }

    /// A sequence of `size` coordinates with every ordinate set to zero.
    pub fn with_size(size: usize, dimension: usize, measures: usize) -> Result<Self, GeometryError> {
        PackedSequence::new(vec![0.; size * dimension], dimension, measures)
    }

    pub fn from_coordinates(
        coords: &[Coordinate],
        dimension: usize,
        measures: usize,
    ) -> Result<Self, GeometryError> {
        let mut seq = PackedSequence::with_size(coords.len(), dimension, measures)?;
        for (i, coord) in coords.iter().enumerate() {
            seq.set_coordinate(i, coord);
        }
        Ok(seq)
    }

    /// Build an XY sequence from pairs.
    pub fn from_xy<IP: Into<(f64, f64)>>(points: Vec<IP>) -> Self {
        let coords = points
            .into_iter()
            .map(|p| p.into())
            .flat_map(|(x, y)| vec![x, y])
            .collect();
        PackedSequence {
            coords,
            layout: SequenceLayout::of_coordinate(&Coordinate::new(0., 0.)),
        }
    }

    pub fn raw(&self) -> &[f64] {
        &self.coords
    }

    pub fn raw_mut(&mut self) -> &mut [f64] {
        &mut self.coords
    }
}

impl CoordinateSequence for PackedSequence {
    fn layout(&self) -> &SequenceLayout {
        &self.layout
    }

    fn len(&self) -> usize {
        self.coords.len() / self.layout.dimension()
    }

    fn get_ordinate(&self, index: usize, ordinate_index: usize) -> f64 {
        assert!(index < self.len(), "Coordinate index {} out of bounds", index);
        if ordinate_index >= self.layout.dimension() {
            return NULL_ORDINATE;
        }
        self.coords[index * self.layout.dimension() + ordinate_index]
    }

    fn set_ordinate(&mut self, index: usize, ordinate_index: usize, value: f64) {
        assert!(index < self.len(), "Coordinate index {} out of bounds", index);
        if ordinate_index >= self.layout.dimension() {
            return;
        }
        let dimension = self.layout.dimension();
        self.coords[index * dimension + ordinate_index] = value;
    }

    fn copy(&self) -> Option<Box<dyn CoordinateSequence>> {
        Some(Box::new(self.clone()))
    }

    fn as_packed(&self) -> Option<&PackedSequence> {
        Some(self)
    }

    fn as_packed_mut(&mut self) -> Option<&mut PackedSequence> {
        Some(self)
    }

    fn expand_envelope(&self, env: &mut Envelope) {
        for chunk in self.coords.chunks_exact(self.layout.dimension()) {
            env.expand_to_include(chunk[0], chunk[1]);
        }
    }
}

impl fmt::Display for PackedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::ops::to_text(self))
    }
}
