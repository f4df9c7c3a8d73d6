use super::{CoordinateSequence, SequenceLayout};
use crate::errors::GeometryError;
use crate::{Coordinate, NULL_ORDINATE};
use std::fmt;

/// A sequence backed by a `Vec<Coordinate>`.
///
/// Every stored coordinate has the variant matching the sequence layout, so
/// only layouts a `Coordinate` can express (XY, XYZ, XYM, XYZM) are allowed.
#[derive(Debug, Clone)]
pub struct ArraySequence {
    coords: Vec<Coordinate>,
    layout: SequenceLayout,
}

impl ArraySequence {
    pub fn new(
        coords: Vec<Coordinate>,
        dimension: usize,
        measures: usize,
    ) -> Result<Self, GeometryError> {
        let layout = SequenceLayout::new(dimension, measures)?;
        if layout.spatial() > 3 || measures > 1 {
            return Err(GeometryError::InvalidDimension {
                dimension,
                measures,
            });
        }
        let coords = coords
            .into_iter()
            .map(|c| layout.create_coordinate(c.x(), c.y(), c.z(), c.m()))
            .collect();
        Ok(ArraySequence { coords, layout })
    }

    /// Take the layout from the first coordinate; an empty list is XY.
    pub fn of_coordinates(coords: Vec<Coordinate>) -> Self {
        let first = coords.first().copied().unwrap_or_else(|| Coordinate::new(0., 0.));
        let layout = SequenceLayout::of_coordinate(&first);
        let coords = coords
            .into_iter()
            .map(|c| first.create(c.x(), c.y(), c.z(), c.m()))
            .collect();
        ArraySequence { coords, layout }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }
}

impl CoordinateSequence for ArraySequence {
    fn layout(&self) -> &SequenceLayout {
        &self.layout
    }

    fn len(&self) -> usize {
        self.coords.len()
    }

    fn get_ordinate(&self, index: usize, ordinate_index: usize) -> f64 {
        let coord = &self.coords[index];
        match ordinate_index {
            0 => coord.x(),
            1 => coord.y(),
            i if Some(i) == self.layout.z_index() => coord.z(),
            i if Some(i) == self.layout.m_index() => coord.m(),
            _ => NULL_ORDINATE,
        }
    }

    fn set_ordinate(&mut self, index: usize, ordinate_index: usize, value: f64) {
        let coord = self.coords[index];
        let (mut x, mut y, mut z, mut m) = (coord.x(), coord.y(), coord.z(), coord.m());
        match ordinate_index {
            0 => x = value,
            1 => y = value,
            i if Some(i) == self.layout.z_index() => z = value,
            i if Some(i) == self.layout.m_index() => m = value,
            _ => return,
        }
        self.coords[index] = self.layout.create_coordinate(x, y, z, m);
    }

    fn copy(&self) -> Option<Box<dyn CoordinateSequence>> {
        Some(Box::new(self.clone()))
    }

    fn get_coordinate(&self, index: usize) -> Coordinate {
        self.coords[index]
    }

    fn to_coordinate_array(&self) -> Vec<Coordinate> {
        self.coords.clone()
    }
}

impl fmt::Display for ArraySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::ops::to_text(self))
    }
}
