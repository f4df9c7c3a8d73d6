mod array;
mod packed;
mod parallel;
mod reversed;

pub mod ops;

pub use array::ArraySequence;
pub use packed::PackedSequence;
pub use parallel::ParallelSequence;
pub use reversed::ReversedSequence;

use crate::errors::GeometryError;
use crate::ordinates::{Ordinate, Ordinates, MAX_ORDINATES};
use crate::{Coordinate, CoordinateXY, Envelope, NULL_ORDINATE};

/// The ordinate layout shared by every coordinate of a sequence.
///
/// Built once per sequence; ordinate lookups are answered from the cached
/// values.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SequenceLayout {
    dimension: usize,
    measures: usize,
    ordinates: Ordinates,
    z_index: Option<usize>,
    m_index: Option<usize>,
}

impl SequenceLayout {
    pub fn new(dimension: usize, measures: usize) -> Result<Self, GeometryError> {
        if dimension < measures || dimension - measures < 2 {
            return Err(GeometryError::InvalidDimension {
                dimension,
                measures,
            });
        }
        let spatial = dimension - measures;
        if spatial > MAX_ORDINATES || measures > MAX_ORDINATES {
            return Err(GeometryError::InvalidDimension {
                dimension,
                measures,
            });
        }
        let mut layout = SequenceLayout {
            dimension,
            measures,
            ordinates: Ordinates::from_layout(spatial, measures),
            z_index: None,
            m_index: None,
        };
        layout.z_index = layout.resolve(Ordinate::Z);
        layout.m_index = layout.resolve(Ordinate::M);
        Ok(layout)
    }

    /// The layout of a single coordinate variant.
    pub fn of_coordinate(coord: &Coordinate) -> Self {
        let measures = coord.measures();
        let spatial = coord.dimension() - measures;
        SequenceLayout {
            dimension: coord.dimension(),
            measures,
            ordinates: Ordinates::from_layout(spatial, measures),
            z_index: if coord.has_z() { Some(2) } else { None },
            m_index: if coord.has_m() { Some(spatial) } else { None },
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn measures(&self) -> usize {
        self.measures
    }

    pub fn spatial(&self) -> usize {
        self.dimension - self.measures
    }

    pub fn ordinates(&self) -> Ordinates {
        self.ordinates
    }

    pub fn z_index(&self) -> Option<usize> {
        self.z_index
    }

    pub fn m_index(&self) -> Option<usize> {
        self.m_index
    }

    /// Map a named ordinate to its storage slot, if this layout has it.
    pub fn resolve(&self, ordinate: Ordinate) -> Option<usize> {
        match ordinate {
            Ordinate::Spatial(i) if (i as usize) < self.spatial() => Some(i as usize),
            Ordinate::Measure(i) if (i as usize) < self.measures => {
                Some(self.spatial() + i as usize)
            }
            _ => None,
        }
    }

    /// Build a coordinate of the matching variant.  Layouts wider than XYZM keep
    /// only X, Y, Z and the first measure.
    pub fn create_coordinate(&self, x: f64, y: f64, z: f64, m: f64) -> Coordinate {
        match (self.z_index.is_some(), self.m_index.is_some()) {
            (false, false) => Coordinate::new(x, y),
            (true, false) => Coordinate::new_xyz(x, y, z),
            (false, true) => Coordinate::new_xym(x, y, m),
            (true, true) => Coordinate::new_xyzm(x, y, z, m),
        }
    }
}

/// An ordered list of coordinates sharing one ordinate layout.
///
/// Implementors provide storage access through `get_ordinate`/`set_ordinate`;
/// everything else has a default built on those two, which implementors may
/// override for speed.
///
/// Positions (`index`) past `len()` are programming errors and panic.
/// Ordinate slots past `dimension()` read as `NULL_ORDINATE` and ignore writes.
pub trait CoordinateSequence {
    fn layout(&self) -> &SequenceLayout;

    fn len(&self) -> usize;

    fn get_ordinate(&self, index: usize, ordinate_index: usize) -> f64;

    fn set_ordinate(&mut self, index: usize, ordinate_index: usize, value: f64);

    /// An independent deep copy, if the implementation supports copying.
    fn copy(&self) -> Option<Box<dyn CoordinateSequence>> {
        None
    }

    /// Direct access to interleaved storage, used for bulk copies.
    fn as_packed(&self) -> Option<&PackedSequence> {
        None
    }

    fn as_packed_mut(&mut self) -> Option<&mut PackedSequence> {
        None
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn dimension(&self) -> usize {
        self.layout().dimension()
    }

    fn measures(&self) -> usize {
        self.layout().measures()
    }

    fn spatial(&self) -> usize {
        self.layout().spatial()
    }

    fn ordinates(&self) -> Ordinates {
        self.layout().ordinates()
    }

    fn has_z(&self) -> bool {
        self.layout().z_index().is_some()
    }

    fn has_m(&self) -> bool {
        self.layout().m_index().is_some()
    }

    fn z_index(&self) -> Option<usize> {
        self.layout().z_index()
    }

    fn m_index(&self) -> Option<usize> {
        self.layout().m_index()
    }

    fn try_resolve_ordinate(&self, ordinate: Ordinate) -> Option<usize> {
        self.layout().resolve(ordinate)
    }

    fn get_x(&self, index: usize) -> f64 {
        self.get_ordinate(index, 0)
    }

    fn get_y(&self, index: usize) -> f64 {
        self.get_ordinate(index, 1)
    }

    fn get_z(&self, index: usize) -> f64 {
        match self.z_index() {
            Some(z) => self.get_ordinate(index, z),
            None => NULL_ORDINATE,
        }
    }

    fn get_m(&self, index: usize) -> f64 {
        match self.m_index() {
            Some(m) => self.get_ordinate(index, m),
            None => NULL_ORDINATE,
        }
    }

    fn get_xy(&self, index: usize) -> CoordinateXY {
        CoordinateXY::new(self.get_x(index), self.get_y(index))
    }

    fn get_coordinate(&self, index: usize) -> Coordinate {
        self.layout().create_coordinate(
            self.get_x(index),
            self.get_y(index),
            self.get_z(index),
            self.get_m(index),
        )
    }

    /// Write the X, Y, Z and M of `coord` that this sequence can store.
    fn set_coordinate(&mut self, index: usize, coord: &Coordinate) {
        self.set_ordinate(index, 0, coord.x());
        self.set_ordinate(index, 1, coord.y());
        if let Some(z) = self.z_index() {
            self.set_ordinate(index, z, coord.z());
        }
        if let Some(m) = self.m_index() {
            self.set_ordinate(index, m, coord.m());
        }
    }

    fn to_coordinate_array(&self) -> Vec<Coordinate> {
        (0..self.len()).map(|i| self.get_coordinate(i)).collect()
    }

    fn expand_envelope(&self, env: &mut Envelope) {
        for i in 0..self.len() {
            env.expand_to_include(self.get_x(i), self.get_y(i));
        }
    }

    /// A mutable view presenting this sequence in reverse order.
    fn reversed(&mut self) -> ReversedSequence<'_>
    where
        Self: Sized,
    {
        ReversedSequence::new(self)
    }

    /// A deep copy in reverse order.
    fn reversed_copy(&self) -> Result<Box<dyn CoordinateSequence>, GeometryError> {
        let mut copy = self.copy().ok_or_else(|| {
            GeometryError::UnsupportedOperation("sequence does not support copy".to_owned())
        })?;
        ops::reverse(&mut *copy);
        Ok(copy)
    }
}
