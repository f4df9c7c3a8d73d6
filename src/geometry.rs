//! The view of a geometry that predicate dispatch needs.

use crate::sequence::CoordinateSequence;
use crate::{Dimension, Envelope};

/// An atomic part of a geometry, borrowing its coordinate sequences.
pub enum Component<'a> {
    Point(&'a dyn CoordinateSequence),
    LineString(&'a dyn CoordinateSequence),
    Polygon {
        shell: &'a dyn CoordinateSequence,
        holes: Vec<&'a dyn CoordinateSequence>,
    },
}

impl<'a> Component<'a> {
    pub fn envelope(&self) -> Envelope {
        match self {
            Component::Point(seq) | Component::LineString(seq) => Envelope::from_sequence(*seq),
            Component::Polygon { shell, .. } => Envelope::from_sequence(*shell),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Component::Point(_) => Dimension::P,
            Component::LineString(_) => Dimension::L,
            Component::Polygon { .. } => Dimension::A,
        }
    }

    /// Every sequence of linework: the line itself, or the rings of a polygon.
    pub fn linework(&self) -> Vec<&'a dyn CoordinateSequence> {
        match self {
            Component::Point(_) => vec![],
            Component::LineString(seq) => vec![*seq],
            Component::Polygon { shell, holes } => {
                let mut rings = Vec::with_capacity(holes.len() + 1);
                rings.push(*shell);
                rings.extend(holes.iter().copied());
                rings
            }
        }
    }
}

/// A planar geometry, as seen by [`crate::GeometryRelate`] and the matrix
/// engines.
pub trait Geometry {
    /// `P`, `L` or `A` for the highest-dimension component; `False` if empty.
    fn dimension(&self) -> Dimension;

    fn envelope(&self) -> Envelope;

    fn is_empty(&self) -> bool;

    /// True for a polygon whose single ring traces its own envelope.
    fn is_rectangle(&self) -> bool {
        false
    }

    /// Total length of linework; zero for puntal geometries.
    fn length(&self) -> f64;

    /// The non-empty atomic parts, in order.
    fn components(&self) -> Vec<Component<'_>>;

    fn is_puntal(&self) -> bool {
        self.dimension() == Dimension::P
    }
}
