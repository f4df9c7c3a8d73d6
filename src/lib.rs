mod coordinate;
mod dimension;
mod envelope;
mod geometry;
mod intersection_matrix;
mod ordinates;
mod precision;
mod relate;
mod shape;
mod utils;

pub mod algorithms;
pub mod errors;
pub mod from_wkt;
pub mod sequence;

pub use coordinate::{
    Coordinate, CoordinateXY, CoordinateXYM, CoordinateXYZ, CoordinateXYZM, NULL_ORDINATE,
};
pub use dimension::{Dimension, Location};
pub use envelope::Envelope;
pub use geometry::{Component, Geometry};
pub use intersection_matrix::IntersectionMatrix;
pub use ordinates::{Ordinate, Ordinates, MAX_ORDINATES};
pub use precision::PrecisionModel;
pub use relate::{GeometryRelate, MatrixEngine};
pub use sequence::{
    ArraySequence, CoordinateSequence, PackedSequence, ParallelSequence, ReversedSequence,
    SequenceLayout,
};
pub use shape::{PolygonRings, Shape, ShapeKind};
