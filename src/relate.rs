//! Spatial predicates over pairs of geometries.
//!
//! Each predicate first tries cheap envelope, dimension and rectangle tests, and
//! only asks the injected [`MatrixEngine`] for a full DE-9IM matrix when those
//! cannot decide.

use crate::algorithms::{rectangle_contains, rectangle_intersects};
use crate::errors::GeometryError;
use crate::{Dimension, Geometry, IntersectionMatrix};

/// Computes the full DE-9IM matrix of two geometries.
pub trait MatrixEngine: Send + Sync {
    fn compute_matrix(
        &self,
        a: &dyn Geometry,
        b: &dyn Geometry,
    ) -> Result<IntersectionMatrix, GeometryError>;
}

/// Predicate dispatch over a fixed matrix engine.
#[derive(Clone, Copy)]
pub struct GeometryRelate<'e> {
    engine: &'e dyn MatrixEngine,
}

impl<'e> GeometryRelate<'e> {
    pub fn new(engine: &'e dyn MatrixEngine) -> Self {
        GeometryRelate { engine }
    }

    fn matrix(
        &self,
        predicate: &'static str,
        a: &dyn Geometry,
        b: &dyn Geometry,
    ) -> Result<IntersectionMatrix, GeometryError> {
        tracing::debug!(
            predicate,
            dim_a = %a.dimension(),
            dim_b = %b.dimension(),
            "computing intersection matrix"
        );
        self.engine.compute_matrix(a, b)
    }

    pub fn intersects(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        if !a.envelope().intersects(&b.envelope()) {
            tracing::trace!(predicate = "intersects", "envelopes disjoint");
            return Ok(false);
        }
        if a.is_rectangle() {
            tracing::trace!(predicate = "intersects", "rectangle fast path");
            return rectangle_intersects(a, b);
        }
        if b.is_rectangle() {
            tracing::trace!(predicate = "intersects", "rectangle fast path");
            return rectangle_intersects(b, a);
        }
        Ok(self.matrix("intersects", a, b)?.is_intersects())
    }

    pub fn disjoint(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        Ok(!self.intersects(a, b)?)
    }

    pub fn contains(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        if cannot_contain(a, b) {
            tracing::trace!(predicate = "contains", "dimension or envelope excludes containment");
            return Ok(false);
        }
        if a.is_rectangle() {
            tracing::trace!(predicate = "contains", "rectangle fast path");
            return Ok(rectangle_contains(a, b));
        }
        Ok(self.matrix("contains", a, b)?.is_contains())
    }

    pub fn within(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        self.contains(b, a)
    }

    pub fn covers(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        if cannot_contain(a, b) {
            tracing::trace!(predicate = "covers", "dimension or envelope excludes coverage");
            return Ok(false);
        }
        if a.is_rectangle() {
            tracing::trace!(predicate = "covers", "rectangle covers its envelope");
            return Ok(true);
        }
        Ok(self.matrix("covers", a, b)?.is_covers())
    }

    pub fn covered_by(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        self.covers(b, a)
    }

    pub fn crosses(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        if !a.envelope().intersects(&b.envelope()) {
            tracing::trace!(predicate = "crosses", "envelopes disjoint");
            return Ok(false);
        }
        Ok(self
            .matrix("crosses", a, b)?
            .is_crosses(a.dimension(), b.dimension()))
    }

    pub fn overlaps(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        if !a.envelope().intersects(&b.envelope()) {
            tracing::trace!(predicate = "overlaps", "envelopes disjoint");
            return Ok(false);
        }
        Ok(self
            .matrix("overlaps", a, b)?
            .is_overlaps(a.dimension(), b.dimension()))
    }

    pub fn touches(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        if !a.envelope().intersects(&b.envelope()) {
            tracing::trace!(predicate = "touches", "envelopes disjoint");
            return Ok(false);
        }
        Ok(self
            .matrix("touches", a, b)?
            .is_touches(a.dimension(), b.dimension()))
    }

    /// Topological equality: the same point set, regardless of vertices.
    pub fn equals_topo(&self, a: &dyn Geometry, b: &dyn Geometry) -> Result<bool, GeometryError> {
        if a.envelope() != b.envelope() {
            tracing::trace!(predicate = "equals_topo", "envelopes differ");
            return Ok(false);
        }
        Ok(self
            .matrix("equals_topo", a, b)?
            .is_equals(a.dimension(), b.dimension()))
    }

    pub fn relate(
        &self,
        a: &dyn Geometry,
        b: &dyn Geometry,
    ) -> Result<IntersectionMatrix, GeometryError> {
        self.matrix("relate", a, b)
    }

    /// Test the matrix of `a` and `b` against a 9-symbol pattern.
    pub fn relate_pattern(
        &self,
        a: &dyn Geometry,
        b: &dyn Geometry,
        pattern: &str,
    ) -> Result<bool, GeometryError> {
        self.matrix("relate_pattern", a, b)?.matches(pattern)
    }
}

/// Dimension and envelope tests shared by `contains` and `covers`.
fn cannot_contain(a: &dyn Geometry, b: &dyn Geometry) -> bool {
    let (dim_a, dim_b) = (a.dimension(), b.dimension());
    if dim_b == Dimension::A && dim_a.value() < Dimension::A.value() {
        return true;
    }
    // A zero-length line is a point, and may be contained by one.
    if dim_b == Dimension::L && dim_a.value() < Dimension::L.value() && b.length() > 0. {
        return true;
    }
    !a.envelope().covers(&b.envelope())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_wkt::parse_wkt_one;
    use crate::Shape;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed matrix and counts how often it is asked.
    struct FixedEngine {
        matrix: IntersectionMatrix,
        calls: AtomicUsize,
    }

    impl FixedEngine {
        fn new(symbols: &str) -> Self {
            FixedEngine {
                matrix: symbols.parse().unwrap(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MatrixEngine for FixedEngine {
        fn compute_matrix(
            &self,
            _a: &dyn Geometry,
            _b: &dyn Geometry,
        ) -> Result<IntersectionMatrix, GeometryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.matrix)
        }
    }

    struct FailingEngine;

    impl MatrixEngine for FailingEngine {
        fn compute_matrix(
            &self,
            _a: &dyn Geometry,
            _b: &dyn Geometry,
        ) -> Result<IntersectionMatrix, GeometryError> {
            Err(GeometryError::UnsupportedOperation("no engine".to_string()))
        }
    }

    fn shape(wkt: &str) -> Shape {
        parse_wkt_one(wkt).unwrap()
    }

    #[test]
    fn test_disjoint_envelopes_skip_engine() {
        let engine = FixedEngine::new("212101212");
        let relate = GeometryRelate::new(&engine);
        let a = shape("LINESTRING (0 0, 1 1)");
        let b = shape("LINESTRING (5 5, 6 7)");
        assert!(!relate.intersects(&a, &b).unwrap());
        assert!(relate.disjoint(&a, &b).unwrap());
        assert!(!relate.crosses(&a, &b).unwrap());
        assert!(!relate.overlaps(&a, &b).unwrap());
        assert!(!relate.touches(&a, &b).unwrap());
        assert!(!relate.contains(&a, &b).unwrap());
        assert!(!relate.equals_topo(&a, &b).unwrap());
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn test_area_not_contained_by_line() {
        let engine = FixedEngine::new("212101212");
        let relate = GeometryRelate::new(&engine);
        let line = shape("LINESTRING (0 0, 10 10)");
        let square = shape("POLYGON ((1 1, 2 1, 2 2, 1 2, 1 1))");
        assert!(!relate.contains(&line, &square).unwrap());
        assert!(!relate.covers(&line, &square).unwrap());
        assert!(!relate.within(&square, &line).unwrap());
        assert!(!relate.covered_by(&square, &line).unwrap());

        let point = shape("POINT (0 0)");
        assert!(!relate.contains(&point, &line).unwrap());
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn test_zero_length_line_reaches_engine() {
        let engine = FixedEngine::new("0FFFFFFF2");
        let relate = GeometryRelate::new(&engine);
        let point = shape("POINT (1 1)");
        let line = shape("LINESTRING (1 1, 1 1)");
        assert!(relate.contains(&point, &line).unwrap());
        assert_eq!(engine.calls(), 1);
    }

    #[test]
    fn test_rectangle_fast_paths() {
        let engine = FixedEngine::new("FFFFFFFFF");
        let relate = GeometryRelate::new(&engine);
        let rect = shape("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))");
        let inner = shape("LINESTRING (1 1, 9 9)");
        let edge = shape("LINESTRING (0 0, 10 0)");
        assert!(relate.intersects(&rect, &inner).unwrap());
        assert!(relate.intersects(&inner, &rect).unwrap());
        assert!(relate.contains(&rect, &inner).unwrap());
        assert!(relate.within(&inner, &rect).unwrap());
        assert!(!relate.contains(&rect, &edge).unwrap());
        assert!(relate.covers(&rect, &edge).unwrap());
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn test_matrix_predicates_use_dimensions() {
        let engine = FixedEngine::new("0F1FF0102");
        let relate = GeometryRelate::new(&engine);
        let a = shape("LINESTRING (0 0, 2 2)");
        let b = shape("LINESTRING (0 2, 2 0)");
        assert!(relate.crosses(&a, &b).unwrap());
        assert!(!relate.overlaps(&a, &b).unwrap());
        assert!(!relate.touches(&a, &b).unwrap());
        assert!(relate.intersects(&a, &b).unwrap());
        assert_eq!(relate.relate(&a, &b).unwrap().to_string(), "0F1FF0102");
        assert!(relate.relate_pattern(&a, &b, "0********").unwrap());
        assert!(relate.relate_pattern(&a, &b, "0**").is_err());
    }

    #[test]
    fn test_equals_topo() {
        let engine = FixedEngine::new("1FFF0FFF2");
        let relate = GeometryRelate::new(&engine);
        let a = shape("LINESTRING (0 0, 2 2)");
        let b = shape("LINESTRING (2 2, 1 1, 0 0)");
        assert!(relate.equals_topo(&a, &b).unwrap());
        let shorter = shape("LINESTRING (0 0, 1 1)");
        assert!(!relate.equals_topo(&a, &shorter).unwrap());
        assert_eq!(engine.calls(), 1);
    }

    #[test]
    fn test_engine_errors_propagate() {
        let relate = GeometryRelate::new(&FailingEngine);
        let a = shape("LINESTRING (0 0, 2 2)");
        let b = shape("LINESTRING (0 2, 2 0)");
        assert!(matches!(
            relate.intersects(&a, &b),
            Err(GeometryError::UnsupportedOperation(_))
        ));
        assert!(relate.relate(&a, &b).is_err());
    }
}
