use planar_kernel::algorithms::PuntalRelateEngine;
use planar_kernel::errors::GeometryError;
use planar_kernel::from_wkt::parse_wkt_one;
use planar_kernel::sequence::ops;
use planar_kernel::{
    CoordinateSequence, Dimension, Envelope, Geometry, GeometryRelate, IntersectionMatrix,
    PackedSequence, PrecisionModel, Shape,
};

fn shape(wkt: &str) -> Shape {
    parse_wkt_one(wkt).unwrap()
}

#[test]
fn envelope_intersection() {
    let a = Envelope::new(0., 10., 0., 10.);
    let b = Envelope::new(5., 15., 5., 15.);
    assert_eq!(a.intersection(&b), Envelope::new(5., 10., 5., 10.));
}

#[test]
fn null_envelope() {
    let env = Envelope::default();
    assert!(env.is_null());
    assert_eq!(env.width(), 0.);
    assert_eq!(env.area(), 0.);
    assert_eq!(env.to_string(), "Env[Null]");
}

#[test]
fn fixed_precision_rounds_half_up() {
    assert_eq!(PrecisionModel::fixed(100.).unwrap().make_precise(1.005), 1.01);
}

#[test]
fn matrix_pattern_is_cell_by_cell() {
    let im: IntersectionMatrix = "212101212".parse().unwrap();
    assert!(!im.matches("2*2***1**").unwrap());
    assert!(im.matches("2*2***2**").unwrap());
}

#[test]
fn coincident_points_are_equal() {
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let a = shape("POINT (3 4)");
    let b = shape("POINT (3 4)");
    let im = relate.relate(&a, &b).unwrap();
    assert!(im.is_equals(Dimension::P, Dimension::P));
    assert!(relate.equals_topo(&a, &b).unwrap());
    assert!(relate.contains(&a, &b).unwrap());
    assert!(relate.covers(&a, &b).unwrap());
    assert!(!relate.touches(&a, &b).unwrap());
    assert!(!relate.disjoint(&a, &b).unwrap());
}

#[test]
fn copy_drops_z_between_layouts() {
    let src = PackedSequence::new(vec![1., 2., 3., 4., 5., 6.], 3, 0).unwrap();
    let mut dest = PackedSequence::from_xy(vec![(0., 0.), (0., 0.)]);
    ops::copy(&src, 0, &mut dest, 0, 2);
    assert_eq!(dest.raw(), &[1., 2., 4., 5.]);

    let mut back = PackedSequence::new(vec![0., 0., 9., 0., 0., 9.], 3, 0).unwrap();
    ops::copy(&dest, 0, &mut back, 0, 2);
    assert_eq!(back.raw(), &[1., 2., 9., 4., 5., 9.]);
}

#[test]
fn points_against_polygon() {
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let triangle = shape("POLYGON ((0 0, 10 0, 0 10, 0 0))");
    let inside = shape("POINT (2 2)");
    let on_edge = shape("POINT (5 5)");
    let outside = shape("POINT (8 8)");

    assert!(relate.contains(&triangle, &inside).unwrap());
    assert!(relate.within(&inside, &triangle).unwrap());
    assert!(!relate.contains(&triangle, &on_edge).unwrap());
    assert!(relate.covers(&triangle, &on_edge).unwrap());
    assert!(relate.covered_by(&on_edge, &triangle).unwrap());
    assert!(relate.touches(&on_edge, &triangle).unwrap());
    assert!(!relate.intersects(&outside, &triangle).unwrap());
    assert!(relate
        .relate_pattern(&inside, &triangle, "0FFFFF212")
        .unwrap());
}

#[test]
fn points_against_rectangle_skip_engine() {
    // A rectangle container never needs the engine for points.
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let rect = shape("POLYGON ((0 0, 4 0, 4 2, 0 2, 0 0))");
    assert!(rect.is_rectangle());
    assert!(relate.contains(&rect, &shape("POINT (1 1)")).unwrap());
    assert!(!relate.contains(&rect, &shape("POINT (4 1)")).unwrap());
    assert!(relate.covers(&rect, &shape("POINT (4 1)")).unwrap());
    assert!(relate.intersects(&shape("POINT (4 2)"), &rect).unwrap());
}

#[test]
fn multipoint_against_line() {
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let line = shape("LINESTRING (0 0, 4 0)");
    let crossing = shape("MULTIPOINT ((2 0), (2 3))");
    let ends = shape("MULTIPOINT ((0 0), (4 0))");

    assert!(relate.crosses(&crossing, &line).unwrap());
    assert!(relate.crosses(&line, &crossing).unwrap());
    assert!(relate.touches(&ends, &line).unwrap());
    assert!(!relate.crosses(&ends, &line).unwrap());
    assert_eq!(relate.relate(&ends, &line).unwrap().to_string(), "F0FFFF1F2");
}

#[test]
fn overlapping_multipoints() {
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let a = shape("MULTIPOINT ((0 0), (1 1))");
    let b = shape("MULTIPOINT ((1 1), (2 2))");
    assert!(relate.overlaps(&a, &b).unwrap());
    assert!(!relate.equals_topo(&a, &b).unwrap());
}

#[test]
fn unsupported_pairs_fail() {
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let a = shape("POLYGON ((0 0, 4 0, 2 3, 0 0))");
    let b = shape("LINESTRING (1 1, 5 5)");
    assert!(matches!(
        relate.intersects(&a, &b),
        Err(GeometryError::UnsupportedOperation(_))
    ));
}

#[test]
fn precision_changes_relationships() {
    let engine = PuntalRelateEngine;
    let relate = GeometryRelate::new(&engine);
    let mut a = shape("POINT (1.004 2.001)");
    let b = shape("POINT (1 2)");
    assert!(!relate.equals_topo(&a, &b).unwrap());
    a.make_precise(&PrecisionModel::fixed(100.).unwrap());
    assert!(relate.equals_topo(&a, &b).unwrap());
    assert_eq!(a.envelope(), b.envelope());
}

#[test]
fn shapes_expose_sequences() {
    let poly = shape("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 2 1, 2 2, 1 1))");
    let seqs = poly.sequences();
    assert_eq!(seqs.len(), 2);
    assert!(ops::is_ring(seqs[0]));
    assert_eq!(seqs[1].len(), 4);
    assert!((poly.length() - (18. + 2f64.sqrt())).abs() < 1e-12);
}
