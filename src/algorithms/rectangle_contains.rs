use crate::geometry::Component;
use crate::sequence::CoordinateSequence;
use crate::{CoordinateXY, Envelope, Geometry};

/// Test whether a rectangular polygon contains `b`.
///
/// `b` is contained when it lies inside the rectangle's envelope and does not
/// lie entirely in the rectangle's boundary.
pub fn rectangle_contains(rectangle: &dyn Geometry, b: &dyn Geometry) -> bool {
    let rect_env = rectangle.envelope();
    if !rect_env.covers(&b.envelope()) {
        return false;
    }
    !is_contained_in_boundary(&rect_env, b)
}

fn is_contained_in_boundary(rect_env: &Envelope, b: &dyn Geometry) -> bool {
    b.components().iter().all(|component| match component {
        // A polygon inside the envelope always reaches the interior.
        Component::Polygon { .. } => false,
        Component::Point(seq) => is_point_in_boundary(rect_env, seq.get_xy(0)),
        Component::LineString(seq) => is_line_in_boundary(rect_env, *seq),
    })
}

fn is_point_in_boundary(rect_env: &Envelope, p: CoordinateXY) -> bool {
    p.x == rect_env.min_x()
        || p.x == rect_env.max_x()
        || p.y == rect_env.min_y()
        || p.y == rect_env.max_y()
}

fn is_line_in_boundary(rect_env: &Envelope, line: &dyn CoordinateSequence) -> bool {
    if line.len() == 1 {
        return is_point_in_boundary(rect_env, line.get_xy(0));
    }
    (1..line.len()).all(|i| is_segment_in_boundary(rect_env, line.get_xy(i - 1), line.get_xy(i)))
}

fn is_segment_in_boundary(rect_env: &Envelope, p0: CoordinateXY, p1: CoordinateXY) -> bool {
    if p0 == p1 {
        return is_point_in_boundary(rect_env, p0);
    }
    if p0.x == p1.x {
        p0.x == rect_env.min_x() || p0.x == rect_env.max_x()
    } else if p0.y == p1.y {
        p0.y == rect_env.min_y() || p0.y == rect_env.max_y()
    } else {
        // Diagonal segments always cross the interior.
        false
    }
}
