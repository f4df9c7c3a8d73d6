use crate::sequence::CoordinateSequence;
use crate::CoordinateXY;

/// Contribution of the edge `start`-`end` to the winding number of `point`.
pub(crate) fn winding_number(point: CoordinateXY, start: CoordinateXY, end: CoordinateXY) -> i32 {
    // Calculate the two halves of the cross-product (= lx - rx)
    let lx = (end.x - start.x) * (point.y - start.y);
    let rx = (end.y - start.y) * (point.x - start.x);

    if start.y <= point.y {
        // Upward crossing
        if end.y > point.y && lx > rx {
            return 1;
        }
    } else {
        // Downward crossing
        if end.y <= point.y && lx < rx {
            return -1;
        }
    }
    0
}

/// Winding number of `point` with respect to a closed ring.
pub(crate) fn ring_winding_number(point: CoordinateXY, ring: &dyn CoordinateSequence) -> i32 {
    (1..ring.len())
        .map(|i| winding_number(point, ring.get_xy(i - 1), ring.get_xy(i)))
        .sum()
}

/// Test whether `point` lies on the closed segment `start`-`end`.
pub(crate) fn point_on_segment(point: CoordinateXY, start: CoordinateXY, end: CoordinateXY) -> bool {
    if point.x < start.x.min(end.x)
        || point.x > start.x.max(end.x)
        || point.y < start.y.min(end.y)
        || point.y > start.y.max(end.y)
    {
        return false;
    }
    (end - start).cross(point - start) == 0.
}

/// Test whether `point` lies on any segment of `seq`.
pub(crate) fn point_on_linework(point: CoordinateXY, seq: &dyn CoordinateSequence) -> bool {
    match seq.len() {
        0 => false,
        1 => seq.get_xy(0) == point,
        n => (1..n).any(|i| point_on_segment(point, seq.get_xy(i - 1), seq.get_xy(i))),
    }
}
