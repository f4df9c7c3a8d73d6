use super::point_location::locate_in_polygon;
use crate::errors::GeometryError;
use crate::geometry::Component;
use crate::{CoordinateXY, Envelope, Geometry, Location};

/// Test whether a rectangular polygon intersects `b`.
///
/// The tests run from cheapest to most expensive: component envelopes, then
/// rectangle corners inside polygon components, then segment clipping.
pub fn rectangle_intersects(
    rectangle: &dyn Geometry,
    b: &dyn Geometry,
) -> Result<bool, GeometryError> {
    let rect_env = rectangle.envelope();
    if !rect_env.intersects(&b.envelope()) {
        return Ok(false);
    }
    let components = b.components();
    if components
        .iter()
        .any(|c| envelope_forces_intersection(&rect_env, &c.envelope()))
    {
        return Ok(true);
    }
    if corner_in_polygon(&rect_env, &components)? {
        return Ok(true);
    }
    Ok(components.iter().flat_map(|c| c.linework()).any(|line| {
        (1..line.len()).any(|i| {
            rect_env
                .clip_segment(line.get_xy(i - 1), line.get_xy(i))
                .is_some()
        })
    }))
}

/// A connected component whose envelope meets the rectangle and lies inside
/// it, or spans it fully along one axis, must intersect it.
fn envelope_forces_intersection(rect_env: &Envelope, env: &Envelope) -> bool {
    if !rect_env.intersects(env) {
        return false;
    }
    if rect_env.covers(env) {
        return true;
    }
    if env.min_x() >= rect_env.min_x() && env.max_x() <= rect_env.max_x() {
        return true;
    }
    env.min_y() >= rect_env.min_y() && env.max_y() <= rect_env.max_y()
}

fn corner_in_polygon(rect_env: &Envelope, components: &[Component<'_>]) -> Result<bool, GeometryError> {
    let corners = [
        CoordinateXY::new(rect_env.min_x(), rect_env.min_y()),
        CoordinateXY::new(rect_env.min_x(), rect_env.max_y()),
        CoordinateXY::new(rect_env.max_x(), rect_env.max_y()),
        CoordinateXY::new(rect_env.max_x(), rect_env.min_y()),
    ];
    for component in components {
        if let Component::Polygon { shell, holes } = component {
            if !rect_env.intersects(&component.envelope()) {
                continue;
            }
            for &corner in corners.iter() {
                if locate_in_polygon(corner, *shell, holes)? != Location::Exterior {
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}
