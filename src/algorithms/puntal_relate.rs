use super::point_location::{lineal_boundary, locate_in_polygon, locate_on_lines};
use crate::dimension::Location::{Boundary as B, Exterior as E, Interior as I};
use crate::errors::GeometryError;
use crate::geometry::Component;
use crate::sequence::CoordinateSequence;
use crate::{CoordinateXY, Dimension, Geometry, IntersectionMatrix, Location, MatrixEngine};

/// A matrix engine for pairs where at least one side is puntal, or empty.
///
/// Other pairs need a full topology graph and fail with
/// `UnsupportedOperation`.
#[derive(Copy, Clone, Debug, Default)]
pub struct PuntalRelateEngine;

impl MatrixEngine for PuntalRelateEngine {
    fn compute_matrix(
        &self,
        a: &dyn Geometry,
        b: &dyn Geometry,
    ) -> Result<IntersectionMatrix, GeometryError> {
        if a.is_empty() || b.is_empty() {
            return Ok(relate_with_empty(a, b));
        }
        if a.is_puntal() {
            return relate_points(a, b);
        }
        if b.is_puntal() {
            let mut im = relate_points(b, a)?;
            im.transpose();
            return Ok(im);
        }
        Err(GeometryError::UnsupportedOperation(format!(
            "Relate of dimensions {} and {} needs a full relate engine",
            a.dimension(),
            b.dimension()
        )))
    }
}

fn points_of(g: &dyn Geometry) -> Vec<CoordinateXY> {
    g.components()
        .iter()
        .filter_map(|c| match c {
            Component::Point(seq) => Some(seq.get_xy(0)),
            _ => None,
        })
        .collect()
}

fn lines_of<'a>(components: &[Component<'a>]) -> Vec<&'a dyn CoordinateSequence> {
    components.iter().flat_map(|c| c.linework()).collect()
}

fn boundary_dimension(g: &dyn Geometry) -> Dimension {
    match g.dimension() {
        Dimension::A => Dimension::L,
        Dimension::L if !lineal_boundary(&lines_of(&g.components())).is_empty() => Dimension::P,
        _ => Dimension::False,
    }
}

/// Only the exterior of an empty geometry is non-empty.
fn relate_with_empty(a: &dyn Geometry, b: &dyn Geometry) -> IntersectionMatrix {
    let mut im = IntersectionMatrix::new();
    im.set(E, E, Dimension::A);
    if !a.is_empty() {
        im.set(I, E, a.dimension());
        im.set(B, E, boundary_dimension(a));
    }
    if !b.is_empty() {
        im.set(E, I, b.dimension());
        im.set(E, B, boundary_dimension(b));
    }
    im
}

/// The matrix of puntal `a` against any non-empty `b`.
fn relate_points(a: &dyn Geometry, b: &dyn Geometry) -> Result<IntersectionMatrix, GeometryError> {
    let points = points_of(a);
    let mut im = IntersectionMatrix::new();
    im.set(E, E, Dimension::A);

    match b.dimension() {
        Dimension::P => {
            let others = points_of(b);
            for p in points.iter() {
                let loc = if others.contains(p) { I } else { E };
                im.set_at_least(I, loc, Dimension::P);
            }
            if others.iter().any(|q| !points.contains(q)) {
                im.set_at_least(E, I, Dimension::P);
            }
        }
        Dimension::L => {
            let components = b.components();
            let lines = lines_of(&components);
            let boundary = lineal_boundary(&lines);
            for &p in points.iter() {
                im.set_at_least(I, locate_on_lines(p, &lines, &boundary), Dimension::P);
            }
            if b.length() > 0. {
                im.set_at_least(E, I, Dimension::L);
            } else if lines
                .iter()
                .any(|line| (0..line.len()).any(|i| !points.contains(&line.get_xy(i))))
            {
                im.set_at_least(E, I, Dimension::P);
            }
            if boundary.iter().any(|q| !points.contains(q)) {
                im.set_at_least(E, B, Dimension::P);
            }
        }
        Dimension::A => {
            let components = b.components();
            for &p in points.iter() {
                im.set_at_least(I, locate_in_area(p, &components)?, Dimension::P);
            }
            im.set_at_least(E, I, Dimension::A);
            im.set_at_least(E, B, Dimension::L);
        }
        dim => {
            return Err(GeometryError::InvalidArgument(format!(
                "Geometry has no dimension: {}",
                dim
            )))
        }
    }
    Ok(im)
}

fn locate_in_area(point: CoordinateXY, components: &[Component<'_>]) -> Result<Location, GeometryError> {
    let mut location = Location::Exterior;
    for component in components {
        if let Component::Polygon { shell, holes } = component {
            match locate_in_polygon(point, *shell, holes)? {
                Location::Interior => return Ok(Location::Interior),
                Location::Boundary => location = Location::Boundary,
                Location::Exterior => {}
            }
        }
    }
    Ok(location)
}
