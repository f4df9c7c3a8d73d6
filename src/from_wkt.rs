use crate::errors::GeometryError;
use crate::sequence::PackedSequence;
use crate::shape::{PolygonRings, Shape, ShapeKind};
use wkt::types;
use wkt::types::Coord;

/// Parse WKT text into shapes, one per geometry in the text.
///
/// Sequences are built with an XY layout.  Text with a third or fourth
/// ordinate is rejected as malformed.
pub fn parse_wkt(wkt_str: &str) -> Result<Vec<Shape>, GeometryError> {
    let wkt_geoms = wkt::Wkt::from_str(wkt_str)
        .map_err(|e| GeometryError::InvalidArgument(format!("Malformed WKT: {}", e)))?;
    wkt_geoms
        .items
        .into_iter()
        .map(from_wkt_geometry)
        .map(|kind| kind.map(Shape::new))
        .collect()
}

/// Parse WKT text holding exactly one geometry.
pub fn parse_wkt_one(wkt_str: &str) -> Result<Shape, GeometryError> {
    let mut shapes = parse_wkt(wkt_str)?;
    if shapes.len() != 1 {
        return Err(GeometryError::InvalidArgument(format!(
            "Expected one geometry, found {}",
            shapes.len()
        )));
    }
    Ok(shapes.remove(0))
}

fn coords_to_sequence(coords: Vec<Coord<f64>>) -> PackedSequence {
    PackedSequence::from_xy(coords.into_iter().map(|c| (c.x, c.y)).collect())
}

fn linestring_to_sequence(linestring: types::LineString<f64>) -> PackedSequence {
    coords_to_sequence(linestring.0)
}

fn point_to_sequence(point: types::Point<f64>) -> Option<PackedSequence> {
    Some(coords_to_sequence(vec![point.0?]))
}

fn from_wkt_geometry(geom: wkt::Geometry<f64>) -> Result<ShapeKind, GeometryError> {
    match geom {
        wkt::Geometry::Point(p) => from_wkt_point(p),
        wkt::Geometry::LineString(ls) => Ok(ShapeKind::LineString(linestring_to_sequence(ls))),
        wkt::Geometry::Polygon(p) => from_wkt_polygon(p),
        wkt::Geometry::MultiPoint(mp) => from_wkt_multi_point(mp),
        wkt::Geometry::MultiLineString(mls) => from_wkt_multi_linestring(mls),
        wkt::Geometry::MultiPolygon(mpoly) => from_wkt_multi_polygon(mpoly),
        _ => Err(GeometryError::InvalidArgument(
            "Geometry collections are not supported".to_string(),
        )),
    }
}

fn from_wkt_point(pt: types::Point<f64>) -> Result<ShapeKind, GeometryError> {
    Ok(point_to_sequence(pt).map_or(ShapeKind::Empty, ShapeKind::Point))
}

fn to_polygon_rings(poly: types::Polygon<f64>) -> Option<PolygonRings> {
    let mut linestrings = poly.0.into_iter();
    let shell = linestring_to_sequence(linestrings.next()?);
    let holes = linestrings.map(linestring_to_sequence).collect();
    Some(PolygonRings::new(shell, holes))
}

fn from_wkt_polygon(poly: types::Polygon<f64>) -> Result<ShapeKind, GeometryError> {
    Ok(to_polygon_rings(poly).map_or(ShapeKind::Empty, ShapeKind::Polygon))
}

fn from_wkt_multi_point(mp: types::MultiPoint<f64>) -> Result<ShapeKind, GeometryError> {
    let points = mp.0.into_iter().filter_map(point_to_sequence).collect();
    Ok(ShapeKind::MultiPoint(points))
}

fn from_wkt_multi_linestring(mls: types::MultiLineString<f64>) -> Result<ShapeKind, GeometryError> {
    let lines = mls.0.into_iter().map(linestring_to_sequence).collect();
    Ok(ShapeKind::MultiLineString(lines))
}

fn from_wkt_multi_polygon(mpoly: types::MultiPolygon<f64>) -> Result<ShapeKind, GeometryError> {
    let polygons = mpoly.0.into_iter().filter_map(to_polygon_rings).collect();
    Ok(ShapeKind::MultiPolygon(polygons))
}
