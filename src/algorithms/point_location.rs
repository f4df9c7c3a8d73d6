use crate::errors::GeometryError;
use crate::sequence::{ops, CoordinateSequence};
use crate::utils::{point_on_linework, ring_winding_number};
use crate::{CoordinateXY, Location};

/// Locate `point` relative to the area enclosed by a closed ring.
pub fn locate_in_ring(
    point: CoordinateXY,
    ring: &dyn CoordinateSequence,
) -> Result<Location, GeometryError> {
    if ring.is_empty() || !ops::is_ring(ring) {
        return Err(GeometryError::InvalidArgument(
            "Ring is not closed: first and last coordinates are not equal".to_string(),
        ));
    }
    if point_on_linework(point, ring) {
        return Ok(Location::Boundary);
    }
    if ring_winding_number(point, ring) != 0 {
        Ok(Location::Interior)
    } else {
        Ok(Location::Exterior)
    }
}

/// Locate `point` relative to a polygon with the given shell and holes.
pub fn locate_in_polygon(
    point: CoordinateXY,
    shell: &dyn CoordinateSequence,
    holes: &[&dyn CoordinateSequence],
) -> Result<Location, GeometryError> {
    match locate_in_ring(point, shell)? {
        Location::Interior => {}
        loc => return Ok(loc),
    }
    for hole in holes {
        match locate_in_ring(point, *hole)? {
            Location::Exterior => {}
            Location::Boundary => return Ok(Location::Boundary),
            Location::Interior => return Ok(Location::Exterior),
        }
    }
    Ok(Location::Interior)
}

/// The boundary points of a set of lines under the mod-2 rule: endpoints of
/// unclosed lines that occur an odd number of times.
pub fn lineal_boundary(lines: &[&dyn CoordinateSequence]) -> Vec<CoordinateXY> {
    let mut endpoints: Vec<(CoordinateXY, usize)> = Vec::new();
    for line in lines {
        let len = line.len();
        if len < 2 {
            continue;
        }
        let (start, end) = (line.get_xy(0), line.get_xy(len - 1));
        if start == end {
            continue;
        }
        for p in [start, end].iter() {
            match endpoints.iter_mut().find(|(q, _)| q == p) {
                Some((_, count)) => *count += 1,
                None => endpoints.push((*p, 1)),
            }
        }
    }
    endpoints
        .into_iter()
        .filter(|(_, count)| count % 2 == 1)
        .map(|(p, _)| p)
        .collect()
}

/// Locate `point` relative to a set of lines whose boundary is `boundary`.
pub fn locate_on_lines(
    point: CoordinateXY,
    lines: &[&dyn CoordinateSequence],
    boundary: &[CoordinateXY],
) -> Location {
    if boundary.contains(&point) {
        Location::Boundary
    } else if lines.iter().any(|line| point_on_linework(point, *line)) {
        Location::Interior
    } else {
        Location::Exterior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::PackedSequence;

    fn xy(x: f64, y: f64) -> CoordinateXY {
        CoordinateXY::new(x, y)
    }

    #[test]
    fn check_containment() {
        let loop_a = PackedSequence::from_xy(vec![(0., 0.), (0., 1.), (1., 1.), (1., 0.), (0., 0.)]);
        assert_eq!(locate_in_ring(xy(0.5, 0.5), &loop_a).unwrap(), Location::Interior);
        assert_eq!(locate_in_ring(xy(0.0, 0.0), &loop_a).unwrap(), Location::Boundary);
        assert_eq!(locate_in_ring(xy(0.5, 0.0), &loop_a).unwrap(), Location::Boundary);
        assert_eq!(locate_in_ring(xy(0.0, 0.5), &loop_a).unwrap(), Location::Boundary);
        assert_eq!(locate_in_ring(xy(1.1, 0.0), &loop_a).unwrap(), Location::Exterior);
    }

    #[test]
    fn check_not_a_ring() {
        let open = PackedSequence::from_xy(vec![(0., 0.), (0., 1.), (1., 1.), (1., 0.)]);
        assert!(matches!(
            locate_in_ring(xy(0.5, 0.5), &open),
            Err(GeometryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn check_holes() {
        let shell =
            PackedSequence::from_xy(vec![(-5., -5.), (-5., 5.), (5., 5.), (5., -5.), (-5., -5.)]);
        let hole = PackedSequence::from_xy(vec![(0., 0.), (3., 0.), (3., 3.), (0., 3.), (0., 0.)]);
        let holes: Vec<&dyn CoordinateSequence> = vec![&hole];
        let locate = |x, y| locate_in_polygon(xy(x, y), &shell, &holes).unwrap();
        assert_eq!(locate(-1., -1.), Location::Interior);
        assert_eq!(locate(1., 1.), Location::Exterior);
        assert_eq!(locate(3., 1.), Location::Boundary);
        assert_eq!(locate(5., 0.), Location::Boundary);
        assert_eq!(locate(6., 0.), Location::Exterior);
    }

    #[test]
    fn check_mod2_boundary() {
        let a = PackedSequence::from_xy(vec![(0., 0.), (1., 0.)]);
        let b = PackedSequence::from_xy(vec![(1., 0.), (2., 0.)]);
        let c = PackedSequence::from_xy(vec![(1., 0.), (1., 1.)]);
        let closed = PackedSequence::from_xy(vec![(5., 5.), (6., 5.), (6., 6.), (5., 5.)]);

        let lines: Vec<&dyn CoordinateSequence> = vec![&a, &b];
        assert_eq!(lineal_boundary(&lines), vec![xy(0., 0.), xy(2., 0.)]);
        let boundary = lineal_boundary(&lines);
        assert_eq!(locate_on_lines(xy(1., 0.), &lines, &boundary), Location::Interior);
        assert_eq!(locate_on_lines(xy(2., 0.), &lines, &boundary), Location::Boundary);
        assert_eq!(locate_on_lines(xy(3., 0.), &lines, &boundary), Location::Exterior);

        // Three lines meet at (1, 0): an odd count, so it is on the boundary.
        let lines: Vec<&dyn CoordinateSequence> = vec![&a, &b, &c];
        assert!(lineal_boundary(&lines).contains(&xy(1., 0.)));

        let lines: Vec<&dyn CoordinateSequence> = vec![&closed];
        assert!(lineal_boundary(&lines).is_empty());
    }
}
