use super::{CoordinateSequence, SequenceLayout};
use crate::errors::GeometryError;
use crate::{Envelope, NULL_ORDINATE};
use std::fmt;

/// Coordinates stored in parallel arrays: interleaved XY, plus optional
/// separate Z and M arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelSequence {
    xy: Vec<f64>,
    z: Option<Vec<f64>>,
    m: Option<Vec<f64>>,
    layout: SequenceLayout,
}

impl ParallelSequence {
    pub fn new(
        xy: Vec<f64>,
        z: Option<Vec<f64>>,
        m: Option<Vec<f64>>,
    ) -> Result<Self, GeometryError> {
        if xy.len() % 2 != 0 {
            return Err(GeometryError::InvalidArgument(format!(
                "XY array has odd length {}",
                xy.len()
            )));
        }
        let size = xy.len() / 2;
        for (name, values) in [("Z", &z), ("M", &m)].iter() {
            if let Some(values) = values {
                if values.len() != size {
                    return Err(GeometryError::InvalidArgument(format!(
                        "{} array has length {}, expected {}",
                        name,
                        values.len(),
                        size
                    )));
                }
            }
        }
        let measures = m.is_some() as usize;
        let layout = SequenceLayout::new(2 + z.is_some() as usize + measures, measures)?;
        Ok(ParallelSequence { xy, z, m, layout })
    }

    pub fn xy(&self) -> &[f64] {
        &self.xy
    }

    pub fn z(&self) -> Option<&[f64]> {
        self.z.as_deref()
    }

    pub fn m(&self) -> Option<&[f64]> {
        self.m.as_deref()
    }

    fn slot(&mut self, index: usize, ordinate_index: usize) -> Option<&mut f64> {
        match ordinate_index {
            0 | 1 => Some(&mut self.xy[2 * index + ordinate_index]),
            i if Some(i) == self.layout.z_index() => self.z.as_mut().map(|z| &mut z[index]),
            i if Some(i) == self.layout.m_index() => self.m.as_mut().map(|m| &mut m[index]),
            _ => None,
        }
    }
}

impl CoordinateSequence for ParallelSequence {
    fn layout(&self) -> &SequenceLayout {
        &self.layout
    }

    fn len(&self) -> usize {
        self.xy.len() / 2
    }

    fn get_ordinate(&self, index: usize, ordinate_index: usize) -> f64 {
        match ordinate_index {
            0 | 1 => self.xy[2 * index + ordinate_index],
            i if Some(i) == self.layout.z_index() => self.z.as_ref().map_or(NULL_ORDINATE, |z| z[index]),
            i if Some(i) == self.layout.m_index() => self.m.as_ref().map_or(NULL_ORDINATE, |m| m[index]),
            _ => NULL_ORDINATE,
        }
    }

    fn set_ordinate(&mut self, index: usize, ordinate_index: usize, value: f64) {
        if let Some(slot) = self.slot(index, ordinate_index) {
            *slot = value;
        }
    }

    fn copy(&self) -> Option<Box<dyn CoordinateSequence>> {
        Some(Box::new(self.clone()))
    }

    fn get_x(&self, index: usize) -> f64 {
        self.xy[2 * index]
    }

    fn get_y(&self, index: usize) -> f64 {
        self.xy[2 * index + 1]
    }

    fn expand_envelope(&self, env: &mut Envelope) {
        for pair in self.xy.chunks_exact(2) {
            env.expand_to_include(pair[0], pair[1]);
        }
    }
}

impl fmt::Display for ParallelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::ops::to_text(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn test_validation() {
        assert!(ParallelSequence::new(vec![0., 1., 2.], None, None).is_err());
        assert_eq!(
            ParallelSequence::new(vec![0., 1.], Some(vec![1., 2.]), None),
            Err(GeometryError::InvalidArgument(
                "Z array has length 2, expected 1".to_owned()
            ))
        );
    }

    #[test]
    fn test_layout_from_arrays() {
        let seq = ParallelSequence::new(vec![0., 1., 2., 3.], None, Some(vec![7., 8.])).unwrap();
        assert_eq!(seq.dimension(), 3);
        assert_eq!(seq.measures(), 1);
        assert!(!seq.has_z());
        assert_eq!(seq.get_m(1), 8.);
        assert_eq!(seq.get_ordinate(1, 2), 8.);
        assert_eq!(seq.get_coordinate(0).variant_name(), "XYM");
    }

    #[test]
    fn test_set_ordinate() {
        let mut seq =
            ParallelSequence::new(vec![0., 1., 2., 3.], Some(vec![4., 5.]), Some(vec![6., 7.]))
                .unwrap();
        seq.set_ordinate(1, 0, 20.);
        seq.set_ordinate(1, 2, 50.);
        seq.set_ordinate(1, 3, 70.);
        seq.set_ordinate(1, 4, 90.);
        assert_eq!(seq.xy(), &[0., 1., 20., 3.]);
        assert_eq!(seq.z(), Some(&[4., 50.][..]));
        assert_eq!(seq.m(), Some(&[6., 70.][..]));
        assert!(seq
            .get_coordinate(1)
            .equals_3d(&Coordinate::new_xyzm(20., 3., 50., 70.)));
    }
}
