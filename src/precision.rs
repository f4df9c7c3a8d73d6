//! Coordinate quantization rules.

use crate::errors::GeometryError;
use crate::sequence::CoordinateSequence;
use crate::Coordinate;
use std::cmp::Ordering;
use std::fmt;

/// Significant digits of a `Floating` model.
const FLOATING_DIGITS: i32 = 16;
/// Significant digits of a `FloatingSingle` model.
const FLOATING_SINGLE_DIGITS: i32 = 6;
/// Tolerance, in units of relative machine epsilon, for treating a scaled
/// value as lying exactly on a half-grid point.
const HALF_TOLERANCE_ULPS: f64 = 4.;

/// The grid that coordinates are snapped to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PrecisionModel {
    /// Full double precision; `make_precise` is the identity.
    Floating,
    /// Single precision; values round-trip through `f32`.
    FloatingSingle,
    /// A grid of spacing `1 / scale`.
    Fixed { scale: f64 },
}

impl Default for PrecisionModel {
    fn default() -> Self {
        PrecisionModel::Floating
    }
}

impl PrecisionModel {
    /// A fixed model; the sign of `scale` is ignored.
    ///
    /// A zero or non-finite scale has no grid and is an `InvalidArgument`.
    pub fn fixed(scale: f64) -> Result<Self, GeometryError> {
        if scale == 0. || !scale.is_finite() {
            return Err(GeometryError::InvalidArgument(format!(
                "Fixed precision scale must be finite and non-zero, got {}",
                scale
            )));
        }
        Ok(PrecisionModel::Fixed { scale: scale.abs() })
    }

    pub fn is_floating(&self) -> bool {
        !matches!(self, PrecisionModel::Fixed { .. })
    }

    /// The grid scale, or 0 for floating models.
    pub fn scale(&self) -> f64 {
        match self {
            PrecisionModel::Fixed { scale } => *scale,
            _ => 0.,
        }
    }

    /// The grid spacing, or 0 for floating models.
    pub fn grid_size(&self) -> f64 {
        match self {
            PrecisionModel::Fixed { scale } => 1. / scale,
            _ => 0.,
        }
    }

    pub fn maximum_significant_digits(&self) -> i32 {
        match self {
            PrecisionModel::Floating => FLOATING_DIGITS,
            PrecisionModel::FloatingSingle => FLOATING_SINGLE_DIGITS,
            PrecisionModel::Fixed { scale } => (scale.log10().ceil() as i32).saturating_add(1),
        }
    }

    /// Round a value to this model.  NaN passes through unchanged.
    pub fn make_precise(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }
        match *self {
            PrecisionModel::Floating => value,
            PrecisionModel::FloatingSingle => value as f32 as f64,
            PrecisionModel::Fixed { scale } => {
                let grid_size = 1. / scale;
                if grid_size > 1. {
                    round_half_up(value / grid_size) * grid_size
                } else {
                    round_half_up(value * scale) / scale
                }
            }
        }
    }

    /// Round the X and Y of a coordinate in place.  Z and M are left alone.
    pub fn make_precise_coordinate(&self, coord: &mut Coordinate) {
        if let PrecisionModel::Floating = self {
            return;
        }
        coord.set_x(self.make_precise(coord.x()));
        coord.set_y(self.make_precise(coord.y()));
    }

    /// Round the X and Y of every coordinate of a sequence in place.
    pub fn make_precise_sequence(&self, seq: &mut dyn CoordinateSequence) {
        if let PrecisionModel::Floating = self {
            return;
        }
        for i in 0..seq.len() {
            for k in 0..2 {
                let value = self.make_precise(seq.get_ordinate(i, k));
                seq.set_ordinate(i, k, value);
            }
        }
    }

    /// Order by significant digits; a model with more digits is greater.
    pub fn compare(&self, other: &PrecisionModel) -> Ordering {
        self.maximum_significant_digits()
            .cmp(&other.maximum_significant_digits())
    }

    /// The model with more significant digits, `a` on ties.
    pub fn most_precise(a: PrecisionModel, b: PrecisionModel) -> PrecisionModel {
        if a.compare(&b) == Ordering::Less {
            b
        } else {
            a
        }
    }
}

/// `floor(v + 0.5)`, treating values a few ulps away from a half as the half.
///
/// Decimal inputs are rarely exact in binary (`1.005 * 100` is
/// `100.49999999999999`), so without the snap they would round down.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if floor == value {
        return value;
    }
    let distance_to_half = (value - floor - 0.5).abs();
    let tolerance = HALF_TOLERANCE_ULPS * f64::EPSILON * value.abs().max(1.);
    // Past this magnitude the neighbours of a half are no longer "near" it.
    if tolerance < 0.25 && distance_to_half <= tolerance {
        floor + 1.
    } else {
        (value + 0.5).floor()
    }
}

impl fmt::Display for PrecisionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionModel::Floating => write!(f, "Floating"),
            PrecisionModel::FloatingSingle => write!(f, "Floating-Single"),
            PrecisionModel::Fixed { scale } => write!(f, "Fixed (Scale={})", scale),
        }
    }
}
