use crate::errors::GeometryError;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// The value read for an ordinate that is not present.
pub const NULL_ORDINATE: f64 = f64::NAN;

/// A bare planar position.  Used directly by the planar algorithms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateXY {
    pub x: f64,
    pub y: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct CoordinateXYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct CoordinateXYM {
    pub x: f64,
    pub y: f64,
    pub m: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct CoordinateXYZM {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl From<(f64, f64)> for CoordinateXY {
    fn from(coord: (f64, f64)) -> Self {
        CoordinateXY {
            x: coord.0,
            y: coord.1,
        }
    }
}

impl fmt::Display for CoordinateXY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl CoordinateXY {
    pub fn new(x: f64, y: f64) -> Self {
        CoordinateXY { x, y }
    }

    /// Cross product of the vector self x rhs
    pub fn cross(&self, rhs: CoordinateXY) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Dot product of the vector self . rhs
    pub fn dot(&self, rhs: CoordinateXY) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Add for CoordinateXY {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        CoordinateXY {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for CoordinateXY {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        CoordinateXY {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for CoordinateXY {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        CoordinateXY {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

/// A planar coordinate with optional Z and M values.
///
/// Equality and ordering only look at X and Y; Z and M are carried along but
/// never take part in comparisons.
#[derive(Copy, Clone, Debug)]
pub enum Coordinate {
    XY(CoordinateXY),
    XYZ(CoordinateXYZ),
    XYM(CoordinateXYM),
    XYZM(CoordinateXYZM),
}

impl Coordinate {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const Z: usize = 2;
    pub const M: usize = 3;

    pub fn new(x: f64, y: f64) -> Self {
        Coordinate::XY(CoordinateXY { x, y })
    }

    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Coordinate::XYZ(CoordinateXYZ { x, y, z })
    }

    pub fn new_xym(x: f64, y: f64, m: f64) -> Self {
        Coordinate::XYM(CoordinateXYM { x, y, m })
    }

    pub fn new_xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Coordinate::XYZM(CoordinateXYZM { x, y, z, m })
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Coordinate::XY(_) => "XY",
            Coordinate::XYZ(_) => "XYZ",
            Coordinate::XYM(_) => "XYM",
            Coordinate::XYZM(_) => "XYZM",
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Coordinate::XYZ(_) | Coordinate::XYZM(_))
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Coordinate::XYM(_) | Coordinate::XYZM(_))
    }

    /// Total number of ordinates held by this variant.
    pub fn dimension(&self) -> usize {
        2 + self.has_z() as usize + self.has_m() as usize
    }

    pub fn measures(&self) -> usize {
        self.has_m() as usize
    }

    pub fn x(&self) -> f64 {
        match self {
            Coordinate::XY(c) => c.x,
            Coordinate::XYZ(c) => c.x,
            Coordinate::XYM(c) => c.x,
            Coordinate::XYZM(c) => c.x,
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Coordinate::XY(c) => c.y,
            Coordinate::XYZ(c) => c.y,
            Coordinate::XYM(c) => c.y,
            Coordinate::XYZM(c) => c.y,
        }
    }

    /// The Z value, or `NULL_ORDINATE` if this variant has none.
    pub fn z(&self) -> f64 {
        match self {
            Coordinate::XYZ(c) => c.z,
            Coordinate::XYZM(c) => c.z,
            _ => NULL_ORDINATE,
        }
    }

    /// The M value, or `NULL_ORDINATE` if this variant has none.
    pub fn m(&self) -> f64 {
        match self {
            Coordinate::XYM(c) => c.m,
            Coordinate::XYZM(c) => c.m,
            _ => NULL_ORDINATE,
        }
    }

    pub fn set_x(&mut self, x: f64) {
        match self {
            Coordinate::XY(c) => c.x = x,
            Coordinate::XYZ(c) => c.x = x,
            Coordinate::XYM(c) => c.x = x,
            Coordinate::XYZM(c) => c.x = x,
        }
    }

    pub fn set_y(&mut self, y: f64) {
        match self {
            Coordinate::XY(c) => c.y = y,
            Coordinate::XYZ(c) => c.y = y,
            Coordinate::XYM(c) => c.y = y,
            Coordinate::XYZM(c) => c.y = y,
        }
    }

    pub fn set_z(&mut self, z: f64) -> Result<(), GeometryError> {
        match self {
            Coordinate::XYZ(c) => c.z = z,
            Coordinate::XYZM(c) => c.z = z,
            _ => return Err(self.unsupported(Coordinate::Z)),
        }
        Ok(())
    }

    pub fn set_m(&mut self, m: f64) -> Result<(), GeometryError> {
        match self {
            Coordinate::XYM(c) => c.m = m,
            Coordinate::XYZM(c) => c.m = m,
            _ => return Err(self.unsupported(Coordinate::M)),
        }
        Ok(())
    }

    fn unsupported(&self, ordinate: usize) -> GeometryError {
        GeometryError::UnsupportedOrdinate {
            ordinate,
            variant: self.variant_name(),
        }
    }

    /// Read an ordinate by index (0=X, 1=Y, 2=Z, 3=M).
    ///
    /// The XY variant is lenient and reads any unsupported index as
    /// `NULL_ORDINATE`.  The other variants fail with `UnsupportedOrdinate` for
    /// Z/M slots they lack and `IndexOutOfRange` beyond M.
    pub fn get_ordinate(&self, index: usize) -> Result<f64, GeometryError> {
        match index {
            Coordinate::X => Ok(self.x()),
            Coordinate::Y => Ok(self.y()),
            Coordinate::Z if self.has_z() => Ok(self.z()),
            Coordinate::M if self.has_m() => Ok(self.m()),
            _ if matches!(self, Coordinate::XY(_)) => Ok(NULL_ORDINATE),
            Coordinate::Z | Coordinate::M => Err(self.unsupported(index)),
            _ => Err(GeometryError::IndexOutOfRange {
                index,
                max: Coordinate::M,
            }),
        }
    }

    pub fn set_ordinate(&mut self, index: usize, value: f64) -> Result<(), GeometryError> {
        match index {
            Coordinate::X => self.set_x(value),
            Coordinate::Y => self.set_y(value),
            Coordinate::Z => self.set_z(value)?,
            Coordinate::M => self.set_m(value)?,
            _ => {
                return Err(GeometryError::IndexOutOfRange {
                    index,
                    max: Coordinate::M,
                })
            }
        }
        Ok(())
    }

    /// Make a coordinate of the same variant, dropping ordinates it cannot hold.
    pub fn create(&self, x: f64, y: f64, z: f64, m: f64) -> Coordinate {
        match self {
            Coordinate::XY(_) => Coordinate::new(x, y),
            Coordinate::XYZ(_) => Coordinate::new_xyz(x, y, z),
            Coordinate::XYM(_) => Coordinate::new_xym(x, y, m),
            Coordinate::XYZM(_) => Coordinate::new_xyzm(x, y, z, m),
        }
    }

    /// Copy the ordinates of `other` that this variant can hold.
    pub fn set_coordinate(&mut self, other: &Coordinate) {
        *self = self.create(other.x(), other.y(), other.z(), other.m());
    }

    pub fn xy(&self) -> CoordinateXY {
        CoordinateXY::new(self.x(), self.y())
    }

    pub fn is_valid(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    pub fn equals_2d(&self, other: &Coordinate) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    pub fn equals_2d_with_tolerance(&self, other: &Coordinate, tolerance: f64) -> bool {
        (self.x() - other.x()).abs() <= tolerance && (self.y() - other.y()).abs() <= tolerance
    }

    /// Planar equality that also requires equal Z, with NaN matching NaN.
    pub fn equals_3d(&self, other: &Coordinate) -> bool {
        let (z, other_z) = (self.z(), other.z());
        self.equals_2d(other) && (z == other_z || (z.is_nan() && other_z.is_nan()))
    }

    /// Lexicographic comparison on (X, Y).
    pub fn compare_to(&self, other: &Coordinate) -> Ordering {
        if self.x() < other.x() {
            Ordering::Less
        } else if self.x() > other.x() {
            Ordering::Greater
        } else if self.y() < other.y() {
            Ordering::Less
        } else if self.y() > other.y() {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }

    pub fn distance_3d(&self, other: &Coordinate) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z() - other.z();
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.equals_2d(other)
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare_to(other))
    }
}

impl From<CoordinateXY> for Coordinate {
    fn from(coord: CoordinateXY) -> Self {
        Coordinate::XY(coord)
    }
}

impl From<CoordinateXYZ> for Coordinate {
    fn from(coord: CoordinateXYZ) -> Self {
        Coordinate::XYZ(coord)
    }
}

impl From<CoordinateXYM> for Coordinate {
    fn from(coord: CoordinateXYM) -> Self {
        Coordinate::XYM(coord)
    }
}

impl From<CoordinateXYZM> for Coordinate {
    fn from(coord: CoordinateXYZM) -> Self {
        Coordinate::XYZM(coord)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(coord: (f64, f64)) -> Self {
        Coordinate::new(coord.0, coord.1)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from(coord: (f64, f64, f64)) -> Self {
        Coordinate::new_xyz(coord.0, coord.1, coord.2)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::XY(c) => write!(f, "({}, {})", c.x, c.y),
            Coordinate::XYZ(c) => write!(f, "({}, {}, {})", c.x, c.y, c.z),
            Coordinate::XYM(c) => write!(f, "({}, {}, m={})", c.x, c.y, c.m),
            Coordinate::XYZM(c) => write!(f, "({}, {}, {}, m={})", c.x, c.y, c.z, c.m),
        }
    }
}
