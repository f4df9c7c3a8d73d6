use crate::errors::GeometryError;
use std::fmt;

/// A DE-9IM cell value.
///
/// Computed matrices only hold `False`, `P`, `L` and `A`.  `True` and
/// `DontCare` appear in patterns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Empty intersection (`F`).
    False,
    /// Point, dimension 0.
    P,
    /// Curve, dimension 1.
    L,
    /// Surface, dimension 2.
    A,
    /// Any non-empty intersection (`T`).
    True,
    /// Anything at all (`*`).
    DontCare,
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::False
    }
}

impl Dimension {
    /// Numeric code: F=-1, 0, 1, 2, T=-2, *=-3.
    pub fn value(self) -> i32 {
        match self {
            Dimension::False => -1,
            Dimension::P => 0,
            Dimension::L => 1,
            Dimension::A => 2,
            Dimension::True => -2,
            Dimension::DontCare => -3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Dimension::False => 'F',
            Dimension::P => '0',
            Dimension::L => '1',
            Dimension::A => '2',
            Dimension::True => 'T',
            Dimension::DontCare => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self, GeometryError> {
        match symbol.to_ascii_uppercase() {
            'F' => Ok(Dimension::False),
            '0' => Ok(Dimension::P),
            '1' => Ok(Dimension::L),
            '2' => Ok(Dimension::A),
            'T' => Ok(Dimension::True),
            '*' => Ok(Dimension::DontCare),
            _ => Err(GeometryError::InvalidArgument(format!(
                "Unknown dimension symbol: {:?}",
                symbol
            ))),
        }
    }

    /// True for any non-empty intersection.
    pub fn is_true(self) -> bool {
        self.value() >= 0 || self == Dimension::True
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Topological position relative to a geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Interior = 0,
    Boundary = 1,
    Exterior = 2,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Interior, Location::Boundary, Location::Exterior];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Location::Interior => 'i',
            Location::Boundary => 'b',
            Location::Exterior => 'e',
        }
    }
}
