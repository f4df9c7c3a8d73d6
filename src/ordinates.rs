use std::fmt;
use std::ops::{BitAnd, BitOr};

/// Number of named ordinates available in each group (spatial and measure).
pub const MAX_ORDINATES: usize = 16;

/// A named logical ordinate.
///
/// Spatial ordinates are numbered from X (0), so `Spatial(2)` is Z.  Measure
/// ordinates are numbered from the first measure, so `Measure(0)` is M.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ordinate {
    Spatial(u8),
    Measure(u8),
}

impl Ordinate {
    pub const X: Ordinate = Ordinate::Spatial(0);
    pub const Y: Ordinate = Ordinate::Spatial(1);
    pub const Z: Ordinate = Ordinate::Spatial(2);
    pub const M: Ordinate = Ordinate::Measure(0);

    /// The set bit for this name, or `None` past `MAX_ORDINATES` in its group.
    fn bit(self) -> Option<u32> {
        let (offset, i) = match self {
            Ordinate::Spatial(i) => (0, i as usize),
            Ordinate::Measure(i) => (MAX_ORDINATES, i as usize),
        };
        if i < MAX_ORDINATES {
            Some(1 << (offset + i))
        } else {
            None
        }
    }
}

impl fmt::Display for Ordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Ordinate::X => write!(f, "X"),
            Ordinate::Y => write!(f, "Y"),
            Ordinate::Z => write!(f, "Z"),
            Ordinate::Spatial(i) => write!(f, "Spatial{}", i + 1),
            Ordinate::Measure(i) => write!(f, "M{}", i + 1),
        }
    }
}

/// A set of named ordinates.  The low half tracks spatial ordinates, the high
/// half tracks measures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Ordinates(u32);

impl Ordinates {
    pub const NONE: Ordinates = Ordinates(0);
    pub const XY: Ordinates = Ordinates(0b11);
    pub const XYZ: Ordinates = Ordinates(0b111);
    pub const XYM: Ordinates = Ordinates(0b11 | 1 << MAX_ORDINATES);
    pub const XYZM: Ordinates = Ordinates(0b111 | 1 << MAX_ORDINATES);

    /// The ordinates populated by a layout of `spatial` spatial ordinates and
    /// `measures` measures.  Counts beyond `MAX_ORDINATES` are clamped.
    pub fn from_layout(spatial: usize, measures: usize) -> Self {
        Ordinates(low_bits(spatial) | low_bits(measures) << MAX_ORDINATES)
    }

    pub fn contains(self, ordinate: Ordinate) -> bool {
        ordinate.bit().map_or(false, |bit| self.0 & bit != 0)
    }

    /// Add `ordinate`.  Names past `MAX_ORDINATES` cannot be held and are ignored.
    pub fn insert(&mut self, ordinate: Ordinate) {
        if let Some(bit) = ordinate.bit() {
            self.0 |= bit;
        }
    }

    pub fn has_z(self) -> bool {
        self.contains(Ordinate::Z)
    }

    pub fn has_m(self) -> bool {
        self.contains(Ordinate::M)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn spatial_count(self) -> usize {
        (self.0 & low_bits(MAX_ORDINATES)).count_ones() as usize
    }

    pub fn measure_count(self) -> usize {
        (self.0 >> MAX_ORDINATES).count_ones() as usize
    }

    pub fn intersection(self, other: Ordinates) -> Ordinates {
        Ordinates(self.0 & other.0)
    }

    pub fn union(self, other: Ordinates) -> Ordinates {
        Ordinates(self.0 | other.0)
    }

    /// Spatial ordinates in order, then measures in order.
    pub fn iter(self) -> impl Iterator<Item = Ordinate> {
        let spatial = (0..MAX_ORDINATES as u8).map(Ordinate::Spatial);
        let measures = (0..MAX_ORDINATES as u8).map(Ordinate::Measure);
        spatial.chain(measures).filter(move |o| self.contains(*o))
    }
}

fn low_bits(count: usize) -> u32 {
    let count = count.min(MAX_ORDINATES);
    ((1u64 << count) - 1) as u32
}

impl BitAnd for Ordinates {
    type Output = Ordinates;

    fn bitand(self, rhs: Ordinates) -> Ordinates {
        self.intersection(rhs)
    }
}

impl BitOr for Ordinates {
    type Output = Ordinates;

    fn bitor(self, rhs: Ordinates) -> Ordinates {
        self.union(rhs)
    }
}

impl fmt::Display for Ordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|o| o.to_string()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
