//! The Dimensionally Extended 9-Intersection Model matrix.
//!
//! Rows are the interior, boundary and exterior of geometry A; columns are the
//! same for geometry B.  The text form lists the cells row by row, e.g.
//! `212101212`.

use crate::dimension::Location::{Boundary as B, Exterior as E, Interior as I};
use crate::errors::GeometryError;
use crate::{Dimension, Location};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct IntersectionMatrix {
    matrix: [[Dimension; 3]; 3],
}

impl IntersectionMatrix {
    /// A matrix with every cell `False`.
    pub fn new() -> Self {
        IntersectionMatrix::default()
    }

    pub fn get(&self, row: Location, col: Location) -> Dimension {
        self.matrix[row.index()][col.index()]
    }

    pub fn set(&mut self, row: Location, col: Location, dim: Dimension) {
        self.matrix[row.index()][col.index()] = dim;
    }

    /// Overwrite every cell from a 9-symbol string.
    pub fn set_from_symbols(&mut self, symbols: &str) -> Result<(), GeometryError> {
        for (i, dim) in parse_symbols(symbols)?.into_iter().enumerate() {
            self.matrix[i / 3][i % 3] = dim;
        }
        Ok(())
    }

    /// Raise a cell to at least `min`.
    pub fn set_at_least(&mut self, row: Location, col: Location, min: Dimension) {
        if self.get(row, col).value() < min.value() {
            self.set(row, col, min);
        }
    }

    /// `set_at_least`, skipped when either location is unknown.
    pub fn set_at_least_if_valid(
        &mut self,
        row: Option<Location>,
        col: Option<Location>,
        min: Dimension,
    ) {
        if let (Some(row), Some(col)) = (row, col) {
            self.set_at_least(row, col, min);
        }
    }

    /// Raise every cell to at least the matching symbol of a 9-symbol string.
    pub fn set_at_least_from_pattern(&mut self, symbols: &str) -> Result<(), GeometryError> {
        for (i, dim) in parse_symbols(symbols)?.into_iter().enumerate() {
            self.set_at_least(Location::ALL[i / 3], Location::ALL[i % 3], dim);
        }
        Ok(())
    }

    pub fn set_all(&mut self, dim: Dimension) {
        self.matrix = [[dim; 3]; 3];
    }

    /// Merge another matrix cell by cell, keeping the larger dimension.
    pub fn add(&mut self, other: &IntersectionMatrix) {
        for &row in Location::ALL.iter() {
            for &col in Location::ALL.iter() {
                self.set_at_least(row, col, other.get(row, col));
            }
        }
    }

    /// Swap rows and columns in place, turning the matrix of (A, B) into the
    /// matrix of (B, A).
    pub fn transpose(&mut self) -> &mut Self {
        for row in 0..3 {
            for col in (row + 1)..3 {
                let tmp = self.matrix[row][col];
                self.matrix[row][col] = self.matrix[col][row];
                self.matrix[col][row] = tmp;
            }
        }
        self
    }

    /// Test a cell value against a single pattern symbol.
    pub fn matches_dimension(actual: Dimension, required: char) -> Result<bool, GeometryError> {
        Ok(match Dimension::from_symbol(required)? {
            Dimension::DontCare => true,
            Dimension::True => Self::is_true(actual),
            required => actual == required,
        })
    }

    /// Test a 9-symbol matrix string against a 9-symbol pattern.
    pub fn matches_patterns(actual: &str, required: &str) -> Result<bool, GeometryError> {
        actual.parse::<IntersectionMatrix>()?.matches(required)
    }

    /// Test this matrix against a 9-symbol pattern over `{0, 1, 2, T, F, *}`.
    pub fn matches(&self, pattern: &str) -> Result<bool, GeometryError> {
        let symbols: Vec<char> = pattern.chars().collect();
        if symbols.len() != 9 {
            return Err(GeometryError::InvalidArgument(format!(
                "Pattern must have 9 symbols: {:?}",
                pattern
            )));
        }
        for (i, &symbol) in symbols.iter().enumerate() {
            if !Self::matches_dimension(self.matrix[i / 3][i % 3], symbol)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// True for any non-empty intersection value.
    pub fn is_true(actual: Dimension) -> bool {
        actual.is_true()
    }

    fn cell_true(&self, row: Location, col: Location) -> bool {
        self.get(row, col).is_true()
    }

    fn cell_false(&self, row: Location, col: Location) -> bool {
        self.get(row, col) == Dimension::False
    }

    /// `FF*FF****`
    pub fn is_disjoint(&self) -> bool {
        self.cell_false(I, I)
            && self.cell_false(I, B)
            && self.cell_false(B, I)
            && self.cell_false(B, B)
    }

    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }

    /// `FT*******`, `F**T*****` or `F***T****`, for the dimension pairs where
    /// touching is defined (never for two puntal geometries).
    pub fn is_touches(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        if dim_a.value() > dim_b.value() {
            return self.is_touches(dim_b, dim_a);
        }
        use Dimension::{A, L, P};
        match (dim_a, dim_b) {
            (A, A) | (L, L) | (L, A) | (P, A) | (P, L) => {
                self.cell_false(I, I)
                    && (self.cell_true(I, B) || self.cell_true(B, I) || self.cell_true(B, B))
            }
            _ => false,
        }
    }

    /// `T*T******` for P/L, P/A and L/A; `T*****T**` for L/P, A/P and A/L;
    /// `0********` for L/L.  False for every other pair.
    pub fn is_crosses(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Dimension::{A, L, P};
        match (dim_a, dim_b) {
            (P, L) | (P, A) | (L, A) => self.cell_true(I, I) && self.cell_true(I, E),
            (L, P) | (A, P) | (A, L) => self.cell_true(I, I) && self.cell_true(E, I),
            (L, L) => self.get(I, I) == Dimension::P,
            _ => false,
        }
    }

    /// `T*F**F***`
    pub fn is_within(&self) -> bool {
        self.cell_true(I, I) && self.cell_false(I, E) && self.cell_false(B, E)
    }

    /// `T*****FF*`
    pub fn is_contains(&self) -> bool {
        self.cell_true(I, I) && self.cell_false(E, I) && self.cell_false(E, B)
    }

    fn has_point_in_common(&self) -> bool {
        self.cell_true(I, I)
            || self.cell_true(I, B)
            || self.cell_true(B, I)
            || self.cell_true(B, B)
    }

    /// `T*****FF*`, `*T****FF*`, `***T**FF*` or `****T*FF*`
    pub fn is_covers(&self) -> bool {
        self.has_point_in_common() && self.cell_false(E, I) && self.cell_false(E, B)
    }

    /// `T*F**F***`, `*TF**F***`, `**FT*F***` or `**F*TF***`
    pub fn is_covered_by(&self) -> bool {
        self.has_point_in_common() && self.cell_false(I, E) && self.cell_false(B, E)
    }

    /// `T*F**FFF*` for geometries of equal dimension.
    ///
    /// The boundary/boundary cell is left free so that two equal points, which
    /// have empty boundaries, compare equal.
    pub fn is_equals(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        if dim_a != dim_b {
            return false;
        }
        self.cell_true(I, I)
            && self.cell_false(I, E)
            && self.cell_false(B, E)
            && self.cell_false(E, I)
            && self.cell_false(E, B)
    }

    /// `T*T***T**` for P/P and A/A; `1*T***T**` for L/L.
    pub fn is_overlaps(&self, dim_a: Dimension, dim_b: Dimension) -> bool {
        use Dimension::{A, L, P};
        match (dim_a, dim_b) {
            (P, P) | (A, A) => self.cell_true(I, I) && self.cell_true(I, E) && self.cell_true(E, I),
            (L, L) => self.get(I, I) == L && self.cell_true(I, E) && self.cell_true(E, I),
            _ => false,
        }
    }
}

fn parse_symbols(symbols: &str) -> Result<Vec<Dimension>, GeometryError> {
    let dims = symbols
        .chars()
        .map(Dimension::from_symbol)
        .collect::<Result<Vec<_>, _>>()?;
    if dims.len() != 9 {
        return Err(GeometryError::InvalidArgument(format!(
            "Matrix string must have 9 symbols: {:?}",
            symbols
        )));
    }
    Ok(dims)
}

impl FromStr for IntersectionMatrix {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut im = IntersectionMatrix::new();
        im.set_from_symbols(s)?;
        Ok(im)
    }
}

impl Index<(Location, Location)> for IntersectionMatrix {
    type Output = Dimension;

    fn index(&self, (row, col): (Location, Location)) -> &Dimension {
        &self.matrix[row.index()][col.index()]
    }
}

impl fmt::Display for IntersectionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix.iter() {
            for dim in row.iter() {
                write!(f, "{}", dim.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension::{A, L, P};

    fn im(symbols: &str) -> IntersectionMatrix {
        symbols.parse().unwrap()
    }

    #[test]
    fn test_default_is_false() {
        let m = IntersectionMatrix::new();
        assert_eq!(m.to_string(), "FFFFFFFFF");
        assert!(m.is_disjoint());
    }

    #[test]
    fn test_parse_and_display() {
        let m = im("212101212");
        assert_eq!(m.get(I, I), A);
        assert_eq!(m[(B, I)], L);
        assert_eq!(m[(B, B)], P);
        assert_eq!(m.to_string(), "212101212");
        assert!("21210121".parse::<IntersectionMatrix>().is_err());
        assert!("21210121X".parse::<IntersectionMatrix>().is_err());
    }

    #[test]
    fn test_matches() {
        let m = im("212101212");
        assert!(!m.matches("2*2***1**").unwrap());
        assert!(m.matches("2*2***2**").unwrap());
        assert!(m.matches("T*T***T**").unwrap());
        assert!(m.matches("*********").unwrap());
        assert!(!m.matches("F********").unwrap());
        assert!(matches!(
            m.matches("T*T"),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(m.matches("T*T***T*X").is_err());
        assert!(IntersectionMatrix::matches_patterns("0FFFFFFF2", "T*F**FFF*").unwrap());
        assert!(IntersectionMatrix::matches_dimension(Dimension::False, 'F').unwrap());
        assert!(!IntersectionMatrix::matches_dimension(Dimension::False, 'T').unwrap());
    }

    #[test]
    fn test_transpose() {
        let mut m = im("012F1F2FF");
        m.transpose();
        assert_eq!(m.to_string(), "0F211F2FF");
        m.transpose();
        assert_eq!(m.to_string(), "012F1F2FF");
    }

    #[test]
    fn test_set_at_least_and_add() {
        let mut m = IntersectionMatrix::new();
        m.set_at_least(I, I, L);
        m.set_at_least(I, I, P);
        assert_eq!(m.get(I, I), L);
        m.set_at_least_if_valid(None, Some(E), A);
        assert_eq!(m.get(I, E), Dimension::False);
        m.set_at_least_from_pattern("F0FFFF**2").unwrap();
        assert_eq!(m.to_string(), "10FFFFFF2");

        let mut merged = im("0FFFFFFF2");
        merged.add(&im("FF1FF0102"));
        assert_eq!(merged.to_string(), "0F1FF0102");

        m.set_all(A);
        assert_eq!(m.to_string(), "222222222");
    }

    #[test]
    fn test_containment_predicates() {
        let m = im("212F11FF2");
        assert!(m.is_contains());
        assert!(m.is_covers());
        assert!(!m.is_within());
        assert!(!m.is_covered_by());
        assert!(m.is_intersects());

        // Boundary-only contact still covers, but does not contain.
        let m = im("F1FF0FFF2");
        assert!(!m.is_contains());
        assert!(m.is_covers());
    }

    #[test]
    fn test_touches() {
        let m = im("FF2F11212");
        assert!(m.is_touches(A, A));
        assert!(m.is_touches(L, A));
        assert!(!im("FF0FFF0F2").is_touches(P, P));
        assert!(!im("212101212").is_touches(A, A));
        assert!(im("F0FFFF102").is_touches(L, P));
    }

    #[test]
    fn test_crosses() {
        let lines = im("0F1FF0102");
        assert!(lines.is_crosses(L, L));
        assert!(!im("1010F0102").is_crosses(L, L));
        assert!(im("1020F1102").is_crosses(L, A));
        assert!(im("1FF0FF212").is_crosses(A, L));
        assert!(!im("212101212").is_crosses(A, A));
        assert!(!im("0FFFFFFF2").is_crosses(P, P));
    }

    #[test]
    fn test_overlaps() {
        assert!(im("212101212").is_overlaps(A, A));
        assert!(im("1010F0102").is_overlaps(L, L));
        assert!(!im("0F1FF0102").is_overlaps(L, L));
        assert!(im("0F0FFF0F2").is_overlaps(P, P));
        assert!(!im("212101212").is_overlaps(A, L));
    }

    #[test]
    fn test_equals_for_points() {
        let m = im("0FFFFFFF2");
        assert!(m.is_equals(P, P));
        assert!(!m.is_equals(P, L));
        assert!(im("2FFF1FFF2").is_equals(A, A));
        assert!(!im("212F11FF2").is_equals(A, A));
    }
}
