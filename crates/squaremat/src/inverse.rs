//! Exact inverse of an integer matrix.
//!
//! The inverse of `A` is `adj(A) / det(A)`. Its entries are rationals, so the
//! inverse is kept as an adjugate/determinant pair and read out either as
//! reduced fractions, as `f64`, or with integer truncation.
use std::fmt;

use crate::error::{MatrixError, Result};
use crate::matrix::{SquareMatrix, ELEMENT_WIDTH};

/// Reduced fraction with a positive denominator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    pub numer: i64,
    pub denom: u64,
}

impl Fraction {
    fn reduced(numer: i128, denom: i128) -> Self {
        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs()).max(1) as i128;
        let sign = if denom < 0 { -1 } else { 1 };
        // |numer| comes from an i32 entry and |denom| from an i64 determinant
        Fraction {
            numer: (sign * numer / g) as i64,
            denom: (denom.unsigned_abs() / g as u128) as u64,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// `adj(A) / det(A)` for a non-singular matrix `A`.
#[derive(Clone, Debug)]
pub struct Inverse {
    adjugate: SquareMatrix,
    determinant: i64,
}

impl Inverse {
    pub fn size(&self) -> usize {
        self.adjugate.size()
    }

    /// Unscaled adjugate.
    pub fn adjugate(&self) -> &SquareMatrix {
        &self.adjugate
    }

    /// Determinant of the original matrix; never zero.
    pub fn determinant(&self) -> i64 {
        self.determinant
    }

    fn fraction(&self, adjugate_entry: i32) -> Fraction {
        Fraction::reduced(i128::from(adjugate_entry), i128::from(self.determinant))
    }

    /// Entry at `(row, col)`, or `None` outside the matrix.
    pub fn entry(&self, row: usize, col: usize) -> Option<Fraction> {
        self.adjugate.get(row, col).map(|v| self.fraction(v))
    }

    /// All entries, row-major.
    pub fn entries(&self) -> Vec<Fraction> {
        self.adjugate
            .as_slice()
            .iter()
            .map(|&v| self.fraction(v))
            .collect()
    }

    pub fn to_f64_grid(&self) -> Vec<Vec<f64>> {
        self.adjugate
            .rows()
            .map(|row| row.iter().map(|&v| self.fraction(v).to_f64()).collect())
            .collect()
    }

    /// True when every entry is a whole number, i.e. `det(A)` divides each
    /// adjugate entry.
    pub fn is_integral(&self) -> bool {
        self.adjugate
            .as_slice()
            .iter()
            .all(|&v| i64::from(v) % self.determinant == 0)
    }

    /// The inverse as an integer matrix, if it is one.
    pub fn to_integer_matrix(&self) -> Option<SquareMatrix> {
        if !self.is_integral() {
            return None;
        }
        self.truncated().ok()
    }

    /// Adjugate entries divided by the determinant with truncation toward
    /// zero. Agrees with [`Inverse::to_integer_matrix`] when the inverse is
    /// integral.
    pub fn truncated(&self) -> Result<SquareMatrix> {
        let data = self
            .adjugate
            .as_slice()
            .iter()
            .map(|&v| {
                i32::try_from(i64::from(v) / self.determinant).map_err(|_| MatrixError::Overflow)
            })
            .collect::<Result<Vec<_>>>()?;
        SquareMatrix::from_shape_vec(self.size(), data)
    }
}

impl fmt::Display for Inverse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.entries().iter().map(Fraction::to_string).collect();
        let longest = cells.iter().map(String::len).max().unwrap_or(0);
        let width = f.width().unwrap_or(ELEMENT_WIDTH).max(longest + 1);
        for row in cells.chunks(self.size()) {
            for cell in row {
                write!(f, "{:>width$}", cell, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl SquareMatrix {
    /// Exact inverse; fails with [`MatrixError::Singular`] when the
    /// determinant is zero and [`MatrixError::SizeLimit`] above 3x3.
    pub fn inverse(&self) -> Result<Inverse> {
        let determinant = self.determinant()?;
        if determinant == 0 {
            log::debug!("{}x{} matrix is singular", self.size(), self.size());
            return Err(MatrixError::Singular);
        }
        Ok(Inverse {
            adjugate: self.adjugate()?,
            determinant,
        })
    }
}
