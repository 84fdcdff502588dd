use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, Mul, Sub};
use std::slice::ChunksExact;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MatrixError, Result};

/// Largest side length supported by determinant, inverse and random fill.
pub const MAX_SIZE: usize = 3;

/// Default column width used by the `Display` impl.
pub const ELEMENT_WIDTH: usize = 3;

/// Square grid of `i32` values stored row-major.
///
/// Every operation that produces a matrix returns a fresh value; operands are
/// never mutated and no two matrices share storage.
///
/// Equality, hashing and ordering are keyed on `(size, sum_of_elements)`, so
/// `[[1, 0], [0, 0]] == [[0, 1], [0, 0]]`. Use [`SquareMatrix::same_elements`]
/// for element-by-element comparison.
#[derive(Clone, Debug)]
pub struct SquareMatrix {
    data: Vec<i32>,
    size: usize,
}

impl SquareMatrix {
    /// Build an N x N matrix from `size` and a row-major buffer of exactly
    /// `size * size` elements.
    pub fn from_shape_vec(size: usize, data: Vec<i32>) -> Result<Self> {
        if size == 0 {
            return Err(MatrixError::Shape { rows: 0, cols: 0 });
        }
        let expected = size
            .checked_mul(size)
            .ok_or(MatrixError::Shape { rows: size, cols: size })?;
        if data.len() < expected {
            log::debug!(
                "refusing {}x{} matrix from {} elements",
                size,
                size,
                data.len()
            );
            return Err(MatrixError::InsufficientElements {
                expected,
                actual: data.len(),
            });
        }
        if data.len() > expected {
            return Err(MatrixError::Shape {
                rows: size,
                cols: data.len().div_ceil(size),
            });
        }
        Ok(Self { data, size })
    }

    /// Lay a flat list out row-major; its length must be a perfect square.
    pub fn from_flat(data: Vec<i32>) -> Result<Self> {
        match exact_sqrt(data.len()) {
            Some(size) if size > 0 => Self::from_shape_vec(size, data),
            _ => Err(MatrixError::Shape {
                rows: usize::from(!data.is_empty()),
                cols: data.len(),
            }),
        }
    }

    /// Copy a nested grid; it must have as many columns in every row as it
    /// has rows.
    pub fn from_grid<R: AsRef<[i32]>>(grid: &[R]) -> Result<Self> {
        let rows = grid.len();
        if rows == 0 {
            return Err(MatrixError::Shape { rows: 0, cols: 0 });
        }
        let mut data = Vec::with_capacity(rows * rows);
        for row in grid {
            let row = row.as_ref();
            if row.len() != rows {
                return Err(MatrixError::Shape {
                    rows,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size: rows })
    }

    pub fn zeros(size: usize) -> Result<Self> {
        Self::from_shape_vec(size, vec![0; size.saturating_mul(size)])
    }

    pub fn identity(size: usize) -> Result<Self> {
        let mut m = Self::zeros(size)?;
        for i in 0..size {
            let offset = m.offset(i, i);
            m.data[offset] = 1;
        }
        Ok(m)
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn element_count(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.size && col < self.size {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[i32] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.size]
    }

    pub fn rows(&self) -> ChunksExact<'_, i32> {
        self.data.chunks_exact(self.size)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.data.clone()
    }

    /// Nested copy of the grid.
    pub fn to_grid(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    pub fn sum_of_elements(&self) -> i64 {
        self.data.iter().map(|&v| i64::from(v)).sum()
    }

    /// `Some(true)` when the elements sum to 1, `Some(false)` when they sum
    /// to 0, `None` otherwise.
    pub fn truth_value(&self) -> Option<bool> {
        match self.sum_of_elements() {
            1 => Some(true),
            0 => Some(false),
            _ => None,
        }
    }

    /// Element-by-element equality, ignoring the sum-based `PartialEq`.
    pub fn same_elements(&self, other: &SquareMatrix) -> bool {
        self.size == other.size && self.data == other.data
    }

    /// Order by size first, then by sum of elements.
    pub fn compare_to(&self, other: &SquareMatrix) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.sum_of_elements().cmp(&other.sum_of_elements()))
    }

    pub fn transpose(&self) -> SquareMatrix {
        let n = self.size;
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..n {
            for row in 0..n {
                data.push(self[(row, col)]);
            }
        }
        SquareMatrix { data, size: n }
    }

    fn ensure_same_size(&self, other: &SquareMatrix) -> Result<usize> {
        if self.size != other.size {
            return Err(MatrixError::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }
        Ok(self.size)
    }

    fn zip_with<F>(&self, other: &SquareMatrix, f: F) -> Result<SquareMatrix>
    where
        F: Fn(i32, i32) -> Option<i32>,
    {
        let size = self.ensure_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b).ok_or(MatrixError::Overflow))
            .collect::<Result<Vec<_>>>()?;
        Ok(SquareMatrix { data, size })
    }

    /// Elementwise sum.
    pub fn add(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        self.zip_with(other, i32::checked_add)
    }

    /// Elementwise difference.
    pub fn subtract(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        self.zip_with(other, i32::checked_sub)
    }

    /// Standard matrix product.
    ///
    /// Each dot product is accumulated in `i128`, which holds any sum of N
    /// products of two `i32` values for every N a `Vec` can index; the result
    /// must then fit back into `i32`. With the default fill range `[-10, 10)`
    /// and N <= 3 an entry is bounded by 3 * 100.
    pub fn multiply(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        let n = self.ensure_same_size(other)?;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let acc: i128 = (0..n)
                    .map(|k| i128::from(self[(i, k)]) * i128::from(other[(k, j)]))
                    .sum();
                data.push(i32::try_from(acc).map_err(|_| MatrixError::Overflow)?);
            }
        }
        Ok(SquareMatrix { data, size: n })
    }

    fn ensure_supported(&self) -> Result<()> {
        if self.size > MAX_SIZE {
            return Err(MatrixError::SizeLimit {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }

    fn wide(&self, row: usize, col: usize) -> i128 {
        i128::from(self[(row, col)])
    }

    /// Determinant of the 2x2 minor left after deleting `skip_row` and
    /// `skip_col` from a 3x3 matrix.
    fn minor(&self, skip_row: usize, skip_col: usize) -> i128 {
        let mut vals = [0i128; 4];
        let mut idx = 0;
        for r in (0..3).filter(|&r| r != skip_row) {
            for c in (0..3).filter(|&c| c != skip_col) {
                vals[idx] = self.wide(r, c);
                idx += 1;
            }
        }
        vals[0] * vals[3] - vals[1] * vals[2]
    }

    /// Closed-form determinant for N <= 3.
    pub fn determinant(&self) -> Result<i64> {
        self.ensure_supported()?;
        let det = match self.size {
            1 => self.wide(0, 0),
            2 => self.wide(0, 0) * self.wide(1, 1) - self.wide(0, 1) * self.wide(1, 0),
            _ => {
                self.wide(0, 0) * self.minor(0, 0) - self.wide(0, 1) * self.minor(0, 1)
                    + self.wide(0, 2) * self.minor(0, 2)
            }
        };
        log::trace!("determinant of {}x{} matrix = {}", self.size, self.size, det);
        i64::try_from(det).map_err(|_| MatrixError::Overflow)
    }

    /// Transpose of the cofactor matrix, so that `A * adj(A) = det(A) * I`.
    pub fn adjugate(&self) -> Result<SquareMatrix> {
        self.ensure_supported()?;
        let wide: Vec<i128> = match self.size {
            1 => vec![1],
            2 => vec![
                self.wide(1, 1),
                -self.wide(0, 1),
                -self.wide(1, 0),
                self.wide(0, 0),
            ],
            _ => {
                let mut out = Vec::with_capacity(9);
                for i in 0..3 {
                    for j in 0..3 {
                        let sign = if (i + j) % 2 == 0 { 1 } else { -1 };
                        // adj[i][j] is the cofactor at (j, i)
                        out.push(sign * self.minor(j, i));
                    }
                }
                out
            }
        };
        let data = wide
            .into_iter()
            .map(|v| i32::try_from(v).map_err(|_| MatrixError::Overflow))
            .collect::<Result<Vec<_>>>()?;
        Ok(SquareMatrix {
            data,
            size: self.size,
        })
    }
}

fn exact_sqrt(len: usize) -> Option<usize> {
    let guess = (len as f64).sqrt() as usize;
    (guess.saturating_sub(1)..=guess + 1).find(|&n| n.checked_mul(n) == Some(len))
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = i32;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.size && index.1 < self.size,
            "matrix index out of bounds"
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl PartialEq for SquareMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Ordering::Equal
    }
}

impl Eq for SquareMatrix {}

impl Hash for SquareMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.sum_of_elements().hash(state);
    }
}

impl PartialOrd for SquareMatrix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SquareMatrix {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}

impl<'a> Add<&'a SquareMatrix> for &'a SquareMatrix {
    type Output = Result<SquareMatrix>;

    fn add(self, rhs: &'a SquareMatrix) -> Self::Output {
        SquareMatrix::add(self, rhs)
    }
}

impl<'a> Sub<&'a SquareMatrix> for &'a SquareMatrix {
    type Output = Result<SquareMatrix>;

    fn sub(self, rhs: &'a SquareMatrix) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a> Mul<&'a SquareMatrix> for &'a SquareMatrix {
    type Output = Result<SquareMatrix>;

    fn mul(self, rhs: &'a SquareMatrix) -> Self::Output {
        self.multiply(rhs)
    }
}

/// Right-aligned, one row per line with a trailing newline. A formatter width
/// (`{:5}`) overrides [`ELEMENT_WIDTH`]. Columns widen so every cell keeps at
/// least one leading space.
impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let longest = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0);
        let width = f.width().unwrap_or(ELEMENT_WIDTH).max(longest + 1);
        for row in self.rows() {
            for v in row {
                write!(f, "{:>width$}", v, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a grid from text.
///
/// Rows are separated by newlines or `;`, elements by whitespace or commas.
/// A single row is read as a flat row-major list, so `"1 2 3 4"` and
/// `"1 2; 3 4"` produce the same 2x2 matrix.
impl FromStr for SquareMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let mut grid: Vec<Vec<i32>> = Vec::new();
        for (line_idx, line) in s.lines().enumerate() {
            for row in line.split(';').filter(|row| !row.trim().is_empty()) {
                let parsed = row
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|tok| !tok.is_empty())
                    .map(|tok| {
                        tok.parse::<i32>().map_err(|_| MatrixError::Parse {
                            line: line_idx + 1,
                            token: tok.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                grid.push(parsed);
            }
        }
        match grid.len() {
            1 => Self::from_flat(grid.remove(0)),
            _ => Self::from_grid(&grid),
        }
    }
}

impl TryFrom<Vec<i32>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(data: Vec<i32>) -> Result<Self> {
        Self::from_flat(data)
    }
}

impl TryFrom<&[i32]> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(data: &[i32]) -> Result<Self> {
        Self::from_flat(data.to_vec())
    }
}

impl TryFrom<Vec<Vec<i32>>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(grid: Vec<Vec<i32>>) -> Result<Self> {
        Self::from_grid(&grid)
    }
}

macro_rules! impl_from_array {
    ($($n:literal),*) => {
        $(
            impl From<[[i32; $n]; $n]> for SquareMatrix {
                fn from(grid: [[i32; $n]; $n]) -> Self {
                    SquareMatrix {
                        data: grid.iter().flatten().copied().collect(),
                        size: $n,
                    }
                }
            }
        )*
    };
}

impl_from_array!(1, 2, 3);

impl From<&SquareMatrix> for Vec<Vec<i32>> {
    fn from(m: &SquareMatrix) -> Self {
        m.to_grid()
    }
}

impl From<SquareMatrix> for Vec<i32> {
    fn from(m: SquareMatrix) -> Self {
        m.data
    }
}

// Serialized as a nested grid; deserialization re-validates the shape.
impl Serialize for SquareMatrix {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for SquareMatrix {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let grid = Vec::<Vec<i32>>::deserialize(deserializer)?;
        SquareMatrix::from_grid(&grid).map_err(serde::de::Error::custom)
    }
}
