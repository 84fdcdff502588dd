use std::error::Error;
use std::fmt;

/// Failures raised by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Input grid is not square, is ragged or empty, or a flat list has a
    /// length that does not describe an N x N grid.
    Shape { rows: usize, cols: usize },
    /// Flat list is shorter than the declared N * N.
    InsufficientElements { expected: usize, actual: usize },
    /// Requested size is outside `1..=max`.
    SizeLimit { size: usize, max: usize },
    /// Binary operation between matrices of different sizes.
    SizeMismatch { left: usize, right: usize },
    /// Inverse requested for a matrix whose determinant is zero.
    Singular,
    /// Result does not fit the element (or determinant) integer width.
    Overflow,
    /// Random fill with an empty `[min, max)` range.
    InvalidRange { min: i32, max: i32 },
    /// Text that cannot be read as an integer grid.
    Parse { line: usize, token: String },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::Shape { rows, cols } => {
                write!(f, "matrix must be square and non-empty, got {} x {}", rows, cols)
            }
            MatrixError::InsufficientElements { expected, actual } => write!(
                f,
                "not enough elements to fill the matrix: expected {}, got {}",
                expected, actual
            ),
            MatrixError::SizeLimit { size, max } => write!(
                f,
                "matrix size {} is not supported, size must be between 1 and {}",
                size, max
            ),
            MatrixError::SizeMismatch { left, right } => write!(
                f,
                "operation requires matrices of the same size, got {}x{} and {}x{}",
                left, left, right, right
            ),
            MatrixError::Singular => {
                write!(f, "inverse does not exist for a matrix with zero determinant")
            }
            MatrixError::Overflow => write!(f, "integer overflow in matrix arithmetic"),
            MatrixError::InvalidRange { min, max } => {
                write!(f, "empty value range [{}, {})", min, max)
            }
            MatrixError::Parse { line, token } => {
                write!(f, "invalid matrix element {:?} on line {}", token, line)
            }
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;
