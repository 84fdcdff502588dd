//! squaremat: small square integer matrices.
//!
//! A [`SquareMatrix`] is an immutable N x N grid of `i32` values. Sizes up to
//! 3x3 get closed-form determinants and exact adjugate-based inverses; any
//! size supports addition, subtraction and multiplication. Arithmetic is
//! checked and reports [`MatrixError::Overflow`] instead of wrapping.
//!
//! Random matrices for demos come from [`generator::random_fill`], configured
//! through [`config::FillConfig`].
pub mod config;
pub mod error;
pub mod generator;
pub mod inverse;
pub mod matrix;

pub use config::FillConfig;
pub use error::{MatrixError, Result};
pub use generator::{random_fill, random_fill_with};
pub use inverse::{Fraction, Inverse};
pub use matrix::{SquareMatrix, ELEMENT_WIDTH, MAX_SIZE};
