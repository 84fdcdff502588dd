//! One-shot subcommand handlers. Each returns the text to print.
use anyhow::{Context, Result};

use squaremat::{random_fill, FillConfig, SquareMatrix};

use crate::session::{comparison_report, Operation};

pub fn random(size: usize, fill: &FillConfig) -> Result<String> {
    let m = random_fill(size, fill)
        .with_context(|| format!("Failed to generate a {}x{} matrix", size, size))?;
    Ok(m.to_string())
}

pub fn binary(op: Operation, a: &SquareMatrix, b: &SquareMatrix) -> Result<String> {
    let result = op
        .apply(a, b)
        .with_context(|| format!("Matrix {} failed", op.name()))?;
    Ok(result.to_string())
}

pub fn determinant(m: &SquareMatrix) -> Result<String> {
    let det = m.determinant().context("Failed to compute determinant")?;
    Ok(format!("{}\n", det))
}

/// Exact inverse as reduced fractions, or the integer-truncated variant.
pub fn inverse(m: &SquareMatrix, truncate: bool) -> Result<String> {
    let inv = m.inverse().context("Failed to compute inverse")?;
    if truncate {
        Ok(inv.truncated()?.to_string())
    } else {
        Ok(inv.to_string())
    }
}

pub fn compare(a: &SquareMatrix, b: &SquareMatrix) -> String {
    comparison_report(a, b)
}
