//! Demo session holding the two working matrices A and B.
use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::SeedableRng;

use squaremat::{random_fill_with, SquareMatrix};

use crate::config::SessionConfig;

const NOT_GENERATED: &str = "Generate the random matrices A and B first.\n";

/// Binary matrix operation selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    pub fn apply(&self, a: &SquareMatrix, b: &SquareMatrix) -> squaremat::Result<SquareMatrix> {
        match self {
            Operation::Add => a.add(b),
            Operation::Subtract => a.subtract(b),
            Operation::Multiply => a.multiply(b),
        }
    }
}

/// Six relational results between `a` and `b`, one per line.
pub fn comparison_report(a: &SquareMatrix, b: &SquareMatrix) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "A >  B: {}", a > b);
    let _ = writeln!(out, "A <  B: {}", a < b);
    let _ = writeln!(out, "A >= B: {}", a >= b);
    let _ = writeln!(out, "A <= B: {}", a <= b);
    let _ = writeln!(out, "A == B: {}", a == b);
    let _ = writeln!(out, "A != B: {}", a != b);
    out
}

/// Explicit state for the demo: configuration, generator and the current pair
/// of matrices.
pub struct Session {
    config: SessionConfig,
    rng: StdRng,
    matrices: Option<(SquareMatrix, SquareMatrix)>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.fill.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            matrices: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn matrices(&self) -> Option<(&SquareMatrix, &SquareMatrix)> {
        self.matrices.as_ref().map(|(a, b)| (a, b))
    }

    pub fn set_matrices(&mut self, a: SquareMatrix, b: SquareMatrix) {
        self.matrices = Some((a, b));
    }

    /// Draw a fresh A and B of the configured size.
    pub fn randomize(&mut self) -> squaremat::Result<(&SquareMatrix, &SquareMatrix)> {
        let size = self.config.demo_size;
        let (min, max) = (self.config.fill.min, self.config.fill.max);
        let a = random_fill_with(size, min, max, &mut self.rng)?;
        let b = random_fill_with(size, min, max, &mut self.rng)?;
        log::info!("generated two random {}x{} matrices", size, size);
        let (a, b) = self.matrices.insert((a, b));
        Ok((&*a, &*b))
    }

    pub fn matrices_report(&self) -> String {
        match self.matrices() {
            Some((a, b)) => format!("Matrix A:\n{}\nMatrix B:\n{}", a, b),
            None => NOT_GENERATED.to_string(),
        }
    }

    pub fn determinants_report(&self) -> String {
        let Some((a, b)) = self.matrices() else {
            return NOT_GENERATED.to_string();
        };
        let mut out = String::new();
        for (label, m) in [("A", a), ("B", b)] {
            match m.determinant() {
                Ok(det) => {
                    let _ = writeln!(out, "det({}) = {}", label, det);
                }
                Err(e) => {
                    let _ = writeln!(out, "det({}): {}", label, e);
                }
            }
        }
        out
    }

    pub fn inverses_report(&self) -> String {
        let Some((a, b)) = self.matrices() else {
            return NOT_GENERATED.to_string();
        };
        let mut out = String::new();
        for (label, m) in [("A", a), ("B", b)] {
            match m.inverse() {
                Ok(inv) => {
                    let _ = write!(out, "Inverse of {}:\n{}", label, inv);
                }
                Err(e) => {
                    let _ = writeln!(out, "Inverse of {}: {}", label, e);
                }
            }
        }
        out
    }

    pub fn comparison_report(&self) -> String {
        match self.matrices() {
            Some((a, b)) => comparison_report(a, b),
            None => NOT_GENERATED.to_string(),
        }
    }

    pub fn conversions_report(&self) -> String {
        let Some((a, _)) = self.matrices() else {
            return NOT_GENERATED.to_string();
        };
        let mut out = String::from("Matrix A -> nested array:\n");
        for row in a.to_grid() {
            let cells: Vec<String> = row.iter().map(i32::to_string).collect();
            let _ = writeln!(out, "{}", cells.join(" "));
        }
        let _ = write!(out, "\nMatrix A -> string:\n{}", a);
        out.push_str("\nFlat array [0, 1, 2, 3] -> matrix:\n");
        match SquareMatrix::try_from(vec![0, 1, 2, 3]) {
            Ok(m) => {
                let _ = write!(out, "{}", m);
            }
            Err(e) => {
                let _ = writeln!(out, "{}", e);
            }
        }
        out
    }

    /// Run every demo step in order. A failing step is reported in the output
    /// and the remaining steps still run.
    pub fn run_demo(&mut self) -> String {
        let mut out = String::new();
        if let Err(e) = self.randomize() {
            log::warn!("random fill failed: {}", e);
            let _ = writeln!(out, "Random fill failed: {}", e);
        }
        let sections = [
            ("Random matrices", self.matrices_report()),
            ("Determinants", self.determinants_report()),
            ("Inverses", self.inverses_report()),
            ("Comparisons", self.comparison_report()),
            ("Conversions", self.conversions_report()),
        ];
        for (title, body) in sections {
            let _ = write!(out, "== {} ==\n{}\n", title, body);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squaremat::FillConfig;

    fn seeded(seed: u64) -> Session {
        Session::new(SessionConfig {
            fill: FillConfig::default().with_seed(seed),
            demo_size: 3,
        })
    }

    #[test]
    fn reports_before_generation() {
        let session = seeded(1);
        assert!(session.matrices().is_none());
        assert_eq!(session.determinants_report(), NOT_GENERATED);
        assert_eq!(session.inverses_report(), NOT_GENERATED);
        assert_eq!(session.comparison_report(), NOT_GENERATED);
        assert_eq!(session.conversions_report(), NOT_GENERATED);
    }

    #[test]
    fn seeded_sessions_agree() {
        let mut first = seeded(9);
        let mut second = seeded(9);
        let (a1, b1) = first.randomize().unwrap();
        let (a2, b2) = second.randomize().unwrap();
        assert!(a1.same_elements(a2));
        assert!(b1.same_elements(b2));
    }

    #[test]
    fn comparison_lists_six_relations() {
        let a = SquareMatrix::from([[1, 0], [0, 0]]);
        let b = SquareMatrix::from([[0, 1], [0, 0]]);
        let report = comparison_report(&a, &b);
        assert_eq!(report.lines().count(), 6);
        assert!(report.contains("A == B: true"));
        assert!(report.contains("A != B: false"));
        assert!(report.contains("A >  B: false"));
    }

    #[test]
    fn singular_inverse_is_reported_not_fatal() {
        let mut session = seeded(3);
        session.set_matrices(
            SquareMatrix::from([[1, 2], [2, 4]]),
            SquareMatrix::from([[1, 2], [3, 4]]),
        );
        let report = session.inverses_report();
        assert!(report.contains("Inverse of A: inverse does not exist"));
        assert!(report.contains("Inverse of B:\n"));
        assert!(report.contains("3/2"));
    }

    #[test]
    fn oversized_demo_reports_error() {
        let mut session = Session::new(SessionConfig {
            fill: FillConfig::default(),
            demo_size: 4,
        });
        let report = session.run_demo();
        assert!(report.contains("Random fill failed"));
        assert!(report.contains(NOT_GENERATED));
    }

    #[test]
    fn conversions_show_flat_array() {
        let mut session = seeded(5);
        session.set_matrices(
            SquareMatrix::from([[1, 2], [3, 4]]),
            SquareMatrix::from([[0]]),
        );
        let report = session.conversions_report();
        assert!(report.contains("1 2\n3 4\n"));
        assert!(report.contains("  0  1\n  2  3\n"));
    }

    #[test]
    fn operations_apply() {
        let a = SquareMatrix::from([[1, 2], [3, 4]]);
        let b = SquareMatrix::from([[1, 1], [1, 1]]);
        assert_eq!(Operation::Add.apply(&a, &b).unwrap().as_slice(), &[2, 3, 4, 5]);
        assert_eq!(Operation::Subtract.apply(&a, &b).unwrap().as_slice(), &[0, 1, 2, 3]);
        assert_eq!(Operation::Multiply.apply(&a, &b).unwrap().as_slice(), &[3, 3, 7, 7]);
    }
}
