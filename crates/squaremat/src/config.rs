use serde::{Deserialize, Serialize};

/// Value range and seeding for random fill.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FillConfig {
    /// Inclusive lower bound.
    pub min: i32,
    /// Exclusive upper bound.
    pub max: i32,
    /// Fixed seed for reproducible draws; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl FillConfig {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            min: -10,
            max: 10,
            seed: None,
        }
    }
}
