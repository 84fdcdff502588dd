//! Session configuration loaded from JSON.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use squaremat::FillConfig;

/// Parameters for a demo session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub fill: FillConfig,
    /// Side length of the random matrices A and B.
    pub demo_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fill: FillConfig::default(),
            demo_size: 3,
        }
    }
}

/// Load a session configuration from a JSON file.
pub fn load_session_config<P: AsRef<Path>>(path: P) -> Result<SessionConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: SessionConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
