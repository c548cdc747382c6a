use std::fs;
use std::io;
use std::path::Path;

use crate::io::atomic_write_string;
use crate::state::config::{ConfigError, PlanConfig};

#[derive(Debug)]
pub enum PlanIoError {
    Io(io::Error),
    Parse(serde_json::Error),
    Config(ConfigError),
}

impl std::fmt::Display for PlanIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Parse(err) => write!(f, "plan parse error: {err}"),
            Self::Config(err) => write!(f, "invalid plan: {err}"),
        }
    }
}

impl std::error::Error for PlanIoError {}

impl From<io::Error> for PlanIoError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PlanIoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ConfigError> for PlanIoError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Reads a plan file, rejecting configurations the grid cannot represent.
/// Entry durations of zero are normalized to a single month.
pub fn load_plan(path: &Path) -> Result<PlanConfig, PlanIoError> {
    let content = fs::read_to_string(path)?;
    let mut config: PlanConfig = serde_json::from_str(&content)?;
    config.validate()?;
    config.normalize();
    Ok(config)
}

/// Writes a plan as pretty-printed JSON, atomically.
pub fn save_plan(path: &Path, config: &PlanConfig) -> Result<(), PlanIoError> {
    let json = serde_json::to_string_pretty(config)?;
    atomic_write_string(path, &json)?;
    Ok(())
}
