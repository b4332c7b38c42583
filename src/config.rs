//! Session configuration: code-length policy, secret visibility, YAML loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Smallest code length a session accepts.
pub const MIN_CODE_LEN: usize = 3;
/// Largest code length a session accepts.
pub const MAX_CODE_LEN: usize = 6;

/// Configuration and validation errors.
///
/// These signal integration bugs (bad length bounds, empty alphabet), not
/// player input; player mistakes are reported through
/// [`SubmitOutcome`](crate::SubmitOutcome).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("alphabet contains duplicate symbol {symbol:?}")]
    DuplicateSymbol { symbol: String },
    #[error("code length {len} outside allowed range {min}..={max}")]
    LengthOutOfRange { len: usize, min: usize, max: usize },
    #[error("invalid length range {min}..={max}")]
    InvalidLengthRange { min: usize, max: usize },
}

/// How a round's code length is derived at construction and on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Constant length for the lifetime of the session.
    Fixed { len: usize },
    /// Length re-sampled uniformly in `min..=max` at the start of each round.
    SampledPerRound { min: usize, max: usize },
}

impl Default for LengthPolicy {
    fn default() -> Self {
        LengthPolicy::Fixed {
            len: default_code_len(),
        }
    }
}

fn default_code_len() -> usize {
    4
}

/// Per-session settings consumed by [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub length: LengthPolicy,
    /// If true, [`GameSession::secret`](crate::GameSession::secret) exposes
    /// the secret code. Off by default; a fair UI never reads it.
    #[serde(default)]
    pub reveal_secret: bool,
}

impl SessionConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: SessionConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Bounds-check the length policy against [`MIN_CODE_LEN`]..=[`MAX_CODE_LEN`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.length {
            LengthPolicy::Fixed { len } => check_len(len),
            LengthPolicy::SampledPerRound { min, max } => {
                if min > max {
                    return Err(ConfigError::InvalidLengthRange { min, max });
                }
                check_len(min)?;
                check_len(max)
            }
        }
    }
}

fn check_len(len: usize) -> Result<(), ConfigError> {
    if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&len) {
        return Err(ConfigError::LengthOutOfRange {
            len,
            min: MIN_CODE_LEN,
            max: MAX_CODE_LEN,
        });
    }
    Ok(())
}
