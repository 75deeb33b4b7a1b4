//! Error types for the oracle engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::fortune::FortuneLevelKey;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors raised while loading a fortune levels document.
///
/// All of these are fatal to the load: a bad document is never repaired
/// or renormalized.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured file does not exist.
    #[error("fortune levels resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read fortune levels: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not have the expected shape.
    #[error("failed to decode fortune levels: {0}")]
    Decode(#[from] serde_json::Error),

    /// Level probabilities do not sum to 1.0 within tolerance.
    #[error("invalid fortune level probabilities: sum is {sum}, expected 1.0")]
    InvalidProbabilities {
        /// The sum that was observed.
        sum: f64,
    },

    /// A single level's weight is outside (0, 1].
    #[error("invalid probability {probability} for fortune level {key}, expected a value in (0, 1]")]
    InvalidLevelProbability {
        /// The offending level.
        key: FortuneLevelKey,
        /// The weight it declared.
        probability: f64,
    },

    /// A level has no copy-text variants.
    #[error("fortune level {key} has no copy examples")]
    EmptyCopyExamples {
        /// The offending level.
        key: FortuneLevelKey,
    },
}

/// Errors surfaced by the oracle operations.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The level table could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A fortune draw was requested with no configured levels.
    #[error("no fortune levels available")]
    MissingLevels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages() {
        let err = ConfigError::ResourceNotFound(PathBuf::from("levels.json"));
        assert_eq!(
            err.to_string(),
            "fortune levels resource not found: levels.json"
        );

        let err = ConfigError::InvalidProbabilities { sum: 1.5 };
        assert!(err.to_string().contains("sum is 1.5"));

        let err = ConfigError::InvalidLevelProbability {
            key: FortuneLevelKey::Error,
            probability: -0.5,
        };
        assert_eq!(
            err.to_string(),
            "invalid probability -0.5 for fortune level ERROR, expected a value in (0, 1]"
        );

        let err = ConfigError::EmptyCopyExamples {
            key: FortuneLevelKey::Basic,
        };
        assert_eq!(err.to_string(), "fortune level BASIC has no copy examples");
    }

    #[test]
    fn oracle_error_wraps_config_error_transparently() {
        let err: OracleError = ConfigError::InvalidProbabilities { sum: 0.5 }.into();
        assert!(matches!(err, OracleError::Config(_)));
        assert!(err.to_string().contains("sum is 0.5"));
        assert_eq!(
            OracleError::MissingLevels.to_string(),
            "no fortune levels available"
        );
    }
}
