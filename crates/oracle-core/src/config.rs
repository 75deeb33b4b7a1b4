//! Loading the fortune level table and assembling engine settings.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{FixedOffset, Offset, Utc};

use crate::error::{ConfigError, ConfigResult};
use crate::fortune::FortuneLevelsConfig;

/// Environment variable that points the loader at a level table on disk.
pub const LEVELS_PATH_ENV: &str = "ORACLE_FORTUNE_LEVELS";

/// The level table compiled into the crate.
pub const BUNDLED_LEVELS: &str = include_str!("../../../config/fortune_levels.json");

/// Where a level table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Bundled,
    Path(PathBuf),
    Inline(String),
}

/// Loads and validates a [`FortuneLevelsConfig`].
///
/// Loading is explicit: callers load once and share the returned handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoader {
    source: Source,
}

impl ConfigLoader {
    /// Load the table compiled into the crate.
    pub fn bundled() -> Self {
        Self {
            source: Source::Bundled,
        }
    }

    /// Load from a JSON file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Path(path.into()),
        }
    }

    /// Load from an in-memory JSON document.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            source: Source::Inline(json.into()),
        }
    }

    /// Use the path in [`LEVELS_PATH_ENV`] if set, else the bundled table.
    pub fn from_env() -> Self {
        match std::env::var_os(LEVELS_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::from_path(PathBuf::from(path)),
            _ => Self::bundled(),
        }
    }

    /// The file this loader reads, if any.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            Source::Path(path) => Some(path),
            Source::Bundled | Source::Inline(_) => None,
        }
    }

    /// Read, parse, and validate the table.
    pub fn load(&self) -> ConfigResult<FortuneLevelsConfig> {
        let config = match &self.source {
            Source::Bundled => FortuneLevelsConfig::from_json_str(BUNDLED_LEVELS)?,
            Source::Inline(json) => FortuneLevelsConfig::from_json_str(json)?,
            Source::Path(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => ConfigError::ResourceNotFound(path.clone()),
                    _ => ConfigError::Io(e),
                })?;
                FortuneLevelsConfig::from_json_str(&json)?
            }
        };
        log::info!(
            "loaded fortune levels v{} ({}, {} levels)",
            config.version,
            config.locale,
            config.levels.len()
        );
        Ok(config)
    }

    /// Load into a shareable handle.
    pub fn load_shared(&self) -> ConfigResult<Arc<FortuneLevelsConfig>> {
        self.load().map(Arc::new)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Settings for building an engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Offset that defines which civil day an instant falls on.
    pub utc_offset: FixedOffset,
    /// Level table on disk; `None` defers to [`ConfigLoader::from_env`].
    pub levels_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
            levels_path: None,
        }
    }
}

impl EngineConfig {
    /// Set the calendar offset.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Read the level table from a file.
    pub fn with_levels_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.levels_path = Some(path.into());
        self
    }

    /// The loader these settings select.
    pub fn loader(&self) -> ConfigLoader {
        match &self.levels_path {
            Some(path) => ConfigLoader::from_path(path.clone()),
            None => ConfigLoader::from_env(),
        }
    }
}
