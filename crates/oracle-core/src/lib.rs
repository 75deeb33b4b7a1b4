//! Deterministic oracle engine.
//!
//! Turns a calendar date (and optionally a free-text question) into
//! reproducible outcomes: a four-metric daily luck reading, a yes/no
//! decision, and a weighted fortune-stick draw. Every operation is a pure
//! function of its inputs; the only long-lived data is the fortune level
//! table, which callers load once and hand to the engine.
//!
//! The generator is SplitMix64 seeded from a digit-encoded day, so any
//! implementation following the same arithmetic produces bit-identical
//! results. It is not a source of secure randomness.

pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod fortune;
pub mod luck;
pub mod rng;
pub mod seed;
pub mod service;

pub use config::{ConfigLoader, EngineConfig, LEVELS_PATH_ENV};
pub use decision::{DecisionResult, YesNo};
pub use engine::OracleEngine;
pub use error::{ConfigError, ConfigResult, OracleError, OracleResult};
pub use fortune::{
    FortuneDraw, FortuneLevel, FortuneLevelKey, FortuneLevelsConfig, FortuneThemes,
    WatchFaceTheme,
};
pub use luck::{DailyLuck, LuckMetric, LuckTier, Quality};
pub use rng::SplitMix64;
pub use seed::Seed;
pub use service::{DateProvider, FixedDateProvider, OracleService, SystemDateProvider};
