//! The oracle engine: the three public operations over one level table.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::config::EngineConfig;
use crate::decision::{DecisionResult, decide};
use crate::error::{OracleError, OracleResult};
use crate::fortune::{FortuneDraw, FortuneLevelsConfig, pick_copy, pick_level};
use crate::luck::DailyLuck;
use crate::rng::SplitMix64;
use crate::seed::{self, Seed};

/// Deterministic oracle over a calendar and a loaded level table.
///
/// The engine holds no mutable state. Every call derives its own seed,
/// builds its own generator, and returns a fresh result, so one engine can
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct OracleEngine<Tz: TimeZone = Utc> {
    calendar: Tz,
    levels: Arc<FortuneLevelsConfig>,
}

impl OracleEngine<Utc> {
    /// Engine on the UTC calendar.
    pub fn new(levels: Arc<FortuneLevelsConfig>) -> Self {
        Self {
            calendar: Utc,
            levels,
        }
    }
}

impl OracleEngine<FixedOffset> {
    /// Load the level table selected by `config` and build an engine on
    /// its calendar offset.
    pub fn from_config(config: &EngineConfig) -> OracleResult<Self> {
        let levels = config.loader().load_shared()?;
        Ok(Self {
            calendar: config.utc_offset,
            levels,
        })
    }
}

impl<Tz: TimeZone> OracleEngine<Tz> {
    /// Same table, different calendar.
    pub fn with_calendar<T: TimeZone>(self, calendar: T) -> OracleEngine<T> {
        OracleEngine {
            calendar,
            levels: self.levels,
        }
    }

    /// The calendar that decides which day an instant falls on.
    pub fn calendar(&self) -> &Tz {
        &self.calendar
    }

    /// The level table handle.
    pub fn levels(&self) -> &Arc<FortuneLevelsConfig> {
        &self.levels
    }

    /// Seed for the civil day containing `at`.
    pub fn day_seed(&self, at: DateTime<Utc>) -> Seed {
        seed::day_seed(&at, &self.calendar)
    }

    /// The luck reading for the day containing `at`.
    pub fn daily_luck(&self, at: DateTime<Utc>) -> DailyLuck {
        let date = seed::civil_date(&at, &self.calendar);
        DailyLuck::generate(date, seed::day_seed_from_date(date))
    }

    /// Answer a yes/no question asked at `at`.
    pub fn decide_yes_no(&self, question: Option<&str>, at: DateTime<Utc>) -> DecisionResult {
        let result = decide(self.day_seed(at), question);
        log::debug!("decision at {at}: {result}");
        DecisionResult {
            decided_at: at,
            question: question.map(str::to_owned),
            result,
        }
    }

    /// Draw a fortune stick at `at`.
    ///
    /// The day seed drives one stream: the first roll picks the level and
    /// the second picks its copy text.
    pub fn draw_fortune(&self, at: DateTime<Utc>) -> OracleResult<FortuneDraw> {
        let mut rng = SplitMix64::new(self.day_seed(at));
        let level = pick_level(&self.levels.levels, &mut rng).ok_or(OracleError::MissingLevels)?;
        let copy = pick_copy(level, &mut rng).to_owned();
        log::debug!("fortune at {at}: {}", level.key);
        Ok(FortuneDraw {
            drawn_at: at,
            level: level.clone(),
            copy,
        })
    }
}
