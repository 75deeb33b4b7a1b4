//! The capability contract consumers program against.
//!
//! [`OracleEngine`] is the local implementation. A remote client would
//! implement the same trait over the JSON wire shapes of the result types,
//! reporting transport failures through [`OracleResult`].

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::decision::DecisionResult;
use crate::engine::OracleEngine;
use crate::error::OracleResult;
use crate::fortune::{FortuneDraw, FortuneLevelsConfig};
use crate::luck::DailyLuck;

/// The four oracle operations.
pub trait OracleService {
    /// The level table in use.
    fn fortune_levels(&self) -> OracleResult<Arc<FortuneLevelsConfig>>;

    /// Luck reading for the day containing `at`.
    fn daily_luck(&self, at: DateTime<Utc>) -> OracleResult<DailyLuck>;

    /// Answer a yes/no question asked at `at`.
    fn decide_yes_no(&self, question: Option<&str>, at: DateTime<Utc>)
    -> OracleResult<DecisionResult>;

    /// Draw a fortune stick at `at`.
    fn draw_fortune(&self, at: DateTime<Utc>) -> OracleResult<FortuneDraw>;
}

impl<Tz: TimeZone> OracleService for OracleEngine<Tz> {
    fn fortune_levels(&self) -> OracleResult<Arc<FortuneLevelsConfig>> {
        Ok(Arc::clone(self.levels()))
    }

    fn daily_luck(&self, at: DateTime<Utc>) -> OracleResult<DailyLuck> {
        Ok(OracleEngine::daily_luck(self, at))
    }

    fn decide_yes_no(
        &self,
        question: Option<&str>,
        at: DateTime<Utc>,
    ) -> OracleResult<DecisionResult> {
        Ok(OracleEngine::decide_yes_no(self, question, at))
    }

    fn draw_fortune(&self, at: DateTime<Utc>) -> OracleResult<FortuneDraw> {
        OracleEngine::draw_fortune(self, at)
    }
}

/// Source of "now" for callers that do not pass explicit instants.
pub trait DateProvider {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateProvider;

impl DateProvider for SystemDateProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateProvider(pub DateTime<Utc>);

impl DateProvider for FixedDateProvider {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
