pub mod decide;
pub mod draw;
pub mod levels;
pub mod luck;
pub mod stats;

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use colored::{ColoredString, Colorize};

use oracle_core::{
    DateProvider, EngineConfig, FortuneLevelKey, LuckTier, OracleEngine, SystemDateProvider, YesNo,
};

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Options {
    pub offset: FixedOffset,
    pub config: Option<PathBuf>,
    pub json: bool,
}

impl Options {
    fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::default().with_utc_offset(self.offset);
        match &self.config {
            Some(path) => config.with_levels_path(path.clone()),
            None => config,
        }
    }

    /// Load the level table and build an engine on the chosen calendar.
    fn engine(&self) -> Result<OracleEngine<FixedOffset>, String> {
        OracleEngine::from_config(&self.engine_config()).map_err(|e| e.to_string())
    }
}

/// Parse a UTC offset such as `+08:00`, or `UTC`.
pub fn parse_offset(s: &str) -> Result<FixedOffset, String> {
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    s.parse::<FixedOffset>()
        .map_err(|_| format!("invalid UTC offset '{s}' (expected e.g. +08:00)"))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

/// Parse an RFC 3339 instant.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| format!("invalid timestamp '{s}' (expected RFC 3339)"))
}

/// Noon of `date` on the given calendar, as a UTC instant.
fn instant_for_date(date: NaiveDate, offset: FixedOffset) -> Result<DateTime<Utc>, String> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| format!("cannot represent noon on {date}"))?;
    offset
        .from_local_datetime(&noon)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| format!("{date} does not exist at offset {offset}"))
}

/// The explicit instant, or now.
fn instant_or_now(at: Option<DateTime<Utc>>) -> DateTime<Utc> {
    at.unwrap_or_else(|| SystemDateProvider.now())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn colorize_tier(tier: LuckTier) -> ColoredString {
    let label = tier.to_string();
    match tier {
        LuckTier::Great => label.green().bold(),
        LuckTier::Good => label.cyan(),
        LuckTier::Ok => label.yellow(),
        LuckTier::Bad => label.red().bold(),
    }
}

fn colorize_answer(answer: YesNo) -> ColoredString {
    match answer {
        YesNo::Yes => answer.to_string().green().bold(),
        YesNo::No => answer.to_string().red().bold(),
    }
}

fn colorize_key(key: FortuneLevelKey) -> ColoredString {
    let label = key.to_string();
    match key {
        FortuneLevelKey::Ultra => label.magenta().bold(),
        FortuneLevelKey::Super => label.green().bold(),
        FortuneLevelKey::Basic => label.blue(),
        FortuneLevelKey::Glitch => label.yellow(),
        FortuneLevelKey::Error => label.red().bold(),
    }
}
