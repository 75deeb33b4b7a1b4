use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use oracle_core::{LuckMetric, LuckTier, YesNo};

use super::{Options, colorize_key, colorize_tier, instant_for_date, instant_or_now, print_json};

pub fn run(opts: &Options, from: Option<NaiveDate>, days: u32) -> Result<(), String> {
    if days == 0 {
        return Err("--days must be at least 1".into());
    }
    let engine = opts.engine()?;
    let start = match from {
        Some(date) => instant_for_date(date, opts.offset)?,
        None => instant_or_now(None),
    };

    // Fail before sampling if the run ends past the calendar's range.
    nth_day(start, days - 1)?;

    let mut tiers: HashMap<LuckTier, usize> = HashMap::new();
    let mut levels = HashMap::new();
    let mut yes = 0usize;

    for day in 0..days {
        let at = nth_day(start, day)?;
        let luck = engine.daily_luck(at);
        for metric in LuckMetric::ALL {
            *tiers.entry(luck.tier(metric)).or_default() += 1;
        }
        let draw = engine.draw_fortune(at).map_err(|e| e.to_string())?;
        *levels.entry(draw.level.key).or_insert(0usize) += 1;
        if engine.decide_yes_no(None, at).result == YesNo::Yes {
            yes += 1;
        }
    }

    let samples = f64::from(days);
    let tier_samples = samples * LuckMetric::ALL.len() as f64;
    let share = |count: usize, total: f64| count as f64 / total;

    if opts.json {
        let tier_json: serde_json::Map<_, _> = LuckTier::ALL
            .iter()
            .map(|tier| {
                let count = tiers.get(tier).copied().unwrap_or(0);
                (tier.to_string(), json!(share(count, tier_samples)))
            })
            .collect();
        let level_json: Vec<_> = engine
            .levels()
            .levels
            .iter()
            .map(|level| {
                let count = levels.get(&level.key).copied().unwrap_or(0);
                json!({
                    "key": level.key,
                    "configured": level.probability,
                    "observed": share(count, samples),
                })
            })
            .collect();
        return print_json(&json!({
            "days": days,
            "tiers": tier_json,
            "levels": level_json,
            "yes_share": share(yes, samples),
        }));
    }

    println!(
        "  {} over {days} days from {}",
        "Distribution".bold(),
        start.with_timezone(&opts.offset).date_naive()
    );
    println!();

    let mut tier_table = Table::new();
    tier_table.set_content_arrangement(ContentArrangement::Dynamic);
    tier_table.set_header(vec!["Tier", "Count", "Observed"]);
    for tier in LuckTier::ALL {
        let count = tiers.get(&tier).copied().unwrap_or(0);
        tier_table.add_row(vec![
            colorize_tier(tier).to_string(),
            count.to_string(),
            format!("{:.1}%", share(count, tier_samples) * 100.0),
        ]);
    }
    println!("{tier_table}");

    let mut level_table = Table::new();
    level_table.set_content_arrangement(ContentArrangement::Dynamic);
    level_table.set_header(vec!["Level", "Count", "Observed", "Configured"]);
    for level in &engine.levels().levels {
        let count = levels.get(&level.key).copied().unwrap_or(0);
        level_table.add_row(vec![
            colorize_key(level.key).to_string(),
            count.to_string(),
            format!("{:.1}%", share(count, samples) * 100.0),
            format!("{:.1}%", level.probability * 100.0),
        ]);
    }
    println!("{level_table}");

    println!(
        "  Unasked decisions: {:.1}% yes",
        share(yes, samples) * 100.0
    );

    Ok(())
}

/// The instant `day` days after `start`.
fn nth_day(start: DateTime<Utc>, day: u32) -> Result<DateTime<Utc>, String> {
    start
        .checked_add_signed(Duration::days(i64::from(day)))
        .ok_or_else(|| format!("day {day} after {start} is past the supported date range"))
}
