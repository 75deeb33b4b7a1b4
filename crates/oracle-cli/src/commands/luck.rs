use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use oracle_core::LuckMetric;

use super::{Options, colorize_tier, instant_for_date, instant_or_now, print_json};

pub fn run(opts: &Options, date: Option<NaiveDate>) -> Result<(), String> {
    let engine = opts.engine()?;
    let at = match date {
        Some(date) => instant_for_date(date, opts.offset)?,
        None => instant_or_now(None),
    };
    let luck = engine.daily_luck(at);

    if opts.json {
        return print_json(&luck);
    }

    println!("  {} for {}", "Daily Luck".bold(), luck.date);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Tier", "Rank"]);
    for metric in LuckMetric::ALL {
        let tier = luck.tier(metric);
        table.add_row(vec![
            metric.to_string(),
            colorize_tier(tier).to_string(),
            tier.rank().to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
