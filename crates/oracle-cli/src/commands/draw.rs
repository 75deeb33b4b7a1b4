use chrono::{DateTime, Utc};
use colored::Colorize;

use super::{Options, colorize_key, instant_or_now, print_json};

pub fn run(opts: &Options, at: Option<DateTime<Utc>>) -> Result<(), String> {
    let engine = opts.engine()?;
    let draw = engine
        .draw_fortune(instant_or_now(at))
        .map_err(|e| e.to_string())?;

    if opts.json {
        return print_json(&draw);
    }

    let level = &draw.level;
    println!(
        "  {} {} {}",
        level.emoji,
        level.label.bold(),
        format!("[{}]", colorize_key(level.key)).dimmed()
    );
    if !draw.copy.is_empty() {
        println!("  {}", draw.copy);
    }
    println!(
        "  {}",
        format!("drawn {}", draw.drawn_at.to_rfc3339()).dimmed()
    );

    Ok(())
}
