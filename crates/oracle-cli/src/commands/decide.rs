use chrono::{DateTime, Utc};
use colored::Colorize;

use super::{Options, colorize_answer, instant_or_now, print_json};

pub fn run(opts: &Options, question: Option<&str>, at: Option<DateTime<Utc>>) -> Result<(), String> {
    let engine = opts.engine()?;
    let decision = engine.decide_yes_no(question, instant_or_now(at));

    if opts.json {
        return print_json(&decision);
    }

    match &decision.question {
        Some(q) => println!("  {} {q}", "Q:".dimmed()),
        None => println!("  {}", "(no question)".dimmed()),
    }
    println!("  {} {}", "A:".dimmed(), colorize_answer(decision.result));
    println!(
        "  {}",
        format!("asked {}", decision.decided_at.to_rfc3339()).dimmed()
    );

    Ok(())
}
