use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{Options, colorize_key, print_json};

pub fn run(opts: &Options) -> Result<(), String> {
    let loader = opts.engine_config().loader();
    let config = loader.load().map_err(|e| e.to_string())?;

    if opts.json {
        return print_json(&config);
    }

    let source = loader
        .path()
        .map_or_else(|| "bundled".to_string(), |p| p.display().to_string());
    println!(
        "  {} v{} ({}) {}",
        "Fortune Levels".bold(),
        config.version,
        config.locale,
        format!("from {source}").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Label", "Weight", "Copies", "Haptics"]);
    for level in &config.levels {
        table.add_row(vec![
            colorize_key(level.key).to_string(),
            format!("{} {}", level.emoji, level.label),
            format!("{:.2}%", level.probability * 100.0),
            level.copy_examples.len().to_string(),
            level.haptics.clone(),
        ]);
    }
    println!("{table}");

    println!(
        "  {} {} levels, weights sum to {:.6}",
        "OK".green().bold(),
        config.levels.len(),
        config.probability_sum()
    );
    if let Some(note) = &config.distribution_note {
        println!("  {}", note.dimmed());
    }

    Ok(())
}
