//! CLI frontend for the deterministic oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "oracle",
    about = "Deterministic oracle: daily luck, yes/no decisions, and fortune draws",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the commands that consult the oracle.
#[derive(Args, Clone)]
struct CommonArgs {
    /// UTC offset whose calendar decides the day (e.g. +08:00)
    #[arg(long, default_value = "+00:00", value_parser = commands::parse_offset)]
    offset: FixedOffset,

    /// Fortune levels JSON file (default: $ORACLE_FORTUNE_LEVELS or the bundled table)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the luck reading for a day
    Luck {
        /// Day to read (YYYY-MM-DD, default: today)
        #[arg(short, long, value_parser = commands::parse_date)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Ask a yes/no question
    Decide {
        /// The question (may be omitted)
        question: Option<String>,

        /// When the question is asked (RFC 3339, default: now)
        #[arg(long, value_parser = commands::parse_instant)]
        at: Option<DateTime<Utc>>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Draw a fortune stick
    Draw {
        /// When the stick is drawn (RFC 3339, default: now)
        #[arg(long, value_parser = commands::parse_instant)]
        at: Option<DateTime<Utc>>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Validate and list the fortune level table
    Levels {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Compare sampled frequencies over a run of days with the configured weights
    Stats {
        /// First day of the run (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = commands::parse_date)]
        from: Option<NaiveDate>,

        /// Number of consecutive days to sample
        #[arg(short = 'n', long, default_value = "3650")]
        days: u32,

        #[command(flatten)]
        common: CommonArgs,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Luck { date, common } => commands::luck::run(&common.into(), date),
        Commands::Decide {
            question,
            at,
            common,
        } => commands::decide::run(&common.into(), question.as_deref(), at),
        Commands::Draw { at, common } => commands::draw::run(&common.into(), at),
        Commands::Levels { common } => commands::levels::run(&common.into()),
        Commands::Stats { from, days, common } => commands::stats::run(&common.into(), from, days),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<CommonArgs> for commands::Options {
    fn from(args: CommonArgs) -> Self {
        Self {
            offset: args.offset,
            config: args.config,
            json: args.json,
        }
    }
}
