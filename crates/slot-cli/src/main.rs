//! `slots` CLI — list meeting slots that every participant has free.
//!
//! ## Usage
//!
//! ```sh
//! # 30-minute slots for everyone in samples/source.json
//! slots 30
//!
//! # Read participants from another file
//! slots 45 -i team.json
//!
//! # Show debug logs on stderr (RUST_LOG is honored otherwise)
//! slots 30 --verbose
//! ```

use anyhow::{Context, Result};
use chrono::Duration;
use clap::Parser;
use slot_engine::{load_participants, suggest, Interval, Participant};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Longest meeting that may be requested, in minutes.
const MAX_MEETING_MINUTES: i64 = 120;

/// Source file read when `--input` is not given.
const DEFAULT_SOURCE: &str = "samples/source.json";

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Suggest meeting slots shared by every participant"
)]
struct Cli {
    /// Meeting duration in minutes (1-120)
    #[arg(allow_negative_numbers = true)]
    duration: Option<String>,

    /// JSON file with one record per participant
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    input: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    // Bad arguments and unreadable sources print a message and exit cleanly.
    let minutes = match parse_duration(cli.duration.as_deref()) {
        Ok(minutes) => minutes,
        Err(message) => {
            println!("{}", message);
            return Ok(());
        }
    };

    let participants = match read_participants(&cli.input) {
        Ok(participants) => participants,
        Err(err) => {
            tracing::debug!(path = %cli.input.display(), "failed to load participants");
            println!("{:#}", err);
            return Ok(());
        }
    };
    tracing::debug!(count = participants.len(), "loaded participants");

    let slots = suggest(Duration::minutes(minutes), &participants);
    print!("{}", render_slots(&slots));

    Ok(())
}

/// Validate the duration argument, returning the message to show on failure.
fn parse_duration(raw: Option<&str>) -> std::result::Result<i64, &'static str> {
    let raw = raw.ok_or("duration argument missing")?;
    let minutes: i64 = raw
        .trim()
        .parse()
        .map_err(|_| "Please introduce a valid duration number.")?;

    if minutes > MAX_MEETING_MINUTES {
        return Err("Sorry. The maximum meeting duration must be two hours.");
    }
    if minutes <= 0 {
        return Err("duration must be greater than zero");
    }
    Ok(minutes)
}

fn read_participants(path: &Path) -> Result<Vec<Participant>> {
    let json = std::fs::read_to_string(path).context("error reading users source file")?;
    load_participants(&json).context("error creating users from source file")
}

/// One `{HH:MM, HH:MM}` line per slot, or a notice when there are none.
fn render_slots(slots: &[Interval]) -> String {
    if slots.is_empty() {
        return "No possible meeting slots between users.\n".to_string();
    }
    slots.iter().map(|slot| format!("{}\n", slot)).collect()
}
