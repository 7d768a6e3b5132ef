//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::cli::output::OutputFormat;
use crate::core::{CalendarDate, Clock, FixedClock, SystemClock};
use crate::input::parse_calendar_date;
use clap::Parser;

/// Larder: interactive food inventory tracker.
///
/// Keeps track of fridge shelves and freezer positions, and reports which
/// items are past their use-by date.
#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Treat this date (YYYY-MM-DD) as today.
    ///
    /// Defaults to the local date, read again for every menu action.
    #[arg(long, env = "LARDER_TODAY", value_parser = parse_calendar_date)]
    pub today: Option<CalendarDate>,

    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for query results (text, json).
    #[arg(long, default_value = "text", env = "LARDER_FORMAT")]
    pub format: OutputFormat,
}

impl Cli {
    /// Returns the clock the session should use.
    #[must_use]
    pub fn clock(&self) -> Box<dyn Clock> {
        self.today.map_or_else(
            || Box::new(SystemClock) as Box<dyn Clock>,
            |today| Box::new(FixedClock(today)),
        )
    }
}
