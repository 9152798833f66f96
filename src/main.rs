mod app;
mod arrow;
mod canvas;
mod error;
mod face;
mod logging;
mod math;
mod state;
mod time;

use clap::Parser;
use error::ClockError;
use face::Style;
use std::path::PathBuf;
use time::{parse_start_time, StartTime};

/// An analog clock in the terminal. Nudge the hands with the Left/Right
/// arrow keys, toggle the debug overlay with `d`, reset with `r`, quit
/// with `q`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fixed start time as HH:MM (defaults to the local wall-clock time)
    #[arg(short, long, value_parser = parse_start_time)]
    time: Option<StartTime>,

    /// Face style
    #[arg(short, long, value_enum, default_value_t = Style::Classic)]
    style: Style,

    /// Show the debug overlay on startup
    #[arg(short, long)]
    debug: bool,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "clockface=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Main function
fn main() -> Result<(), ClockError> {
    let args = Args::parse();
    let _guard = logging::init_logging(args.log_file.as_deref(), &args.log_level)?;

    let (hour, minute) = args.time.unwrap_or(StartTime::Now).resolve();
    app::run(app::Config {
        hour,
        minute,
        style: args.style,
        debug: args.debug,
    })
}
