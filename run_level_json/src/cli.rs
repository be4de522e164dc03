use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Loads a level and prints what the player sees, as ASCII art.
#[derive(Parser)]
#[command(name = "run_level_json")]
pub struct Args {
    /// Level JSON to load, the default level is used if the file doesn't exist
    #[arg(default_value = "level.json")]
    pub level: String,

    /// Number of rays cast, one per character column
    #[arg(long, default_value = "120")]
    pub columns: usize,

    /// Height of the view, in characters
    #[arg(long, default_value = "36")]
    pub rows: usize,

    /// Rays stop after travelling this far, bounces included
    #[arg(long, default_value = "20")]
    pub max_distance: f64,

    /// Walk this far forward (backward if negative) before looking
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub forward: f64,

    /// Turn by this many radians before walking
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub turn: f64,

    /// Also print a top-down map of the level
    #[arg(long)]
    pub minimap: bool,

    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}
