use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "lumapath")]
#[command(about = "A small physically-based path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 2000, help = "Image width in pixels")]
    pub width: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 20, help = "Number of samples per pixel")]
    pub samples: u32,

    /// Maximum ray bounce depth
    #[arg(long, default_value_t = 15, help = "Maximum ray bounce depth")]
    pub depth: u32,

    /// Output file prefix
    #[arg(
        long,
        short = 'o',
        default_value = "render",
        help = "Output file prefix (writes <out>.ppm and <out>.png)"
    )]
    pub out: String,

    /// Seed for the deterministic per-pixel random streams
    #[arg(long, default_value_t = 0, help = "Seed for the per-pixel random streams")]
    pub seed: u64,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}
