//! Level-filtered console output for status reporting.
//!
//! Library code emits `tracing` events; this module is the user-facing
//! status channel the tooling prints through. Messages below the
//! process-wide threshold are suppressed.

use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use owo_colors::OwoColorize;

static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Severity threshold for console output.
///
/// Variants are ordered from quietest to loudest: a message prints when its
/// severity is equal to or below the configured threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No console output
    Silent,
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Errors, warnings, and info (default)
    #[default]
    Info,
    /// Everything, including verbose status
    Verbose,
}

impl LogLevel {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Silent => "silent",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Verbose => "verbose",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "verbose" => Ok(LogLevel::Verbose),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set the process-wide console threshold.
pub fn set_level(level: LogLevel) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// The currently configured console threshold.
pub fn level() -> LogLevel {
    match LEVEL.load(Ordering::Relaxed) {
        0 => LogLevel::Silent,
        1 => LogLevel::Error,
        2 => LogLevel::Warn,
        3 => LogLevel::Info,
        _ => LogLevel::Verbose,
    }
}

/// Whether a message of `severity` passes `threshold`.
fn permits(threshold: LogLevel, severity: LogLevel) -> bool {
    severity <= threshold
}

/// Print an error message (red) to stderr unless suppressed.
pub fn error(message: &str) {
    if permits(level(), LogLevel::Error) {
        eprintln!("{}", message.red());
    }
}

/// Print a warning message (yellow) to stderr unless suppressed.
pub fn warn(message: &str) {
    if permits(level(), LogLevel::Warn) {
        eprintln!("{}", message.yellow());
    }
}

/// Print an info message to stderr unless suppressed.
pub fn info(message: &str) {
    if permits(level(), LogLevel::Info) {
        eprintln!("{}", message);
    }
}

/// Print a verbose status message (blue) to stderr unless suppressed.
pub fn verbose(message: &str) {
    if permits(level(), LogLevel::Verbose) {
        eprintln!("{}", message.blue());
    }
}
