//! Logging for drawcall statistics
//!
//! - Replaceable logger via the `Logger` trait (see `Engine::set_logger`)
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information on ERROR entries

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route entries elsewhere (host console, file, tests).
///
/// # Example
///
/// ```no_run
/// use drawcall_stats::drawstats::log::{Logger, LogEntry};
///
/// struct HostConsoleLogger;
///
/// impl Logger for HostConsoleLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "drawstats::ActionIndex", "drawstats::TextureExporter")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-action and per-file chatter
    Trace,

    /// Development/debugging information
    Debug,

    /// Index builds, export summaries
    Info,

    /// Suspicious host data, skipped work
    Warn,

    /// Failures, logged with file:line
    Error,
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```ignore
/// stats_trace!("drawstats::ActionIndex", "visiting event {}", eid);
/// ```
#[macro_export]
macro_rules! stats_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::drawstats::Engine::log(
            $crate::drawstats::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! stats_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::drawstats::Engine::log(
            $crate::drawstats::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// ```ignore
/// stats_info!("drawstats::ActionIndex", "Indexed {} actions", count);
/// ```
#[macro_export]
macro_rules! stats_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::drawstats::Engine::log(
            $crate::drawstats::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! stats_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::drawstats::Engine::log(
            $crate::drawstats::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```ignore
/// stats_error!("drawstats::TextureExporter", "Failed to save {}: {}", path, err);
/// ```
#[macro_export]
macro_rules! stats_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::drawstats::Engine::log_detailed(
            $crate::drawstats::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
