//! Error types for drawcall statistics
//!
//! This module defines the error types used while indexing a capture,
//! talking to the capture host, and exporting textures.
//!
//! Missing lookups and policy skips are not errors: they are reported as
//! `None`, empty results, or `ExportOutcome::Skipped`.

use std::fmt;

/// Result type for drawcall statistics operations
pub type Result<T> = std::result::Result<T, Error>;

/// Drawcall statistics errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The action tree violates its integrity contract (revisited node)
    IndexError(String),

    /// Filesystem failure (destination directory could not be created)
    IoError(String),

    /// The capture host failed an operation (e.g. saving a texture file)
    HostError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexError(msg) => write!(f, "Index error: {}", msg),
            Error::IoError(msg) => write!(f, "I/O error: {}", msg),
            Error::HostError(msg) => write!(f, "Host error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}

// ===== ERROR MACROS =====

/// Build an `Error` variant and log it at ERROR severity with file:line
///
/// # Example
///
/// ```ignore
/// let err = stats_err!("drawstats::ActionIndex", IndexError, "event {} visited twice", eid);
/// ```
#[macro_export]
macro_rules! stats_err {
    ($source:expr, $kind:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::drawstats::Engine::log_detailed(
            $crate::drawstats::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::drawstats::Error::$kind(message)
    }};
}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```ignore
/// stats_bail!("drawstats::ActionIndex", IndexError, "action {} visited twice", aid);
/// ```
#[macro_export]
macro_rules! stats_bail {
    ($source:expr, $kind:ident, $($arg:tt)*) => {
        return Err($crate::stats_err!($source, $kind, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
