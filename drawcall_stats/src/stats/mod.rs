//! Statistics module
//!
//! Read-only aggregate queries over a classified `ActionIndex`.

mod range_stats;
mod range_summary;
mod pass_scanner;

pub use range_stats::{ActionRange, RangeStats, ResolutionCount};
pub use range_summary::RangeSummary;
pub use pass_scanner::{PassInfo, scan_passes};
pub use crate::index::TextureRole;
