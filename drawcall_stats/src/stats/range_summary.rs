/// Human-readable summary of an action range.

use std::fmt;
use super::range_stats::{ActionRange, RangeStats, ResolutionCount};
use crate::index::TextureRole;

/// Headline numbers for a range, as shown in the statistics panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSummary {
    pub range: ActionRange,
    /// Triangles drawn by indexed drawcalls
    pub mesh_count: u64,
    /// Distinct input textures
    pub texture_count: usize,
    /// Action ids covered by the range
    pub action_count: u64,
    /// Input textures by resolution, largest first
    pub resolutions: Vec<ResolutionCount>,
}

impl RangeSummary {
    pub fn compute(stats: &RangeStats<'_>, range: ActionRange) -> Self {
        let textures = stats.texture_set_in_range(range, TextureRole::Input);
        Self {
            range,
            mesh_count: stats.mesh_count_in_range(range),
            texture_count: textures.len(),
            action_count: range.action_count(),
            resolutions: stats.resolution_histogram(range, TextureRole::Input),
        }
    }
}

impl fmt::Display for RangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Triangles: {}     Textures: {}     Drawcalls: {}",
            self.mesh_count, self.texture_count, self.action_count)?;
        writeln!(f, "Texture resolutions:")?;
        for ((width, height), count) in &self.resolutions {
            writeln!(f, "   {}x{}: {}", width, height, count)?;
        }
        Ok(())
    }
}
