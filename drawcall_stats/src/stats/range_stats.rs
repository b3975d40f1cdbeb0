/// Range statistics over an action index.
///
/// Every query takes an inclusive action-id range, translates both ends to
/// event ids, and aggregates over every indexed action in that event span.
/// An endpoint missing from the index yields the empty/zero result.

use std::fmt;
use rustc_hash::FxHashMap;
use crate::index::{ActionIndex, ActionRecord, TextureRole, TextureSet};
use super::range_summary::RangeSummary;

/// Inclusive range of action ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionRange {
    pub start: u32,
    pub end: u32,
}

impl ActionRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of action ids covered (`end - start + 1`, 0 if reversed)
    pub fn action_count(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as u64 + 1
        }
    }
}

impl fmt::Display for ActionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// One histogram bucket: `(width, height)` and number of distinct textures
pub type ResolutionCount = ((u32, u32), usize);

/// Query layer borrowing a classified index
#[derive(Clone, Copy)]
pub struct RangeStats<'a> {
    index: &'a ActionIndex,
}

impl<'a> RangeStats<'a> {
    pub fn new(index: &'a ActionIndex) -> Self {
        Self { index }
    }

    /// Actions in the event span of `range`, empty if an endpoint is unknown
    fn actions_in_range(&self, range: ActionRange) -> &'a [ActionRecord] {
        let start = self.index.event_id_for_action(range.start);
        let end = self.index.event_id_for_action(range.end);
        match (start, end) {
            (Some(start_event), Some(end_event)) => self.index.event_span(start_event, end_event),
            _ => &[],
        }
    }

    /// Union of the input (or output) textures of every action in range
    pub fn texture_set_in_range(&self, range: ActionRange, role: TextureRole) -> TextureSet {
        let mut result = TextureSet::new();
        for action in self.actions_in_range(range) {
            result.extend_from(action.textures(role));
        }
        result
    }

    /// Sum of triangle counts in range
    pub fn mesh_count_in_range(&self, range: ActionRange) -> u64 {
        self.actions_in_range(range).iter().map(|a| a.mesh_count()).sum()
    }

    /// Number of distinct textures in range
    pub fn distinct_texture_count(&self, range: ActionRange, role: TextureRole) -> usize {
        self.texture_set_in_range(range, role).len()
    }

    /// Distinct textures grouped by resolution, largest area first
    ///
    /// Ties on area are ordered by width, then height, both descending, so
    /// the result is fully determined by the texture set.
    pub fn resolution_histogram(&self, range: ActionRange, role: TextureRole) -> Vec<ResolutionCount> {
        let textures = self.texture_set_in_range(range, role);

        let mut counts: FxHashMap<(u32, u32), usize> = FxHashMap::default();
        for texture in textures.iter() {
            *counts.entry(texture.resolution()).or_insert(0) += 1;
        }

        let mut histogram: Vec<ResolutionCount> = counts.into_iter().collect();
        histogram.sort_unstable_by(|((wa, ha), _), ((wb, hb), _)| {
            let area_a = *wa as u64 * *ha as u64;
            let area_b = *wb as u64 * *hb as u64;
            area_b.cmp(&area_a)
                .then(wb.cmp(wa))
                .then(hb.cmp(ha))
        });
        histogram
    }

    /// Headline numbers for `range`
    pub fn summarize(&self, range: ActionRange) -> RangeSummary {
        RangeSummary::compute(self, range)
    }
}

#[cfg(test)]
#[path = "range_stats_tests.rs"]
mod tests;
