/// Action index: the flattened, queryable form of the host action tree.
///
/// Records are stored in event order with two lookup tables (event id and
/// action id). The index is built once per capture load and rebuilt
/// wholesale on reload; it is not safe for concurrent mutation.

use rustc_hash::{FxHashMap, FxHashSet};
use crate::error::Result;
use crate::host::ActionDescription;
use crate::{stats_bail, stats_debug, stats_info, stats_warn};
use super::action_record::{ActionRecord, TextureRole};
use super::texture_set::TextureSet;

const SOURCE: &str = "drawstats::ActionIndex";

#[derive(Debug, Clone, Default)]
pub struct ActionIndex {
    /// Records sorted by event id
    records: Vec<ActionRecord>,
    /// Event id -> slot in `records`
    by_event: FxHashMap<u32, usize>,
    /// Action id -> slot in `records`
    by_action: FxHashMap<u32, usize>,
}

impl ActionIndex {
    /// Build the index from a forest of root actions
    ///
    /// Visits every node once in depth-first pre-order using an explicit
    /// stack, so deep marker hierarchies do not grow the call stack.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexError` if an event id or action id is reached
    /// twice. The host tree must be acyclic with unique ids.
    pub fn build(roots: &[ActionDescription]) -> Result<Self> {
        let mut visited_events = FxHashSet::default();
        let mut visited_actions = FxHashSet::default();
        let mut records = Vec::new();

        let mut stack: Vec<&ActionDescription> = roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if !visited_events.insert(node.event_id) {
                stats_bail!(SOURCE, IndexError,
                    "Event {} reached twice (action {}); action tree is cyclic or has duplicate ids",
                    node.event_id, node.action_id);
            }
            if !visited_actions.insert(node.action_id) {
                stats_bail!(SOURCE, IndexError,
                    "Action {} reached twice (event {}); action tree is cyclic or has duplicate ids",
                    node.action_id, node.event_id);
            }

            records.push(ActionRecord::from_description(node));
            stack.extend(node.children.iter().rev());
        }

        Self::warn_if_unordered(&records);

        records.sort_by_key(|r| r.event_id());
        let mut by_event = FxHashMap::default();
        let mut by_action = FxHashMap::default();
        by_event.reserve(records.len());
        by_action.reserve(records.len());
        for (slot, record) in records.iter().enumerate() {
            by_event.insert(record.event_id(), slot);
            by_action.insert(record.action_id(), slot);
        }

        stats_info!(SOURCE, "Indexed {} actions", records.len());

        Ok(Self { records, by_event, by_action })
    }

    /// Range queries assume action order matches event order
    fn warn_if_unordered(records: &[ActionRecord]) {
        let mut pairs: Vec<(u32, u32)> = records
            .iter()
            .map(|r| (r.action_id(), r.event_id()))
            .collect();
        pairs.sort_unstable();
        if let Some(w) = pairs.windows(2).find(|w| w[0].1 > w[1].1) {
            stats_warn!(SOURCE,
                "Action {} (event {}) precedes action {} (event {}); action ranges may be inaccurate",
                w[0].0, w[0].1, w[1].0, w[1].1);
        }
    }

    /// Number of indexed actions
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in event order
    pub fn iter(&self) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.records.iter()
    }

    pub fn action_by_id(&self, action_id: u32) -> Option<&ActionRecord> {
        self.by_action.get(&action_id).map(|&slot| &self.records[slot])
    }

    pub fn action_by_event(&self, event_id: u32) -> Option<&ActionRecord> {
        self.by_event.get(&event_id).map(|&slot| &self.records[slot])
    }

    pub(crate) fn action_by_event_mut(&mut self, event_id: u32) -> Option<&mut ActionRecord> {
        match self.by_event.get(&event_id) {
            Some(&slot) => self.records.get_mut(slot),
            None => None,
        }
    }

    pub fn event_id_for_action(&self, action_id: u32) -> Option<u32> {
        self.action_by_id(action_id).map(|r| r.event_id())
    }

    pub fn action_id_for_event(&self, event_id: u32) -> Option<u32> {
        self.action_by_event(event_id).map(|r| r.action_id())
    }

    /// Texture set of the action at `event_id`
    pub fn textures_by_event(&self, event_id: u32, role: TextureRole) -> Option<&TextureSet> {
        self.action_by_event(event_id).map(|r| r.textures(role))
    }

    /// Texture set of the action `action_id`
    pub fn textures_by_action(&self, action_id: u32, role: TextureRole) -> Option<&TextureSet> {
        self.action_by_id(action_id).map(|r| r.textures(role))
    }

    pub fn inputs_by_event(&self, event_id: u32) -> Option<&TextureSet> {
        self.textures_by_event(event_id, TextureRole::Input)
    }

    pub fn inputs_by_action(&self, action_id: u32) -> Option<&TextureSet> {
        self.textures_by_action(action_id, TextureRole::Input)
    }

    pub fn outputs_by_event(&self, event_id: u32) -> Option<&TextureSet> {
        self.textures_by_event(event_id, TextureRole::Output)
    }

    pub fn outputs_by_action(&self, action_id: u32) -> Option<&TextureSet> {
        self.textures_by_action(action_id, TextureRole::Output)
    }

    /// Records whose event id lies in `[start_event, end_event]`
    ///
    /// Empty if `start_event > end_event`.
    pub fn event_span(&self, start_event: u32, end_event: u32) -> &[ActionRecord] {
        if start_event > end_event {
            return &[];
        }
        let lo = self.records.partition_point(|r| r.event_id() < start_event);
        let hi = self.records.partition_point(|r| r.event_id() <= end_event);
        &self.records[lo..hi]
    }

    /// Log input/output texture ids of every event (DEBUG)
    pub fn log_usage_summary(&self) {
        for record in &self.records {
            let inputs = record.input_textures().sorted_ids();
            let outputs = record.output_textures().sorted_ids();
            stats_debug!(SOURCE,
                "eventId {} Inputs: {} {:?} | Outputs: {} {:?}",
                record.event_id(),
                inputs.len(), inputs.iter().map(|id| id.value()).collect::<Vec<_>>(),
                outputs.len(), outputs.iter().map(|id| id.value()).collect::<Vec<_>>());
        }
    }
}

#[cfg(test)]
#[path = "action_index_tests.rs"]
mod tests;
