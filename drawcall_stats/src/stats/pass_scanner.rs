/// Pass scanner: splits the work actions of a capture into render passes.
///
/// Walks leaf, non-marker actions in event order. A clear that follows
/// non-clear work closes the current pass and opens the next one; clears
/// batched at the start of a pass stay in that pass.

use crate::host::ActionFlags;
use crate::index::ActionIndex;
use crate::stats_debug;

const SOURCE: &str = "drawstats::PassScanner";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassInfo {
    /// Pass number, from 0
    pub index: usize,
    /// Event that opens the pass
    pub first_event_id: u32,
    /// Non-clear actions in the pass
    pub action_count: usize,
}

pub fn scan_passes(index: &ActionIndex) -> Vec<PassInfo> {
    let mut passes = Vec::new();
    let mut current: Option<PassInfo> = None;
    let mut in_pass = false;

    for action in index.iter().filter(|a| a.is_work()) {
        let is_clear = action.flags().contains(ActionFlags::CLEAR);

        let pass = current.get_or_insert(PassInfo {
            index: 0,
            first_event_id: action.event_id(),
            action_count: 0,
        });

        if is_clear {
            if in_pass {
                stats_debug!(SOURCE, "Pass #{} contained {} actions", pass.index, pass.action_count);
                let next = PassInfo {
                    index: pass.index + 1,
                    first_event_id: action.event_id(),
                    action_count: 0,
                };
                passes.push(*pass);
                *pass = next;
                in_pass = false;
            }
        } else {
            pass.action_count += 1;
            in_pass = true;
        }
    }

    if let Some(pass) = current {
        if in_pass {
            stats_debug!(SOURCE, "Pass #{} contained {} actions", pass.index, pass.action_count);
            passes.push(pass);
        }
    }

    passes
}

#[cfg(test)]
#[path = "pass_scanner_tests.rs"]
mod tests;
