/// Usage classifier: attaches textures to the actions that read or write them.
///
/// Each texture's usage records are mapped to a role (see
/// `ResourceUsage::role`) and the texture is added to the matching set of
/// the action owning the event. Sets are keyed by resource id, so running
/// the classifier twice or in a different order yields the same sets.

use std::sync::Arc;
use crate::host::{CaptureHost, EventUsage, UsageRole};
use crate::{stats_debug, stats_info, stats_warn};
use super::action_index::ActionIndex;
use super::action_record::TextureRole;
use super::texture_set::TextureRecord;

const SOURCE: &str = "drawstats::UsageClassifier";

/// Counters from one classification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassificationSummary {
    /// Textures whose usages were read
    pub textures: usize,
    /// Texture ids the host could not describe
    pub unknown_textures: usize,
    /// Usage records read
    pub usage_records: usize,
    /// New input memberships
    pub inputs_attached: usize,
    /// New output memberships
    pub outputs_attached: usize,
    /// Records of an untracked kind
    pub ignored_usages: usize,
    /// Records whose event has no action (markers, filtered regions)
    pub unmatched_usages: usize,
}

pub struct UsageClassifier;

impl UsageClassifier {
    /// Classify every texture resource the host knows about
    pub fn classify(index: &mut ActionIndex, host: &dyn CaptureHost) -> ClassificationSummary {
        let mut summary = ClassificationSummary::default();

        for id in host.texture_resources() {
            let Some(description) = host.texture_description(id) else {
                stats_warn!(SOURCE, "Texture {} has no description, skipping its usages", id);
                summary.unknown_textures += 1;
                continue;
            };
            let record = Arc::new(TextureRecord::new(id, description));
            let usages = host.resource_usage(id);
            Self::classify_usages(index, &record, &usages, &mut summary);
            summary.textures += 1;
        }

        stats_info!(SOURCE,
            "Classified {} textures: {} input and {} output memberships",
            summary.textures, summary.inputs_attached, summary.outputs_attached);

        summary
    }

    /// Attach one texture according to its usage records
    pub fn classify_usages(
        index: &mut ActionIndex,
        record: &Arc<TextureRecord>,
        usages: &[EventUsage],
        summary: &mut ClassificationSummary,
    ) {
        for usage in usages {
            summary.usage_records += 1;

            let role = match usage.usage.role() {
                UsageRole::Input => TextureRole::Input,
                UsageRole::Output => TextureRole::Output,
                UsageRole::Other => {
                    summary.ignored_usages += 1;
                    continue;
                }
            };

            let Some(action) = index.action_by_event_mut(usage.event_id) else {
                stats_debug!(SOURCE,
                    "Usage of texture {} at event {} has no action",
                    record.resource_id, usage.event_id);
                summary.unmatched_usages += 1;
                continue;
            };

            if action.textures_mut(role).insert(record.clone()) {
                match role {
                    TextureRole::Input => summary.inputs_attached += 1,
                    TextureRole::Output => summary.outputs_attached += 1,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "usage_classifier_tests.rs"]
mod tests;
