/// Capture session: one host, one classified index.
///
/// Builds the index and classifies usages on `open`, and rebuilds both
/// wholesale on `reload`. Queries borrow the index; exports borrow the host
/// and take their `ExportConfig` per call.
///
/// The index is not synchronized. Callers serialize requests against a
/// session, the way a replay thread serializes work against a capture.

use std::sync::Arc;
use crate::error::Result;
use crate::export::{CancelFlag, ExportConfig, ExportReport, TextureExporter, range_folder_name};
use crate::host::CaptureHost;
use crate::index::{ActionIndex, ClassificationSummary, TextureRole, UsageClassifier};
use crate::stats::{ActionRange, PassInfo, RangeStats, RangeSummary, scan_passes};
use crate::{stats_info, stats_warn};

const SOURCE: &str = "drawstats::CaptureSession";

pub struct CaptureSession {
    host: Arc<dyn CaptureHost>,
    index: ActionIndex,
    classification: ClassificationSummary,
}

impl CaptureSession {
    /// Index the host's action tree and classify every texture usage
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexError` if the action tree repeats an event or
    /// action id.
    pub fn open(host: Arc<dyn CaptureHost>) -> Result<Self> {
        let (index, classification) = Self::load(host.as_ref())?;
        stats_info!(SOURCE, "Opened capture '{}'", host.capture_filename());
        Ok(Self { host, index, classification })
    }

    /// Rebuild the index from the host
    ///
    /// On error the previous index is kept.
    pub fn reload(&mut self) -> Result<()> {
        let (index, classification) = Self::load(self.host.as_ref())?;
        self.index = index;
        self.classification = classification;
        Ok(())
    }

    fn load(host: &dyn CaptureHost) -> Result<(ActionIndex, ClassificationSummary)> {
        let mut index = ActionIndex::build(&host.root_actions())?;
        let classification = UsageClassifier::classify(&mut index, host);
        index.log_usage_summary();
        Ok((index, classification))
    }

    pub fn host(&self) -> &dyn CaptureHost {
        self.host.as_ref()
    }

    pub fn index(&self) -> &ActionIndex {
        &self.index
    }

    /// Counters from the last classification pass
    pub fn classification(&self) -> ClassificationSummary {
        self.classification
    }

    pub fn stats(&self) -> RangeStats<'_> {
        RangeStats::new(&self.index)
    }

    pub fn summarize(&self, range: ActionRange) -> RangeSummary {
        self.stats().summarize(range)
    }

    pub fn passes(&self) -> Vec<PassInfo> {
        scan_passes(&self.index)
    }

    /// Export the textures of `role` used in `range`
    ///
    /// Files go to `<root>/<capture stem>_<start>_<end>`, one per texture
    /// slice, named after the resource id.
    pub fn export_range_textures(
        &self,
        range: ActionRange,
        role: TextureRole,
        config: &ExportConfig,
        cancel: Option<&CancelFlag>,
    ) -> ExportReport {
        let ids = self.stats().texture_set_in_range(range, role).sorted_ids();
        let folder = range_folder_name(&self.host.capture_filename(), range);
        stats_info!(SOURCE, "Exporting {} textures of range {}", ids.len(), range);
        TextureExporter::new(self.host.as_ref(), config).export_textures(&ids, &folder, cancel)
    }

    /// Export the input textures of one action into a folder named after its event
    ///
    /// Returns `None` if `action_id` is not indexed.
    pub fn export_action_textures(
        &self,
        action_id: u32,
        config: &ExportConfig,
        cancel: Option<&CancelFlag>,
    ) -> Option<ExportReport> {
        let Some(event_id) = self.index.event_id_for_action(action_id) else {
            stats_warn!(SOURCE, "Action {} is not indexed, nothing to export", action_id);
            return None;
        };
        let exporter = TextureExporter::new(self.host.as_ref(), config);
        Some(exporter.export_action_textures(&self.index, event_id, cancel))
    }

    /// Export every shader-read texture of the capture into `folder_name`
    pub fn export_all_textures(
        &self,
        config: &ExportConfig,
        folder_name: &str,
        cancel: Option<&CancelFlag>,
    ) -> ExportReport {
        TextureExporter::new(self.host.as_ref(), config).export_capture_textures(folder_name, cancel)
    }
}

#[cfg(test)]
#[path = "capture_session_tests.rs"]
mod tests;
