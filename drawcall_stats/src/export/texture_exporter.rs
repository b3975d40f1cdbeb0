/// Texture exporter: runs export plans against the capture host.
///
/// For each texture: plan, create `<root>/<folder>`, then ask the host to
/// save every planned file. A directory failure abandons that texture only;
/// a failed save is recorded and the remaining files are still attempted.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::error::Error;
use crate::host::{CaptureHost, ResourceId, UsageRole};
use crate::index::ActionIndex;
use crate::stats::ActionRange;
use crate::{stats_debug, stats_err, stats_error, stats_info, stats_trace};
use super::export_config::ExportConfig;
use super::export_plan::plan_texture_export;
use super::export_report::{ExportOutcome, ExportReport, FileFailure, TextureExport};

const SOURCE: &str = "drawstats::TextureExporter";

/// Cooperative cancellation, checked between textures of a batch
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Folder name for a range export: `<capture file stem>_<start>_<end>`
pub fn range_folder_name(capture_filename: &str, range: ActionRange) -> String {
    let stem = Path::new(capture_filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "capture".to_string());
    format!("{}_{}_{}", stem, range.start, range.end)
}

pub struct TextureExporter<'a> {
    host: &'a dyn CaptureHost,
    config: &'a ExportConfig,
}

impl<'a> TextureExporter<'a> {
    pub fn new(host: &'a dyn CaptureHost, config: &'a ExportConfig) -> Self {
        Self { host, config }
    }

    /// Export one texture into `<root>/<folder_name>` with file stem `stem`
    pub fn export_texture(&self, id: ResourceId, folder_name: &str, stem: &str) -> ExportOutcome {
        let description = if id.is_null() { None } else { self.host.texture_description(id) };

        let plan = match plan_texture_export(id, description.as_ref(), stem, self.config) {
            Ok(plan) => plan,
            Err(reason) => {
                stats_debug!(SOURCE, "Skipping texture {}: {}", id, reason);
                return ExportOutcome::Skipped(reason);
            }
        };

        let folder = self.config.folder_path(folder_name);
        if let Err(err) = std::fs::create_dir_all(&folder) {
            let error = Error::from(err);
            stats_error!(SOURCE, "Failed to create '{}' for texture {}: {}", folder.display(), id, error);
            return ExportOutcome::Failed { error, failures: Vec::new() };
        }

        let mut files = Vec::with_capacity(plan.files.len());
        let mut failures = Vec::new();
        for file in &plan.files {
            let path = folder.join(&file.file_name);
            match self.host.save_texture(&plan.save_request(file), &path) {
                Ok(()) => {
                    stats_trace!(SOURCE, "Saved {}", path.display());
                    files.push(path);
                }
                Err(error) => {
                    stats_error!(SOURCE, "Failed to save '{}': {}", path.display(), error);
                    failures.push(FileFailure { path, error });
                }
            }
        }

        if files.is_empty() {
            let error = stats_err!(SOURCE, HostError,
                "No file written for texture {} ({} attempted)", id, failures.len());
            return ExportOutcome::Failed { error, failures };
        }

        ExportOutcome::Exported { files, failures }
    }

    /// Export several textures into one folder, each named after its id
    ///
    /// Stops before the next texture once `cancel` is raised.
    pub fn export_textures(
        &self,
        ids: &[ResourceId],
        folder_name: &str,
        cancel: Option<&CancelFlag>,
    ) -> ExportReport {
        let mut report = ExportReport::new(self.config.folder_path(folder_name));

        for &id in ids {
            if cancel.is_some_and(|c| c.is_cancelled()) {
                stats_info!(SOURCE, "Export cancelled after {} textures", report.textures.len());
                report.cancelled = true;
                break;
            }
            let outcome = self.export_texture(id, folder_name, &id.value().to_string());
            report.textures.push(TextureExport { resource_id: id, outcome });
        }

        stats_info!(SOURCE, "{} ({} skipped, {} failed)",
            report.summary(), report.skipped_count(), report.failed_count());
        report
    }

    /// Export every texture of the capture that some shader stage reads
    pub fn export_capture_textures(&self, folder_name: &str, cancel: Option<&CancelFlag>) -> ExportReport {
        let ids: Vec<ResourceId> = self
            .host
            .texture_resources()
            .into_iter()
            .filter(|&id| {
                self.host
                    .resource_usage(id)
                    .iter()
                    .any(|u| u.usage.role() == UsageRole::Input)
            })
            .collect();
        self.export_textures(&ids, folder_name, cancel)
    }

    /// Export the input textures of the action at `event_id`
    ///
    /// Files go to a folder named after the event id.
    pub fn export_action_textures(
        &self,
        index: &ActionIndex,
        event_id: u32,
        cancel: Option<&CancelFlag>,
    ) -> ExportReport {
        let ids = index
            .inputs_by_event(event_id)
            .map(|set| set.sorted_ids())
            .unwrap_or_default();
        self.export_textures(&ids, &event_id.to_string(), cancel)
    }
}

#[cfg(test)]
#[path = "texture_exporter_tests.rs"]
mod tests;
