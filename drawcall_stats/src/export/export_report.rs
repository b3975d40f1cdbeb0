/// Export outcomes and batch reports.
///
/// Returned by value from every export call; nothing accumulates between
/// calls.

use std::path::PathBuf;
use crate::error::Error;
use crate::host::ResourceId;
use super::export_plan::SkipReason;

/// A planned file the host failed to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Result of exporting one texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// At least one file was written
    Exported {
        files: Vec<PathBuf>,
        failures: Vec<FileFailure>,
    },
    /// Declined by policy; nothing written
    Skipped(SkipReason),
    /// Nothing written (directory creation failed, or every save failed)
    Failed {
        error: Error,
        failures: Vec<FileFailure>,
    },
}

impl ExportOutcome {
    pub fn is_exported(&self) -> bool {
        matches!(self, ExportOutcome::Exported { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ExportOutcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExportOutcome::Failed { .. })
    }

    /// Files written for this texture
    pub fn files(&self) -> &[PathBuf] {
        match self {
            ExportOutcome::Exported { files, .. } => files,
            _ => &[],
        }
    }

    /// Per-file save failures
    pub fn failures(&self) -> &[FileFailure] {
        match self {
            ExportOutcome::Exported { failures, .. } | ExportOutcome::Failed { failures, .. } => failures,
            ExportOutcome::Skipped(_) => &[],
        }
    }
}

/// Outcome for one texture of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureExport {
    pub resource_id: ResourceId,
    pub outcome: ExportOutcome,
}

/// Result of a batch export
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportReport {
    /// Destination folder (`<root>/<folder name>`)
    pub folder: PathBuf,
    /// One entry per texture attempted, in order
    pub textures: Vec<TextureExport>,
    /// The batch stopped early on a cancellation request
    pub cancelled: bool,
}

impl ExportReport {
    pub fn new(folder: PathBuf) -> Self {
        Self { folder, textures: Vec::new(), cancelled: false }
    }

    /// Textures with at least one file written
    pub fn exported_count(&self) -> usize {
        self.textures.iter().filter(|t| t.outcome.is_exported()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.textures.iter().filter(|t| t.outcome.is_skipped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.textures.iter().filter(|t| t.outcome.is_failed()).count()
    }

    /// Every file written, in order
    pub fn files_written(&self) -> Vec<PathBuf> {
        self.textures.iter().flat_map(|t| t.outcome.files().iter().cloned()).collect()
    }

    /// Every per-file failure, in order
    pub fn file_failures(&self) -> Vec<FileFailure> {
        self.textures.iter().flat_map(|t| t.outcome.failures().iter().cloned()).collect()
    }

    /// One-line summary for the caller to surface
    pub fn summary(&self) -> String {
        format!("Exported {} textures to {}", self.exported_count(), self.folder.display())
    }
}
