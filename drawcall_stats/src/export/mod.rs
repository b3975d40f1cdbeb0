//! Texture export module
//!
//! Decides, for each texture, whether it is exported, in which container,
//! and as which per-slice or per-face files, then asks the capture host to
//! persist each file.

mod export_config;
mod export_plan;
mod export_report;
mod texture_exporter;

pub use export_config::ExportConfig;
pub use export_plan::{ExportPlan, PlannedFile, SkipReason, plan_texture_export};
pub use export_report::{ExportOutcome, ExportReport, FileFailure, TextureExport};
pub use texture_exporter::{CancelFlag, TextureExporter, range_folder_name};
