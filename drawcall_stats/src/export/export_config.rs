/// Export configuration, passed explicitly to every export call.

use std::path::PathBuf;

/// Where and what to export
///
/// # Example
///
/// ```no_run
/// use drawcall_stats::drawstats::export::ExportConfig;
///
/// let config = ExportConfig::new("/tmp/frame_dump")
///     .with_render_targets(true)
///     .with_min_texture_size(8);
/// assert!(config.export_render_targets);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Session export directory; each export writes into a sub-folder of it
    pub root: PathBuf,
    /// Also export color and depth/stencil targets
    pub export_render_targets: bool,
    /// Textures with `width <= min && height <= min` are skipped
    pub min_texture_size: u32,
}

impl ExportConfig {
    /// Placeholder textures are usually 1x1 .. 4x4
    pub const DEFAULT_MIN_TEXTURE_SIZE: u32 = 4;

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            export_render_targets: false,
            min_texture_size: Self::DEFAULT_MIN_TEXTURE_SIZE,
        }
    }

    pub fn with_render_targets(mut self, export_render_targets: bool) -> Self {
        self.export_render_targets = export_render_targets;
        self
    }

    pub fn with_min_texture_size(mut self, min_texture_size: u32) -> Self {
        self.min_texture_size = min_texture_size;
        self
    }

    /// User pictures directory, falling back to home, then the working directory
    pub fn default_root() -> PathBuf {
        dirs::picture_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// `<root>/<folder_name>`
    pub fn folder_path(&self, folder_name: &str) -> PathBuf {
        self.root.join(folder_name)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(Self::default_root())
    }
}
