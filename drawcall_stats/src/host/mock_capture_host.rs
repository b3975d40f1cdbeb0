/// Mock CaptureHost for unit tests (no replay environment required)
///
/// Textures, usages and the action tree are configured up front. Save
/// requests are recorded; individual paths can be made to fail.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use crate::error::{Error, Result};
use super::{
    ActionDescription, CaptureHost, EventUsage, ResourceId, ResourceUsage,
    TextureDescription, TextureSave,
};

/// One recorded `save_texture` call
#[derive(Debug, Clone)]
pub struct SavedTexture {
    pub save: TextureSave,
    pub path: PathBuf,
}

pub struct MockCaptureHost {
    pub roots: Vec<ActionDescription>,
    pub textures: Vec<(ResourceId, TextureDescription)>,
    pub usages: FxHashMap<ResourceId, Vec<EventUsage>>,
    pub capture_filename: String,
    /// File names (last path component) whose save fails
    pub failing_files: FxHashSet<String>,
    pub saved: Mutex<Vec<SavedTexture>>,
}

impl MockCaptureHost {
    pub fn new(roots: Vec<ActionDescription>) -> Self {
        Self {
            roots,
            textures: Vec::new(),
            usages: FxHashMap::default(),
            capture_filename: "/captures/frame.rdc".to_string(),
            failing_files: FxHashSet::default(),
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn add_texture(&mut self, id: u64, desc: TextureDescription) -> ResourceId {
        let id = ResourceId(id);
        self.textures.push((id, desc));
        id
    }

    pub fn add_usage(&mut self, id: ResourceId, event_id: u32, usage: ResourceUsage) {
        self.usages.entry(id).or_default().push(EventUsage::new(event_id, usage));
    }

    pub fn fail_file(&mut self, file_name: &str) {
        self.failing_files.insert(file_name.to_string());
    }

    pub fn saved(&self) -> Vec<SavedTexture> {
        self.saved.lock().unwrap().clone()
    }

    pub fn saved_file_names(&self) -> Vec<String> {
        self.saved()
            .iter()
            .filter_map(|s| s.path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect()
    }
}

impl CaptureHost for MockCaptureHost {
    fn root_actions(&self) -> Vec<ActionDescription> {
        self.roots.clone()
    }

    fn texture_resources(&self) -> Vec<ResourceId> {
        self.textures.iter().map(|(id, _)| *id).collect()
    }

    fn texture_description(&self, id: ResourceId) -> Option<TextureDescription> {
        self.textures.iter().find(|(tid, _)| *tid == id).map(|(_, desc)| desc.clone())
    }

    fn resource_usage(&self, id: ResourceId) -> Vec<EventUsage> {
        self.usages.get(&id).cloned().unwrap_or_default()
    }

    fn save_texture(&self, save: &TextureSave, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing_files.contains(&file_name) {
            return Err(Error::HostError(format!("mock save failed for {}", file_name)));
        }
        self.saved.lock().unwrap().push(SavedTexture {
            save: *save,
            path: path.to_path_buf(),
        });
        Ok(())
    }

    fn capture_filename(&self) -> String {
        self.capture_filename.clone()
    }
}
