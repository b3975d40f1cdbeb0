/// Indexed action record.
///
/// One record per action of the capture, created when the index is built.
/// Texture sets are filled by the `UsageClassifier` and read-only afterwards.

use crate::host::{ActionDescription, ActionFlags};
use super::texture_set::TextureSet;

/// Which texture set of an action to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureRole {
    /// Textures read by a programmable stage
    Input,
    /// Color and depth/stencil targets
    Output,
}

#[derive(Debug, Clone)]
pub struct ActionRecord {
    action_id: u32,
    event_id: u32,
    flags: ActionFlags,
    num_indices: u32,
    mesh_count: u64,
    child_count: usize,
    input_textures: TextureSet,
    output_textures: TextureSet,
}

impl ActionRecord {
    /// Snapshot a host action (children are indexed separately)
    pub(crate) fn from_description(desc: &ActionDescription) -> Self {
        let mesh_count = if desc.flags.is_indexed_draw() {
            desc.num_indices as u64 / 3
        } else {
            0
        };
        Self {
            action_id: desc.action_id,
            event_id: desc.event_id,
            flags: desc.flags,
            num_indices: desc.num_indices,
            mesh_count,
            child_count: desc.children.len(),
            input_textures: TextureSet::new(),
            output_textures: TextureSet::new(),
        }
    }

    pub fn action_id(&self) -> u32 {
        self.action_id
    }

    pub fn event_id(&self) -> u32 {
        self.event_id
    }

    pub fn flags(&self) -> ActionFlags {
        self.flags
    }

    pub fn num_indices(&self) -> u32 {
        self.num_indices
    }

    /// Triangle count: `num_indices / 3` for indexed drawcalls, else 0
    pub fn mesh_count(&self) -> u64 {
        self.mesh_count
    }

    /// Number of direct children in the host tree
    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Leaf action that is not a marker (actual GPU work or a clear)
    pub fn is_work(&self) -> bool {
        self.child_count == 0 && !self.flags.is_marker()
    }

    pub fn input_textures(&self) -> &TextureSet {
        &self.input_textures
    }

    pub fn output_textures(&self) -> &TextureSet {
        &self.output_textures
    }

    /// Texture set for a role
    pub fn textures(&self, role: TextureRole) -> &TextureSet {
        match role {
            TextureRole::Input => &self.input_textures,
            TextureRole::Output => &self.output_textures,
        }
    }

    pub(crate) fn textures_mut(&mut self, role: TextureRole) -> &mut TextureSet {
        match role {
            TextureRole::Input => &mut self.input_textures,
            TextureRole::Output => &mut self.output_textures,
        }
    }
}
