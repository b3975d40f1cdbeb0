/// CaptureHost trait and resource identifiers

use std::fmt;
use std::path::Path;
use crate::error::Result;
use super::action::ActionDescription;
use super::texture::TextureDescription;
use super::usage::EventUsage;
use super::texture_save::TextureSave;

/// Opaque, stable identifier of a capture resource
///
/// `ResourceId::NULL` is the sentinel for "no resource" and is never exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ResourceId(pub u64);

impl ResourceId {
    /// Sentinel identifier
    pub const NULL: ResourceId = ResourceId(0);

    /// Returns true for the sentinel identifier
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Raw numeric value (used as default file stem on export)
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability interface implemented by the capture/replay environment
///
/// Every method must be implemented. Calls are made from a single replay
/// context, one request at a time; implementations need not be thread-safe.
pub trait CaptureHost {
    /// Forest of root actions, children in trace order
    fn root_actions(&self) -> Vec<ActionDescription>;

    /// Every texture resource in the capture
    fn texture_resources(&self) -> Vec<ResourceId>;

    /// Description of a texture, `None` if the id is not a known texture
    fn texture_description(&self, id: ResourceId) -> Option<TextureDescription>;

    /// All recorded usages of a resource
    fn resource_usage(&self, id: ResourceId) -> Vec<EventUsage>;

    /// Persist one sub-image of a texture to `path`
    ///
    /// # Errors
    ///
    /// Returns `Error::HostError` if the file could not be written.
    fn save_texture(&self, save: &TextureSave, path: &Path) -> Result<()>;

    /// Path of the loaded capture file
    fn capture_filename(&self) -> String;
}
