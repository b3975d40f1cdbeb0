/// Capture host module - the capability interface the core consumes
///
/// The capture/replay environment supplies the action tree, texture
/// descriptions, resource usage and pixel persistence. Everything here is
/// plain data plus the `CaptureHost` trait.

pub mod capture_host;
pub mod action;
pub mod texture;
pub mod usage;
pub mod texture_save;

pub use capture_host::*;
pub use action::*;
pub use texture::*;
pub use usage::*;
pub use texture_save::*;

// Mock capture host for tests (no replay environment required)
#[cfg(test)]
pub mod mock_capture_host;
