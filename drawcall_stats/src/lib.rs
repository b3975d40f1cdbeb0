/*!
# Drawcall Stats

Drawcall and texture statistics over a captured GPU frame.

This crate indexes the action tree of a frame capture, classifies which
textures each action reads and writes, answers range queries over that
index, and exports textures to per-slice image files. The capture/replay
environment is reached only through the `CaptureHost` trait.

## Architecture

- **CaptureHost**: Capability trait supplied by the replay environment
- **ActionIndex**: Flattened, event-ordered view of the action tree
- **UsageClassifier**: Attaches input/output textures to actions
- **RangeStats**: Triangle counts, distinct textures and resolution histograms
- **TextureExporter**: Per-face/per-slice texture export driven by `ExportConfig`
- **CaptureSession**: Ties one host to one classified index
*/

// Internal modules
mod error;
mod engine;
mod capture_session;
pub mod log;
pub mod host;
pub mod index;
pub mod stats;
pub mod export;

// Main drawstats namespace module
pub mod drawstats {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger holder
    pub use crate::engine::Engine;

    // Host + index session
    pub use crate::capture_session::CaptureSession;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Capture host interface and data types
    pub mod host {
        pub use crate::host::*;
    }

    // Action index and usage classification
    pub mod index {
        pub use crate::index::*;
    }

    // Range statistics
    pub mod stats {
        pub use crate::stats::*;
    }

    // Texture export
    pub mod export {
        pub use crate::export::*;
    }
}
