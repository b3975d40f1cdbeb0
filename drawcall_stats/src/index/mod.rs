//! Capture index module
//!
//! Flattens the host action tree into lookup tables and attaches the
//! textures each action reads (inputs) and writes (outputs).

mod texture_set;
mod action_record;
mod action_index;
mod usage_classifier;

pub use texture_set::{TextureRecord, TextureSet};
pub use action_record::{ActionRecord, TextureRole};
pub use action_index::ActionIndex;
pub use usage_classifier::{UsageClassifier, ClassificationSummary};
