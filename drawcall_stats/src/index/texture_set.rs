/// Texture records and resource-keyed texture sets.
///
/// A `TextureSet` is an explicit `ResourceId -> TextureRecord` map: two
/// records with the same resource id are the same texture, whatever the rest
/// of their metadata says.

use std::hash::{Hash, Hasher};
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::host::{ResourceId, TextureDescription};

/// Snapshot of one texture resource, taken at classification time
///
/// Equality and hashing only look at `resource_id`.
#[derive(Debug, Clone)]
pub struct TextureRecord {
    /// Identity key
    pub resource_id: ResourceId,
    /// Host metadata
    pub description: TextureDescription,
}

impl TextureRecord {
    pub fn new(resource_id: ResourceId, description: TextureDescription) -> Self {
        Self { resource_id, description }
    }

    pub fn width(&self) -> u32 {
        self.description.width
    }

    pub fn height(&self) -> u32 {
        self.description.height
    }

    /// `(width, height)`
    pub fn resolution(&self) -> (u32, u32) {
        (self.description.width, self.description.height)
    }
}

impl PartialEq for TextureRecord {
    fn eq(&self, other: &Self) -> bool {
        self.resource_id == other.resource_id
    }
}

impl Eq for TextureRecord {}

impl Hash for TextureRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_id.hash(state);
    }
}

/// Set of textures deduplicated by resource id
///
/// Records are shared (`Arc`) between every action that references them.
#[derive(Debug, Clone, Default)]
pub struct TextureSet {
    textures: FxHashMap<ResourceId, Arc<TextureRecord>>,
}

impl TextureSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record
    ///
    /// Returns false if a record with the same resource id was already present
    /// (the existing record is kept).
    pub fn insert(&mut self, record: Arc<TextureRecord>) -> bool {
        match self.textures.entry(record.resource_id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// Add every record of `other` not already present
    pub fn extend_from(&mut self, other: &TextureSet) {
        for record in other.textures.values() {
            self.insert(record.clone());
        }
    }

    /// Union of two sets
    pub fn union(&self, other: &TextureSet) -> TextureSet {
        let mut result = self.clone();
        result.extend_from(other);
        result
    }

    pub fn contains(&self, id: ResourceId) -> bool {
        self.textures.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Iterate over records (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TextureRecord>> + '_ {
        self.textures.values()
    }

    /// Resource ids in ascending order
    pub fn sorted_ids(&self) -> Vec<ResourceId> {
        let mut ids: Vec<ResourceId> = self.textures.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Sets are equal when they hold the same resource ids
impl PartialEq for TextureSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.textures.keys().all(|id| other.contains(*id))
    }
}

impl Eq for TextureSet {}

#[cfg(test)]
#[path = "texture_set_tests.rs"]
mod tests;
