//! In-process registry of imported model records.

use std::sync::{Arc, RwLock};

use super::ModelRecord;

/// Ordered, deduplicated collection of model records.
///
/// Cheap to clone; clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Arc<RwLock<Vec<ModelRecord>>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of records in one step.
    ///
    /// A record whose `id` is already present replaces the existing one in
    /// place, keeping its position; new ids are appended in batch order.
    pub fn add_models(&self, batch: Vec<ModelRecord>) {
        let mut models = self.models.write().unwrap();
        for record in batch {
            match models.iter_mut().find(|m| m.id == record.id) {
                Some(existing) => *existing = record,
                None => models.push(record),
            }
        }
    }

    /// Drop every record imported from the given source.
    pub fn remove_source(&self, source_id: &str) {
        self.models
            .write()
            .unwrap()
            .retain(|m| m.source_id != source_id);
    }

    /// Snapshot of all records, in registry order.
    pub fn all(&self) -> Vec<ModelRecord> {
        self.models.read().unwrap().clone()
    }

    /// Snapshot of the records imported from one source.
    pub fn for_source(&self, source_id: &str) -> Vec<ModelRecord> {
        self.models
            .read()
            .unwrap()
            .iter()
            .filter(|m| m.source_id == source_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.models.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.read().unwrap().is_empty()
    }
}
