use std::collections::HashMap;

use tracing::debug;

use crate::feeds::DistanceRecord;
use crate::names::NameRegistry;

/// Symmetric table of capital-to-capital distances keyed by short identifier.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<String, HashMap<String, u32>>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from distance records. Both directions are stored for
    /// every record; a repeated pair keeps the last distance seen.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DistanceRecord>,
    {
        let mut table = Self::new();
        let mut count = 0usize;
        for record in records {
            table.insert(&record.origin, &record.destination, record.km);
            count += 1;
        }
        debug!(records = count, ids = table.entries.len(), "built distance table");
        table
    }

    /// Record `km` for the pair in both directions.
    pub fn insert(&mut self, origin: &str, destination: &str, km: u32) {
        self.entries
            .entry(origin.to_string())
            .or_default()
            .insert(destination.to_string(), km);
        self.entries
            .entry(destination.to_string())
            .or_default()
            .insert(origin.to_string(), km);
    }

    /// Distance between two short identifiers, if recorded.
    pub fn get(&self, origin_id: &str, destination_id: &str) -> Option<u32> {
        self.entries
            .get(origin_id)
            .and_then(|row| row.get(destination_id))
            .copied()
    }

    /// Distance between two countries named in any spelling the registry
    /// understands. `None` when either name has no identifier or the pair has
    /// no recorded distance.
    pub fn between(&self, registry: &NameRegistry, origin: &str, destination: &str) -> Option<u32> {
        let origin_id = registry.short_id(origin)?;
        let destination_id = registry.short_id(destination)?;
        self.get(origin_id, destination_id)
    }

    /// Number of identifiers with at least one recorded distance.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
