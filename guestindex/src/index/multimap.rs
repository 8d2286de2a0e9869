use std::collections::BTreeMap;
use super::Index;
use crate::record::Record;

/// Ordered map from name to every record carrying it, in insertion order.
/// Reference point backed by the standard library.
#[derive(Default)]
pub struct MultiMap {
    map: BTreeMap<String, Vec<Record>>,
    len: usize,
}

impl MultiMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[Record]) -> Self {
        let mut map = Self::new();
        for record in records {
            map.insert(record.clone());
        }
        map
    }

    pub fn count(&self, key: &str) -> usize {
        self.map.get(key).map_or(0, Vec::len)
    }
}

impl Index for MultiMap {
    fn insert(&mut self, record: Record) {
        self.map.entry(record.name.clone()).or_default().push(record);
        self.len += 1;
    }

    fn search_all(&self, key: &str) -> Vec<Record> {
        self.map.get(key).cloned().unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "multimap"
    }
}
