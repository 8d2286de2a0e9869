use std::collections::HashSet;
use log::debug;
use super::Index;
use crate::record::Record;

mod config;
pub use config::{HashTableConfig, DEFAULT_BUCKET_COUNT, DEFAULT_MODULUS, HASH_BASE};

pub mod exceptions;
pub use exceptions::{ConfigError, Result};

/// Chained hash index with a fixed number of buckets. Buckets are allocated
/// on the first insert and never resized.
pub struct HashTable {
    config: HashTableConfig,
    buckets: Vec<Vec<Record>>,
    len: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self {
            config: HashTableConfig::default(),
            buckets: Vec::new(),
            len: 0,
        }
    }
}

impl HashTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HashTableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, buckets: Vec::new(), len: 0 })
    }

    pub fn from_records(records: &[Record]) -> Self {
        let mut table = Self::new();
        table.extend(records);
        table
    }

    pub fn from_records_with_config(records: &[Record], config: HashTableConfig) -> Result<Self> {
        let mut table = Self::with_config(config)?;
        table.extend(records);
        Ok(table)
    }

    fn extend(&mut self, records: &[Record]) {
        for record in records {
            self.insert(record.clone());
        }
        debug!(
            "built hash table with {} records in {} buckets, {} collisions",
            self.len, self.config.bucket_count, self.collisions()
        );
    }

    pub fn config(&self) -> &HashTableConfig {
        &self.config
    }

    pub fn bucket_count(&self) -> usize {
        self.config.bucket_count
    }

    /// Polynomial rolling hash over the key bytes with base 53, mapping `a` to
    /// 1. Bytes below `a` give negative terms, which are folded back into
    /// `0..modulus`.
    pub fn hash(&self, key: &str) -> u64 {
        let modulus = i128::from(self.config.modulus);
        let base = i128::from(HASH_BASE);
        let mut hash: i128 = 0;
        let mut p_pow: i128 = 1;
        for c in key.bytes() {
            let term = i128::from(c) - i128::from(b'a') + 1;
            hash = (hash + term * p_pow).rem_euclid(modulus);
            p_pow = (p_pow * base) % modulus;
        }
        // hash < modulus <= u64::MAX
        hash as u64
    }

    pub fn bucket_index(&self, key: &str) -> usize {
        (self.hash(key) % self.config.bucket_count as u64) as usize
    }

    /// Records routed to bucket `idx`; empty before the first insert.
    pub fn bucket(&self, idx: usize) -> &[Record] {
        self.buckets.get(idx).map_or(&[], |bucket| bucket.as_slice())
    }

    /// Sum over buckets of (distinct keys - 1). Repeated copies of one key
    /// are duplicates, not collisions.
    pub fn collisions(&self) -> usize {
        self.buckets.iter()
            .filter(|bucket| bucket.len() > 1)
            .map(|bucket| {
                let uniq: HashSet<&str> = bucket.iter().map(|r| r.name.as_str()).collect();
                uniq.len() - 1
            })
            .sum()
    }
}

impl Index for HashTable {
    fn insert(&mut self, record: Record) {
        if self.buckets.is_empty() {
            self.buckets.resize_with(self.config.bucket_count, Vec::new);
        }
        let idx = self.bucket_index(&record.name);
        self.buckets[idx].push(record);
        self.len += 1;
    }

    fn search_all(&self, key: &str) -> Vec<Record> {
        self.bucket(self.bucket_index(key)).iter()
            .filter(|r| r.name == key)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "hash"
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::linear;
    use crate::rand::rand_records;
    use crate::record::same_records;

    fn guest(name: &str, room: i32) -> Record {
        Record::new(name, room, 90, "2023-07-01 09:00", "2023-07-04 09:00")
    }

    fn small_table() -> HashTable {
        HashTable::with_config(HashTableConfig::with_bucket_count(1024)).unwrap()
    }

    #[test]
    fn hash_values() {
        let table = HashTable::new();
        assert_eq!(table.hash(""), 0);
        assert_eq!(table.hash("a"), 1);
        assert_eq!(table.hash("b"), 2);
        assert_eq!(table.hash("ab"), 1 + 2 * 53);
        assert_eq!(table.hash("abc"), 1 + 2 * 53 + 3 * 53 * 53);
        // 'A' is 31 below 'a'+1
        assert_eq!(table.hash("A"), DEFAULT_MODULUS - 31);
        assert!(table.hash("Some Longer Guest Name") < DEFAULT_MODULUS);
    }

    #[test]
    fn empty_table() {
        let table = HashTable::from_records(&[]);
        assert!(table.is_empty());
        assert!(table.search_all("ann").is_empty());
        assert_eq!(table.collisions(), 0);
        assert!(table.bucket(0).is_empty());
    }

    #[test]
    fn records_land_in_their_bucket() {
        let records = rand_records(500, 120);
        let table = HashTable::from_records_with_config(&records, HashTableConfig::with_bucket_count(97)).unwrap();
        assert_eq!(table.len(), records.len());
        for record in &records {
            let idx = (table.hash(&record.name) % 97) as usize;
            assert_eq!(table.bucket_index(&record.name), idx);
            assert!(table.bucket(idx).contains(record));
        }
    }

    #[test]
    fn search_never_returns_other_keys() {
        // a single bucket forces every key to share a chain
        let records = rand_records(300, 40);
        let table = HashTable::from_records_with_config(&records, HashTableConfig::with_bucket_count(1)).unwrap();
        for record in &records {
            let found = table.search_all(&record.name);
            assert!(found.iter().all(|r| r.name == record.name));
            assert!(same_records(&found, &linear::search_all(&records, &record.name)));
        }
    }

    #[test]
    fn collisions_ignore_true_duplicates() {
        let probe = small_table();
        let bucket_count = (2..10_000u64)
            .find(|b| {
                let (ann, bob, cel) = (probe.hash("ann") % b, probe.hash("bob") % b, probe.hash("cel") % b);
                bob == cel && ann != bob
            })
            .unwrap() as usize;

        let records = vec![guest("ann", 1), guest("bob", 2), guest("ann", 3), guest("cel", 4)];
        let table = HashTable::from_records_with_config(&records, HashTableConfig::with_bucket_count(bucket_count)).unwrap();
        assert_eq!(table.bucket_index("bob"), table.bucket_index("cel"));
        assert_ne!(table.bucket_index("ann"), table.bucket_index("bob"));
        assert_eq!(table.collisions(), 1);
        assert_eq!(table.search_all("ann").len(), 2);
        assert_eq!(table.search_all("bob").len(), 1);
        assert_eq!(table.search_all("cel").len(), 1);
    }

    #[test]
    fn duplicates_only_bucket_has_no_collisions() {
        let records: Vec<Record> = (0..10).map(|i| guest("same", i)).collect();
        let mut table = small_table();
        for record in &records {
            table.insert(record.clone());
        }
        assert_eq!(table.collisions(), 0);
        assert_eq!(table.search_all("same").len(), 10);
    }

    #[test]
    fn degenerate_modulus_still_answers() {
        let config = HashTableConfig { bucket_count: 1024, modulus: 66 };
        let records = rand_records(2000, 500);
        let degenerate = HashTable::from_records_with_config(&records, config).unwrap();
        let healthy = HashTable::from_records_with_config(&records, HashTableConfig::with_bucket_count(1024)).unwrap();
        assert!(degenerate.collisions() > healthy.collisions());
        for record in records.iter().step_by(50) {
            let expected = linear::search_all(&records, &record.name);
            assert!(same_records(&degenerate.search_all(&record.name), &expected));
        }
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(matches!(
            HashTable::with_config(HashTableConfig::with_bucket_count(0)),
            Err(ConfigError::ZeroBucketCount)
        ));
    }
}
