use std::time::Instant;
use log::{info, warn};
use serde_derive::{Serialize as SerializeDerive, Deserialize as DeserializeDerive};
use crate::index::{BinarySearchTree, HashTable, HashTableConfig, Index, MultiMap, RedBlackTree};
use crate::record::{same_records, Record};
use crate::{linear, Result};

/// One timed `search_all` call.
#[derive(Clone, Debug, PartialEq, SerializeDerive, DeserializeDerive)]
pub struct Measurement {
    pub algorithm: String,
    pub size: usize,
    /// wall time of the query alone, construction excluded
    pub seconds: f64,
    pub collisions: usize,
    pub found: usize,
    /// whether the result equals the linear scan as a multiset
    pub matches: bool,
}

/// Probe key used for a dataset: the name of the record a third of the way in.
pub fn pick_key(records: &[Record]) -> Option<&str> {
    records.get(records.len() / 3).map(|r| r.name.as_str())
}

fn time_search(index: &dyn Index, key: &str) -> (Vec<Record>, f64) {
    let start = Instant::now();
    let found = index.search_all(key);
    (found, start.elapsed().as_secs_f64())
}

/// Builds every structure from `records` and times one query for `key` on
/// each, the linear scan first.
pub fn run_trial(records: &[Record], key: &str, config: HashTableConfig) -> Result<Vec<Measurement>> {
    let size = records.len();

    let start = Instant::now();
    let expected = linear::search_all(records, key);
    let mut measurements = vec![Measurement {
        algorithm: "linear".to_string(),
        size,
        seconds: start.elapsed().as_secs_f64(),
        collisions: 0,
        found: expected.len(),
        matches: true,
    }];

    let hash_table = HashTable::from_records_with_config(records, config)?;
    let collisions = hash_table.collisions();
    let indexes: Vec<Box<dyn Index>> = vec![
        Box::new(BinarySearchTree::from_records(records)),
        Box::new(RedBlackTree::from_records(records)),
        Box::new(hash_table),
        Box::new(MultiMap::from_records(records)),
    ];

    for index in &indexes {
        let (found, seconds) = time_search(index.as_ref(), key);
        let matches = same_records(&found, &expected);
        if !matches {
            warn!(
                "{} returned {} records for {:?}, linear scan found {}",
                index.name(), found.len(), key, expected.len()
            );
        }
        measurements.push(Measurement {
            algorithm: index.name().to_string(),
            size,
            seconds,
            collisions: if index.name() == "hash" { collisions } else { 0 },
            found: found.len(),
            matches,
        });
    }

    for m in &measurements {
        info!("{:>8} n={:<8} {:.9}s found={} collisions={}", m.algorithm, m.size, m.seconds, m.found, m.collisions);
    }
    Ok(measurements)
}
