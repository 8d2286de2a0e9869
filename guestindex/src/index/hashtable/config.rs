use serde_derive::{Serialize as SerializeDerive, Deserialize as DeserializeDerive};
use super::exceptions::{ConfigError, Result};

pub const DEFAULT_BUCKET_COUNT: usize = 1_000_000;
pub const DEFAULT_MODULUS: u64 = 1_000_000_009;
pub const HASH_BASE: u64 = 53;

/// `bucket_count` trades memory for collision rate. `modulus` bounds the hash
/// values; a small modulus folds many keys together and collisions spike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, SerializeDerive, DeserializeDerive)]
#[serde(default)]
pub struct HashTableConfig {
    pub bucket_count: usize,
    pub modulus: u64,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl HashTableConfig {
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self { bucket_count, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(ConfigError::ZeroBucketCount);
        }
        if self.modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        Ok(())
    }
}
