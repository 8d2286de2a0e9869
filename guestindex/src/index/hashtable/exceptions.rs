use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hash table needs at least one bucket")]
    ZeroBucketCount,
    #[error("hash modulus must be non-zero")]
    ZeroModulus,
}
