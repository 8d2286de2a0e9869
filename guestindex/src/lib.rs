pub mod record;
pub use record::Record;
pub mod exceptions;
pub use exceptions::{IndexError, Result};
pub mod linear;
pub mod index;
pub mod loader;
pub mod bench;
pub mod report;
pub mod logger;
pub mod rand;
