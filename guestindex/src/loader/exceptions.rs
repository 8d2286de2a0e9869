use thiserror::Error;
use std::num::ParseIntError;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{0} (FileIOError)")]
    FileIOError(#[from] std::io::Error),
    #[error("missing header line")]
    EmptyFile,
    #[error("line {line}: missing field {field}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: field {field} is not an integer ({value:?}), {source}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
}
