use std::{fs::File, io::{BufRead, BufReader}, path::Path};
use log::debug;
use crate::record::Record;

pub mod exceptions;
pub use exceptions::{LoaderError, Result};

pub const HEADER: &str = "name,arrival_time,room_number,departure_time,cost";

/// Reads guests from a comma separated file. The first line is a header and
/// is skipped; columns are `name,arrival_time,room_number,departure_time,cost`.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    let records = parse_records(BufReader::new(file))?;
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => { header?; }
        None => return Err(LoaderError::EmptyFile),
    }

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        // header is line 1
        records.push(parse_line(idx + 2, line)?);
    }
    Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> Result<Record> {
    let mut fields = line.split(',');
    let mut next = |field: &'static str| {
        fields.next().ok_or(LoaderError::MissingField { line: line_no, field })
    };
    let name = next("name")?;
    let arrival_time = next("arrival_time")?;
    let room_number = parse_int(line_no, "room_number", next("room_number")?)?;
    let departure_time = next("departure_time")?;
    let cost = parse_int(line_no, "cost", next("cost")?)?;

    Ok(Record::new(name, room_number, cost, arrival_time, departure_time))
}

fn parse_int(line: usize, field: &'static str, value: &str) -> Result<i32> {
    value.trim().parse().map_err(|source| LoaderError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
        source,
    })
}
