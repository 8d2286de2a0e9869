use crate::record::Record;

/// Full scan for records whose name equals `key`, in input order.
pub fn search_all(records: &[Record], key: &str) -> Vec<Record> {
    records.iter()
        .filter(|r| r.name == key)
        .cloned()
        .collect()
}
