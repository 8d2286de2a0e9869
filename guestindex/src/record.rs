use std::cmp::Ordering;
use serde_derive::{Serialize as SerializeDerive, Deserialize as DeserializeDerive};

/// A guest reservation. `name` is the lookup key for every index and is not unique.
#[derive(Clone, Debug, PartialEq, Eq, Hash, SerializeDerive, DeserializeDerive)]
pub struct Record {
    pub name: String,
    pub room_number: i32,
    pub cost: i32,
    pub arrival_time: String,
    pub departure_time: String,
}

impl Record {
    pub fn new(
        name: &str,
        room_number: i32,
        cost: i32,
        arrival_time: &str,
        departure_time: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            room_number,
            cost,
            arrival_time: arrival_time.to_string(),
            departure_time: departure_time.to_string(),
        }
    }
}

// Guests order by arrival, then room, then name. The remaining fields only
// break ties so that `cmp` agrees with `eq`.
impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.arrival_time.cmp(&other.arrival_time)
            .then(self.room_number.cmp(&other.room_number))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.departure_time.cmp(&other.departure_time))
            .then(self.cost.cmp(&other.cost))
    }
}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares two result sets as multisets.
pub fn same_records(a: &[Record], b: &[Record]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&Record> = a.iter().collect();
    let mut b: Vec<&Record> = b.iter().collect();
    a.sort();
    b.sort();
    a == b
}
