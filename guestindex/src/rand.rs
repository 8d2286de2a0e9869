use rand::Rng;
use rand::seq::SliceRandom;
use crate::record::Record;

pub fn rand_bytes<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.sample(rand::distributions::Alphanumeric)).collect()
}

pub fn rand_string(len: usize) -> String {
    let v = rand_bytes(&mut rand::thread_rng(), len);
    String::from_utf8_lossy(&v).into_owned()
}

fn rand_timestamp<R: Rng>(rng: &mut R) -> (String, String) {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=25);
    let hour = rng.gen_range(0..24);
    let nights = rng.gen_range(1..=3);
    (
        format!("2023-{:02}-{:02} {:02}:00", month, day, hour),
        format!("2023-{:02}-{:02} {:02}:00", month, day + nights, hour),
    )
}

/// A guest whose name is drawn from `name_pool`.
pub fn rand_record<R: Rng>(rng: &mut R, name_pool: &[String]) -> Record {
    let name = name_pool.choose(rng).cloned().unwrap_or_default();
    let (arrival, departure) = rand_timestamp(rng);
    Record {
        name,
        room_number: rng.gen_range(1..=500),
        cost: rng.gen_range(1_000..=20_000),
        arrival_time: arrival,
        departure_time: departure,
    }
}

/// `n` guests sharing at most `distinct_names` names between them.
pub fn rand_records_with<R: Rng>(rng: &mut R, n: usize, distinct_names: usize) -> Vec<Record> {
    let pool: Vec<String> = (0..distinct_names.max(1))
        .map(|i| {
            let len = rng.gen_range(4..=10);
            let first = String::from_utf8_lossy(&rand_bytes(rng, len)).into_owned();
            format!("{} {:04}", first, i)
        })
        .collect();
    (0..n).map(|_| rand_record(rng, &pool)).collect()
}

pub fn rand_records(n: usize, distinct_names: usize) -> Vec<Record> {
    rand_records_with(&mut rand::thread_rng(), n, distinct_names)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use super::*;

    #[test]
    fn name_pool_bounds_distinct_keys() {
        let records = rand_records(1000, 25);
        assert_eq!(records.len(), 1000);
        let names: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert!(names.len() <= 25);
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let a = rand_records_with(&mut StdRng::seed_from_u64(7), 50, 10);
        let b = rand_records_with(&mut StdRng::seed_from_u64(7), 50, 10);
        assert_eq!(a, b);
        assert!(a.iter().all(|r| r.arrival_time < r.departure_time));
    }
}
