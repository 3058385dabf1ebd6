use crate::dataset::Record;
use std::collections::HashMap;

/// Group records into equivalence classes keyed by the quasi-identifier
/// pair (age, zip) and count the members of each class
pub fn equivalence_counts(records: &[Record]) -> HashMap<(u32, String), usize> {
    let mut counts: HashMap<(u32, String), usize> = HashMap::new();
    for record in records {
        *counts.entry((record.age, record.zip.clone())).or_insert(0) += 1;
    }
    counts
}

/// Retain only records whose (age, zip) equivalence class has at least `k`
/// members; classes below the threshold are dropped whole, never partially
///
/// Output preserves the input order. `k <= 1` retains everything. An empty
/// result is a valid outcome: strict k-anonymity eliminates every record
/// whose quasi-identifier combination is unique.
pub fn k_anonymize(records: &[Record], k: usize) -> Vec<Record> {
    if k <= 1 {
        return records.to_vec();
    }

    let counts = equivalence_counts(records);
    records
        .iter()
        .filter(|record| counts[&(record.age, record.zip.clone())] >= k)
        .cloned()
        .collect()
}
