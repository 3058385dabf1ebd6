use crate::dataset::Record;

/// Masking rules for direct identifiers
/// Name collapses to a constant placeholder; ZIP keeps a short prefix and
/// replaces the rest with a fixed mask token
#[derive(Debug, Clone)]
pub struct MaskPolicy {
    pub placeholder: String,
    pub zip_keep: usize,
    pub zip_mask: String,
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self {
            placeholder: "XXXX".to_string(),
            zip_keep: 3,
            zip_mask: "***".to_string(),
        }
    }
}

/// Mask direct identifiers in every record
/// Pure: operates on a copy, the input is never mutated
pub fn mask_records(records: &[Record], policy: &MaskPolicy) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            let mut masked = record.clone();
            masked.name = policy.placeholder.clone();
            masked.zip = mask_zip(&record.zip, policy);
            masked
        })
        .collect()
}

/// Keep the first `zip_keep` characters and append the mask token
/// A ZIP shorter than the prefix keeps its full value before the token
fn mask_zip(zip: &str, policy: &MaskPolicy) -> String {
    let prefix: String = zip.chars().take(policy.zip_keep).collect();
    format!("{}{}", prefix, policy.zip_mask)
}
