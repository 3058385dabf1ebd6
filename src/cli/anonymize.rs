use crate::anonymize::{k_anonymize, mask_records, MaskPolicy};
use crate::dataset::{load_records, render_table, sample_records};
use crate::error::Result;
use std::path::PathBuf;

/// Options for the anonymize command
#[derive(Debug, Clone)]
pub struct AnonymizeOptions {
    /// Minimum equivalence-class size for a record to survive
    pub k: usize,
    /// Optional JSON dataset; the embedded lab dataset is used when absent
    pub dataset: Option<PathBuf>,
    pub policy: MaskPolicy,
}

impl Default for AnonymizeOptions {
    fn default() -> Self {
        Self {
            k: 2,
            dataset: None,
            policy: MaskPolicy::default(),
        }
    }
}

/// Run masking and k-anonymization over the dataset, returning the full
/// report: original table, masked table, surviving records
pub fn run_anonymize(options: &AnonymizeOptions) -> Result<String> {
    let records = match &options.dataset {
        Some(path) => load_records(path)?,
        None => sample_records(),
    };

    let masked = mask_records(&records, &options.policy);
    let anonymized = k_anonymize(&records, options.k);

    let mut output = String::new();
    output.push_str("Original Dataset:\n");
    output.push_str(&render_table(&records));
    output.push('\n');

    output.push_str("After Data Masking:\n");
    output.push_str(&render_table(&masked));
    output.push('\n');

    output.push_str(&format!("After K-Anonymization (k = {}):\n", options.k));
    output.push_str(&render_table(&anonymized));
    output.push('\n');

    output.push_str("Data Anonymization Completed Successfully\n");
    Ok(output)
}
