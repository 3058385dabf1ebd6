use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single row of the lab dataset
/// `zip` is kept as a string so leading zeros and masking survive intact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: u32,
    pub zip: String,
    pub disease: String,
}

impl Record {
    pub fn new(name: &str, age: u32, zip: &str, disease: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            zip: zip.to_string(),
            disease: disease.to_string(),
        }
    }
}

/// The fixed six-record sample dataset used by the anonymization lab
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Ravi", 25, "623001", "Flu"),
        Record::new("Kumar", 26, "623001", "Covid"),
        Record::new("Anu", 25, "623002", "Flu"),
        Record::new("Ravi", 27, "623001", "Cancer"),
        Record::new("Anu", 26, "623002", "Covid"),
        Record::new("Kumar", 27, "623002", "Flu"),
    ]
}

/// Load a dataset from a JSON array of records
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let data = std::fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

/// Render records as an aligned text table with a row-index column
/// An empty dataset renders as the header row followed by "(empty)"
pub fn render_table(records: &[Record]) -> String {
    let headers = ["Name", "Age", "ZIP", "Disease"];

    let mut widths = [
        headers[0].len(),
        headers[1].len(),
        headers[2].len(),
        headers[3].len(),
    ];
    for record in records {
        widths[0] = widths[0].max(record.name.len());
        widths[1] = widths[1].max(record.age.to_string().len());
        widths[2] = widths[2].max(record.zip.len());
        widths[3] = widths[3].max(record.disease.len());
    }
    let index_width = records.len().saturating_sub(1).to_string().len().max(1);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>iw$}  {:<w0$}  {:>w1$}  {:<w2$}  {:<w3$}\n",
        "#",
        headers[0],
        headers[1],
        headers[2],
        headers[3],
        iw = index_width,
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    ));

    if records.is_empty() {
        output.push_str("(empty)\n");
        return output;
    }

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "{:>iw$}  {:<w0$}  {:>w1$}  {:<w2$}  {:<w3$}\n",
            i,
            record.name,
            record.age,
            record.zip,
            record.disease,
            iw = index_width,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sample_dataset_shape() {
        let records = sample_records();
        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.zip.len() == 6));
        assert!(records.iter().all(|r| r.zip.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_render_table_alignment() {
        let table = render_table(&sample_records());
        let lines: Vec<&str> = table.lines().collect();

        // Header plus six rows
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("Name"));
        assert!(lines[0].contains("Disease"));
        assert!(lines[1].contains("Ravi"));
        assert!(lines[1].contains("623001"));

        // All lines align to the same width
        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() <= width + 1));
    }

    #[test]
    fn test_render_empty_table() {
        let table = render_table(&[]);
        assert!(table.contains("(empty)"));
    }

    #[test]
    fn test_load_records_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.json");

        let json = r#"[
            {"name": "Asha", "age": 30, "zip": "560001", "disease": "Flu"},
            {"name": "Vik", "age": 31, "zip": "560002", "disease": "Covid"}
        ]"#;
        std::fs::write(&path, json).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Asha");
        assert_eq!(records[1].zip, "560002");
    }

    #[test]
    fn test_load_records_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, b"not json").unwrap();

        assert!(load_records(&path).is_err());
    }
}
