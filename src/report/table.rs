use anyhow::*;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::ReportError;

// The export uses a literal "-" for intentionally blank cells.
pub const PLACEHOLDER: &str = "-";

pub fn is_blank(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == PLACEHOLDER
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttemptRow {
    fields: HashMap<String, String>,
}

impl AttemptRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        AttemptRow { fields }
    }

    pub fn value(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttemptTable {
    columns: Vec<String>,
    rows: Vec<AttemptRow>,
}

impl AttemptTable {
    pub fn open(source: &Path) -> Result<AttemptTable> {
        let file =
            File::open(source).context(ReportError::InputUnavailable(source.to_owned()))?;
        let mut csv_reader = csv::Reader::from_reader(file);

        let columns: Vec<String> = csv_reader
            .headers()
            .context(ReportError::InputUnavailable(source.to_owned()))?
            .iter()
            .map(str::to_owned)
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            let fields: HashMap<String, String> =
                record.with_context(|| ReportError::InputUnavailable(source.to_owned()))?;
            rows.push(AttemptRow::new(fields));
        }

        Ok(AttemptTable { columns, rows })
    }

    pub fn new(columns: Vec<String>, rows: Vec<AttemptRow>) -> Self {
        AttemptTable { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[AttemptRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_reads_as_none() {
        let mut fields = HashMap::new();
        fields.insert("Username".to_owned(), "".to_owned());
        let row = AttemptRow::new(fields);

        assert_eq!(row.value("Username"), Some(""));
        assert_eq!(row.value("Status"), None);
    }

    #[test]
    fn blank_values_include_the_placeholder() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("-"));
        assert!(is_blank(" - "));
        assert!(!is_blank("A"));
    }

    #[test]
    fn open_reports_input_unavailable_for_missing_file() {
        let error = AttemptTable::open(Path::new("no-such-file.csv")).unwrap_err();
        assert!(error.to_string().contains("input unavailable"));
    }
}
