//! CSV-backed reference dataset

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::reconciliation::COMPANY_NAME;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::*;

/// Reference dataset stored as a CSV file whose header row names the columns
///
/// The file is read asynchronously on every lookup, so edits to the dataset
/// are picked up without rebuilding the source.
#[derive(Debug, Clone)]
pub struct CsvReferenceSource {
    path: PathBuf,
    identity_column: String,
}

impl CsvReferenceSource {
    /// Create a source keyed on `company_name`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_identity_column(path, COMPANY_NAME)
    }

    /// Create a source keyed on a custom identity column
    pub fn with_identity_column(path: impl Into<PathBuf>, identity_column: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            identity_column: identity_column.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn identity_column(&self) -> &str {
        &self.identity_column
    }

    /// Find the first row whose identity column matches, scanning CSV text
    pub fn lookup_in(&self, csv_data: &str, identifier: &str) -> CheckResult<ReferenceRow> {
        // Rows for other companies may be any width; only the returned row is checked
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let column_names: Vec<String> = reader
            .headers()
            .map_err(|e| CheckError::ReferenceSource(e.to_string()))?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let identity_idx = validate_reference_header(&column_names, &self.identity_column)?;

        for record in reader.records() {
            let record = record.map_err(|e| CheckError::ReferenceSource(e.to_string()))?;
            let matches = record
                .get(identity_idx)
                .is_some_and(|candidate| identity_matches(candidate, identifier));
            if matches {
                let values = record.iter().map(|v| v.to_string()).collect();
                return ReferenceRow::new(column_names, values);
            }
        }

        Err(CheckError::CompanyNotFound(identifier.to_string()))
    }
}

#[async_trait]
impl ReferenceSource for CsvReferenceSource {
    async fn lookup(&self, identifier: &str) -> CheckResult<ReferenceRow> {
        let csv_data = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CheckError::ReferenceSource(format!(
                "cannot read reference file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %self.path.display(), identifier, "scanning reference dataset");
        self.lookup_in(&csv_data, identifier)
    }
}
