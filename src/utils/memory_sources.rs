//! In-memory collaborators for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::reconciliation::COMPANY_NAME;
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::*;

/// In-memory document extractor for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryExtractor {
    documents: Arc<RwLock<HashMap<String, ReportedRecord>>>,
}

impl MemoryExtractor {
    /// Create an empty extractor
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the record a document reference extracts to
    pub fn insert(&self, document_ref: impl Into<String>, record: ReportedRecord) -> CheckResult<()> {
        self.documents
            .write()
            .map_err(|_| CheckError::Extraction("document store lock poisoned".to_string()))?
            .insert(document_ref.into(), record);
        Ok(())
    }

    /// Clear all documents (useful for testing)
    pub fn clear(&self) -> CheckResult<()> {
        self.documents
            .write()
            .map_err(|_| CheckError::Extraction("document store lock poisoned".to_string()))?
            .clear();
        Ok(())
    }
}

#[async_trait]
impl DocumentExtractor for MemoryExtractor {
    async fn extract(&self, document_ref: &str) -> CheckResult<ReportedRecord> {
        validate_document_ref(document_ref)?;

        self.documents
            .read()
            .map_err(|_| CheckError::Extraction("document store lock poisoned".to_string()))?
            .get(document_ref)
            .cloned()
            .ok_or_else(|| CheckError::DocumentNotFound(document_ref.to_string()))
    }
}

/// In-memory reference dataset for testing and development
#[derive(Debug, Clone)]
pub struct MemoryReferenceSource {
    column_names: Vec<String>,
    identity_idx: usize,
    rows: Arc<RwLock<Vec<Vec<String>>>>,
}

impl MemoryReferenceSource {
    /// Create an empty dataset keyed on `company_name`
    pub fn new(column_names: Vec<String>) -> CheckResult<Self> {
        Self::with_identity_column(column_names, COMPANY_NAME)
    }

    /// Create an empty dataset keyed on a custom identity column
    pub fn with_identity_column(
        column_names: Vec<String>,
        identity_column: &str,
    ) -> CheckResult<Self> {
        let identity_idx = validate_reference_header(&column_names, identity_column)?;
        Ok(Self {
            column_names,
            identity_idx,
            rows: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Append a row; its length must match the header
    pub fn push_row(&self, values: Vec<String>) -> CheckResult<()> {
        let row = ReferenceRow::new(self.column_names.clone(), values)?;
        self.rows
            .write()
            .map_err(|_| CheckError::ReferenceSource("reference store lock poisoned".to_string()))?
            .push(row.values);
        Ok(())
    }

    /// Number of rows held
    pub fn len(&self) -> CheckResult<usize> {
        self.rows
            .read()
            .map(|rows| rows.len())
            .map_err(|_| CheckError::ReferenceSource("reference store lock poisoned".to_string()))
    }

    pub fn is_empty(&self) -> CheckResult<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl ReferenceSource for MemoryReferenceSource {
    async fn lookup(&self, identifier: &str) -> CheckResult<ReferenceRow> {
        let rows = self
            .rows
            .read()
            .map_err(|_| CheckError::ReferenceSource("reference store lock poisoned".to_string()))?;

        rows.iter()
            .find(|row| identity_matches(&row[self.identity_idx], identifier))
            .map(|row| ReferenceRow {
                column_names: self.column_names.clone(),
                values: row.clone(),
            })
            .ok_or_else(|| CheckError::CompanyNotFound(identifier.to_string()))
    }
}
