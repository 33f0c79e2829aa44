//! Traits for the collaborators the check service depends on

use async_trait::async_trait;

use crate::types::*;

/// Source of reported facts
///
/// This trait allows the check service to work with any document backend
/// (PDF extraction, OCR pipeline, pre-parsed JSON, in-memory, etc.).
/// Implementations should not block the calling task.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extract the reported record for a document.
    ///
    /// Returns `CheckError::DocumentNotFound` when the reference does not resolve.
    async fn extract(&self, document_ref: &str) -> CheckResult<ReportedRecord>;
}

/// Authoritative reference dataset
///
/// Implementations should not block the calling task; file-backed sources
/// read through `tokio::fs`.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Find the reference row for a company.
    ///
    /// Matching is case-insensitive and exact on the identity column; when
    /// several rows match, the first one wins. Returns
    /// `CheckError::CompanyNotFound` when no row matches.
    async fn lookup(&self, identifier: &str) -> CheckResult<ReferenceRow>;
}
