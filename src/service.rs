//! Check service that ties extraction, reference lookup and reconciliation together

use serde::{Deserialize, Serialize};

use crate::config::CheckConfig;
use crate::reconciliation::{reconcile_row, COMPANY_NAME};
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::validate_identifier;
use crate::utils::{CsvReferenceSource, JsonDocumentExtractor};

/// Detail shown to callers for failures that are not "not found"
pub const INTERNAL_ERROR_DETAIL: &str = "Something went wrong";

/// Caller-facing failure, safe to serialize in a response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub detail: String,
}

impl From<&CheckError> for ErrorResponse {
    fn from(err: &CheckError) -> Self {
        let kind = err.kind();
        let detail = match kind {
            ErrorKind::NotFound => err.to_string(),
            ErrorKind::InvalidReferenceData | ErrorKind::Unexpected => {
                INTERNAL_ERROR_DETAIL.to_string()
            }
        };
        Self {
            status: kind.status_code(),
            detail,
        }
    }
}

/// Reconciles an uploaded document against the reference dataset
///
/// Holds no mutable state; one value can serve any number of concurrent requests.
pub struct CompanyDataCheckService<E: DocumentExtractor, R: ReferenceSource> {
    extractor: E,
    reference: R,
}

impl<E: DocumentExtractor, R: ReferenceSource> CompanyDataCheckService<E, R> {
    /// Create a service with the given collaborators
    pub fn new(extractor: E, reference: R) -> Self {
        Self {
            extractor,
            reference,
        }
    }

    /// Extract the document, look up its company and reconcile every field
    pub async fn check_data(
        &self,
        request: &CompanyDataCheckRequest,
    ) -> CheckResult<Vec<ComparisonVerdict>> {
        let (_, verdicts) = self.run(request).await?;
        Ok(verdicts)
    }

    /// Same as [`check_data`](Self::check_data), wrapped in a summarised report
    pub async fn check_report(&self, request: &CompanyDataCheckRequest) -> CheckResult<CheckReport> {
        let (company_name, verdicts) = self.run(request).await?;
        let report = CheckReport::new(company_name, verdicts);

        tracing::info!(
            request_id = %report.request_id,
            company = %report.company_name,
            matched = report.matched,
            mismatched = report.mismatched,
            "company data check finished"
        );
        Ok(report)
    }

    /// Boundary entry point: maps failures to caller-visible status categories
    pub async fn handle(
        &self,
        request: &CompanyDataCheckRequest,
    ) -> Result<Vec<ComparisonVerdict>, ErrorResponse> {
        self.check_data(request).await.map_err(|err| {
            match err.kind() {
                ErrorKind::NotFound => {
                    tracing::warn!(file_path = %request.file_path, error = %err, "company data check: not found");
                }
                ErrorKind::InvalidReferenceData | ErrorKind::Unexpected => {
                    tracing::error!(file_path = %request.file_path, error = %err, "company data check failed");
                }
            }
            ErrorResponse::from(&err)
        })
    }

    async fn run(
        &self,
        request: &CompanyDataCheckRequest,
    ) -> CheckResult<(String, Vec<ComparisonVerdict>)> {
        tracing::debug!(file_path = %request.file_path, "extracting document");
        let reported = self.extractor.extract(&request.file_path).await?;

        let company_name = company_identity(&reported)?;
        tracing::debug!(company = %company_name, "looking up reference row");
        let row = self.reference.lookup(&company_name).await?;

        let verdicts = reconcile_row(&reported, &row)?;
        Ok((company_name, verdicts))
    }
}

impl CompanyDataCheckService<JsonDocumentExtractor, CsvReferenceSource> {
    /// Build a file-backed service from configuration
    pub fn from_config(config: &CheckConfig) -> Self {
        let extractor = match &config.documents.root {
            Some(root) => JsonDocumentExtractor::with_root(root),
            None => JsonDocumentExtractor::new(),
        };
        let reference = CsvReferenceSource::with_identity_column(
            &config.reference.path,
            &config.reference.identity_column,
        );
        Self::new(extractor, reference)
    }
}

/// The company name a reported record claims to describe
fn company_identity(reported: &ReportedRecord) -> CheckResult<String> {
    let name = match reported.get(COMPANY_NAME) {
        Some(value) if !value.is_null() => value.as_text().ok_or_else(|| {
            CheckError::MissingIdentity(format!("'{}' is not text: {:?}", COMPANY_NAME, value))
        })?,
        _ => {
            return Err(CheckError::MissingIdentity(format!(
                "document does not report '{}'",
                COMPANY_NAME
            )))
        }
    };

    validate_identifier(name)?;
    Ok(name.to_string())
}
