//! Core types and data structures for the company data check

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Semantic type of a reconcilable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text (company name, executive name), compared case-sensitively
    Text,
    /// Floating-point financial figure (revenue, margins, ratios)
    Decimal,
    /// Whole-number count (employees)
    Integer,
    /// Categorical text (industry, location), compared case-sensitively
    Categorical,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Decimal => write!(f, "decimal"),
            Self::Integer => write!(f, "integer"),
            Self::Categorical => write!(f, "categorical"),
        }
    }
}

/// A single reported or reference value
///
/// Serialized untagged, so a JSON document maps onto it directly:
/// `null`, strings and numbers. Whole JSON numbers land in `Integer`,
/// everything else numeric lands in `Decimal`. Booleans, arrays and objects
/// are kept as `Other` so that unrelated document keys never fail extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Integer(i64),
    Decimal(f64),
    Text(String),
    /// Any other JSON shape; never equal to a reference value
    Other(serde_json::Value),
}

impl FieldValue {
    /// Whether this value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Borrow the inner string of a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Equality used for verdicts.
///
/// Values of the same variant compare structurally. `Integer` and `Decimal`
/// compare numerically. Text never equals a number and `Null` only equals `Null`.
/// `Other` only equals an identical `Other`, which reference coercion never produces.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a == b,
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a == b,
            (FieldValue::Other(a), FieldValue::Other(b)) => a == b,
            (FieldValue::Integer(a), FieldValue::Decimal(b))
            | (FieldValue::Decimal(b), FieldValue::Integer(a)) => (*a as f64) == *b,
            _ => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

/// Facts claimed by a document, keyed by field name
pub type ReportedRecord = HashMap<String, FieldValue>;

/// Raw reference values positionally aligned to their column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRow {
    /// Column names in source order
    pub column_names: Vec<String>,
    /// Raw text values, `values[i]` belongs to `column_names[i]`
    pub values: Vec<String>,
}

impl ReferenceRow {
    /// Create a reference row, checking that names and values line up
    pub fn new(column_names: Vec<String>, values: Vec<String>) -> CheckResult<Self> {
        if column_names.len() != values.len() {
            return Err(CheckError::ReferenceSource(format!(
                "reference row has {} values for {} columns",
                values.len(),
                column_names.len()
            )));
        }

        Ok(Self {
            column_names,
            values,
        })
    }

    /// Raw value for a column, if the column exists
    pub fn get(&self, column: &str) -> Option<&str> {
        self.column_names
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }
}

/// Outcome of comparing one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonVerdict {
    /// Schema field name
    pub field: String,
    /// Value claimed by the document (`Null` when absent)
    pub reported_value: FieldValue,
    /// Reference value after coercion to the field's type
    pub reference_value: FieldValue,
    /// Whether both values are equal
    #[serde(rename = "match")]
    pub is_match: bool,
}

impl ComparisonVerdict {
    /// Build a verdict, deriving the match flag from the two values
    pub fn new(field: String, reported_value: FieldValue, reference_value: FieldValue) -> Self {
        let is_match = reported_value == reference_value;
        Self {
            field,
            reported_value,
            reference_value,
            is_match,
        }
    }
}

/// Request accepted by the check service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDataCheckRequest {
    /// Locator of the uploaded document
    pub file_path: String,
}

impl CompanyDataCheckRequest {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

/// Verdicts for one check together with a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Unique identifier for this check
    pub request_id: Uuid,
    /// Company the document was reconciled against
    pub company_name: String,
    /// When the check ran
    pub checked_at: NaiveDateTime,
    /// Per-field verdicts in schema order
    pub verdicts: Vec<ComparisonVerdict>,
    /// Number of matching fields
    pub matched: usize,
    /// Number of mismatching fields
    pub mismatched: usize,
}

impl CheckReport {
    /// Create a report for a verdict set
    pub fn new(company_name: String, verdicts: Vec<ComparisonVerdict>) -> Self {
        let matched = verdicts.iter().filter(|v| v.is_match).count();
        let mismatched = verdicts.len() - matched;
        Self {
            request_id: Uuid::new_v4(),
            company_name,
            checked_at: chrono::Utc::now().naive_utc(),
            verdicts,
            matched,
            mismatched,
        }
    }

    /// True when every compared field matched
    pub fn all_match(&self) -> bool {
        self.mismatched == 0
    }

    /// Verdicts that did not match
    pub fn mismatches(&self) -> impl Iterator<Item = &ComparisonVerdict> {
        self.verdicts.iter().filter(|v| !v.is_match)
    }
}

/// Caller-visible failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Document or reference row does not resolve
    NotFound,
    /// Reference value violates its declared type
    InvalidReferenceData,
    /// Anything else
    Unexpected,
}

impl ErrorKind {
    /// HTTP-style status code for this category
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidReferenceData | ErrorKind::Unexpected => 500,
        }
    }
}

/// Errors that can occur while checking company data
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckError {
    #[error("Document not found: {0}")]
    DocumentNotFound(String),
    #[error("Company not found: {0}")]
    CompanyNotFound(String),
    #[error("Invalid reference data for '{field}': '{value}' is not a valid {expected}")]
    InvalidReferenceData {
        field: String,
        value: String,
        expected: FieldKind,
    },
    #[error("Missing company identity: {0}")]
    MissingIdentity(String),
    #[error("Extraction error: {0}")]
    Extraction(String),
    #[error("Reference source error: {0}")]
    ReferenceSource(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckError {
    /// Failure category used for status mapping
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::DocumentNotFound(_) | CheckError::CompanyNotFound(_) => {
                ErrorKind::NotFound
            }
            CheckError::InvalidReferenceData { .. } => ErrorKind::InvalidReferenceData,
            CheckError::MissingIdentity(_)
            | CheckError::Extraction(_)
            | CheckError::ReferenceSource(_)
            | CheckError::Config(_) => ErrorKind::Unexpected,
        }
    }
}

/// Result type for company data check operations
pub type CheckResult<T> = Result<T, CheckError>;
