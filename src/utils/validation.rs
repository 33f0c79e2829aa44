//! Validation utilities

use std::collections::HashSet;

use crate::types::*;

/// Validate that a document reference is usable
pub fn validate_document_ref(document_ref: &str) -> CheckResult<()> {
    if document_ref.trim().is_empty() {
        return Err(CheckError::DocumentNotFound(
            "Document reference cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a company identifier is usable
pub fn validate_identifier(identifier: &str) -> CheckResult<()> {
    if identifier.trim().is_empty() {
        return Err(CheckError::MissingIdentity(
            "Company name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate a reference header and return the position of the identity column
pub fn validate_reference_header(
    column_names: &[String],
    identity_column: &str,
) -> CheckResult<usize> {
    if column_names.is_empty() {
        return Err(CheckError::ReferenceSource(
            "Reference header has no columns".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for name in column_names {
        if !seen.insert(name.as_str()) {
            return Err(CheckError::ReferenceSource(format!(
                "Reference header repeats column '{}'",
                name
            )));
        }
    }

    column_names
        .iter()
        .position(|c| c == identity_column)
        .ok_or_else(|| {
            CheckError::ReferenceSource(format!(
                "Reference header has no identity column '{}'",
                identity_column
            ))
        })
}

/// Case-insensitive exact comparison used for company lookups
pub fn identity_matches(candidate: &str, identifier: &str) -> bool {
    candidate.to_lowercase() == identifier.to_lowercase()
}
