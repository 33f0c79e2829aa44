//! Extractor for documents already parsed into JSON

use async_trait::async_trait;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::*;

/// Reads a JSON object of `field -> value` for each document reference
///
/// Relative references resolve against `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct JsonDocumentExtractor {
    root: Option<PathBuf>,
}

impl JsonDocumentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative document references against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Path a document reference resolves to
    pub fn resolve(&self, document_ref: &str) -> PathBuf {
        let path = Path::new(document_ref);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Parse a document body into a reported record
    pub fn parse(body: &str) -> CheckResult<ReportedRecord> {
        serde_json::from_str(body).map_err(|e| CheckError::Extraction(e.to_string()))
    }
}

#[async_trait]
impl DocumentExtractor for JsonDocumentExtractor {
    async fn extract(&self, document_ref: &str) -> CheckResult<ReportedRecord> {
        validate_document_ref(document_ref)?;

        let path = self.resolve(document_ref);
        let body = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            IoErrorKind::NotFound => CheckError::DocumentNotFound(document_ref.to_string()),
            _ => CheckError::Extraction(format!("cannot read '{}': {}", path.display(), e)),
        })?;

        Self::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let record = JsonDocumentExtractor::parse(
            r#"{"company_name": "Acme", "ebitda_margin": 0.21, "ceo": null}"#,
        )
        .unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record["ebitda_margin"], FieldValue::Decimal(0.21));
    }

    #[test]
    fn test_parse_keeps_unsupported_values() {
        let record = JsonDocumentExtractor::parse(
            r#"{"company_name":"Acme","audited":true,"revenue_in_millions":250.0}"#,
        )
        .unwrap();

        assert_eq!(record["company_name"], FieldValue::from("Acme"));
        assert_eq!(record["revenue_in_millions"], FieldValue::Decimal(250.0));
        assert!(matches!(record["audited"], FieldValue::Other(_)));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            JsonDocumentExtractor::parse("[1, 2, 3]"),
            Err(CheckError::Extraction(_))
        ));
    }

    #[test]
    fn test_resolve_against_root() {
        let extractor = JsonDocumentExtractor::with_root("/srv/uploads");
        assert_eq!(
            extractor.resolve("acme.json"),
            PathBuf::from("/srv/uploads/acme.json")
        );
        assert_eq!(extractor.resolve("/tmp/x.json"), PathBuf::from("/tmp/x.json"));
    }

    #[tokio::test]
    async fn test_extract_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("acme.json"), r#"{"company_name":"Acme"}"#).unwrap();
        let extractor = JsonDocumentExtractor::with_root(dir.path());

        let record = extractor.extract("acme.json").await.unwrap();
        assert_eq!(record["company_name"], FieldValue::from("Acme"));

        assert!(matches!(
            extractor.extract("missing.json").await,
            Err(CheckError::DocumentNotFound(_))
        ));
    }
}
