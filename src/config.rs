//! Service configuration loaded from TOML

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::reconciliation::COMPANY_NAME;
use crate::types::*;

/// Top-level configuration for a file-backed check service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
}

/// Where the reference dataset lives and how rows are keyed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceConfig {
    #[serde(default = "default_reference_path")]
    pub path: PathBuf,
    #[serde(default = "default_identity_column")]
    pub identity_column: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            path: default_reference_path(),
            identity_column: default_identity_column(),
        }
    }
}

/// Where uploaded documents are resolved from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentsConfig {
    /// Base directory for relative document references
    #[serde(default)]
    pub root: Option<PathBuf>,
}

fn default_reference_path() -> PathBuf {
    PathBuf::from("data/database.csv")
}

fn default_identity_column() -> String {
    COMPANY_NAME.to_string()
}

impl CheckConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(input: &str) -> CheckResult<Self> {
        toml::from_str(input).map_err(|e| CheckError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> CheckResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|e| CheckError::Config(format!("cannot read '{}': {}", path.display(), e)))?;
        Self::from_toml_str(&input)
    }
}
