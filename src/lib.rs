//! # Company Data Check
//!
//! Reconciles company financial facts claimed in an uploaded document against
//! an authoritative reference dataset, producing a per-field verdict.
//!
//! ## Features
//!
//! - **Field schema**: a fixed, ordered catalog of reconcilable fields with typed coercion
//! - **Reconciliation**: pure, deterministic comparison of reported vs reference values
//! - **Collaborator traits**: plug in any document extractor or reference dataset
//! - **File-backed defaults**: JSON documents and a CSV reference dataset, configured via TOML
//! - **Error categories**: not-found vs invalid reference data vs unexpected failures
//!
//! ## Quick Start
//!
//! ```rust
//! use company_data_check::{reconcile, FieldValue, ReportedRecord};
//!
//! let columns = vec!["company_name".to_string(), "number_of_employees".to_string()];
//! let values = vec!["Acme".to_string(), "1200".to_string()];
//!
//! let mut reported = ReportedRecord::new();
//! reported.insert("company_name".to_string(), FieldValue::from("Acme"));
//! reported.insert("number_of_employees".to_string(), FieldValue::Integer(1199));
//!
//! let verdicts = reconcile(&reported, &columns, &values).unwrap();
//! assert!(verdicts[0].is_match);
//! assert!(!verdicts[1].is_match);
//! ```

pub mod config;
pub mod reconciliation;
pub mod service;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use reconciliation::*;
pub use service::*;
pub use traits::*;
pub use types::*;
