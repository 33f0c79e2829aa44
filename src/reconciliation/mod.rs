//! Reconciliation engine comparing reported company facts with reference data
//!
//! The engine is a pure function of the reported record, the reference row and
//! the static [`FIELD_SCHEMA`]. Verdicts come out in schema order, and a field
//! only gets a verdict when the reference row carries a column for it.

pub mod schema;

pub use schema::*;

use crate::types::*;

/// Reconcile a reported record against a reference row given as parallel slices
///
/// Every reference value is coerced before any verdict is returned, so a single
/// malformed value fails the whole call with `InvalidReferenceData`.
pub fn reconcile(
    reported: &ReportedRecord,
    column_names: &[String],
    reference_values: &[String],
) -> CheckResult<Vec<ComparisonVerdict>> {
    let mut verdicts = Vec::new();

    for spec in FIELD_SCHEMA {
        let Some(idx) = column_names.iter().position(|c| c == spec.name) else {
            continue;
        };

        let raw = reference_values
            .get(idx)
            .ok_or_else(|| CheckError::InvalidReferenceData {
                field: spec.name.to_string(),
                value: String::new(),
                expected: spec.kind,
            })?;
        let reference_value = spec.coerce(raw)?;

        let reported_value = reported.get(spec.name).cloned().unwrap_or_default();

        let verdict = ComparisonVerdict::new(spec.name.to_string(), reported_value, reference_value);
        tracing::debug!(field = spec.name, is_match = verdict.is_match, "compared field");
        verdicts.push(verdict);
    }

    Ok(verdicts)
}

/// Reconcile a reported record against a [`ReferenceRow`]
pub fn reconcile_row(
    reported: &ReportedRecord,
    row: &ReferenceRow,
) -> CheckResult<Vec<ComparisonVerdict>> {
    reconcile(reported, &row.column_names, &row.values)
}

/// Stateless engine handle, for callers that prefer a value to a free function
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconciliationEngine;

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self
    }

    /// See [`reconcile_row`]
    pub fn reconcile(
        &self,
        reported: &ReportedRecord,
        row: &ReferenceRow,
    ) -> CheckResult<Vec<ComparisonVerdict>> {
        reconcile_row(reported, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn record(pairs: &[(&str, FieldValue)]) -> ReportedRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_acme_scenario() {
        let columns = strings(&["company_name", "revenue_in_millions", "number_of_employees"]);
        let values = strings(&["Acme", "250.0", "1200"]);
        let reported = record(&[
            ("company_name", FieldValue::from("Acme")),
            ("revenue_in_millions", FieldValue::Decimal(250.0)),
            ("number_of_employees", FieldValue::Integer(1199)),
        ]);

        let verdicts = reconcile(&reported, &columns, &values).unwrap();

        assert_eq!(verdicts.len(), 3);
        assert_eq!(verdicts[0].field, COMPANY_NAME);
        assert!(verdicts[0].is_match);
        assert_eq!(verdicts[1].field, REVENUE_IN_MILLIONS);
        assert!(verdicts[1].is_match);
        assert_eq!(verdicts[2].field, NUMBER_OF_EMPLOYEES);
        assert!(!verdicts[2].is_match);
        assert_eq!(verdicts[2].reference_value, FieldValue::Integer(1200));
    }

    #[test]
    fn test_output_follows_schema_order_not_column_order() {
        let columns = strings(&["number_of_employees", "ceo", "company_name", "industry"]);
        let values = strings(&["10", "Jane Doe", "Acme", "Retail"]);

        let verdicts = reconcile(&ReportedRecord::new(), &columns, &values).unwrap();
        let fields: Vec<&str> = verdicts.iter().map(|v| v.field.as_str()).collect();

        assert_eq!(fields, vec![COMPANY_NAME, INDUSTRY, CEO, NUMBER_OF_EMPLOYEES]);
    }

    #[test]
    fn test_no_verdict_for_fields_missing_from_reference() {
        let columns = strings(&["company_name"]);
        let values = strings(&["Acme"]);
        let reported = record(&[
            ("company_name", FieldValue::from("Acme")),
            ("ebitda_margin", FieldValue::Decimal(0.2)),
            ("unknown_field", FieldValue::from("x")),
        ]);

        let verdicts = reconcile(&reported, &columns, &values).unwrap();

        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].field, COMPANY_NAME);
    }

    #[test]
    fn test_unknown_reference_columns_are_ignored() {
        let columns = strings(&["company_name", "founded"]);
        let values = strings(&["Acme", "not-a-number"]);

        let verdicts = reconcile(&ReportedRecord::new(), &columns, &values).unwrap();
        assert_eq!(verdicts.len(), 1);
    }

    #[test]
    fn test_decimal_match_and_text_mismatch() {
        let columns = strings(&["market_capitalization"]);
        let values = strings(&["1500.50"]);

        let numeric = record(&[("market_capitalization", FieldValue::Decimal(1500.5))]);
        let verdicts = reconcile(&numeric, &columns, &values).unwrap();
        assert_eq!(verdicts[0].reference_value, FieldValue::Decimal(1500.5));
        assert!(verdicts[0].is_match);

        let textual = record(&[("market_capitalization", FieldValue::from("1500.50"))]);
        let verdicts = reconcile(&textual, &columns, &values).unwrap();
        assert!(!verdicts[0].is_match);
    }

    #[test]
    fn test_missing_reported_value_is_null() {
        let columns = strings(&["debt_in_millions"]);
        let values = strings(&["42.5"]);

        let verdicts = reconcile(&ReportedRecord::new(), &columns, &values).unwrap();

        assert_eq!(verdicts[0].reported_value, FieldValue::Null);
        assert!(!verdicts[0].is_match);
    }

    #[test]
    fn test_boolean_reported_value_never_matches() {
        let columns = strings(&["company_name", "revenue_in_millions"]);
        let values = strings(&["Acme", "1"]);
        let reported = record(&[
            ("company_name", FieldValue::from("Acme")),
            ("revenue_in_millions", FieldValue::Other(serde_json::json!(true))),
            ("audited", FieldValue::Other(serde_json::json!(true))),
        ]);

        let verdicts = reconcile(&reported, &columns, &values).unwrap();

        assert_eq!(verdicts.len(), 2);
        assert!(verdicts[0].is_match);
        assert!(!verdicts[1].is_match);
    }

    #[test]
    fn test_text_comparison_is_case_sensitive() {
        let columns = strings(&["industry"]);
        let values = strings(&["Retail"]);
        let reported = record(&[("industry", FieldValue::from("retail"))]);

        let verdicts = reconcile(&reported, &columns, &values).unwrap();
        assert!(!verdicts[0].is_match);
    }

    #[test]
    fn test_malformed_reference_value_aborts() {
        let columns = strings(&["company_name", "revenue_in_millions"]);
        let values = strings(&["Acme", "N/A"]);
        let reported = record(&[("company_name", FieldValue::from("Acme"))]);

        let err = reconcile(&reported, &columns, &values).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReferenceData);
    }

    #[test]
    fn test_short_value_list_is_invalid_reference_data() {
        let columns = strings(&["company_name", "number_of_employees"]);
        let values = strings(&["Acme"]);

        let err = reconcile(&ReportedRecord::new(), &columns, &values).unwrap_err();
        assert!(matches!(
            err,
            CheckError::InvalidReferenceData { ref field, .. } if field == NUMBER_OF_EMPLOYEES
        ));
    }

    #[test]
    fn test_empty_reference_yields_no_verdicts() {
        let verdicts = reconcile(&ReportedRecord::new(), &[], &[]).unwrap();
        assert!(verdicts.is_empty());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let row = ReferenceRow::new(
            strings(&["company_name", "p_e_ratio", "location"]),
            strings(&["Acme", "18.4", "Berlin"]),
        )
        .unwrap();
        let reported = record(&[
            ("company_name", FieldValue::from("Acme")),
            ("p_e_ratio", FieldValue::Decimal(18.0)),
        ]);

        let engine = ReconciliationEngine::new();
        let first = engine.reconcile(&reported, &row).unwrap();
        let second = engine.reconcile(&reported, &row).unwrap();
        assert_eq!(first, second);
    }
}
