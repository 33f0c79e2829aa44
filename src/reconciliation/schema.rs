//! Field schema: the ordered catalog of reconcilable fields and their coercion rules

use crate::types::*;

pub const COMPANY_NAME: &str = "company_name";
pub const INDUSTRY: &str = "industry";
pub const MARKET_CAPITALIZATION: &str = "market_capitalization";
pub const REVENUE_IN_MILLIONS: &str = "revenue_in_millions";
pub const EBITDA_IN_MILLIONS: &str = "ebitda_in_millions";
pub const NET_INCOME_IN_MILLIONS: &str = "net_income_in_millions";
pub const DEBT_IN_MILLIONS: &str = "debt_in_millions";
pub const EQUITY_IN_MILLIONS: &str = "equity_in_millions";
pub const ENTERPRISE_VALUE_IN_MILLIONS: &str = "enterprise_value_in_millions";
pub const P_E_RATIO: &str = "p_e_ratio";
pub const REVENUE_GROWTH_RATE: &str = "revenue_growth_rate";
pub const EBITDA_MARGIN: &str = "ebitda_margin";
pub const NET_INCOME_MARGIN: &str = "net_income_margin";
pub const ROE_RETURN_ON_EQUITY: &str = "roe_return_on_equity";
pub const ROA_RETURN_ON_ASSETS: &str = "roa_return_on_assets";
pub const DEBT_TO_EQUITY_RATIO: &str = "debt_to_equity_ratio";
pub const LOCATION: &str = "location";
pub const CEO: &str = "ceo";
pub const NUMBER_OF_EMPLOYEES: &str = "number_of_employees";

/// A declared field and the type its reference value is coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Coerce a raw reference value for this field
    pub fn coerce(&self, raw: &str) -> CheckResult<FieldValue> {
        self.kind.coerce(self.name, raw)
    }
}

/// Every reconcilable field, in the order verdicts are reported
pub const FIELD_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new(COMPANY_NAME, FieldKind::Text),
    FieldSpec::new(INDUSTRY, FieldKind::Categorical),
    FieldSpec::new(MARKET_CAPITALIZATION, FieldKind::Decimal),
    FieldSpec::new(REVENUE_IN_MILLIONS, FieldKind::Decimal),
    FieldSpec::new(EBITDA_IN_MILLIONS, FieldKind::Decimal),
    FieldSpec::new(NET_INCOME_IN_MILLIONS, FieldKind::Decimal),
    FieldSpec::new(DEBT_IN_MILLIONS, FieldKind::Decimal),
    FieldSpec::new(EQUITY_IN_MILLIONS, FieldKind::Decimal),
    FieldSpec::new(ENTERPRISE_VALUE_IN_MILLIONS, FieldKind::Decimal),
    FieldSpec::new(P_E_RATIO, FieldKind::Decimal),
    FieldSpec::new(REVENUE_GROWTH_RATE, FieldKind::Decimal),
    FieldSpec::new(EBITDA_MARGIN, FieldKind::Decimal),
    FieldSpec::new(NET_INCOME_MARGIN, FieldKind::Decimal),
    FieldSpec::new(ROE_RETURN_ON_EQUITY, FieldKind::Decimal),
    FieldSpec::new(ROA_RETURN_ON_ASSETS, FieldKind::Decimal),
    FieldSpec::new(DEBT_TO_EQUITY_RATIO, FieldKind::Decimal),
    FieldSpec::new(LOCATION, FieldKind::Categorical),
    FieldSpec::new(CEO, FieldKind::Text),
    FieldSpec::new(NUMBER_OF_EMPLOYEES, FieldKind::Integer),
];

impl FieldKind {
    /// Convert a raw reference value into this kind's typed value
    ///
    /// Text and categorical values pass through untouched. Numeric values are
    /// trimmed before parsing; anything unparseable, and decimals that are not
    /// finite (`NaN`, `inf`), are `InvalidReferenceData`.
    pub fn coerce(&self, field: &str, raw: &str) -> CheckResult<FieldValue> {
        let invalid = || CheckError::InvalidReferenceData {
            field: field.to_string(),
            value: raw.to_string(),
            expected: *self,
        };

        match self {
            FieldKind::Text | FieldKind::Categorical => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Decimal => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FieldValue::Decimal)
                .ok_or_else(invalid),
            FieldKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| invalid()),
        }
    }
}

/// Look up a field's declaration by name
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELD_SCHEMA.iter().find(|spec| spec.name == name)
}

/// Field names in canonical order
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FIELD_SCHEMA.iter().map(|spec| spec.name)
}
