/// Feature encoding for the credit risk classifier
///
/// This module turns the raw string fields of an application into a feature
/// vector aligned to the model's training-time schema:
/// 1. Parse raw fields into a typed profile (absent fields default to 0/empty)
/// 2. Derive day-count features from age and employment duration
/// 3. Expand categorical fields into one-hot indicator columns
/// 4. Align the result to the schema: missing columns become 0, columns the
///    schema does not know are dropped
use crate::errors::AppError;
use crate::models::{ApplicantProfile, FeatureSchema, FeatureVector, RawFields};
use std::collections::BTreeMap;

/// Categorical fields expanded into indicator columns, in training order.
pub const CATEGORICAL_FIELDS: [&str; 7] = [
    "CODE_GENDER",
    "FLAG_OWN_CAR",
    "FLAG_OWN_REALTY",
    "NAME_INCOME_TYPE",
    "NAME_EDUCATION_TYPE",
    "NAME_FAMILY_STATUS",
    "NAME_HOUSING_TYPE",
];

/// Convert age in years to the DAYS_BIRTH feature (negative days since birth).
pub fn age_to_days_birth(age_years: u32) -> i64 {
    -((f64::from(age_years) * 365.25).floor() as i64)
}

/// Convert employment duration in years to the DAYS_EMPLOYED feature
/// (negative if employed, 0 means unemployed).
pub fn employment_years_to_days_employed(employment_years: f64) -> i64 {
    if employment_years == 0.0 {
        return 0;
    }
    -((employment_years * 365.25).floor() as i64)
}

fn raw_field<'a>(fields: &'a RawFields, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

fn upper_field(fields: &RawFields, name: &str) -> String {
    raw_field(fields, name).trim().to_uppercase()
}

fn trimmed_field(fields: &RawFields, name: &str) -> String {
    raw_field(fields, name).trim().to_string()
}

fn parse_u32_field(fields: &RawFields, name: &str) -> Result<u32, AppError> {
    match fields.get(name) {
        None => Ok(0),
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::Validation(format!(
                "{} must be a non-negative integer, got '{}'",
                name, raw
            ))
        }),
    }
}

fn parse_i64_field(fields: &RawFields, name: &str) -> Result<i64, AppError> {
    match fields.get(name) {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("{} must be an integer, got '{}'", name, raw))),
    }
}

fn parse_f64_field(fields: &RawFields, name: &str) -> Result<f64, AppError> {
    match fields.get(name) {
        None => Ok(0.0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", name, raw))),
    }
}

/// Parse the flat string fields of an application into a typed profile.
///
/// Absent fields default to 0 (numeric) or empty string (categorical).
/// Present but unparsable numeric fields fail with a validation error;
/// no partial profile is returned.
pub fn parse_profile(fields: &RawFields) -> Result<ApplicantProfile, AppError> {
    Ok(ApplicantProfile {
        gender: upper_field(fields, "CODE_GENDER"),
        own_car: upper_field(fields, "FLAG_OWN_CAR"),
        own_realty: upper_field(fields, "FLAG_OWN_REALTY"),
        children: parse_i64_field(fields, "CNT_CHILDREN")?,
        income_total: parse_f64_field(fields, "AMT_INCOME_TOTAL")?,
        income_type: trimmed_field(fields, "NAME_INCOME_TYPE"),
        education_type: trimmed_field(fields, "NAME_EDUCATION_TYPE"),
        family_status: trimmed_field(fields, "NAME_FAMILY_STATUS"),
        housing_type: trimmed_field(fields, "NAME_HOUSING_TYPE"),
        age_years: parse_u32_field(fields, "AGE_YEARS")?,
        employed_years: parse_f64_field(fields, "EMPLOYED_YEARS")?,
        work_phone: parse_i64_field(fields, "FLAG_WORK_PHONE")?,
        phone: parse_i64_field(fields, "FLAG_PHONE")?,
        email: parse_i64_field(fields, "FLAG_EMAIL")?,
        family_members: parse_f64_field(fields, "CNT_FAM_MEMBERS")?,
    })
}

/// Per-field legal value sets for the categorical fields, derived from the
/// training schema's indicator columns.
///
/// Deriving the domains once at artifact-load time makes encoding a direct
/// deterministic lookup and makes the unseen-category case an explicit
/// branch instead of a side effect of column-set reconciliation.
#[derive(Debug, Clone)]
pub struct CategoricalDomains {
    by_field: BTreeMap<&'static str, Vec<String>>,
}

impl CategoricalDomains {
    /// Scans the schema for `<FIELD>_<value>` indicator columns of each
    /// categorical field.
    pub fn from_schema(schema: &FeatureSchema) -> Self {
        let mut by_field = BTreeMap::new();
        for field in CATEGORICAL_FIELDS {
            let prefix = format!("{}_", field);
            let values: Vec<String> = schema
                .columns()
                .iter()
                .filter_map(|col| col.strip_prefix(&prefix))
                .map(str::to_string)
                .collect();
            by_field.insert(field, values);
        }
        Self { by_field }
    }

    /// Whether the value was seen for this field at training time.
    pub fn contains(&self, field: &str, value: &str) -> bool {
        self.by_field
            .get(field)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Known values for a field, in schema order.
    pub fn values(&self, field: &str) -> &[String] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates (field, known values) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.by_field.iter().map(|(f, v)| (*f, v.as_slice()))
    }
}

/// Encode a typed profile into a feature vector aligned to the schema.
///
/// The result has exactly one value per schema column, in schema order.
/// Numeric columns the schema does not carry are dropped; schema columns the
/// profile does not produce stay 0. A categorical value outside the field's
/// training domain activates no indicator, leaving the field's indicators
/// all zero (indistinguishable from an absent value).
pub fn encode(
    profile: &ApplicantProfile,
    schema: &FeatureSchema,
    domains: &CategoricalDomains,
) -> FeatureVector {
    let mut vector = FeatureVector::zeroed(schema);

    vector.set(schema, "CNT_CHILDREN", profile.children as f64);
    vector.set(schema, "AMT_INCOME_TOTAL", profile.income_total);
    vector.set(
        schema,
        "BIRTH(Years)",
        age_to_days_birth(profile.age_years) as f64,
    );
    vector.set(
        schema,
        "EMPLOYED(Years)",
        employment_years_to_days_employed(profile.employed_years) as f64,
    );
    vector.set(schema, "FLAG_WORK_PHONE", profile.work_phone as f64);
    vector.set(schema, "FLAG_PHONE", profile.phone as f64);
    vector.set(schema, "FLAG_EMAIL", profile.email as f64);
    vector.set(schema, "CNT_FAM_MEMBERS", profile.family_members);

    for (field, value) in categorical_values(profile) {
        if domains.contains(field, value) {
            vector.set(schema, &format!("{}_{}", field, value), 1.0);
        } else if !value.is_empty() {
            // Value never seen at training time: no indicator exists for it,
            // so the encoded vector keeps the all-indicators-absent baseline
            tracing::debug!("Unseen category for {}: '{}'", field, value);
        }
    }

    vector
}

/// The profile's categorical fields paired with their raw values.
fn categorical_values(profile: &ApplicantProfile) -> [(&'static str, &str); 7] {
    [
        ("CODE_GENDER", profile.gender.as_str()),
        ("FLAG_OWN_CAR", profile.own_car.as_str()),
        ("FLAG_OWN_REALTY", profile.own_realty.as_str()),
        ("NAME_INCOME_TYPE", profile.income_type.as_str()),
        ("NAME_EDUCATION_TYPE", profile.education_type.as_str()),
        ("NAME_FAMILY_STATUS", profile.family_status.as_str()),
        ("NAME_HOUSING_TYPE", profile.housing_type.as_str()),
    ]
}
