use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::recommendations::RecommendationBundle;

// ============ Input Boundary ============

/// Flat map of named string fields as supplied by the serving layer.
///
/// Numeric fields arrive as strings and must be parsed; absent fields
/// default to zero or empty string per field.
pub type RawFields = HashMap<String, String>;

/// Typed applicant attributes parsed from the raw form fields.
///
/// Field names mirror the training data columns of the credit model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// Gender code ("M", "F"), trimmed and upper-cased.
    pub gender: String,
    /// Car ownership flag ("Y", "N"), trimmed and upper-cased.
    pub own_car: String,
    /// Realty ownership flag ("Y", "N"), trimmed and upper-cased.
    pub own_realty: String,
    /// Number of children.
    pub children: i64,
    /// Total yearly income.
    pub income_total: f64,
    /// Income type (e.g. "Working", "Pensioner").
    pub income_type: String,
    /// Education type (e.g. "Higher education").
    pub education_type: String,
    /// Family status (e.g. "Married").
    pub family_status: String,
    /// Housing type (e.g. "House / apartment").
    pub housing_type: String,
    /// Age in whole years. Non-negative.
    pub age_years: u32,
    /// Employment duration in years. Zero means not employed.
    pub employed_years: f64,
    /// Work phone flag (0/1).
    pub work_phone: i64,
    /// Phone flag (0/1).
    pub phone: i64,
    /// Email flag (0/1).
    pub email: i64,
    /// Number of family members.
    pub family_members: f64,
}

// ============ Feature Schema & Vector ============

/// Ordered, immutable sequence of feature column names fixed at
/// model-training time.
///
/// Length and order never change during the process lifetime.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Builds a schema from the ordered training column list.
    pub fn new(columns: Vec<String>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { columns, index }
    }

    /// Number of feature columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column in the schema, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

/// Numeric feature values aligned to a [`FeatureSchema`]: exactly one value
/// per schema column, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// An all-zero vector shaped for the given schema.
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            values: vec![0.0; schema.len()],
        }
    }

    /// Number of feature values. Always equals the schema length.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in schema order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Sets a column's value if the column exists in the schema.
    /// Columns outside the schema are dropped.
    pub fn set(&mut self, schema: &FeatureSchema, column: &str, value: f64) {
        if let Some(pos) = schema.position(column) {
            self.values[pos] = value;
        }
    }

    /// Reads a column's value by name.
    pub fn get(&self, schema: &FeatureSchema, column: &str) -> Option<f64> {
        schema.position(column).map(|pos| self.values[pos])
    }
}

// ============ Classification Result ============

/// Outcome of invoking the classifier on an encoded feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Probability of the bad-risk class, in [0, 1].
    pub probability: f64,
    /// Binary decision: true iff probability >= threshold.
    pub bad_risk: bool,
}

impl ClassificationResult {
    /// The decision as the conventional 0/1 integer (1 = bad risk).
    pub fn decision(&self) -> u8 {
        u8::from(self.bad_risk)
    }
}

// ============ Output Boundary ============

/// Structured scoring result produced for the serving layer.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    /// Bad-risk probability, rounded to 4 decimals.
    pub probability: f64,
    /// Bad-risk probability as a percentage, rounded to 2 decimals.
    pub probability_percent: f64,
    /// Decision threshold, rounded to 4 decimals.
    pub threshold: f64,
    /// Decision threshold as a percentage, rounded to 2 decimals.
    pub threshold_percent: f64,
    /// Human-readable result combining risk tier and eligibility.
    pub result: String,
    /// Either "good" or "bad".
    pub result_class: &'static str,
    /// Risk tier name (Excellent/Good/Fair/Poor).
    pub risk_level: &'static str,
    /// Product recommendations for the assessed tier.
    pub recommendations: RecommendationBundle,
    /// Echo of the applicant's age in years.
    pub user_age: u32,
    /// Echo of the applicant's employment duration in years.
    pub user_employment: f64,
}
