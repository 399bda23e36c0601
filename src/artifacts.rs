//! Startup loading of the trained artifacts: classifier, decision threshold
//! and feature schema. Loaded once, shared read-only for the process lifetime.

use crate::config::Config;
use crate::encoder::CategoricalDomains;
use crate::forest::ForestModel;
use crate::models::FeatureSchema;
use std::fs;

/// The immutable (model, threshold, schema) triad plus the categorical
/// domains derived from the schema.
#[derive(Debug, Clone)]
pub struct ScoringArtifacts {
    /// Trained tree-ensemble classifier.
    pub model: ForestModel,
    /// Probability cutoff at or above which an applicant is bad risk.
    pub threshold: f64,
    /// Ordered feature columns the model expects at inference time.
    pub schema: FeatureSchema,
    /// Per-field legal categorical values, derived from the schema.
    pub domains: CategoricalDomains,
}

impl ScoringArtifacts {
    /// Loads and cross-validates the artifact triad from the configured paths.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let model = ForestModel::from_file(&config.model_path)?;

        let raw_threshold = fs::read_to_string(&config.threshold_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read threshold file {}: {}",
                config.threshold_path,
                e
            )
        })?;
        let threshold: f64 = raw_threshold.trim().parse().map_err(|_| {
            anyhow::anyhow!(
                "Threshold file {} must contain a single float, got '{}'",
                config.threshold_path,
                raw_threshold.trim()
            )
        })?;

        let raw_columns = fs::read_to_string(&config.train_columns_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to read train columns file {}: {}",
                config.train_columns_path,
                e
            )
        })?;
        let columns: Vec<String> = serde_json::from_str(&raw_columns).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse train columns file {}: {}",
                config.train_columns_path,
                e
            )
        })?;

        let artifacts = Self::from_parts(model, threshold, columns)?;
        tracing::info!(
            "Artifacts loaded: {} trees, {} feature columns, threshold {}",
            artifacts.model.trees.len(),
            artifacts.schema.len(),
            artifacts.threshold
        );
        Ok(artifacts)
    }

    /// Assembles and validates artifacts from already-loaded parts.
    pub fn from_parts(
        model: ForestModel,
        threshold: f64,
        columns: Vec<String>,
    ) -> anyhow::Result<Self> {
        if columns.is_empty() {
            anyhow::bail!("Train columns list cannot be empty");
        }
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("Threshold must be within [0, 1], got {}", threshold);
        }
        if model.n_features != columns.len() {
            anyhow::bail!(
                "Model expects {} features but the schema has {} columns",
                model.n_features,
                columns.len()
            );
        }

        let schema = FeatureSchema::new(columns);
        let domains = CategoricalDomains::from_schema(&schema);
        Ok(Self {
            model,
            threshold,
            schema,
            domains,
        })
    }
}
