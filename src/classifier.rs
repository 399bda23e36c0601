use crate::errors::AppError;
use crate::models::{ClassificationResult, FeatureVector};

/// Trained classifier exposing a probability-of-bad-risk operation.
///
/// The production implementation is the JSON-loaded tree ensemble
/// ([`crate::forest::ForestModel`]); tests substitute stubs.
pub trait ProbabilityModel: Send + Sync {
    /// Number of feature columns the model was trained on.
    fn n_features(&self) -> usize;

    /// Probability of the bad-risk class for one encoded sample.
    ///
    /// Fails with an inference error if the vector's width does not match
    /// the training schema.
    fn predict_proba(&self, features: &[f64]) -> Result<f64, AppError>;
}

/// Run the classifier on an encoded vector and apply the decision threshold.
///
/// The decision is 1 (bad risk) iff the probability is greater than or
/// equal to the threshold. The threshold is loaded once at startup and
/// never mutated.
pub fn classify(
    model: &dyn ProbabilityModel,
    vector: &FeatureVector,
    threshold: f64,
) -> Result<ClassificationResult, AppError> {
    let probability = model.predict_proba(vector.as_slice())?;
    Ok(ClassificationResult {
        probability,
        bad_risk: probability >= threshold,
    })
}
