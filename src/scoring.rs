/// Shared scoring workflow for the HTTP handlers
///
/// This module provides the linear per-request pipeline:
/// 1. Parse raw fields into a typed applicant profile
/// 2. Encode the profile into a schema-aligned feature vector
/// 3. Classify the vector and apply the decision threshold
/// 4. Map the result to a risk tier
/// 5. Build the recommendation bundle and response
use crate::artifacts::ScoringArtifacts;
use crate::classifier::classify;
use crate::encoder::{encode, parse_profile};
use crate::errors::AppError;
use crate::models::{RawFields, ScoreResponse};
use crate::recommendations::recommend;
use crate::tiers::tier;

/// Round to 4 decimal places (probability and threshold reporting).
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Round to 2 decimal places (percentage reporting).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Complete scoring workflow for one application.
///
/// No state is retained between calls; the artifacts are read-only.
pub fn score_application(
    artifacts: &ScoringArtifacts,
    fields: &RawFields,
) -> Result<ScoreResponse, AppError> {
    tracing::info!("Step 1: Parsing applicant fields");
    let profile = parse_profile(fields)?;

    tracing::info!(
        "Step 2: Encoding features ({} schema columns)",
        artifacts.schema.len()
    );
    let vector = encode(&profile, &artifacts.schema, &artifacts.domains);

    tracing::info!("Step 3: Classifying");
    let result = classify(&artifacts.model, &vector, artifacts.threshold)?;

    let risk_tier = tier(&result);
    tracing::info!(
        "Scored application: probability {:.4}, decision {}, tier {}",
        result.probability,
        result.decision(),
        risk_tier.name()
    );

    tracing::info!("Step 4: Building recommendations");
    let recommendations = recommend(risk_tier);

    Ok(ScoreResponse {
        probability: round4(result.probability),
        probability_percent: round2(result.probability * 100.0),
        threshold: round4(artifacts.threshold),
        threshold_percent: round2(artifacts.threshold * 100.0),
        result: risk_tier.result_text().to_string(),
        result_class: risk_tier.result_class(),
        risk_level: risk_tier.name(),
        recommendations,
        user_age: profile.age_years,
        user_employment: profile.employed_years,
    })
}
