use crate::artifacts::ScoringArtifacts;
use crate::config::Config;
use crate::errors::AppError;
use crate::models::RawFields;
use crate::recommendations::{recommend, RecommendationBundle};
use crate::scoring::{round2, round4, score_application};
use crate::tiers::RiskTier;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Immutable scoring artifacts loaded at startup.
    pub artifacts: Arc<ScoringArtifacts>,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-credit-risk-api",
            "version": "0.1.0"
        })),
    )
}

/// GET /api/v1/model
///
/// Exposes the loaded model's decision threshold and feature-schema summary,
/// so callers can display the cutoff alongside scoring results.
///
/// # Arguments
///
/// * `state` - The application state.
///
/// # Returns
///
/// * `Json<serde_json::Value>` - Threshold and schema summary JSON.
pub async fn model_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let artifacts = &state.artifacts;
    let domains: serde_json::Map<String, serde_json::Value> = artifacts
        .domains
        .iter()
        .map(|(field, values)| (field.to_string(), json!(values)))
        .collect();

    Json(json!({
        "model_path": state.config.model_path,
        "threshold": round4(artifacts.threshold),
        "threshold_percent": round2(artifacts.threshold * 100.0),
        "feature_columns": artifacts.schema.len(),
        "trees": artifacts.model.trees.len(),
        "categorical_domains": domains,
    }))
}

/// POST /api/v1/score
///
/// Scores one application from a flat map of named string fields and returns
/// the probability, decision threshold, risk tier and recommendations.
///
/// On failure the caller receives an error message plus the threshold fields,
/// with no partial scoring result.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `fields` - Flat string fields of the application.
///
/// # Returns
///
/// * `Response` - The scoring result JSON, or the error shape described above.
pub async fn score(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<RawFields>,
) -> Response {
    tracing::info!("POST /score - {} fields", fields.len());

    match score_application(&state.artifacts, &fields) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            let (status, message) = match &err {
                AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                AppError::Inference(msg) => {
                    tracing::error!("Unexpected inference error: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal scoring error".to_string(),
                    )
                }
                other => {
                    tracing::error!("Scoring failed: {}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            };

            let body = Json(json!({
                "error": format!("Error occurred: {}", message),
                "threshold": round4(state.artifacts.threshold),
                "threshold_percent": round2(state.artifacts.threshold * 100.0),
            }));
            (status, body).into_response()
        }
    }
}

/// GET /api/v1/recommendations/:tier
///
/// Looks up the static product catalog for a risk tier by name
/// (case-insensitive).
///
/// # Arguments
///
/// * `tier_name` - The tier name (Excellent/Good/Fair/Poor).
///
/// # Returns
///
/// * `Result<Json<RecommendationBundle>, AppError>` - The catalog bundle or a not-found error.
pub async fn recommendations_for_tier(
    Path(tier_name): Path<String>,
) -> Result<Json<RecommendationBundle>, AppError> {
    let tier: RiskTier = tier_name
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown risk tier '{}'", tier_name)))?;

    Ok(Json(recommend(tier)))
}
