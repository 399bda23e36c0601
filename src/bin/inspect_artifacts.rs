//! Utility to inspect the scoring artifacts and print the loaded schema.

use dotenvy::dotenv;
use rust_credit_risk_api::artifacts::ScoringArtifacts;
use rust_credit_risk_api::config::Config;

/// Main entry point for the artifact inspection utility.
///
/// Loads the model, threshold and feature schema from the configured paths
/// and prints a summary of what the classifier expects.
fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;
    let artifacts = ScoringArtifacts::load(&config)?;

    println!("Model: {}", config.model_path);
    println!("- trees: {}", artifacts.model.trees.len());
    println!("- features: {}", artifacts.model.n_features);
    println!();
    println!(
        "Threshold: {} ({}%)",
        artifacts.threshold,
        artifacts.threshold * 100.0
    );
    println!();
    println!("Feature columns ({}):", artifacts.schema.len());
    for column in artifacts.schema.columns() {
        println!("  - {}", column);
    }
    println!();
    println!("Categorical domains:");
    for (field, values) in artifacts.domains.iter() {
        println!("  - {}: {:?}", field, values);
    }

    Ok(())
}
