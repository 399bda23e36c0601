use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub model_path: String,
    pub threshold_path: String,
    pub train_columns_path: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/random_forest.json".to_string())
                .trim()
                .to_string(),
            threshold_path: std::env::var("THRESHOLD_PATH")
                .unwrap_or_else(|_| "models/best_threshold.txt".to_string())
                .trim()
                .to_string(),
            train_columns_path: std::env::var("TRAIN_COLUMNS_PATH")
                .unwrap_or_else(|_| "models/train_columns.json".to_string())
                .trim()
                .to_string(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        if config.model_path.is_empty() {
            anyhow::bail!("MODEL_PATH cannot be empty");
        }
        if config.threshold_path.is_empty() {
            anyhow::bail!("THRESHOLD_PATH cannot be empty");
        }
        if config.train_columns_path.is_empty() {
            anyhow::bail!("TRAIN_COLUMNS_PATH cannot be empty");
        }

        // Log successful configuration load
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Model path: {}", config.model_path);
        tracing::debug!("Threshold path: {}", config.threshold_path);
        tracing::debug!("Train columns path: {}", config.train_columns_path);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
