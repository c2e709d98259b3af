use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub azure_openai_api_key: String,
    pub azure_openai_endpoint: String,
    pub azure_openai_api_version: String,
    pub azure_openai_embedding_deployment: String,
    pub parallel_api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            azure_openai_api_key: env::var("AZURE_OPENAI_API_KEY")
                .context("AZURE_OPENAI_API_KEY must be set")?,
            azure_openai_endpoint: env::var("AZURE_OPENAI_ENDPOINT")
                .context("AZURE_OPENAI_ENDPOINT must be set")?,
            azure_openai_api_version: env::var("AZURE_OPENAI_API_VERSION")
                .unwrap_or_else(|_| "2024-10-21".to_string()),
            azure_openai_embedding_deployment: env::var("AZURE_OPENAI_EMBEDDING_DEPLOYMENT")
                .unwrap_or_else(|_| "text-embedding-3-small".to_string()),
            parallel_api_key: env::var("PARALLEL_API_KEY").ok(),
        })
    }
}
