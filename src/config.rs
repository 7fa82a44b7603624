use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub openai_api_key: String,
    pub model: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if
    /// present). Fails when `OPENAI_API_KEY` is absent; the server must
    /// not start without a credential.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            agent: AgentConfig {
                openai_api_key: env::var("OPENAI_API_KEY")
                    .context("OPENAI_API_KEY must be set in the environment or a .env file")?,
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1".to_string()),
                base_url: env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            },
        })
    }
}
