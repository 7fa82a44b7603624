use crate::config::Config;
use crate::llm::AgentRunner;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub runner: Arc<dyn AgentRunner>,
}

// API Request/Response types
//
// Wire field names are camelCase to match the frontend payloads. Every
// request field deserializes with a default so that a missing required
// field reaches stage validation (which names it in the 400 message)
// instead of failing JSON extraction.

fn default_tone() -> String {
    "Informative".to_string()
}

fn default_length() -> String {
    "Medium (~750 words)".to_string()
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub proprietary_data: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub research_notes: String,
    #[serde(default)]
    pub potential_urls: Vec<String>,
    #[serde(default)]
    pub proprietary_data: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub research_notes: String,
    #[serde(default)]
    pub potential_urls: Vec<String>,
    #[serde(default)]
    pub outline_content: String,
    #[serde(default)]
    pub proprietary_data: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Success envelope wrapping every stage response.
#[derive(Debug, serde::Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchData {
    pub keywords: Vec<String>,
    pub research_notes: String,
    pub potential_urls: Vec<String>,
    /// Original unparsed agent text, preserved for audit and fallback.
    pub raw_output: String,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineData {
    pub outline_content: String,
    pub raw_output: String,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingData {
    pub blog_post: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
