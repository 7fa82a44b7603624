// Error taxonomy shared across the pipeline

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required request field is missing or empty. The message names the
    /// field(s) and is surfaced verbatim to the caller.
    #[error("{0}")]
    Validation(String),

    /// The agent completed but produced no usable text.
    #[error("{agent} agent returned no output")]
    EmptyAgentOutput { agent: &'static str },

    /// Any failure inside the provider adapter (network, HTTP status,
    /// malformed body).
    #[error("{0}")]
    AgentApi(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyAgentOutput { .. } | AppError::AgentApi(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // The client only ever sees structured JSON; the full error stays
        // in the server log.
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation("Topic and audience are required".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Topic and audience are required");
    }

    #[test]
    fn empty_output_names_the_agent() {
        let err = AppError::EmptyAgentOutput { agent: "Research" };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Research agent returned no output");
    }

    #[test]
    fn agent_api_passes_the_adapter_message_through() {
        let err = AppError::AgentApi("OpenAI API error (500): upstream".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "OpenAI API error (500): upstream");
    }
}
