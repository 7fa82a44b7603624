use axum::{
    extract::State,
    response::Json as ResponseJson,
    routing::post,
    Json, Router,
};
use crate::agents::WritingAgent;
use crate::models::{ApiEnvelope, AppState, WritingData, WritingRequest};
use crate::types::AppResult;
use tracing::info;
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/write", post(run_writing))
        .with_state(state)
}

async fn run_writing(
    State(state): State<AppState>,
    Json(request): Json<WritingRequest>,
) -> AppResult<ResponseJson<ApiEnvelope<WritingData>>> {
    info!(
        request_id = %Uuid::new_v4(),
        outline_len = request.outline_content.len(),
        "Received writing request"
    );

    let data = WritingAgent::run(state.runner.as_ref(), &request).await?;

    Ok(Json(ApiEnvelope {
        success: true,
        data,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_json, json_request, state_with_stub};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn missing_outline_returns_400_even_when_other_fields_are_populated() {
        let (state, runner) = state_with_stub("unused");
        let response = router(state)
            .oneshot(json_request(
                "/api/write",
                json!({
                    "topic": "Electric Vehicles",
                    "audience": "New car buyers",
                    "keywords": ["EV range"],
                    "researchNotes": "EVs cost less over time.",
                    "potentialUrls": ["https://example.gov/ev-report"],
                    "sessionId": "session-1"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Outline content is required");
        assert_eq!(runner.call_count(), 0);
    }

    #[tokio::test]
    async fn success_returns_blog_post() {
        let (state, _runner) = state_with_stub("# Why EVs Win\n\nBody with citations.");
        let response = router(state)
            .oneshot(json_request(
                "/api/write",
                json!({
                    "outlineContent": "# EV Guide\n1. Intro",
                    "sessionId": "session-1"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["blogPost"], "# Why EVs Win\n\nBody with citations.");
    }
}
