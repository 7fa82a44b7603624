use axum::{response::Json as ResponseJson, routing::get, Json, Router};
use crate::models::HealthResponse;

pub fn router() -> Router {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check() -> ResponseJson<HealthResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        message: "API server is running".to_string(),
    };

    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::body_json;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_returns_liveness_body() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"status": "ok", "message": "API server is running"})
        );
    }
}
