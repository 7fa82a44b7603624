use axum::{
    extract::State,
    response::Json as ResponseJson,
    routing::post,
    Json, Router,
};
use crate::agents::OutlineAgent;
use crate::models::{ApiEnvelope, AppState, OutlineData, OutlineRequest};
use crate::types::AppResult;
use tracing::info;
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/outline", post(run_outline))
        .with_state(state)
}

async fn run_outline(
    State(state): State<AppState>,
    Json(request): Json<OutlineRequest>,
) -> AppResult<ResponseJson<ApiEnvelope<OutlineData>>> {
    info!(
        request_id = %Uuid::new_v4(),
        keyword_count = request.keywords.len(),
        "Received outline request"
    );

    let data = OutlineAgent::run(state.runner.as_ref(), &request).await?;

    Ok(Json(ApiEnvelope {
        success: true,
        data,
    }))
}
