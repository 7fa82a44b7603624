use axum::{
    extract::State,
    response::Json as ResponseJson,
    routing::post,
    Json, Router,
};
use crate::agents::ResearchAgent;
use crate::models::{ApiEnvelope, AppState, ResearchData, ResearchRequest};
use crate::types::AppResult;
use tracing::info;
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/research", post(run_research))
        .with_state(state)
}

async fn run_research(
    State(state): State<AppState>,
    Json(request): Json<ResearchRequest>,
) -> AppResult<ResponseJson<ApiEnvelope<ResearchData>>> {
    info!(
        request_id = %Uuid::new_v4(),
        topic = %request.topic,
        "Received research request"
    );

    let data = ResearchAgent::run(state.runner.as_ref(), &request).await?;

    Ok(Json(ApiEnvelope {
        success: true,
        data,
    }))
}
