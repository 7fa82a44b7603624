use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use seo_pipeline::llm::OpenAiRunner;
use seo_pipeline::{config::Config, routes::create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seo_pipeline=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; aborts startup when OPENAI_API_KEY is missing
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Create shared state
    let runner = Arc::new(OpenAiRunner::new(&config.agent));
    let state = AppState {
        config: config.clone(),
        runner,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let host: IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
