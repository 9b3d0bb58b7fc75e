use haccp_certgen::{config, routes, state};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haccp_certgen=info,tower_http=info".into()),
        )
        .init();

    let config = config::Config::from_env();
    let addr = format!("{}:{}", config.host, config.port);

    let state = Arc::new(state::AppState::new(config)?);
    let app = routes::build_router(state);

    tracing::info!("HACCP certificate generator listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
