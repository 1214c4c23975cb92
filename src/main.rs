use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use book_assistant::infrastructure::answer::HttpAnswerClient;
use book_assistant::infrastructure::observability::{TracingConfig, init_tracing};
use book_assistant::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    let tracing_config = TracingConfig::new(
        environment.to_string(),
        settings.logging.level.clone(),
        settings.logging.enable_json,
    );
    init_tracing(&tracing_config, settings.server.port);

    let upstream = Arc::new(HttpAnswerClient::new(settings.relay.upstream_url.clone()));
    tracing::info!(upstream = %upstream.endpoint(), "Relaying to upstream answer service");

    let state = AppState::new(upstream, settings.relay.clone());
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
