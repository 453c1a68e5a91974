use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use journeymap_core::loader::load_map_data;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use journeymap_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journeymap_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();
    let map_config = config.map_config().context("Failed to load map configuration")?;

    tracing::info!(
        port = config.port,
        data_path = %map_config.data_path.value.display(),
        validity = ?map_config.validity.value,
        "Starting Journeymap API server"
    );

    let data = load_map_data(&map_config.data_path.value, map_config.validity.value)
        .with_context(|| {
            format!("Failed to load dataset from {}", map_config.data_path.value.display())
        })?;

    let state = Arc::new(AppState::from_config(data, &map_config));

    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await?;

    Ok(())
}
