pub mod error;
pub mod logging;
pub mod relay;
pub mod routes;
pub mod state;

use axum::routing::{any, post};
use axum::Router;
use rasp_core::config::RelayConfig;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

/// Build the axum Router with all webhook routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: state::AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(logging::make_request_span)
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    Router::new()
        .route("/", any(logging::default_handler))
        .route("/rasp/status", post(routes::status::post_status))
        .route("/slack", post(routes::slack::slack_events))
        .fallback(logging::default_handler)
        .layer(trace)
        .with_state(app_state)
}

/// Start the relay server on `0.0.0.0:<config.port>`.
pub async fn serve(config: &RelayConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    serve_on(config, listener).await
}

/// Start the relay server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(config: &RelayConfig, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(state::AppState::new(config)?);

    if config.slack.credentials().is_none() {
        tracing::warn!("SLACK_TOKEN or SLACK_CHANNEL not set; status relay disabled");
    }
    tracing::info!("rasp-relay listening on http://0.0.0.0:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
