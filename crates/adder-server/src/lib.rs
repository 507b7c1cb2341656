//! HTTP surface of the adder service: router, layers and server entry points.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
mod shutdown;

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::{ConfigError, ServerConfig};
pub use shutdown::shutdown_signal;

/// Builds the application: `POST /add` behind a permissive CORS layer and
/// per-request tracing.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route("/add", post(handlers::add::add))
        .layer(cors)
        .layer(trace_layer)
}

/// Serves `app` on an already bound listener until `shutdown` resolves,
/// then waits for in-flight requests to finish.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

/// Binds the configured address and serves [`router`] until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {config}"))?;
    info!("Starting server on {}", listener.local_addr()?);

    serve(listener, router(), shutdown_signal()).await
}
