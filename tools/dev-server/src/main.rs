//! Development Server for the route follow camera
//!
//! Serves the `web` directory (the page plus the wasm-pack output under
//! `web/pkg`) with MIME types browsers accept for module scripts and wasm.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context};
use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dev_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("PORT must be a port number, got {value:?}"))?,
        Err(_) => 8080,
    };
    let web_dir = PathBuf::from(std::env::var("WEB_DIR").unwrap_or_else(|_| "web".to_string()));
    if !web_dir.is_dir() {
        bail!("web directory {} does not exist", web_dir.display());
    }

    let serve_dir = ServeDir::new(&web_dir).precompressed_gzip().precompressed_br();
    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(axum::middleware::from_fn(add_headers))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(dir = %web_dir.display(), "serving http://localhost:{}", port);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Disable caching and fix MIME types
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // Rebuilt bundles must never be served stale
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    if let Some(content_type) = content_type_for(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    response
}

fn content_type_for(path: &str) -> Option<&'static str> {
    let extension = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match extension {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" | "geojson" => Some("application/json; charset=utf-8"),
        _ => None,
    }
}
