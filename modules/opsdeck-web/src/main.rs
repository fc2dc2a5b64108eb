use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    response::Redirect,
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use opsdeck_common::Config;

mod auth;
mod components;
mod data;
mod pages;
mod templates;

pub struct AppState {
    pub config: Config,
    pub rate_limiter: Mutex<HashMap<IpAddr, Vec<Instant>>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("opsdeck_web=info".parse()?))
        .init();

    let config = Config::from_env();
    let addr = format!("{}:{}", config.web_host, config.web_port);

    let state = Arc::new(AppState {
        config,
        rate_limiter: Mutex::new(HashMap::new()),
    });

    let app = Router::new()
        // Health check
        .route("/health", get(|| async { "ok" }))
        // Access gate
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/logout", post(pages::logout))
        // Playbook pages (Dioxus SSR, session required)
        .route("/", get(|| async { Redirect::to("/sheet") }))
        .route("/sheet", get(pages::sheet_page))
        .route("/flywheel", get(pages::flywheel_page))
        .route("/rationale", get(pages::rationale_page))
        .route("/services", get(pages::services_page))
        .with_state(state)
        // Internal pages: never cache
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only (no query params, no IP)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    info!("Opsdeck starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
