use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::auth::{self, Session};
use crate::components::{
    map_stages, render_flywheel, render_login, render_master_sheet, render_rationale,
    render_services,
};
use crate::data;
use crate::AppState;

/// Max login attempts per IP per hour.
const AUTH_RATE_LIMIT_PER_HOUR: usize = 10;

// --- Access gate pages (no Session required) ---

pub async fn login_page() -> impl IntoResponse {
    Html(render_login(None))
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<std::net::SocketAddr>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response {
    // Rate limit login attempts
    {
        let mut limiter = state.rate_limiter.lock().await;
        let entries = limiter.entry(addr.ip()).or_default();
        if !auth::check_rate_limit(entries, Instant::now(), AUTH_RATE_LIMIT_PER_HOUR) {
            return Html(render_login(Some(
                "Too many attempts. Try again later.".to_string(),
            )))
            .into_response();
        }
    }

    // A missing password is just a wrong password; the form reports both the
    // same way.
    if auth::password_matches(&form.password, &state.config.access_password) {
        let secret = auth::session_secret(&state.config);
        let cookie = auth::session_cookie(secret);
        Response::builder()
            .status(StatusCode::SEE_OTHER)
            .header("location", "/sheet")
            .header("set-cookie", cookie)
            .body(axum::body::Body::empty())
            .unwrap()
    } else {
        Html(render_login(Some("Incorrect password.".to_string()))).into_response()
    }
}

pub async fn logout() -> Response {
    let cookie = auth::clear_session_cookie();
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header("location", "/login")
        .header("set-cookie", cookie)
        .body(axum::body::Body::empty())
        .unwrap()
}

#[derive(serde::Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

// --- Playbook pages (Session required) ---

pub async fn sheet_page(
    _session: Session,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match data::load_document(&state.config).await {
        Ok(doc) => {
            if doc.stages.is_none() {
                warn!("stages document is missing the `stages` field");
            }
            Html(render_master_sheet(doc.stage_records().to_vec()))
        }
        Err(e) => {
            warn!(error = %e, "Failed to load stages document");
            Html("<h1>Error loading the operations sheet</h1>".to_string())
        }
    }
}

pub async fn flywheel_page(
    _session: Session,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match data::load_document(&state.config).await {
        Ok(doc) => Html(render_flywheel(map_stages(&doc))),
        Err(e) => {
            warn!(error = %e, "Failed to load stages document");
            Html("<h1>Error loading the flywheel</h1>".to_string())
        }
    }
}

pub async fn rationale_page(_session: Session) -> impl IntoResponse {
    Html(render_rationale())
}

pub async fn services_page(_session: Session) -> impl IntoResponse {
    Html(render_services())
}
