//! Shared-password access gate.
//!
//! One password admits the whole team; there are no per-user identities.
//! The password itself never leaves the server, but anyone holding it gets
//! in. This is an access convenience for internal pages, not a substitute
//! for real access control.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use opsdeck_common::Config;

use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

const COOKIE_NAME: &str = "ops_session";
const SESSION_DURATION_SECS: i64 = 24 * 3600; // 24 hours
const SESSION_DURATION_MS: i64 = SESSION_DURATION_SECS * 1000;

/// Return the session signing secret. Prefers SESSION_SECRET env var;
/// falls back to the access password (for dev compatibility).
pub fn session_secret(config: &Config) -> &str {
    if config.session_secret.is_empty() {
        &config.access_password
    } else {
        &config.session_secret
    }
}

/// Check a submitted password against the configured one.
pub fn password_matches(candidate: &str, expected: &str) -> bool {
    constant_time_eq(candidate.as_bytes(), expected.as_bytes())
}

/// Authenticated session. Extract this in handlers that require the gate.
/// If the session cookie is missing or invalid, returns a redirect to /login.
pub struct Session {
    pub issued_at_ms: i64,
}

impl FromRequestParts<Arc<AppState>> for Session {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if let Some(value) = parse_cookie(cookie_header, COOKIE_NAME) {
            let now = chrono::Utc::now().timestamp_millis();
            if let Some(issued_at_ms) = verify_session(value, session_secret(&state.config), now) {
                return Ok(Session { issued_at_ms });
            }
        }

        // Not authenticated — redirect to login
        Err(Redirect::to("/login").into_response())
    }
}

/// Create a signed session cookie value: `issued_at_ms|signature`
pub fn create_session(secret: &str, now_ms: i64) -> String {
    let payload = now_ms.to_string();
    let sig = sign(&payload, secret);
    format!("{payload}|{sig}")
}

/// Build the Set-Cookie header value.
/// In release builds, adds `Secure` flag to prevent transmission over HTTP.
pub fn session_cookie(secret: &str) -> String {
    let value = create_session(secret, chrono::Utc::now().timestamp_millis());
    let secure = if cfg!(debug_assertions) { "" } else { "; Secure" };
    format!(
        "{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_DURATION_SECS}{secure}"
    )
}

/// Build a Set-Cookie header that clears the session. Clearing is an explicit
/// operation (logout); verification never mutates anything.
pub fn clear_session_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Verify a session cookie value against `now_ms`. Returns the issuance
/// timestamp if the signature checks out and the 24h window has not elapsed.
fn verify_session(value: &str, secret: &str, now_ms: i64) -> Option<i64> {
    let (payload, sig) = value.split_once('|')?;

    let expected_sig = sign(payload, secret);
    if !constant_time_eq(sig.as_bytes(), expected_sig.as_bytes()) {
        return None;
    }

    let issued_at: i64 = payload.parse().ok()?;
    if now_ms - issued_at > SESSION_DURATION_MS {
        return None;
    }

    Some(issued_at)
}

fn sign(payload: &str, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time comparison to prevent timing attacks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Parse a specific cookie from the Cookie header string.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    for part in header.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(name) {
            if let Some(value) = value.strip_prefix('=') {
                return Some(value);
            }
        }
    }
    None
}

/// Sliding-window rate limit for login attempts. Prunes entries older than
/// an hour, then admits the attempt if the window still has room.
pub fn check_rate_limit(entries: &mut Vec<Instant>, now: Instant, max_per_hour: usize) -> bool {
    let cutoff = now - std::time::Duration::from_secs(3600);
    entries.retain(|t| *t > cutoff);
    if entries.len() >= max_per_hour {
        return false;
    }
    entries.push(now);
    true
}
