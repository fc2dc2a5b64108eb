//! Loads the stages document. The document is re-read on every page load so
//! edits show up without a restart; nothing is cached server-side.

use opsdeck_common::{Config, OpsdeckError, StagesDocument};

/// Load and parse the stages document from the configured source:
/// DATA_URL when set, DATA_PATH on disk otherwise.
pub async fn load_document(config: &Config) -> Result<StagesDocument, OpsdeckError> {
    let raw = match &config.data_url {
        Some(url) => fetch_remote(url).await?,
        None => tokio::fs::read_to_string(&config.data_path)
            .await
            .map_err(|e| OpsdeckError::DataLoad(format!("{}: {e}", config.data_path)))?,
    };
    serde_json::from_str(&raw).map_err(|e| OpsdeckError::DataShape(e.to_string()))
}

/// Fetch the document over HTTP with a cache-busting query parameter, so
/// intermediate caches never serve a stale model.
async fn fetch_remote(url: &str) -> Result<String, OpsdeckError> {
    let sep = if url.contains('?') { '&' } else { '?' };
    let busted = format!("{url}{sep}v={}", chrono::Utc::now().timestamp_millis());

    let resp = reqwest::get(&busted)
        .await
        .map_err(|e| OpsdeckError::DataLoad(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(OpsdeckError::DataLoad(format!(
            "{url} returned {}",
            resp.status()
        )));
    }
    resp.text()
        .await
        .map_err(|e| OpsdeckError::DataLoad(e.to_string()))
}
