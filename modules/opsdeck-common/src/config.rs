use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Access gate
    pub access_password: String,
    pub session_secret: String,

    // Stages document
    pub data_url: Option<String>,
    pub data_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
            access_password: required_env("ACCESS_PASSWORD"),
            session_secret: env::var("SESSION_SECRET").unwrap_or_default(),
            data_url: env::var("DATA_URL").ok().filter(|v| !v.is_empty()),
            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "data/stages-data.json".to_string()),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
