use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidInterval { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub app_id: String,
    pub access_token: Option<String>,
    pub poll_interval_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            app_id: "campus-lost-found".to_string(),
            access_token: None,
            poll_interval_secs: 10,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads `CAMPUS_*` variables: from the process environment on native
    /// builds, baked in at compile time for the browser.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(lookup)
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = get("CAMPUS_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(app_id) = get("CAMPUS_APP_ID") {
            config.app_id = app_id;
        }
        config.access_token = get("CAMPUS_ACCESS_TOKEN").filter(|t| !t.is_empty());
        if let Some(secs) = get("CAMPUS_POLL_INTERVAL_SECS") {
            config.poll_interval_secs = match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidInterval {
                        name: "CAMPUS_POLL_INTERVAL_SECS",
                        value: secs,
                    })
                }
            };
        }
        if let Some(level) = get("CAMPUS_LOG_LEVEL") {
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup(name: &'static str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn lookup(name: &'static str) -> Option<String> {
    let value = match name {
        "CAMPUS_API_BASE_URL" => option_env!("CAMPUS_API_BASE_URL"),
        "CAMPUS_APP_ID" => option_env!("CAMPUS_APP_ID"),
        "CAMPUS_ACCESS_TOKEN" => option_env!("CAMPUS_ACCESS_TOKEN"),
        "CAMPUS_POLL_INTERVAL_SECS" => option_env!("CAMPUS_POLL_INTERVAL_SECS"),
        "CAMPUS_LOG_LEVEL" => option_env!("CAMPUS_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}
