use traffic_types::{TrafficError, PREDICT_PATH};

/// Environment variable naming the prediction service origin.
pub const API_URL_ENV: &str = "TRAFFIC_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where prediction requests go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `TRAFFIC_API_URL`, falling back to the local default.
    pub fn from_env() -> Result<Self, TrafficError> {
        match std::env::var(API_URL_ENV) {
            Ok(url) => Self::parse(&url),
            Err(std::env::VarError::NotPresent) => Ok(Self::new(DEFAULT_BASE_URL)),
            Err(e) => Err(TrafficError::Config(format!("{API_URL_ENV}: {e}"))),
        }
    }

    /// Validate a user-supplied origin such as `http://localhost:8000/`.
    pub fn parse(url: &str) -> Result<Self, TrafficError> {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(TrafficError::Config("prediction service URL is empty".into()));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(TrafficError::Config(format!(
                "prediction service URL must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(Self::new(trimmed))
    }

    /// Full URL of the prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }
}
