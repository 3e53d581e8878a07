// src/config.rs
use serde::Deserialize;
use crate::errors::{PredictError, Result};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Where the prediction service lives.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the service; `/predict` is appended to it.
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base: default_api_base() }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// If `PREDICTOR_CONFIG` points at a TOML file it is read first, then
    /// `PREDICTOR_API_BASE` overrides whatever it set.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var("PREDICTOR_CONFIG").ok();
        let api_base = std::env::var("PREDICTOR_API_BASE").ok();
        Self::from_sources(path.as_deref(), api_base.as_deref())
    }

    /// File first, then the override; validated only once both are applied.
    fn from_sources(path: Option<&str>, api_base: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::parse_toml(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };

        if let Some(api_base) = api_base {
            config.api_base = api_base.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &str) -> Result<Self> {
        Self::from_sources(Some(path), None)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config = Self::parse_toml(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Full URL of the prediction endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_base.trim_end_matches('/'))
    }

    fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(PredictError::Config("api_base must not be empty".to_string()));
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(PredictError::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }
        Ok(())
    }
}
