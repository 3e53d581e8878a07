// src/client.rs

use reqwest::Client;
use std::time::Instant;

use crate::config::AppConfig;
use crate::errors::{PredictError, Result};
use crate::models::{PredictionRequest, PredictionResponse};

/// Something that can turn a form submission into a prediction response.
///
/// Like the other async seams in this crate this is not using async_trait,
/// so implementers return the future directly.
pub trait PredictionService: Send + Sync {
    /// Sends one request and decodes the body.
    ///
    /// An `{"error": ...}` body is a successful call and comes back as
    /// `PredictionResponse::Error`; network failures, non-2xx statuses and
    /// malformed bodies are `Err`.
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> impl std::future::Future<Output = Result<PredictionResponse>> + Send;
}

/// HTTP client for the `/predict` endpoint.
#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    config: AppConfig,
}

impl PredictionClient {
    pub fn new(client: Client, config: AppConfig) -> Self {
        Self { client, config }
    }
}

impl PredictionService for PredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let url = self.config.predict_url();

        log::debug!("📡 POST {} ({} vs {})", url, request.team1, request.team2);

        let start = Instant::now();

        // .json() sets Content-Type: application/json
        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Prediction service responded {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(PredictError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let body = resp.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        PredictionResponse::from_value(value)
    }
}
