// src/models.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{PredictError, Result};

/// The six form values sent to `/predict`, verbatim from the inputs.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub toss_winner: String,
    pub toss_decision: String,
    pub season: String,
}

/// A successful prediction as returned by the service.
///
/// Confidences are expected in 0..=100 but nothing here checks that, nor
/// that the two add up to 100.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prediction {
    pub winner: String,
    pub team1: String,
    pub team2: String,
    pub team1_confidence: f64,
    pub team2_confidence: f64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResponse {
    Error { error: String },
    Success(Prediction),
}

impl PredictionResponse {
    /// Classifies a decoded JSON body. The `error` field wins whenever it is
    /// present and not null, regardless of what else the body carries.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(PredictError::UnexpectedResponse(value.to_string()));
        }

        let error = match value.get("error") {
            None | Some(Value::Null) => None,
            Some(Value::String(message)) => Some(message.clone()),
            Some(other) => Some(other.to_string()),
        };

        match error {
            Some(error) => Ok(PredictionResponse::Error { error }),
            None => {
                let prediction: Prediction = serde_json::from_value(value)?;
                Ok(PredictionResponse::Success(prediction))
            }
        }
    }
}

impl<'de> Deserialize<'de> for PredictionResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        PredictionResponse::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// What one form submission ended in. Callers have to handle all three.
#[derive(Debug)]
pub enum PredictionOutcome {
    Success(Prediction),
    ApplicationError(String),
    TransportError(PredictError),
}

impl PredictionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            PredictionOutcome::Success(_) => "success",
            PredictionOutcome::ApplicationError(_) => "application_error",
            PredictionOutcome::TransportError(_) => "transport_error",
        }
    }
}

impl From<Result<PredictionResponse>> for PredictionOutcome {
    fn from(result: Result<PredictionResponse>) -> Self {
        match result {
            Ok(PredictionResponse::Success(prediction)) => PredictionOutcome::Success(prediction),
            Ok(PredictionResponse::Error { error }) => PredictionOutcome::ApplicationError(error),
            Err(e) => PredictionOutcome::TransportError(e),
        }
    }
}
