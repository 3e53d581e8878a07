// src/handler.rs
use uuid::Uuid;

use crate::client::PredictionService;
use crate::container::{ResultContainer, SharedContainer};
use crate::errors::Result;
use crate::form::FieldSource;
use crate::models::{PredictionOutcome, PredictionRequest};
use crate::render::render_outcome;

/// Submits the form values and renders whatever comes back into the
/// result container.
///
/// Invocations are independent: nothing orders or cancels them, so when
/// several are in flight the one whose response arrives last owns the
/// container afterwards.
pub struct PredictionFormHandler<S, C> {
    service: S,
    container: SharedContainer<C>,
}

impl<S, C> PredictionFormHandler<S, C>
where
    S: PredictionService,
    C: ResultContainer,
{
    pub fn new(service: S, container: SharedContainer<C>) -> Self {
        Self { service, container }
    }

    pub fn container(&self) -> &SharedContainer<C> {
        &self.container
    }

    /// One round trip: request, outcome, container overwrite.
    pub async fn handle(&self, request: PredictionRequest) -> PredictionOutcome {
        let invocation = Uuid::new_v4();

        log::info!(
            "[{}] 🎯 Predicting {} vs {} at {}",
            invocation, request.team1, request.team2, request.venue
        );

        let outcome = PredictionOutcome::from(self.service.predict(&request).await);

        match &outcome {
            PredictionOutcome::Success(p) => log::info!(
                "[{}] 🏆 {} ({}% / {}%)",
                invocation, p.winner, p.team1_confidence, p.team2_confidence
            ),
            PredictionOutcome::ApplicationError(message) => {
                log::warn!("[{}] ⚠️  Service rejected input: {}", invocation, message)
            }
            PredictionOutcome::TransportError(e) => {
                log::error!("[{}] ❌ Prediction failed: {}", invocation, e)
            }
        }

        let markup = render_outcome(&outcome);
        self.container.lock().await.replace_content(markup);
        log::debug!("[{}] wrote {} outcome to container", invocation, outcome.label());

        outcome
    }

    /// Reads the six named controls from `source`, then behaves like
    /// [`handle`](Self::handle). A missing control fails before any request
    /// is made and leaves the container untouched.
    pub async fn handle_fields(&self, source: &impl FieldSource) -> Result<PredictionOutcome> {
        let request = PredictionRequest::from_fields(source)?;
        Ok(self.handle(request).await)
    }
}
