//! Prediction exchange with `POST /api/predict`.
//!
//! Client-side (csr): real HTTP via `gloo-net` in [`GlooTransport`].
//! Native builds (tests, server-side reuse of the types) only get the
//! transport-independent parts.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per submission, no retry. Outcomes are returned as
//! [`PredictError`] so the caller decides how to present them; this module
//! never alerts on its own.

use thiserror::Error;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{PredictResponse, PredictionRequest, RankedResults};

/// Server-relative prediction endpoint.
pub const PREDICT_ENDPOINT: &str = "/api/predict";

/// Alert shown for any transport or parse failure. The cause is only logged.
pub const CONNECT_FAILED_ALERT: &str = "Failed to connect to AI server.";

/// Alert shown when the backend reports success with nothing to rank.
pub const EMPTY_RANKING_ALERT: &str = "No recommendations were returned.";

/// Stand-in when a non-success envelope carries no message.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// The backend answered with a non-success status.
    #[error("prediction rejected: {message}")]
    Rejected { message: String },

    /// The backend answered "success" with an empty or missing list.
    #[error("prediction returned no recommendations")]
    EmptyRanking,

    /// Network failure, timeout, or a body that is not a valid envelope.
    #[error("prediction transport failed: {0}")]
    Transport(String),
}

impl PredictError {
    /// Text for the blocking alert shown to the user.
    #[must_use]
    pub fn alert_text(&self) -> String {
        match self {
            Self::Rejected { message } => format!("Error: {message}"),
            Self::EmptyRanking => EMPTY_RANKING_ALERT.to_owned(),
            Self::Transport(_) => CONNECT_FAILED_ALERT.to_owned(),
        }
    }
}

/// Classify a parsed envelope.
///
/// # Errors
///
/// [`PredictError::Rejected`] for any status other than `"success"`, and
/// [`PredictError::EmptyRanking`] for a success without results.
pub fn interpret_response(response: PredictResponse) -> Result<RankedResults, PredictError> {
    if !response.is_success() {
        let message = response.message.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned());
        return Err(PredictError::Rejected { message });
    }
    response
        .recommendations
        .and_then(RankedResults::new)
        .ok_or(PredictError::EmptyRanking)
}

/// One request/response exchange with the prediction endpoint.
#[allow(async_fn_in_trait)]
pub trait PredictTransport {
    /// Send `request` and parse the response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Transport`] if the exchange or JSON parse fails.
    async fn send(&self, request: &PredictionRequest) -> Result<PredictResponse, PredictError>;
}

/// Send `request` through `transport` and classify the outcome.
///
/// # Errors
///
/// Propagates transport failures and the classification errors of
/// [`interpret_response`].
pub async fn predict(
    transport: &impl PredictTransport,
    request: &PredictionRequest,
) -> Result<RankedResults, PredictError> {
    let response = transport.send(request).await?;
    interpret_response(response)
}

/// Browser transport over `fetch`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
impl PredictTransport for GlooTransport {
    async fn send(&self, request: &PredictionRequest) -> Result<PredictResponse, PredictError> {
        let resp = gloo_net::http::Request::post(PREDICT_ENDPOINT)
            .json(request)
            .map_err(|e| PredictError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        // The envelope's `status` decides the outcome, not the HTTP status.
        resp.json::<PredictResponse>()
            .await
            .map_err(|e| PredictError::Transport(format!("status {}: {e}", resp.status())))
    }
}
