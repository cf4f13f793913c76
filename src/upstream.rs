//! Prediction backend client.
//!
//! DESIGN
//! ======
//! The relay never interprets a prediction. Any JSON object carrying a string
//! `status` counts as an envelope and its bytes are passed back exactly as the
//! backend sent them, whatever HTTP status came with it. The envelope's own
//! `status` is what the browser acts on. Only a transport failure or a body
//! that is not an envelope is an error.

use std::time::Duration;

use client::net::types::PredictionRequest;
use serde_json::Value;
use thiserror::Error;

use crate::config::UpstreamTimeouts;

/// Longest upstream body excerpt kept in an error.
const ERROR_BODY_EXCERPT: usize = 200;

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// Connect, timeout, or body read failure.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// Non-success HTTP status with a body that is not an envelope.
    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Success status with a body that is not an envelope.
    #[error("upstream response parse failed: {0}")]
    Parse(String),
}

/// Something that can turn a prediction request into a response envelope.
#[async_trait::async_trait]
pub trait PredictionUpstream: Send + Sync {
    /// Forward `request` and return the backend's envelope as sent.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when no envelope could be obtained.
    async fn predict(&self, request: &PredictionRequest) -> Result<Envelope, UpstreamError>;
}

/// [`PredictionUpstream`] over HTTP with `reqwest`.
pub struct HttpUpstream {
    http: reqwest::Client,
    url: String,
}

impl HttpUpstream {
    /// # Errors
    ///
    /// Returns [`UpstreamError::HttpClientBuild`] if the client cannot be built.
    pub fn new(url: impl Into<String>, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl PredictionUpstream for HttpUpstream {
    async fn predict(&self, request: &PredictionRequest) -> Result<Envelope, UpstreamError> {
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| UpstreamError::Request(e.to_string()))?;

        match Envelope::parse(body.clone()) {
            Ok(envelope) => {
                if !status.is_success() {
                    tracing::debug!(status = status.as_u16(), "relaying envelope from non-success status");
                }
                Ok(envelope)
            }
            Err(_) if !status.is_success() => {
                Err(UpstreamError::Status { status: status.as_u16(), body: excerpt(&body) })
            }
            Err(reason) => Err(UpstreamError::Parse(reason)),
        }
    }
}

/// A backend response body known to be an envelope, kept byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    status: String,
    recommendation_count: Option<usize>,
    body: String,
}

impl Envelope {
    /// Accept `body` if it is a JSON object with a string `status`.
    ///
    /// # Errors
    ///
    /// Returns a description of why the body is not an envelope.
    pub fn parse(body: String) -> Result<Self, String> {
        let value: Value = serde_json::from_str(&body).map_err(|e| e.to_string())?;
        let status = match value.get("status") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => return Err(format!("envelope status is not a string: {other}")),
            None => return Err("envelope has no status field".to_owned()),
        };
        let recommendation_count = value.get("recommendations").and_then(Value::as_array).map(Vec::len);
        Ok(Self { status, recommendation_count, body })
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Length of the `recommendations` array, if the envelope has one.
    #[must_use]
    pub fn recommendation_count(&self) -> Option<usize> {
        self.recommendation_count
    }

    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(ERROR_BODY_EXCERPT).collect()
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
