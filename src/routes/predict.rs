//! `POST /api/predict`: validate the body and relay it upstream.
//!
//! ERROR HANDLING
//! ==============
//! Every reply is a response envelope the browser can read. A body that does
//! not deserialize gets the extractor's status (400, 415, or 422) with the
//! rejection text as the message. An upstream envelope is returned with 200
//! byte for byte. An unreachable or misbehaving backend gets 502 with a fixed
//! message; the cause is only logged.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use client::net::types::{PredictResponse, PredictionRequest};
use tracing::Instrument;
use uuid::Uuid;

use crate::state::AppState;

pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Prediction service unavailable";

pub async fn predict(State(state): State<AppState>, body: Result<Json<PredictionRequest>, JsonRejection>) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("predict", %request_id);

    async move {
        let request = match body {
            Ok(Json(request)) => request,
            Err(rejection) => {
                tracing::info!(status = rejection.status().as_u16(), "rejected request body");
                return (rejection.status(), Json(PredictResponse::error(rejection.body_text()))).into_response();
            }
        };

        tracing::info!(category = %request.category, "relaying prediction");
        match state.upstream.predict(&request).await {
            Ok(envelope) => {
                tracing::info!(
                    status = envelope.status(),
                    count = envelope.recommendation_count().unwrap_or(0),
                    "prediction relayed"
                );
                (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], envelope.into_body()).into_response()
            }
            Err(e) => {
                tracing::warn!(error = %e, "prediction upstream failed");
                (StatusCode::BAD_GATEWAY, Json(PredictResponse::error(UPSTREAM_UNAVAILABLE_MESSAGE))).into_response()
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
#[path = "predict_test.rs"]
mod tests;
