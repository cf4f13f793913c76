use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::net::types::{Dimensions, MaterialResult};

fn material(name: &str) -> MaterialResult {
    MaterialResult {
        material_type: name.to_owned(),
        suitability_score: 92.0,
        predicted_co2: 12.0,
        predicted_cost_efficiency: 7.0,
        biodegradability: 88.0,
        recyclability: 70.0,
        tensile_strength: 40.0,
    }
}

fn request() -> PredictionRequest {
    PredictionRequest {
        weight_capacity: 2.5,
        category: "food".to_owned(),
        fragility_score: 3,
        shelf_life_days: 30,
        dimensions: Dimensions { l: 10.0, w: 5.0, h: 3.0 },
    }
}

struct CannedTransport {
    reply: Result<PredictResponse, PredictError>,
    calls: Cell<usize>,
}

impl CannedTransport {
    fn new(reply: Result<PredictResponse, PredictError>) -> Self {
        Self { reply, calls: Cell::new(0) }
    }
}

impl PredictTransport for CannedTransport {
    async fn send(&self, _request: &PredictionRequest) -> Result<PredictResponse, PredictError> {
        self.calls.set(self.calls.get() + 1);
        self.reply.clone()
    }
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn success_yields_ranked_results() {
    let ranked = interpret_response(PredictResponse::success(vec![material("Bioplastic A")])).unwrap();
    assert_eq!(ranked.top().material_type, "Bioplastic A");
}

#[test]
fn non_success_status_is_rejected_with_message() {
    let err = interpret_response(PredictResponse::error("Invalid category")).unwrap_err();
    assert_eq!(err, PredictError::Rejected { message: "Invalid category".to_owned() });
}

#[test]
fn unknown_status_without_message_uses_stand_in() {
    let resp = PredictResponse { status: "pending".to_owned(), recommendations: None, message: None };
    let err = interpret_response(resp).unwrap_err();
    assert_eq!(err.alert_text(), "Error: Unknown error");
}

#[test]
fn success_with_empty_list_is_empty_ranking() {
    assert_eq!(interpret_response(PredictResponse::success(Vec::new())), Err(PredictError::EmptyRanking));
}

#[test]
fn success_with_missing_list_is_empty_ranking() {
    let resp = PredictResponse { status: "success".to_owned(), recommendations: None, message: None };
    assert_eq!(interpret_response(resp), Err(PredictError::EmptyRanking));
}

// =============================================================
// alert_text
// =============================================================

#[test]
fn rejected_alert_prefixes_error() {
    let err = PredictError::Rejected { message: "Invalid category".to_owned() };
    assert_eq!(err.alert_text(), "Error: Invalid category");
}

#[test]
fn transport_alert_hides_cause() {
    let err = PredictError::Transport("TypeError: NetworkError when attempting to fetch resource.".to_owned());
    assert_eq!(err.alert_text(), CONNECT_FAILED_ALERT);
    assert!(err.to_string().contains("NetworkError"));
}

#[test]
fn empty_ranking_alert_is_fixed() {
    assert_eq!(PredictError::EmptyRanking.alert_text(), EMPTY_RANKING_ALERT);
}

// =============================================================
// predict
// =============================================================

#[test]
fn predict_sends_exactly_once() {
    let transport = CannedTransport::new(Ok(PredictResponse::success(vec![material("A")])));
    let ranked = block_on(predict(&transport, &request())).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn predict_propagates_transport_failure() {
    let transport = CannedTransport::new(Err(PredictError::Transport("offline".to_owned())));
    let err = block_on(predict(&transport, &request())).unwrap_err();
    assert!(matches!(err, PredictError::Transport(_)));
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn endpoint_is_server_relative() {
    assert_eq!(PREDICT_ENDPOINT, "/api/predict");
}
