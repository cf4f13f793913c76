use super::*;
use serde_json::json;

fn material(name: &str, score: f64) -> MaterialResult {
    MaterialResult {
        material_type: name.to_owned(),
        suitability_score: score,
        predicted_co2: 12.0,
        predicted_cost_efficiency: 7.0,
        biodegradability: 88.0,
        recyclability: 70.0,
        tensile_strength: 40.0,
    }
}

// =============================================================
// PredictionRequest
// =============================================================

#[test]
fn request_serializes_with_nested_dimensions() {
    let req = PredictionRequest {
        weight_capacity: 2.5,
        category: "food".to_owned(),
        fragility_score: 3,
        shelf_life_days: 30,
        dimensions: Dimensions { l: 10.0, w: 5.0, h: 3.0 },
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        json!({
            "weight_capacity": 2.5,
            "category": "food",
            "fragility_score": 3,
            "shelf_life_days": 30,
            "dimensions": { "l": 10.0, "w": 5.0, "h": 3.0 }
        })
    );
}

#[test]
fn request_rejects_fractional_scores() {
    let raw = json!({
        "weight_capacity": 1.0,
        "category": "food",
        "fragility_score": 2.5,
        "shelf_life_days": 30,
        "dimensions": { "l": 1, "w": 1, "h": 1 }
    });
    assert!(serde_json::from_value::<PredictionRequest>(raw).is_err());
}

// =============================================================
// PredictResponse
// =============================================================

#[test]
fn success_envelope_parses_recommendations() {
    let raw = json!({
        "status": "success",
        "recommendations": [{
            "material_type": "Bioplastic A",
            "suitability_score": 92,
            "predicted_co2": 12,
            "predicted_cost_efficiency": 7,
            "biodegradability": 88,
            "recyclability": 70,
            "tensile_strength": 40
        }]
    });
    let resp: PredictResponse = serde_json::from_value(raw).unwrap();
    assert!(resp.is_success());
    let recs = resp.recommendations.unwrap();
    assert_eq!(recs[0], material("Bioplastic A", 92.0));
}

#[test]
fn error_envelope_has_message_and_no_recommendations() {
    let resp: PredictResponse = serde_json::from_value(json!({"status": "error", "message": "Invalid category"})).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.message.as_deref(), Some("Invalid category"));
    assert!(resp.recommendations.is_none());
}

#[test]
fn error_constructor_omits_recommendations_field() {
    let value = serde_json::to_value(PredictResponse::error("Prediction service unavailable")).unwrap();
    assert_eq!(value, json!({"status": "error", "message": "Prediction service unavailable"}));
}

#[test]
fn status_comparison_is_exact() {
    let resp: PredictResponse = serde_json::from_value(json!({"status": "SUCCESS"})).unwrap();
    assert!(!resp.is_success());
}

// =============================================================
// RankedResults
// =============================================================

#[test]
fn ranked_results_rejects_empty_list() {
    assert!(RankedResults::new(Vec::new()).is_none());
}

#[test]
fn ranked_results_keeps_backend_order() {
    let ranked = RankedResults::new(vec![material("Low", 10.0), material("High", 99.0)]).unwrap();
    assert_eq!(ranked.top().material_type, "Low");
    assert_eq!(ranked.as_slice()[1].material_type, "High");
}

#[test]
fn top_n_caps_at_list_length() {
    let ranked = RankedResults::new(vec![material("A", 1.0), material("B", 2.0)]).unwrap();
    assert_eq!(ranked.top_n(5).len(), 2);
    assert_eq!(ranked.top_n(1).len(), 1);
    assert_eq!(ranked.len(), 2);
    assert!(!ranked.is_empty());
}
