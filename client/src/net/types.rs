//! Wire DTOs for `POST /api/predict`.
//!
//! DESIGN
//! ======
//! The server relay deserializes the same types, so a request the client can
//! build is exactly a request the relay accepts.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Box dimensions, in the units the form collects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub l: f64,
    pub w: f64,
    pub h: f64,
}

/// Product description sent to the prediction backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub weight_capacity: f64,
    pub category: String,
    pub fragility_score: i32,
    pub shelf_life_days: i32,
    pub dimensions: Dimensions,
}

/// One ranked packaging material as scored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialResult {
    pub material_type: String,
    /// 0..=100, higher is better.
    pub suitability_score: f64,
    pub predicted_co2: f64,
    pub predicted_cost_efficiency: f64,
    /// 0..=100.
    pub biodegradability: f64,
    pub recyclability: f64,
    pub tensile_strength: f64,
}

/// Value of the envelope's `status` field on success.
pub const STATUS_SUCCESS: &str = "success";

/// Value of the envelope's `status` field on failure.
pub const STATUS_ERROR: &str = "error";

/// Response envelope. `status == "success"` carries `recommendations`;
/// anything else carries a human-readable `message`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<MaterialResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PredictResponse {
    #[must_use]
    pub fn success(recommendations: Vec<MaterialResult>) -> Self {
        Self { status: STATUS_SUCCESS.to_owned(), recommendations: Some(recommendations), message: None }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: STATUS_ERROR.to_owned(), recommendations: None, message: Some(message.into()) }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Recommendation list in backend rank order, guaranteed non-empty.
///
/// Index 0 is the top-ranked material. Order is never changed client-side.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedResults(Vec<MaterialResult>);

impl RankedResults {
    /// Wrap a backend list. Returns `None` for an empty list.
    #[must_use]
    pub fn new(results: Vec<MaterialResult>) -> Option<Self> {
        if results.is_empty() { None } else { Some(Self(results)) }
    }

    /// The top-ranked result.
    #[must_use]
    pub fn top(&self) -> &MaterialResult {
        &self.0[0]
    }

    /// The first `n` results, in rank order.
    #[must_use]
    pub fn top_n(&self, n: usize) -> &[MaterialResult] {
        &self.0[..n.min(self.0.len())]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[MaterialResult] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
