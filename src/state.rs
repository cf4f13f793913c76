//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::upstream::PredictionUpstream;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn PredictionUpstream>,
}

impl AppState {
    #[must_use]
    pub fn new(upstream: Arc<dyn PredictionUpstream>) -> Self {
        Self { upstream }
    }
}
