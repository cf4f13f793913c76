use std::cell::{Cell, RefCell};

use charts::error::{ChartError, ChartResult};
use futures::executor::block_on;

use super::*;
use crate::net::api::CONNECT_FAILED_ALERT;
use crate::net::types::{MaterialResult, PredictResponse, PredictionRequest, RankedResults};
use crate::state::form::FormDraft;
use crate::state::results::BadgeTone;
use crate::state::ui::BUSY_LABEL;

#[derive(Default)]
struct RecordingUi {
    button: SubmitButton,
    button_history: Vec<SubmitButton>,
    shown: Vec<ResultsView>,
    alerts: Vec<String>,
    sidebar_toggles: usize,
}

impl RecommendView for RecordingUi {
    fn submit_button(&self) -> SubmitButton {
        self.button.clone()
    }

    fn set_submit_button(&mut self, button: SubmitButton) {
        self.button_history.push(button.clone());
        self.button = button;
    }

    fn show_results(&mut self, view: ResultsView) {
        self.shown.push(view);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn close_sidebar(&mut self) {
        self.sidebar_toggles += 1;
    }
}

#[derive(Default)]
struct RecordingCharts {
    rendered: Vec<usize>,
    fail: bool,
}

impl ChartSink for RecordingCharts {
    fn render_charts(&mut self, results: &RankedResults) -> ChartResult<()> {
        self.rendered.push(results.len());
        if self.fail {
            return Err(ChartError::TargetNotFound("pieChart".to_owned()));
        }
        Ok(())
    }
}

struct CannedTransport {
    reply: Result<PredictResponse, PredictError>,
    calls: Cell<usize>,
    last_request: RefCell<Option<PredictionRequest>>,
}

impl CannedTransport {
    fn new(reply: Result<PredictResponse, PredictError>) -> Self {
        Self { reply, calls: Cell::new(0), last_request: RefCell::new(None) }
    }
}

impl PredictTransport for CannedTransport {
    async fn send(&self, request: &PredictionRequest) -> Result<PredictResponse, PredictError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        self.reply.clone()
    }
}

fn reference_form() -> FormDraft {
    FormDraft {
        weight: "2.5".into(),
        category: "food".into(),
        fragility_score: "3".into(),
        shelf_life: "30".into(),
        dim_l: "10".into(),
        dim_w: "5".into(),
        dim_h: "3".into(),
    }
}

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

fn success() -> PredictResponse {
    PredictResponse::success(vec![material("Bioplastic A", 92.0), material("Kraft Paper", 81.0)])
}

fn run(ui: &mut RecordingUi, charts: &mut RecordingCharts, transport: &CannedTransport, form: &FormDraft) -> Result<usize, SubmitError> {
    block_on(submit_prediction(ui, charts, transport, form))
}

// =============================================================
// success
// =============================================================

#[test]
fn success_renders_table_charts_and_closes_sidebar() {
    let (mut ui, mut charts) = (RecordingUi::default(), RecordingCharts::default());
    let transport = CannedTransport::new(Ok(success()));

    assert_eq!(run(&mut ui, &mut charts, &transport, &reference_form()), Ok(2));

    let view = &ui.shown[0];
    assert_eq!(view.summary.name, "Bioplastic A");
    assert_eq!(view.summary.score, "92");
    assert_eq!(view.rows.iter().filter(|r| r.badge == BadgeTone::Success).count(), 1);
    assert_eq!(view.rows[0].rank, 1);
    assert_eq!(charts.rendered, [2]);
    assert_eq!(ui.sidebar_toggles, 1);
    assert!(ui.alerts.is_empty());
}

#[test]
fn request_carries_parsed_form_values() {
    let (mut ui, mut charts) = (RecordingUi::default(), RecordingCharts::default());
    let transport = CannedTransport::new(Ok(success()));
    run(&mut ui, &mut charts, &transport, &reference_form()).unwrap();

    let sent = transport.last_request.borrow().clone().unwrap();
    assert_eq!(sent.fragility_score, 3);
    assert_eq!(sent.shelf_life_days, 30);
    assert_eq!(sent.category, "food");
}

#[test]
fn button_goes_busy_then_back() {
    let (mut ui, mut charts) = (RecordingUi::default(), RecordingCharts::default());
    let transport = CannedTransport::new(Ok(success()));
    run(&mut ui, &mut charts, &transport, &reference_form()).unwrap();

    assert_eq!(ui.button_history.len(), 2);
    assert_eq!(ui.button_history[0].label, BUSY_LABEL);
    assert!(ui.button_history[0].disabled);
    assert_eq!(ui.button, SubmitButton::default());
}

#[test]
fn chart_failure_still_completes_submission() {
    let mut ui = RecordingUi::default();
    let mut charts = RecordingCharts { fail: true, ..RecordingCharts::default() };
    let transport = CannedTransport::new(Ok(success()));

    assert_eq!(run(&mut ui, &mut charts, &transport, &reference_form()), Ok(2));
    assert_eq!(ui.shown.len(), 1);
    assert_eq!(ui.sidebar_toggles, 1);
    assert!(ui.alerts.is_empty());
}

// =============================================================
// failure
// =============================================================

#[test]
fn rejection_alerts_message_without_switching_sections() {
    let (mut ui, mut charts) = (RecordingUi::default(), RecordingCharts::default());
    let transport = CannedTransport::new(Ok(PredictResponse::error("Invalid category")));

    let err = run(&mut ui, &mut charts, &transport, &reference_form()).unwrap_err();

    assert!(matches!(err, SubmitError::Predict(PredictError::Rejected { .. })));
    assert_eq!(ui.alerts, ["Error: Invalid category"]);
    assert!(ui.shown.is_empty());
    assert!(charts.rendered.is_empty());
    assert_eq!(ui.sidebar_toggles, 0);
    assert_eq!(ui.button, SubmitButton::default());
}

#[test]
fn transport_failure_shows_generic_alert() {
    let (mut ui, mut charts) = (RecordingUi::default(), RecordingCharts::default());
    let transport = CannedTransport::new(Err(PredictError::Transport("connection refused".into())));

    run(&mut ui, &mut charts, &transport, &reference_form()).unwrap_err();

    assert_eq!(ui.alerts, [CONNECT_FAILED_ALERT]);
    assert!(ui.shown.is_empty());
    assert!(!ui.button.disabled);
}

#[test]
fn invalid_form_alerts_without_network_call() {
    let (mut ui, mut charts) = (RecordingUi::default(), RecordingCharts::default());
    let transport = CannedTransport::new(Ok(success()));
    let form = FormDraft { weight: "heavy".into(), ..reference_form() };

    let err = run(&mut ui, &mut charts, &transport, &form).unwrap_err();

    assert!(matches!(err, SubmitError::Form(_)));
    assert_eq!(transport.calls.get(), 0);
    assert_eq!(ui.alerts, ["Weight capacity must be a number (got \"heavy\")"]);
    assert_eq!(ui.button, SubmitButton::default());
}

#[test]
fn restores_exactly_the_captured_button_state() {
    let custom = SubmitButton { label: "Run again".into(), disabled: false };
    let mut ui = RecordingUi { button: custom.clone(), ..RecordingUi::default() };
    let mut charts = RecordingCharts::default();
    let transport = CannedTransport::new(Err(PredictError::Transport("timeout".into())));

    run(&mut ui, &mut charts, &transport, &reference_form()).unwrap_err();
    assert_eq!(ui.button, custom);
}

#[test]
fn form_errors_alert_their_own_message() {
    let err = SubmitError::from(FormError::Missing { field: crate::state::form::FormField::ShelfLife });
    assert_eq!(err.alert_text(), "Shelf life is required");
}
