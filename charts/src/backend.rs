//! Browser backend: draws charts onto `<canvas>` elements found by id.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::registry::{ChartBackend, ChartInstance};
use crate::render;

/// [`ChartBackend`] that resolves targets in the current document.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanvasBackend;

impl CanvasBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// A chart drawn on a canvas. Destroying it clears the surface.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl ChartInstance for CanvasChart {
    fn destroy(self) {
        render::clear(&self.ctx, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }
}

impl ChartBackend for CanvasBackend {
    type Instance = CanvasChart;

    fn create(&mut self, target_id: &str, config: &ChartConfig) -> ChartResult<CanvasChart> {
        let canvas = find_canvas(target_id)?;
        let ctx = context_2d(&canvas, target_id)?;
        render::draw(&ctx, config, f64::from(canvas.width()), f64::from(canvas.height()))?;
        Ok(CanvasChart { canvas, ctx })
    }
}

fn find_canvas(target_id: &str) -> ChartResult<HtmlCanvasElement> {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(target_id))
        .ok_or_else(|| ChartError::TargetNotFound(target_id.to_owned()))?;
    element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| ChartError::NotACanvas(target_id.to_owned()))
}

fn context_2d(canvas: &HtmlCanvasElement, target_id: &str) -> ChartResult<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|_| ChartError::ContextUnavailable(target_id.to_owned()))?
        .ok_or_else(|| ChartError::ContextUnavailable(target_id.to_owned()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ChartError::ContextUnavailable(target_id.to_owned()))
}
