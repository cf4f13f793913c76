//! Rendering: draws one chart to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`ChartConfig`] and the surface size, asks
//! [`crate::layout`] where everything goes, and produces pixels.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::backend::CanvasBackend`]) converts the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::{ChartConfig, ChartKind, Dataset, LegendPosition, Scale, ScalePosition};
use crate::consts::{AXIS_COLOR, GRID_COLOR, LABEL_FONT, LEGEND_HEIGHT_PX, OUTER_PADDING_PX, TICK_COUNT};
use crate::layout::{self, Point, Rect};

/// Gap between the radar's outer ring and its axis labels.
const RADAR_LABEL_GAP_PX: f64 = 14.0;

/// Room kept free around the radar for axis labels.
const RADAR_LABEL_MARGIN_PX: f64 = 28.0;

/// Radius of the dots drawn on radar vertices.
const RADAR_POINT_RADIUS_PX: f64 = 3.0;

/// Horizontal gap between legend entries.
const LEGEND_GAP_PX: f64 = 14.0;

/// Draw the whole chart, replacing whatever was on the surface.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, config: &ChartConfig, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    let area = layout::plot_area(width, height, config);
    match config.kind {
        ChartKind::Bar => draw_bar(ctx, config, area)?,
        ChartKind::Radar => draw_radar(ctx, config, area)?,
        ChartKind::Doughnut => draw_doughnut(ctx, config, area)?,
    }

    if config.legend.position == LegendPosition::Bottom {
        draw_legend(ctx, config, width, height)?;
    }
    Ok(())
}

/// Wipe the surface.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

// =============================================================
// Bar
// =============================================================

fn draw_bar(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: Rect) -> Result<(), JsValue> {
    for scale in config.scales.iter().filter(|s| s.is_value_axis()) {
        if let Some(ds) = first_dataset_on(config, scale) {
            let max = layout::scale_max_for(config, ds);
            draw_value_axis(ctx, scale, area, max)?;
        }
    }

    for bar in layout::bar_rects(config, area) {
        let ds = &config.datasets[bar.dataset];
        ctx.set_fill_style_str(ds.fill.color_at(bar.index));
        fill_rounded_top(ctx, bar.rect, ds.border_radius)?;
    }

    ctx.save();
    ctx.set_font(LABEL_FONT);
    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    let centers = layout::category_centers(config.labels.len(), area);
    for (label, x) in config.labels.iter().zip(centers) {
        ctx.fill_text(label, x, area.bottom() + 6.0)?;
    }
    ctx.restore();
    Ok(())
}

fn first_dataset_on<'a>(config: &'a ChartConfig, scale: &Scale) -> Option<&'a Dataset> {
    config
        .datasets
        .iter()
        .find(|ds| config.scale_for(ds).is_some_and(|s| s.id == scale.id))
}

fn draw_value_axis(ctx: &CanvasRenderingContext2d, scale: &Scale, area: Rect, max: f64) -> Result<(), JsValue> {
    let (x, align) = match scale.position {
        ScalePosition::Right => (area.right() + 6.0, "left"),
        _ => (area.x - 6.0, "right"),
    };

    ctx.save();
    ctx.set_font(LABEL_FONT);
    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_text_align(align);
    ctx.set_text_baseline("middle");
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);

    for tick in layout::ticks(max, TICK_COUNT) {
        let y = area.bottom() - area.h * (tick / max);
        ctx.fill_text(&layout::format_tick(tick), x, y)?;
        if scale.grid {
            ctx.begin_path();
            ctx.move_to(area.x, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
        }
    }
    ctx.restore();
    Ok(())
}

/// Fill a bar whose top corners are rounded.
fn fill_rounded_top(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.w * 0.5).min(rect.h).max(0.0);
    if r <= 0.0 {
        ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
        return Ok(());
    }
    ctx.begin_path();
    ctx.move_to(rect.x, rect.bottom());
    ctx.line_to(rect.x, rect.y + r);
    ctx.arc_to(rect.x, rect.y, rect.x + r, rect.y, r)?;
    ctx.line_to(rect.right() - r, rect.y);
    ctx.arc_to(rect.right(), rect.y, rect.right(), rect.y + r, r)?;
    ctx.line_to(rect.right(), rect.bottom());
    ctx.close_path();
    ctx.fill();
    Ok(())
}

// =============================================================
// Radar
// =============================================================

fn draw_radar(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: Rect) -> Result<(), JsValue> {
    let axes = config.labels.len();
    if axes == 0 {
        return Ok(());
    }
    let center = area.center();
    let radius = (layout::fit_radius(area) - RADAR_LABEL_MARGIN_PX).max(0.0);

    // Web: concentric rings plus one spoke per axis.
    ctx.save();
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    for step in 1..=TICK_COUNT {
        let ring = vec![step as f64; axes];
        let pts = layout::radar_vertices(&ring, center, radius, TICK_COUNT as f64);
        trace_polygon(ctx, &pts);
        ctx.stroke();
    }
    let outer = layout::radar_vertices(&vec![1.0; axes], center, radius, 1.0);
    for p in &outer {
        ctx.begin_path();
        ctx.move_to(center.x, center.y);
        ctx.line_to(p.x, p.y);
        ctx.stroke();
    }

    ctx.set_font(LABEL_FONT);
    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let label_ring = layout::radar_vertices(&vec![1.0; axes], center, radius + RADAR_LABEL_GAP_PX, 1.0);
    for (label, p) in config.labels.iter().zip(label_ring) {
        ctx.fill_text(label, p.x, p.y)?;
    }
    ctx.restore();

    // Series polygons.
    for ds in &config.datasets {
        let max = layout::scale_max_for(config, ds);
        let pts = layout::radar_vertices(&ds.data, center, radius, max);
        let stroke = ds.border.as_deref().unwrap_or_else(|| ds.fill.color_at(0));

        ctx.save();
        ctx.set_fill_style_str(ds.fill.color_at(0));
        trace_polygon(ctx, &pts);
        ctx.fill();
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(2.0);
        ctx.stroke();

        ctx.set_fill_style_str(stroke);
        for p in &pts {
            ctx.begin_path();
            ctx.arc(p.x, p.y, RADAR_POINT_RADIUS_PX, 0.0, crate::consts::TAU)?;
            ctx.fill();
        }
        ctx.restore();
    }
    Ok(())
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, pts: &[Point]) {
    ctx.begin_path();
    for (i, p) in pts.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x, p.y);
        } else {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
}

// =============================================================
// Doughnut
// =============================================================

fn draw_doughnut(ctx: &CanvasRenderingContext2d, config: &ChartConfig, area: Rect) -> Result<(), JsValue> {
    let Some(ds) = config.datasets.first() else {
        return Ok(());
    };
    let center = area.center();
    let outer = layout::fit_radius(area);
    let inner = outer * config.cutout.unwrap_or(0.0);

    for (i, arc) in layout::donut_arcs(&ds.data).iter().enumerate() {
        if arc.end <= arc.start {
            continue;
        }
        ctx.begin_path();
        ctx.arc(center.x, center.y, outer, arc.start, arc.end)?;
        if inner > 0.0 {
            ctx.arc_with_anticlockwise(center.x, center.y, inner, arc.end, arc.start, true)?;
        } else {
            ctx.line_to(center.x, center.y);
        }
        ctx.close_path();
        ctx.set_fill_style_str(ds.fill.color_at(i));
        ctx.fill();
        if let Some(border) = &ds.border {
            ctx.set_stroke_style_str(border);
            ctx.stroke();
        }
    }
    Ok(())
}

// =============================================================
// Legend
// =============================================================

/// Swatch color and text for each legend entry.
fn legend_entries(config: &ChartConfig) -> Vec<(String, String)> {
    match config.kind {
        ChartKind::Doughnut => {
            let Some(ds) = config.datasets.first() else {
                return Vec::new();
            };
            config
                .labels
                .iter()
                .enumerate()
                .map(|(i, label)| (ds.fill.color_at(i).to_owned(), label.clone()))
                .collect()
        }
        ChartKind::Bar | ChartKind::Radar => config
            .datasets
            .iter()
            .map(|ds| (ds.fill.color_at(0).to_owned(), ds.label.clone()))
            .collect(),
    }
}

fn draw_legend(ctx: &CanvasRenderingContext2d, config: &ChartConfig, width: f64, height: f64) -> Result<(), JsValue> {
    let entries = legend_entries(config);
    if entries.is_empty() {
        return Ok(());
    }
    let swatch = config.legend.box_width;

    ctx.save();
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    let mut widths = Vec::with_capacity(entries.len());
    for (_, text) in &entries {
        widths.push(ctx.measure_text(text)?.width());
    }
    let total: f64 = widths.iter().map(|w| swatch + 4.0 + w).sum::<f64>() + LEGEND_GAP_PX * (entries.len() - 1) as f64;

    let y = height - OUTER_PADDING_PX - LEGEND_HEIGHT_PX * 0.5;
    let mut x = ((width - total) * 0.5).max(OUTER_PADDING_PX);
    for ((color, text), w) in entries.iter().zip(widths) {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(x, y - swatch * 0.5, swatch, swatch);
        ctx.set_fill_style_str(AXIS_COLOR);
        ctx.fill_text(text, x + swatch + 4.0, y)?;
        x += swatch + 4.0 + w + LEGEND_GAP_PX;
    }
    ctx.restore();
    Ok(())
}
