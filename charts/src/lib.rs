//! Chart rendering engine for the packaging recommendation dashboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a chart: describing it as a [`config::ChartConfig`],
//! laying it out, drawing it onto a `<canvas>` element, and disposing of it
//! before the same surface is drawn again. The host UI layer only decides
//! *what* to chart and *where*.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Chart kinds, datasets, scales, legend, and the config builder |
//! | [`registry`] | Backend contract and the one-instance-per-target [`registry::ChartRegistry`] |
//! | [`layout`] | Pure geometry: plot area, grouped bars, radar vertices, donut arcs |
//! | [`render`] | Canvas2D drawing of a laid-out chart |
//! | [`backend`] | [`backend::CanvasBackend`], the browser implementation of the contract |
//! | [`error`] | Error type shared by every module |
//! | [`consts`] | Shared numeric constants (margins, font sizes, angles) |

pub mod backend;
pub mod config;
pub mod consts;
pub mod error;
pub mod layout;
pub mod registry;
pub mod render;
