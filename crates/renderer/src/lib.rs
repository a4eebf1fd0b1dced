// SPDX-License-Identifier: MIT

//!
//! *Part of the wider OpenGantt project*
//!
//! This crate lays out and draws Gantt charts.  It can be compiled for native
//! use as well as to WASM for use in the browser (or any other environment
//! running WASM).
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Turning tasks and settings into a validated [`ChartModel`]
//! - Segmenting the chart's date range into years, months, and weeks
//! - Placing task bars and labels
//! - Drawing all of that onto anything implementing [`DrawingSurface`]
//!
//! The rest of the crate holds the surfaces for the frontends:
//!
//! - HTML Canvas for browser rendering
//! - `egui` for native desktop rendering
//!
//! ## Usage
//!
//! To use in a native `egui` desktop application the crate can simply be
//! included like any other crate.
//!
//! To use in a browser one can use the following to compile to WASM:
//!
//! ```sh
//! wasm-pack build --target web
//! ```
//!

pub mod colour;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use engine::*;
pub use frontends::desktop_egui::OpenGanttRendererEgui;
pub use frontends::html_canvas::OpenGanttRendererHtmlCanvas;
