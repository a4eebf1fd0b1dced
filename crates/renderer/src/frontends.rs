// SPDX-License-Identifier: MIT

//!
//! Frontends: drawing surfaces for egui and the HTML canvas
//!

pub mod desktop_egui;
pub mod html_canvas;
