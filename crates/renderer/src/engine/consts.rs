// SPDX-License-Identifier: MIT

//!
//! Layout constants.  Sizes are at 100% zoom and get multiplied by the scale.
//!

/// Canvas width at 100% zoom
pub const BASE_WIDTH: f64 = 1024.0;

/// Canvas height at 100% zoom
pub const BASE_HEIGHT: f64 = 768.0;

/// Height of a header row or task bar at 100% zoom
pub const BASE_ROW_HEIGHT: f64 = 20.0;

/// Font size at 100% zoom
pub const BASE_FONT_SIZE: f64 = 10.0;

/// Space left either side of the chart area (room for milestone markers)
pub const CHART_MARGIN: f64 = 4.0;

/// Guide lines are dashed this way
pub const GUIDE_DASH: f64 = 2.0;
pub const GUIDE_GAP: f64 = 2.0;

/// Task bars and stripes are drawn this far below their row slot (px, unscaled)
pub const STRIPE_NUDGE: f64 = 1.0;
