// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{Point, Position, colour::Colour};
use serde::Serialize;

/// A box that specifies the location and size of something (e.g. a task bar
/// or a header block)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    /// Create the box spanning two corners
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            position: Point {
                x: x1.min(x2),
                y: y1.min(y2),
            },
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
        }
    }

    pub fn add_offset(&mut self, x_offset: f64, y_offset: f64) {
        self.position.x += x_offset;
        self.position.y += y_offset;
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

/// On/off lengths for dashed lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

/// Information needed to draw a filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub position_and_size: PositionAndSize,
    pub fill_colour: Colour,
    pub border_style: Option<LineStyle>,
}

/// Information needed to draw text.  `baseline_left` is where the text's
/// baseline starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub baseline_left: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
}
