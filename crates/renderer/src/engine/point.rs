// SPDX-License-Identifier: MIT

//!
//! Points
//!

use serde::Serialize;

pub type Position = Point;
pub type Size = Point;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Shift the point by an offset
    pub fn offset_by(self, offset: Point) -> Self {
        Point {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}
