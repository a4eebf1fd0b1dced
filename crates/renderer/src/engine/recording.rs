// SPDX-License-Identifier: MIT

//!
//! A drawing surface that records what is drawn on it
//!

use crate::{
    DashPattern, DrawingSurface, FilledBox, LineStyle, MeasureText, Point, TextOut,
};
use serde::Serialize;
use std::fmt::Debug;

/// A single recorded drawing operation.  Coordinates are absolute (i.e. with
/// every active translation already applied)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    Rect(FilledBox),
    Line {
        points: Vec<Point>,
        style: LineStyle,
        dash: Option<DashPattern>,
    },
    Text(TextOut),
}

/// Records drawing operations rather than rasterising them.  Useful for
/// tests, and for dumping a chart as JSON.
pub struct RecordingSurface {
    measure_text_fn: Box<dyn Fn(f64, &str) -> (f64, f64)>,
    origin: Point,
    saved_origins: Vec<Point>,
    commands: Vec<DrawCommand>,
}

impl Debug for RecordingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSurface")
            .field("origin", &self.origin)
            .field("saved_origins", &self.saved_origins)
            .field("commands", &self.commands.len())
            .finish()
    }
}

impl RecordingSurface {
    pub fn new(measure_text_fn: impl Fn(f64, &str) -> (f64, f64) + 'static) -> Self {
        Self {
            measure_text_fn: Box::new(measure_text_fn),
            origin: Point::default(),
            saved_origins: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &TextOut> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// All boxes drawn, in order
    pub fn rects(&self) -> impl Iterator<Item = &FilledBox> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(filled_box) => Some(filled_box),
            _ => None,
        })
    }

    /// The current origin (the sum of all active translations)
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The recorded commands as pretty printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.commands)
    }
}

impl MeasureText for RecordingSurface {
    fn measure_text(&self, font_size: f64, text: &str) -> (f64, f64) {
        (self.measure_text_fn)(font_size, text)
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_rect(&mut self, filled_box: &FilledBox) {
        let mut filled_box = *filled_box;
        filled_box
            .position_and_size
            .add_offset(self.origin.x, self.origin.y);
        self.commands.push(DrawCommand::Rect(filled_box));
    }

    fn draw_line(&mut self, points: &[Point], style: LineStyle, dash: Option<DashPattern>) {
        let points = points
            .iter()
            .map(|point| point.offset_by(self.origin))
            .collect();
        self.commands.push(DrawCommand::Line {
            points,
            style,
            dash,
        });
    }

    fn draw_text(&mut self, text: &TextOut) {
        let mut text = text.clone();
        text.baseline_left = text.baseline_left.offset_by(self.origin);
        self.commands.push(DrawCommand::Text(text));
    }

    fn push(&mut self) {
        self.saved_origins.push(self.origin);
    }

    fn pop(&mut self) {
        // An unbalanced pop leaves the origin where it is
        if let Some(origin) = self.saved_origins.pop() {
            self.origin = origin;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.x += dx;
        self.origin.y += dy;
    }
}
