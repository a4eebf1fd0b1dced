// SPDX-License-Identifier: MIT

//!
//! The capabilities the engine needs from whatever it draws on
//!

use crate::{DashPattern, FilledBox, LineStyle, Point, Size, TextOut};

/// Measures text.
///
/// The engine passes the pixel font size and the string, and gets back the
/// width and height of the text.
///
/// i.e. `function(font_size, text) -> (width, height)`
pub trait MeasureText {
    fn measure_text(&self, font_size: f64, text: &str) -> (f64, f64);

    /// Measure into a [`Size`]
    fn text_size(&self, font_size: f64, text: &str) -> Size {
        let (width, height) = self.measure_text(font_size, text);
        Size {
            x: width,
            y: height,
        }
    }
}

impl<F> MeasureText for F
where
    F: Fn(f64, &str) -> (f64, f64),
{
    fn measure_text(&self, font_size: f64, text: &str) -> (f64, f64) {
        self(font_size, text)
    }
}

/// Something a chart can be drawn onto (an egui painter, an HTML canvas, a
/// recording for tests, ...).
///
/// Coordinates are relative to the current origin, which is moved with
/// [`DrawingSurface::translate`] and saved/restored with
/// [`DrawingSurface::push`]/[`DrawingSurface::pop`].
pub trait DrawingSurface: MeasureText {
    /// Fill a box, stroking its border if it has one
    fn fill_rect(&mut self, filled_box: &FilledBox);

    /// Stroke a polyline, optionally dashed
    fn draw_line(&mut self, points: &[Point], style: LineStyle, dash: Option<DashPattern>);

    /// Draw text starting at its baseline
    fn draw_text(&mut self, text: &TextOut);

    /// Save the current transform
    fn push(&mut self);

    /// Restore the most recently saved transform
    fn pop(&mut self);

    /// Move the origin
    fn translate(&mut self, dx: f64, dy: f64);
}
