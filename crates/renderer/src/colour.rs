// SPDX-License-Identifier: MIT

//!
//! The colour type used when drawing a chart
//!

use eframe::egui;
use serde::{Deserialize, Serialize};

/// The `Colour` type (RGBA, not premultiplied)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<Colour> for egui::Color32 {
    fn from(value: Colour) -> Self {
        egui::Color32::from_rgba_unmultiplied(value.r, value.g, value.b, value.a)
    }
}

impl Colour {
    /// Create an opaque colour from RGB values
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b, a: 0xff }
    }

    /// Create a colour from RGBA values
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Colour { r, g, b, a }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66ef44`).
    pub fn from_hex<S: AsRef<str>>(hex_colour: S) -> Result<Self, ()> {
        let hex_colour = hex_colour.as_ref();
        let hex_colour = hex_colour.strip_prefix('#').unwrap_or(hex_colour);

        let component = |index: usize| {
            hex_colour
                .get(index..index + 2)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        };

        match hex_colour.len() {
            6 => match (component(0), component(2), component(4)) {
                (Some(r), Some(g), Some(b)) => Ok(Colour::from_rgb(r, g, b)),
                _ => Err(()),
            },
            8 => match (component(0), component(2), component(4), component(6)) {
                (Some(r), Some(g), Some(b), Some(a)) => Ok(Colour::from_rgba(r, g, b, a)),
                _ => Err(()),
            },
            _ => Err(()),
        }
    }

    /// As a CSS `rgba()` string
    pub fn as_css(&self) -> String {
        let alpha = f64::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}
