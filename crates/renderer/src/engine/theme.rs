// SPDX-License-Identifier: MIT

//!
//! Chart theme
//!

use crate::{LineStyle, colour::Colour};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameStyle {
    pub border: Colour,
    pub fill: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StripeColours {
    pub dark: Colour,
    pub light: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskStyle {
    pub border: Colour,
    pub fill: Colour,
    pub label: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyle {
    pub colour: Colour,

    /// Distance (px, unscaled) the shadow is pushed right and down
    pub offset: f64,
}

/// The chart's palette.  Built once per render and passed to whatever needs it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    /// Calendar header blocks (and their labels, drawn in the border colour)
    pub frame: FrameStyle,

    /// Task row backgrounds, also used to shade weekdays/weekends
    pub stripes: StripeColours,

    /// Guide lines and day cell borders
    pub grid: Colour,

    pub task: TaskStyle,
    pub shadow: ShadowStyle,
}

impl ChartTheme {
    /// Style for the period-boundary guide lines
    pub fn guide_line(&self) -> LineStyle {
        LineStyle {
            colour: self.grid,
            thickness: 1.0,
        }
    }

    /// Stripe colour for a task row (even rows dark, odd rows light)
    pub fn stripe_for_row(&self, row: usize) -> Colour {
        if row % 2 == 0 {
            self.stripes.dark
        } else {
            self.stripes.light
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            frame: FrameStyle {
                border: Colour::from_rgb(0x00, 0x00, 0x00),
                fill: Colour::from_rgb(0xff, 0xff, 0xff),
            },
            stripes: StripeColours {
                dark: Colour::from_rgb(0xdd, 0xdd, 0xdd),
                light: Colour::from_rgb(0xee, 0xee, 0xee),
            },
            grid: Colour::from_rgb(0x99, 0x99, 0x99),
            task: TaskStyle {
                border: Colour::from_rgb(0x55, 0x55, 0x55),
                fill: Colour::from_rgb(0xff, 0xff, 0xff),
                label: Colour::from_rgb(0x00, 0x00, 0x00),
            },
            shadow: ShadowStyle {
                colour: Colour::from_rgba(0x00, 0x00, 0x00, 0x44),
                offset: 4.0,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stripes_alternate() {
        let theme = ChartTheme::default();
        assert_eq!(theme.stripe_for_row(0), theme.stripes.dark);
        assert_eq!(theme.stripe_for_row(1), theme.stripes.light);
        assert_eq!(theme.stripe_for_row(2), theme.stripes.dark);
    }
}
