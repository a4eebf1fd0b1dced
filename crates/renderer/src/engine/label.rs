// SPDX-License-Identifier: MIT

//!
//! Label placement: where (and whether) a block's label is drawn
//!

use crate::{Point, PositionAndSize, Size};

/// Where to draw a label of size `text_size` centred in `block`.
///
/// Returns the left end of the label's baseline, or `None` when the label
/// doesn't fit (it is then not drawn at all, never truncated or wrapped).  A
/// label fits when it is no wider than the block and, starting at the
/// block's left edge, doesn't run past `chart_width`.  A centred label is
/// clamped to stay within `0..chart_width`.
pub fn place_label(block: &PositionAndSize, text_size: Size, chart_width: f64) -> Option<Point> {
    let x1 = block.position.x;
    let text_width = text_size.x;
    if text_width > block.width || x1 + text_width > chart_width {
        return None;
    }

    let centred = x1 + block.width / 2.0 - text_width / 2.0;
    let x = if centred < 0.0 {
        0.0
    } else {
        centred.min(chart_width - text_width)
    };
    let y = block.max_y() - text_size.y / 2.0;
    Some(Point { x, y })
}
