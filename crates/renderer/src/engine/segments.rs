// SPDX-License-Identifier: MIT

//!
//! Period segmentation: splitting the timeline's days into runs that share a
//! period (year, month, week), for header rows and guide lines
//!

use crate::Period;
use open_gantt_core::Date;
use serde::Serialize;

/// A maximal run of days that share a period label.
///
/// `start_offset` is inclusive and `end_offset` exclusive (both in days from
/// the timeline's first date).  The last segment of a timeline ends at
/// `day_count + 1` so that the final day gets a full block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSegment {
    pub start_offset: i64,
    pub end_offset: i64,
    pub label: String,
}

impl PeriodSegment {
    /// The number of days in the segment
    pub fn day_span(&self) -> i64 {
        self.end_offset - self.start_offset
    }
}

/// Partition the day offsets `0..=day_count` into [`PeriodSegment`]s.
///
/// The day before `first` seeds the "previous" period, so a period starting
/// exactly on `first` is recognised as a boundary (no empty segment is emitted
/// for it).
pub fn segment_periods(first: Date, day_count: i64, period: Period) -> Vec<PeriodSegment> {
    let mut segments = Vec::new();
    if day_count < 0 {
        return segments;
    }

    let mut current_label = first
        .add_days(-1)
        .map(|day| period.label(day))
        .unwrap_or_default();
    let mut from = 0;

    for offset in 0..=day_count {
        let Ok(day) = first.add_days(offset) else {
            break;
        };
        let label = period.label(day);
        if label != current_label {
            if offset > from {
                segments.push(PeriodSegment {
                    start_offset: from,
                    end_offset: offset,
                    label: current_label,
                });
            }
            from = offset;
            current_label = label;
        }
    }

    // Force-close the final segment, one day past the last offset
    segments.push(PeriodSegment {
        start_offset: from,
        end_offset: day_count + 1,
        label: current_label,
    });
    segments
}

/// The day offsets in `1..=day_count` at which a new period begins.  Used for
/// guide lines, so there's no boundary at offset 0 (the chart's left edge).
pub fn period_boundaries(first: Date, day_count: i64, period: Period) -> Vec<i64> {
    let mut boundaries = Vec::new();
    let mut previous = period.label(first);
    for offset in 1..=day_count {
        let Ok(day) = first.add_days(offset) else {
            break;
        };
        let label = period.label(day);
        if label != previous {
            boundaries.push(offset);
            previous = label;
        }
    }
    boundaries
}
