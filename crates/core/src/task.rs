// SPDX-License-Identifier: MIT

//!
//! The OpenGantt task types
//!

use crate::Date;
use serde::{Deserialize, Serialize};

/// A task as supplied by the user: date stamps still unparsed.
///
/// `end` may be `"-"`, meaning the task is still running (see
/// [`crate::TODAY_SENTINEL`]).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawTask {
    /// `YYYY-MM-DD`
    pub start: String,

    /// `YYYY-MM-DD` or `"-"`
    pub end: String,

    /// Blank labels are allowed
    #[serde(default)]
    pub label: String,
}

impl RawTask {
    pub fn new<S: Into<String>>(start: S, end: S, label: S) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            label: label.into(),
        }
    }
}

/// A task whose dates have been resolved
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Task {
    /// Display text (may be empty)
    pub label: String,

    /// First day of the task
    pub start: Date,

    /// Last day of the task (the "today" sentinel has already been resolved)
    pub end: Date,

    /// The task's row on the chart.  Always its position in the input
    pub row: usize,
}

impl Task {
    /// Whether the dates are the right way round
    pub fn has_valid_dates(&self) -> bool {
        self.start <= self.end
    }

    /// Single-day tasks start and end on the same day
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}
