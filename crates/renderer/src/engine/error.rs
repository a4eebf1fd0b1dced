// SPDX-License-Identifier: MIT

//!
//! Errors
//!

use open_gantt_core::{Date, DateError};
use thiserror::Error;

/// What is wrong with a particular task
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskIssue {
    #[error("ends ({end}) before it begins ({start})")]
    EndsBeforeStart { start: Date, end: Date },

    #[error("has an unreadable date: {0}")]
    Unparseable(DateError),
}

/// Errors that can be returned when building, validating, or drawing a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A settings date (the end override) couldn't be parsed
    #[error("Invalid date: {0}")]
    DateParseFailure(#[from] DateError),

    #[error(
        "Parameter uninitialised or invalid: scale, width, height, row height, font size = {scale:.2}, {width:.2}, {height:.2}, {row_height:.2}, {font_size:.2}"
    )]
    InvalidGeometry {
        scale: f64,
        width: f64,
        height: f64,
        row_height: f64,
        font_size: f64,
    },

    #[error("Invalid number of days: {0}")]
    InvalidRange(i64),

    #[error("No tasks specified")]
    EmptyTaskList,

    /// `index` is zero-based; messages count from one
    #[error("Task #{} {reason}", .index + 1)]
    InvalidTask { index: usize, reason: TaskIssue },

    /// Not fatal: the task is skipped and the rest of the chart drawn
    #[error("Task #{} can't be placed on the timeline", .index + 1)]
    TaskUnplaceable { index: usize },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_count_from_one() {
        let error = ChartError::TaskUnplaceable { index: 0 };
        assert_eq!(error.to_string(), "Task #1 can't be placed on the timeline");

        let error = ChartError::InvalidTask {
            index: 2,
            reason: TaskIssue::Unparseable(DateError::Malformed("x".to_string())),
        };
        assert_eq!(
            error.to_string(),
            "Task #3 has an unreadable date: `x` is not a YYYY-MM-DD date"
        );
    }
}
