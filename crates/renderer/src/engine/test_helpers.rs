// SPDX-License-Identifier: MIT

//!
//! Shared fixtures for the engine's tests
//!

use crate::ChartModel;
use open_gantt_core::{Date, RawTask};

/// Parse a `YYYY-MM-DD` date
pub fn date(stamp: &str) -> Date {
    Date::from_stamp(stamp).unwrap()
}

/// A monospace-ish measurer: each char is 0.6 of the font size wide
pub fn measure(font_size: f64, text: &str) -> (f64, f64) {
    (text.chars().count() as f64 * font_size * 0.6, font_size)
}

/// The three tasks used throughout the tests (Jan 1st to Mar 1st 2016)
pub fn scenario_tasks() -> Vec<RawTask> {
    vec![
        RawTask::new("2016-02-01", "2016-02-25", "A aaaa"),
        RawTask::new("2016-01-01", "2016-01-25", "A"),
        RawTask::new("2016-02-01", "2016-03-01", "B"),
    ]
}

/// [`scenario_tasks`] built with default settings
pub fn scenario_model() -> ChartModel {
    ChartModel::build(&scenario_tasks(), None, &measure, date("2020-01-01")).unwrap()
}
