// SPDX-License-Identifier: MIT

//!
//! The chart model: every number the layout needs, derived once per render
//!

use crate::{
    BASE_FONT_SIZE, BASE_HEIGHT, BASE_ROW_HEIGHT, BASE_WIDTH, CHART_MARGIN, ChartError,
    MeasureText, Period, TaskIssue,
};
use log::{debug, trace};
use open_gantt_core::{Date, RawTask, ResolvedSettings, Settings, Task, resolve_end};
use serde::Serialize;

/// The single source of truth for a chart's layout.  Built by
/// [`ChartModel::build`], checked by [`ChartModel::validate`], and only read
/// after that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartModel {
    /// The first day on the timeline
    pub first_date: Date,

    /// The last day on the timeline (inclusive)
    pub last_date: Date,

    /// Whole days from `first_date` to `last_date`
    pub day_count: i64,

    /// Zoom multiplier applied to all geometry
    pub scale: f64,

    pub width: f64,
    pub height: f64,
    pub row_height: f64,
    pub font_size: f64,

    /// Room for the longest task label, plus a margin
    pub label_column_width: f64,

    /// Width of the dated part of the chart (right of the label column)
    pub chart_width: f64,

    /// Width of a single day (`chart_width / day_count`)
    pub day_width: f64,

    /// The settings the model was built with (defaults applied)
    pub settings: ResolvedSettings,

    /// The tasks, in input order
    pub tasks: Vec<Task>,
}

impl ChartModel {
    /// Build the model from raw tasks and (possibly partial) settings.
    ///
    /// Tasks are processed in input order.  A task ending in `"-"` ends on the
    /// settings' end override if there is one, otherwise on `today`.  Any
    /// unreadable date aborts the build.
    pub fn build<M>(
        raw_tasks: &[RawTask],
        settings: Option<&Settings>,
        measurer: &M,
        today: Date,
    ) -> Result<Self, ChartError>
    where
        M: MeasureText + ?Sized,
    {
        let settings = settings.map(Settings::resolve).unwrap_or_default();

        // The end override (custom date or "today") seeds the last date
        let end_override = match &settings.end {
            Some(stamp) => Some(resolve_end(stamp, today)?),
            None => None,
        };
        let open_end = end_override.unwrap_or(today);

        let mut first: Option<Date> = None;
        let mut last: Option<Date> = end_override;
        let mut tasks = Vec::with_capacity(raw_tasks.len());
        for (index, raw_task) in raw_tasks.iter().enumerate() {
            let task = resolve_task(index, raw_task, open_end)?;
            trace!("Task #{} resolved to {} - {}", index + 1, task.start, task.end);

            // Strict comparisons: on a tie the earlier task keeps the bound
            if first.is_none_or(|first| task.start < first) {
                first = Some(task.start);
            }
            if last.is_none_or(|last| task.end > last) {
                last = Some(task.end);
            }
            tasks.push(task);
        }

        // No tasks: collapse the range (validation rejects this later)
        let first_date = first.or(last).unwrap_or(today);
        let last_date = last.unwrap_or(first_date);
        let day_count = last_date.days_since(first_date);
        debug!("Timeline runs {first_date} to {last_date} ({day_count} days)");

        // Geometry
        let scale = settings.scale();
        let width = BASE_WIDTH * scale;
        let height = BASE_HEIGHT * scale;
        let row_height = BASE_ROW_HEIGHT * scale;
        let font_size = BASE_FONT_SIZE * scale;

        // Label column
        let max_label_width = tasks
            .iter()
            .map(|task| measurer.measure_text(font_size, &task.label).0)
            .fold(0.0, f64::max);
        let label_column_width = max_label_width + CHART_MARGIN;
        let chart_width = width - label_column_width - CHART_MARGIN;
        let day_width = if day_count > 0 {
            chart_width / day_count as f64
        } else {
            0.0
        };
        debug!("Scale {scale}, chart width {chart_width:.1}, day width {day_width:.2}");

        Ok(Self {
            first_date,
            last_date,
            day_count,
            scale,
            width,
            height,
            row_height,
            font_size,
            label_column_width,
            chart_width,
            day_width,
            settings,
            tasks,
        })
    }

    /// Whether the week header row is drawn
    pub fn shows_week_row(&self) -> bool {
        self.day_count < self.settings.hide_weeks_from_day_count
    }

    /// Whether the day header row is drawn
    pub fn shows_day_row(&self) -> bool {
        self.day_count < self.settings.hide_days_from_day_count
    }

    /// Number of calendar header rows (year and month are always shown)
    pub fn header_row_count(&self) -> usize {
        2 + usize::from(self.shows_week_row()) + usize::from(self.shows_day_row())
    }

    /// The period whose boundaries get guide lines: one step coarser than the
    /// finest header row
    pub fn guide_period(&self) -> Period {
        if self.shows_day_row() {
            Period::Week
        } else if self.shows_week_row() {
            Period::Month
        } else {
            Period::Year
        }
    }

    /// The y value at which the first task's row slot begins
    pub fn task_band_origin(&self) -> f64 {
        self.header_row_count() as f64 * self.row_height + self.row_height / 2.0
    }

    /// The canvas height needed to show the headers and every task row
    pub fn content_height(&self) -> f64 {
        self.task_band_origin() + self.tasks.len() as f64 * 2.0 * self.row_height + self.row_height
    }

    /// The x value (relative to the chart area) of a day offset
    pub fn x_for_offset(&self, offset: i64) -> f64 {
        offset as f64 * self.day_width
    }

    /// The date at a day offset
    pub fn date_at(&self, offset: i64) -> Option<Date> {
        self.first_date.add_days(offset).ok()
    }
}

/// Parse a task's dates.  An end of `"-"` resolves to `open_end`
fn resolve_task(index: usize, raw_task: &RawTask, open_end: Date) -> Result<Task, ChartError> {
    let unparseable = |error| ChartError::InvalidTask {
        index,
        reason: TaskIssue::Unparseable(error),
    };
    let start = Date::from_stamp(&raw_task.start).map_err(unparseable)?;
    let end = resolve_end(&raw_task.end, open_end).map_err(unparseable)?;
    Ok(Task {
        label: raw_task.label.clone(),
        start,
        end,
        row: index,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::test_helpers::{date, measure, scenario_tasks};
    use open_gantt_core::DateError;

    #[test]
    fn scenario_bounds_and_rows() {
        let model =
            ChartModel::build(&scenario_tasks(), None, &measure, date("2020-01-01")).unwrap();
        assert_eq!(model.first_date, date("2016-01-01"));
        assert_eq!(model.last_date, date("2016-03-01"));
        assert_eq!(model.day_count, 60);
        assert!(model.shows_week_row());
        assert!(model.shows_day_row());
        assert_eq!(model.header_row_count(), 4);
        assert_eq!(model.guide_period(), Period::Week);
        assert_eq!(model.settings.language, "en-us");

        // Rows follow input order
        let rows: Vec<usize> = model.tasks.iter().map(|task| task.row).collect();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn day_count_matches_bounds() {
        let model =
            ChartModel::build(&scenario_tasks(), None, &measure, date("2020-01-01")).unwrap();
        assert_eq!(
            model.day_count,
            model.last_date.days_since(model.first_date)
        );
        assert!(model.day_count > 0);
    }

    #[test]
    fn default_geometry() {
        let model =
            ChartModel::build(&scenario_tasks(), None, &measure, date("2020-01-01")).unwrap();
        assert_eq!(model.scale, 1.5);
        assert_eq!(model.width, 1536.0);
        assert_eq!(model.height, 1152.0);
        assert_eq!(model.row_height, 30.0);
        assert_eq!(model.font_size, 15.0);

        // "A aaaa" is the longest label
        let longest = measure(15.0, "A aaaa").0;
        assert_eq!(model.label_column_width, longest + 4.0);
        assert_eq!(model.chart_width, 1536.0 - model.label_column_width - 4.0);
        assert_eq!(model.day_width, model.chart_width / 60.0);
    }

    #[test]
    fn zoom_doubles_geometry() {
        let zoomed = |zoom_percent| {
            let settings = Settings {
                zoom_percent: Some(zoom_percent),
                ..Settings::default()
            };
            ChartModel::build(&scenario_tasks(), Some(&settings), &measure, date("2020-01-01"))
                .unwrap()
        };
        let normal = zoomed(100);
        let double = zoomed(200);
        assert_eq!(double.scale, 2.0 * normal.scale);
        assert_eq!(double.width, 2.0 * normal.width);
        assert_eq!(double.height, 2.0 * normal.height);
        assert_eq!(double.row_height, 2.0 * normal.row_height);
        assert_eq!(double.font_size, 2.0 * normal.font_size);

        // Measured label widths double too
        assert_eq!(
            double.label_column_width - CHART_MARGIN,
            2.0 * (normal.label_column_width - CHART_MARGIN)
        );
        assert_eq!(double.day_width, double.chart_width / 60.0);
    }

    #[test]
    fn building_is_idempotent() {
        let settings = Settings {
            zoom_percent: Some(120),
            ..Settings::default()
        };
        let a = ChartModel::build(&scenario_tasks(), Some(&settings), &measure, date("2020-01-01"));
        let b = ChartModel::build(&scenario_tasks(), Some(&settings), &measure, date("2020-01-01"));
        assert_eq!(a, b);
    }

    #[test]
    fn open_ended_task_runs_to_today() {
        let mut tasks = scenario_tasks();
        tasks.push(RawTask::new("2016-02-10", "-", "Ongoing"));

        let monday = ChartModel::build(&tasks, None, &measure, date("2016-04-04")).unwrap();
        let tuesday = ChartModel::build(&tasks, None, &measure, date("2016-04-05")).unwrap();

        assert_eq!(monday.tasks[3].end, date("2016-04-04"));
        assert_eq!(tuesday.tasks[3].end, date("2016-04-05"));
        assert_eq!(tuesday.last_date, date("2016-04-05"));

        // Nothing else moves
        assert_eq!(monday.tasks[..3], tuesday.tasks[..3]);
    }

    #[test]
    fn end_override_seeds_last_date_and_open_ends() {
        let mut tasks = scenario_tasks();
        tasks.push(RawTask::new("2016-02-10", "-", "Ongoing"));
        let settings = Settings {
            end: Some("2016-06-30".to_string()),
            ..Settings::default()
        };
        let model =
            ChartModel::build(&tasks, Some(&settings), &measure, date("2020-01-01")).unwrap();
        assert_eq!(model.tasks[3].end, date("2016-06-30"));
        assert_eq!(model.last_date, date("2016-06-30"));

        // Override earlier than the tasks: tasks still stretch the range
        let settings = Settings {
            end: Some("2016-01-15".to_string()),
            ..Settings::default()
        };
        let model = ChartModel::build(&scenario_tasks(), Some(&settings), &measure, date("2020-01-01"))
            .unwrap();
        assert_eq!(model.last_date, date("2016-03-01"));

        // Override of "today"
        let settings = Settings {
            end: Some("-".to_string()),
            ..Settings::default()
        };
        let model = ChartModel::build(&scenario_tasks(), Some(&settings), &measure, date("2016-05-01"))
            .unwrap();
        assert_eq!(model.last_date, date("2016-05-01"));
    }

    #[test]
    fn unreadable_dates_abort() {
        let tasks = vec![
            RawTask::new("2016-01-01", "2016-01-25", "A"),
            RawTask::new("2016-02-31", "2016-03-01", "B"),
        ];
        let result = ChartModel::build(&tasks, None, &measure, date("2020-01-01"));
        assert_eq!(
            result,
            Err(ChartError::InvalidTask {
                index: 1,
                reason: TaskIssue::Unparseable(DateError::Malformed("2016-02-31".to_string())),
            })
        );

        let settings = Settings {
            end: Some("soon".to_string()),
            ..Settings::default()
        };
        let result = ChartModel::build(&tasks, Some(&settings), &measure, date("2020-01-01"));
        assert_eq!(
            result,
            Err(ChartError::DateParseFailure(DateError::Malformed(
                "soon".to_string()
            )))
        );
    }

    #[test]
    fn long_ranges_hide_rows() {
        let tasks = vec![RawTask::new("2016-01-01", "2016-07-01", "Long")];
        let model = ChartModel::build(&tasks, None, &measure, date("2020-01-01")).unwrap();
        assert_eq!(model.day_count, 182);
        assert!(!model.shows_week_row());
        assert!(!model.shows_day_row());
        assert_eq!(model.header_row_count(), 2);
        assert_eq!(model.guide_period(), Period::Year);

        let tasks = vec![RawTask::new("2016-01-01", "2016-04-01", "Medium")];
        let model = ChartModel::build(&tasks, None, &measure, date("2020-01-01")).unwrap();
        assert_eq!(model.day_count, 91);
        assert!(model.shows_week_row());
        assert!(!model.shows_day_row());
        assert_eq!(model.guide_period(), Period::Month);
    }

    #[test]
    fn band_and_content_height() {
        let model =
            ChartModel::build(&scenario_tasks(), None, &measure, date("2020-01-01")).unwrap();
        // 4 header rows of 30px, then half a row
        assert_eq!(model.task_band_origin(), 135.0);
        // 3 tasks of 2 rows each, then a trailing row
        assert_eq!(model.content_height(), 135.0 + 180.0 + 30.0);
    }
}
