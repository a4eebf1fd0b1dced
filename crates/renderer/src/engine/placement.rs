// SPDX-License-Identifier: MIT

//!
//! Task placement: where each task's bar goes
//!

use crate::{ChartError, ChartModel, PositionAndSize};
use open_gantt_core::{Task, day_index};
use serde::Serialize;

/// A placed task bar.  x values are relative to the chart area (i.e. to the
/// right of the label column), y values to the top of the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBar {
    /// The task's row (its input position)
    pub row: usize,

    pub start_offset: i64,

    /// Exclusive: single-day tasks have `end_offset == start_offset + 1`
    pub end_offset: i64,

    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl TaskBar {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn position_and_size(&self) -> PositionAndSize {
        PositionAndSize::from_corners(self.x1, self.y1, self.x2, self.y2)
    }
}

/// Vertical offset of a row within the task band.  Each task takes two row
/// heights: one for the bar and one for the gap below it
pub fn row_offset(row: usize, row_height: f64) -> f64 {
    row as f64 * 2.0 * row_height
}

/// Work out where a task's bar goes.  Tasks with a date outside the model's
/// range can't be placed.
pub fn place_task(model: &ChartModel, task: &Task) -> Result<TaskBar, ChartError> {
    let unplaceable = ChartError::TaskUnplaceable { index: task.row };
    let start_offset =
        day_index(task.start, model.first_date, model.last_date).ok_or(unplaceable.clone())?;
    let mut end_offset =
        day_index(task.end, model.first_date, model.last_date).ok_or(unplaceable)?;

    // One-day tasks: draw the full day
    if start_offset == end_offset {
        end_offset += 1;
    }

    let y1 = model.task_band_origin() + row_offset(task.row, model.row_height);
    Ok(TaskBar {
        row: task.row,
        start_offset,
        end_offset,
        x1: model.x_for_offset(start_offset),
        x2: model.x_for_offset(end_offset),
        y1,
        y2: y1 + model.row_height,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::test_helpers::{date, measure, scenario_model};
    use open_gantt_core::RawTask;

    #[test]
    fn scenario_bars() {
        let model = scenario_model();
        let bars: Vec<TaskBar> = model
            .tasks
            .iter()
            .map(|task| place_task(&model, task).unwrap())
            .collect();

        assert_eq!((bars[0].start_offset, bars[0].end_offset), (31, 55));
        assert_eq!((bars[1].start_offset, bars[1].end_offset), (0, 24));
        assert_eq!((bars[2].start_offset, bars[2].end_offset), (31, 60));

        assert_eq!(bars[1].x1, 0.0);
        assert_eq!(bars[2].x2, model.chart_width);

        // Two row heights between consecutive rows
        assert_eq!(bars[1].y1 - bars[0].y1, 2.0 * model.row_height);
        assert_eq!(bars[0].y1, model.task_band_origin());
        assert_eq!(bars[0].y2 - bars[0].y1, model.row_height);
    }

    #[test]
    fn single_day_task_is_one_day_wide() {
        let tasks = vec![
            RawTask::new("2016-01-01", "2016-01-31", "Month"),
            RawTask::new("2016-01-10", "2016-01-10", "Day"),
            RawTask::new("2016-01-31", "2016-01-31", "Last day"),
        ];
        let model = ChartModel::build(&tasks, None, &measure, date("2020-01-01")).unwrap();
        for task in &model.tasks[1..] {
            let bar = place_task(&model, task).unwrap();
            assert_eq!(bar.end_offset - bar.start_offset, 1);
            assert!((bar.width() - model.day_width).abs() < 1e-9);
        }
    }

    #[test]
    fn out_of_range_task_is_unplaceable() {
        let model = scenario_model();
        let mut task = model.tasks[0].clone();
        task.end = date("2016-03-02");
        assert_eq!(
            place_task(&model, &task),
            Err(ChartError::TaskUnplaceable { index: 0 })
        );
    }

    #[test]
    fn rows_are_independent_of_skipped_tasks() {
        assert_eq!(row_offset(0, 30.0), 0.0);
        assert_eq!(row_offset(3, 30.0), 180.0);
    }
}
