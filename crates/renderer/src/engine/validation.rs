// SPDX-License-Identifier: MIT

//!
//! Model validation
//!

use crate::{ChartError, ChartModel, TaskIssue};
use log::warn;

impl ChartModel {
    /// Check the model is drawable.
    ///
    /// Checks run in this order and the first failure is returned: geometry,
    /// the task list, each task in input order, then the date range.  A
    /// backwards task is reported as such rather than as the (possibly
    /// negative) range it produces.
    pub fn validate(&self) -> Result<(), ChartError> {
        let geometry = [
            self.scale,
            self.width,
            self.height,
            self.row_height,
            self.font_size,
        ];
        if geometry.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            warn!("Rejecting chart geometry {geometry:?}");
            return Err(ChartError::InvalidGeometry {
                scale: self.scale,
                width: self.width,
                height: self.height,
                row_height: self.row_height,
                font_size: self.font_size,
            });
        }

        if self.tasks.is_empty() {
            return Err(ChartError::EmptyTaskList);
        }

        for task in &self.tasks {
            if !task.has_valid_dates() {
                return Err(ChartError::InvalidTask {
                    index: task.row,
                    reason: TaskIssue::EndsBeforeStart {
                        start: task.start,
                        end: task.end,
                    },
                });
            }
        }

        if self.day_count <= 0 {
            return Err(ChartError::InvalidRange(self.day_count));
        }

        Ok(())
    }
}
