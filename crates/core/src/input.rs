// SPDX-License-Identifier: MIT

//!
//! The chart input document: the tasks to draw and (optionally) settings
//!

use crate::{RawTask, Settings};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading a [`ChartInput`]
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Could not read chart input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse chart input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to draw one chart
///
/// ```json
/// {
///   "tasks": [{ "start": "2016-02-01", "end": "-", "label": "B" }],
///   "settings": { "zoomPercent": 200 }
/// }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartInput {
    pub tasks: Vec<RawTask>,

    #[serde(default)]
    pub settings: Option<Settings>,
}

impl ChartInput {
    /// Parse a chart input from JSON
    pub fn from_json_str(json: &str) -> Result<Self, InputError> {
        let input: ChartInput = serde_json::from_str(json)?;
        debug!("Parsed chart input with {} task(s)", input.tasks.len());
        Ok(input)
    }

    /// Read and parse a chart input JSON file
    pub fn load(path: &Path) -> Result<Self, InputError> {
        debug!("Loading chart input from {}", path.display());
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Three demo tasks spanning the start of 2016
    pub fn demo() -> Self {
        Self {
            tasks: vec![
                RawTask::new("2016-02-01", "2016-02-25", "A aaaa"),
                RawTask::new("2016-01-01", "2016-01-25", "A"),
                RawTask::new("2016-02-01", "2016-03-01", "B"),
            ],
            settings: None,
        }
    }
}
