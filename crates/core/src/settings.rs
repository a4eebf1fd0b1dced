// SPDX-License-Identifier: MIT

//!
//! Chart settings.  Every field is optional; missing (or zero) fields fall back
//! to their defaults independently of one another.
//!

use serde::{Deserialize, Serialize};

/// The language tag used when none is given
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Zoom percentage used when none is given (suits high pixel density screens)
pub const DEFAULT_ZOOM_PERCENT: i32 = 150;

/// The day row is shown for timelines shorter than this many days
pub const DEFAULT_HIDE_DAYS_FROM_DAY_COUNT: i64 = 90;

/// The week row is shown for timelines shorter than this many days
pub const DEFAULT_HIDE_WEEKS_FROM_DAY_COUNT: i64 = 180;

/// Partial settings, as supplied by users (camelCase in JSON)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Language tag.  Carried through, not used for layout
    pub language: Option<String>,

    /// Override for the timeline's last date: a `YYYY-MM-DD` stamp or `"-"`
    pub end: Option<String>,

    /// Zoom as a percentage (100 = 1024 x 768 canvas)
    pub zoom_percent: Option<i32>,

    pub hide_days_from_day_count: Option<i64>,

    pub hide_weeks_from_day_count: Option<i64>,
}

/// Settings with every default applied
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub language: String,
    pub end: Option<String>,
    pub zoom_percent: i32,
    pub hide_days_from_day_count: i64,
    pub hide_weeks_from_day_count: i64,
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Settings::default().resolve()
    }
}

impl Settings {
    /// Apply the defaults for each missing or zero field
    pub fn resolve(&self) -> ResolvedSettings {
        let language = self
            .language
            .as_deref()
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string();

        let end = self
            .end
            .as_deref()
            .map(str::trim)
            .filter(|end| !end.is_empty())
            .map(str::to_string);

        let resolved = ResolvedSettings {
            language,
            end,
            zoom_percent: non_zero_or(self.zoom_percent, DEFAULT_ZOOM_PERCENT),
            hide_days_from_day_count: non_zero_or(
                self.hide_days_from_day_count,
                DEFAULT_HIDE_DAYS_FROM_DAY_COUNT,
            ),
            hide_weeks_from_day_count: non_zero_or(
                self.hide_weeks_from_day_count,
                DEFAULT_HIDE_WEEKS_FROM_DAY_COUNT,
            ),
        };
        resolved.with_paired_thresholds()
    }

    /// Fill any field unset here from `other`
    pub fn or(self, other: &Settings) -> Settings {
        Settings {
            language: self.language.or_else(|| other.language.clone()),
            end: self.end.or_else(|| other.end.clone()),
            zoom_percent: self.zoom_percent.or(other.zoom_percent),
            hide_days_from_day_count: self
                .hide_days_from_day_count
                .or(other.hide_days_from_day_count),
            hide_weeks_from_day_count: self
                .hide_weeks_from_day_count
                .or(other.hide_weeks_from_day_count),
        }
    }
}

impl ResolvedSettings {
    /// The two hide thresholds are either both set or both reset to their
    /// defaults, never zero on their own
    pub fn with_paired_thresholds(mut self) -> Self {
        if self.hide_days_from_day_count == 0 || self.hide_weeks_from_day_count == 0 {
            self.hide_days_from_day_count = DEFAULT_HIDE_DAYS_FROM_DAY_COUNT;
            self.hide_weeks_from_day_count = DEFAULT_HIDE_WEEKS_FROM_DAY_COUNT;
        }
        self
    }

    /// The zoom as a multiplier (e.g. 150% -> 1.5)
    pub fn scale(&self) -> f64 {
        f64::from(self.zoom_percent) / 100.0
    }
}

fn non_zero_or<T: Default + PartialEq>(value: Option<T>, default: T) -> T {
    match value {
        Some(value) if value != T::default() => value,
        _ => default,
    }
}
