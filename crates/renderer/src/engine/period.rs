// SPDX-License-Identifier: MIT

//!
//! Calendar periods
//!

use open_gantt_core::Date;
use serde::Serialize;

/// A period classifier: maps a day to the label of the (coarser) period it
/// belongs to.  Two days are in the same period exactly when their labels are
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    /// e.g. `2016`
    Year,

    /// e.g. `Feb`
    Month,

    /// ISO 8601 week number, e.g. `5`
    Week,
}

impl Period {
    /// The label of the period `date` falls in
    pub fn label(&self, date: Date) -> String {
        match self {
            Period::Year => date.year().to_string(),
            Period::Month => date.month_abbreviation().to_string(),
            Period::Week => date.iso_week().to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::test_helpers::date;

    #[test]
    fn labels() {
        let day = date("2016-02-01");
        assert_eq!(Period::Year.label(day), "2016");
        assert_eq!(Period::Month.label(day), "Feb");
        assert_eq!(Period::Week.label(day), "5");
    }
}
