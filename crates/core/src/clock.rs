// SPDX-License-Identifier: MIT

//!
//! Where "today" comes from
//!

use crate::Date;

/// A source for today's date, used to resolve the "today" end sentinel
pub trait Clock {
    fn today(&self) -> Date;
}

/// Reads the system clock (UTC)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Date::today()
    }
}

/// Always reports the same day.  Useful for reproducible renders
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
