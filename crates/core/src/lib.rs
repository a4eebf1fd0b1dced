// SPDX-License-Identifier: MIT

//!
//! *Part of the wider OpenGantt project*
//!
//! This crate defines the basic datatypes used across the OpenGantt project
//! (renderer, frontends, binaries): calendar dates and the arithmetic done on
//! them, tasks, settings, and the chart input document.
//!
//! Types here are validated on construction, so a [`Date`] that exists is a
//! real calendar day.
//!

mod clock;
mod date;
mod input;
mod settings;
mod task;

pub use clock::*;
pub use date::*;
pub use input::*;
pub use settings::*;
pub use task::*;
