// SPDX-License-Identifier: MIT

//!
//! The `open-gantt-renderer` engine
//!
//! Rendering a chart is a straight pipeline: build a [`ChartModel`] from the
//! tasks and settings, validate it, then draw it onto a [`DrawingSurface`]
//! (segmenting the date range for the header rows and guides, and placing
//! each task bar and label along the way).
//!

mod chart_model;
mod consts;
mod error;
mod label;
mod period;
mod placement;
mod point;
mod primitives;
mod recording;
mod scene;
mod segments;
mod surface;
mod theme;
mod validation;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use chart_model::*;
pub use consts::*;
pub use error::*;
pub use label::*;
pub use period::*;
pub use placement::*;
pub use point::*;
pub use primitives::*;
pub use recording::*;
pub use scene::*;
pub use segments::*;
pub use surface::*;
pub use theme::*;

use log::{debug, info};
use open_gantt_core::{Clock, RawTask, Settings, SystemClock};

/// The core `open-gantt-renderer` engine, common to all frontends.  It holds
/// what outlives a single render (the theme and the source of "today"); each
/// render builds its own [`ChartModel`].
pub struct Engine {
    /// The chart's colours
    theme: ChartTheme,

    /// Resolves the "today" sentinel
    clock: Box<dyn Clock>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create a new engine using the system clock and the default theme
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a new engine that takes "today" from `clock`
    pub fn with_clock<C>(clock: C) -> Self
    where
        C: Clock + 'static,
    {
        Self {
            theme: ChartTheme::default(),
            clock: Box::new(clock),
        }
    }

    /// Get the chart theme
    pub fn theme(&self) -> ChartTheme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ChartTheme) {
        debug!("engine set theme");
        self.theme = theme;
    }

    /// Build and validate the model for a chart, without drawing it.  Useful
    /// for sizing a canvas before drawing onto it.
    pub fn build_chart<M>(
        &self,
        tasks: &[RawTask],
        settings: Option<&Settings>,
        measurer: &M,
    ) -> Result<ChartModel, ChartError>
    where
        M: MeasureText + ?Sized,
    {
        let model = ChartModel::build(tasks, settings, measurer, self.clock.today())?;
        model.validate()?;
        Ok(model)
    }

    /// Render a chart onto `surface`.
    ///
    /// Nothing is drawn if the input is invalid.  Tasks that can't be placed
    /// are skipped and listed in the returned [`RenderOutcome`].
    pub fn render<S>(
        &self,
        tasks: &[RawTask],
        settings: Option<&Settings>,
        surface: &mut S,
    ) -> Result<RenderOutcome, ChartError>
    where
        S: DrawingSurface + ?Sized,
    {
        let model = self.build_chart(tasks, settings, &*surface)?;
        Ok(self.render_model(&model, surface))
    }

    /// Draw an already built (and validated) model
    pub fn render_model<S>(&self, model: &ChartModel, surface: &mut S) -> RenderOutcome
    where
        S: DrawingSurface + ?Sized,
    {
        info!(
            "Rendering {} tasks over {} days ({} to {})",
            model.tasks.len(),
            model.day_count,
            model.first_date,
            model.last_date
        );
        draw_chart(model, &self.theme, surface)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::test_helpers::{date, measure, scenario_tasks};
    use open_gantt_core::FixedClock;

    #[test]
    fn renders_scenario() {
        let engine = Engine::with_clock(FixedClock(date("2020-01-01")));
        let mut surface = RecordingSurface::new(measure);
        let outcome = engine.render(&scenario_tasks(), None, &mut surface).unwrap();
        assert_eq!(outcome.bars.len(), 3);
        assert!(!surface.commands().is_empty());
    }

    #[test]
    fn invalid_input_draws_nothing() {
        let engine = Engine::with_clock(FixedClock(date("2020-01-01")));
        let mut surface = RecordingSurface::new(measure);
        let result = engine.render(&[], None, &mut surface);
        assert_eq!(result, Err(ChartError::EmptyTaskList));
        assert!(surface.commands().is_empty());

        let tasks = vec![RawTask::new("2016-01-10", "2016-01-01", "Backwards")];
        let result = engine.render(&tasks, None, &mut surface);
        assert!(matches!(result, Err(ChartError::InvalidTask { index: 0, .. })));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn clock_resolves_open_ends() {
        let mut tasks = scenario_tasks();
        tasks.push(RawTask::new("2016-02-01", "-", "Ongoing"));
        let engine = Engine::with_clock(FixedClock(date("2016-03-31")));
        let model = engine.build_chart(&tasks, None, &measure).unwrap();
        assert_eq!(model.last_date, date("2016-03-31"));
        assert_eq!(model.day_count, 90);

        // 90 days: the day row is hidden
        assert!(!model.shows_day_row());
    }

    #[test]
    fn theme_is_used() {
        let mut engine = Engine::with_clock(FixedClock(date("2020-01-01")));
        let mut theme = engine.theme();
        theme.task.fill = crate::Colour::from_rgb(0x12, 0x34, 0x56);
        engine.set_theme(theme);

        let mut surface = RecordingSurface::new(measure);
        engine.render(&scenario_tasks(), None, &mut surface).unwrap();
        let bars = surface
            .rects()
            .filter(|rect| rect.fill_colour == theme.task.fill)
            .count();
        assert_eq!(bars, 3);
    }
}
