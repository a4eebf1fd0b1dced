// SPDX-License-Identifier: MIT

//!
//! Drawing a chart onto a surface
//!
//! Everything right of the label column (header rows, stripes, guides, task
//! bars) is drawn with the origin moved to the column's right edge.  Task
//! labels are drawn in the label column itself.
//!

use crate::{
    ChartError, ChartModel, ChartTheme, DashPattern, DrawingSurface, FilledBox, GUIDE_DASH,
    GUIDE_GAP, LineStyle, Period, Point, PositionAndSize, STRIPE_NUDGE, TaskBar, TextOut,
    period_boundaries, place_label, place_task, row_offset, segment_periods,
};
use log::{debug, trace, warn};
use serde::Serialize;

/// What happened during a render
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderOutcome {
    /// The bars that were drawn, in input order
    pub bars: Vec<TaskBar>,

    /// Tasks that couldn't be placed (and so weren't drawn)
    #[serde(skip)]
    pub skipped: Vec<ChartError>,
}

/// Draw a (validated) chart.  Unplaceable tasks are skipped and reported in
/// the outcome; they don't stop the rest of the chart being drawn.
pub fn draw_chart<S>(model: &ChartModel, theme: &ChartTheme, surface: &mut S) -> RenderOutcome
where
    S: DrawingSurface + ?Sized,
{
    let row_height = model.row_height;

    surface.push();
    surface.translate(model.label_column_width, 0.0);

    // Calendar header rows
    let mut y = 0.0;
    draw_calendar_row(model, theme, surface, y, Period::Year);
    y += row_height;
    draw_calendar_row(model, theme, surface, y, Period::Month);
    if model.shows_week_row() {
        y += row_height;
        draw_calendar_row(model, theme, surface, y, Period::Week);
    }
    if model.shows_day_row() {
        y += row_height;
        draw_day_row(model, theme, surface, y);
    }
    debug!("Drew {} header rows", model.header_row_count());

    // Stripes behind each task row
    for task in &model.tasks {
        let y1 = model.task_band_origin() + STRIPE_NUDGE + row_offset(task.row, row_height)
            - row_height / 2.0;
        let colour = theme.stripe_for_row(task.row);
        surface.fill_rect(&FilledBox {
            position_and_size: PositionAndSize::from_corners(
                0.0,
                y1,
                model.chart_width,
                y1 + 2.0 * row_height,
            ),
            fill_colour: colour,
            border_style: Some(LineStyle {
                colour,
                thickness: 1.0,
            }),
        });
    }

    // Guides, from the bottom of the headers to below the last task
    let guides_top = y + row_height;
    let guides_bottom =
        guides_top + model.tasks.len() as f64 * 2.0 * row_height + 2.0 * row_height;
    let guide_period = model.guide_period();
    let dash = DashPattern {
        dash: GUIDE_DASH,
        gap: GUIDE_GAP,
    };
    let boundaries = period_boundaries(model.first_date, model.day_count, guide_period);
    trace!("{} {guide_period:?} guides", boundaries.len());
    for offset in boundaries {
        let x = model.x_for_offset(offset);
        surface.draw_line(
            &[Point::new(x, guides_top), Point::new(x, guides_bottom)],
            theme.guide_line(),
            Some(dash),
        );
    }

    surface.pop();

    // Task bars and their labels
    let mut outcome = RenderOutcome::default();
    for task in &model.tasks {
        let bar = match place_task(model, task) {
            Ok(bar) => bar,
            Err(error) => {
                warn!("{error}");
                outcome.skipped.push(error);
                continue;
            }
        };

        surface.push();
        surface.translate(model.label_column_width, 0.0);
        let mut shadow = bar.position_and_size();
        shadow.add_offset(theme.shadow.offset, theme.shadow.offset);
        surface.fill_rect(&FilledBox {
            position_and_size: shadow,
            fill_colour: theme.shadow.colour,
            border_style: None,
        });
        surface.fill_rect(&FilledBox {
            position_and_size: bar.position_and_size(),
            fill_colour: theme.task.fill,
            border_style: Some(LineStyle {
                colour: theme.task.border,
                thickness: 1.0,
            }),
        });
        surface.pop();

        if !task.label.is_empty() {
            let (_, text_height) = surface.measure_text(model.font_size, &task.label);
            surface.draw_text(&TextOut {
                baseline_left: Point::new(0.0, bar.y2 - text_height / 2.0),
                text: task.label.clone(),
                colour: theme.task.label,
                font_size: model.font_size,
            });
        }

        outcome.bars.push(bar);
    }

    debug!(
        "Drew {} of {} tasks",
        outcome.bars.len(),
        model.tasks.len()
    );
    outcome
}

/// A row of blocks, one per period, each labelled if the label fits
fn draw_calendar_row<S>(
    model: &ChartModel,
    theme: &ChartTheme,
    surface: &mut S,
    y: f64,
    period: Period,
) where
    S: DrawingSurface + ?Sized,
{
    let border = LineStyle {
        colour: theme.frame.border,
        thickness: 1.0,
    };
    for segment in segment_periods(model.first_date, model.day_count, period) {
        let block = PositionAndSize::from_corners(
            model.x_for_offset(segment.start_offset),
            y,
            model.x_for_offset(segment.end_offset),
            y + model.row_height,
        );
        surface.fill_rect(&FilledBox {
            position_and_size: block,
            fill_colour: theme.frame.fill,
            border_style: Some(border),
        });

        let text_size = surface.text_size(model.font_size, &segment.label);
        match place_label(&block, text_size, model.chart_width) {
            Some(baseline_left) => surface.draw_text(&TextOut {
                baseline_left,
                text: segment.label,
                colour: theme.frame.border,
                font_size: model.font_size,
            }),
            None => trace!("{period:?} label {:?} doesn't fit", segment.label),
        }
    }
}

/// One cell per day, weekends shaded darker
fn draw_day_row<S>(model: &ChartModel, theme: &ChartTheme, surface: &mut S, y: f64)
where
    S: DrawingSurface + ?Sized,
{
    let border = theme.guide_line();
    for offset in 0..=model.day_count {
        let Some(day) = model.date_at(offset) else {
            break;
        };
        let shade = if day.is_weekend() {
            theme.stripes.dark
        } else {
            theme.stripes.light
        };
        surface.fill_rect(&FilledBox {
            position_and_size: PositionAndSize::from_corners(
                model.x_for_offset(offset),
                y,
                model.x_for_offset(offset + 1),
                y + model.row_height,
            ),
            fill_colour: shade,
            border_style: Some(border),
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        DrawCommand, RecordingSurface,
        engine::test_helpers::{date, measure, scenario_model},
    };
    use open_gantt_core::RawTask;

    fn draw(model: &ChartModel) -> (RecordingSurface, RenderOutcome) {
        let mut surface = RecordingSurface::new(measure);
        let outcome = draw_chart(model, &ChartTheme::default(), &mut surface);
        (surface, outcome)
    }

    fn texts(surface: &RecordingSurface) -> Vec<String> {
        surface.texts().map(|text| text.text.clone()).collect()
    }

    #[test]
    fn scenario_headers() {
        let model = scenario_model();
        let (surface, outcome) = draw(&model);
        let texts = texts(&surface);

        assert!(texts.contains(&"2016".to_string()));
        assert!(texts.contains(&"Jan".to_string()));
        assert!(texts.contains(&"Feb".to_string()));
        assert!(texts.contains(&"53".to_string()));

        // March is a single day, narrower than its label
        assert!(!texts.contains(&"Mar".to_string()));

        // Task labels last, in input order
        assert_eq!(texts[texts.len() - 3..], ["A aaaa", "A", "B"]);
        assert_eq!(outcome.bars.len(), 3);
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn header_labels_stay_in_chart() {
        let model = scenario_model();
        let (surface, _) = draw(&model);
        let right_edge = model.label_column_width + model.chart_width;
        for text in surface.texts() {
            let (width, _) = measure(text.font_size, &text.text);
            assert!(text.baseline_left.x >= 0.0);
            assert!(text.baseline_left.x + width <= right_edge + 1e-9);
        }
    }

    #[test]
    fn weekly_guides() {
        let model = scenario_model();
        let (surface, _) = draw(&model);
        let guides: Vec<&DrawCommand> = surface
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { dash: Some(_), .. }))
            .collect();

        // A line at each Monday
        assert_eq!(guides.len(), 9);
        let DrawCommand::Line { points, .. } = guides[0] else {
            unreachable!()
        };
        assert_eq!(points[0].x, model.label_column_width + 3.0 * model.day_width);
        assert_eq!(points[0].y, 4.0 * model.row_height);
        assert_eq!(points[1].y, 4.0 * model.row_height + 8.0 * model.row_height);
    }

    #[test]
    fn day_cells_shade_weekends() {
        let model = scenario_model();
        let theme = ChartTheme::default();
        let (surface, _) = draw(&model);
        let cells: Vec<&FilledBox> = surface
            .rects()
            .filter(|rect| rect.border_style == Some(theme.guide_line()))
            .collect();
        assert_eq!(cells.len(), 61);
        let weekends = cells
            .iter()
            .filter(|cell| cell.fill_colour == theme.stripes.dark)
            .count();
        assert_eq!(weekends, 18);
    }

    #[test]
    fn bars_right_of_label_column() {
        let model = scenario_model();
        let theme = ChartTheme::default();
        let (surface, outcome) = draw(&model);
        let bars: Vec<&FilledBox> = surface
            .rects()
            .filter(|rect| rect.fill_colour == theme.task.fill)
            .filter(|rect| rect.border_style.map(|style| style.colour) == Some(theme.task.border))
            .collect();
        assert_eq!(bars.len(), 3);
        for (drawn, placed) in bars.iter().zip(&outcome.bars) {
            assert_eq!(
                drawn.position_and_size.position.x,
                model.label_column_width + placed.x1
            );
        }

        // Each bar has a shadow
        let shadows = surface
            .rects()
            .filter(|rect| rect.fill_colour == theme.shadow.colour)
            .count();
        assert_eq!(shadows, 3);
    }

    #[test]
    fn unplaceable_tasks_are_skipped() {
        let mut model = scenario_model();
        model.tasks[1].end = date("2017-01-01");
        let (surface, outcome) = draw(&model);

        assert_eq!(outcome.skipped, vec![ChartError::TaskUnplaceable { index: 1 }]);
        let rows: Vec<usize> = outcome.bars.iter().map(|bar| bar.row).collect();
        assert_eq!(rows, vec![0, 2]);

        // The gap is left where the skipped task would have been
        assert_eq!(outcome.bars[1].y1 - outcome.bars[0].y1, 4.0 * model.row_height);
        assert!(!texts(&surface).contains(&"A".to_string()));
    }

    #[test]
    fn long_range_uses_year_guides() {
        let tasks = vec![
            RawTask::new("2015-06-01", "2016-06-01", "Year"),
            RawTask::new("2015-09-01", "2015-10-01", ""),
        ];
        let model = ChartModel::build(&tasks, None, &measure, date("2020-01-01")).unwrap();
        let (surface, outcome) = draw(&model);

        // One boundary: 1st Jan 2016
        let guides = surface
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count();
        assert_eq!(guides, 1);

        // No day cells, and nothing drawn for the empty label
        assert_eq!(outcome.bars.len(), 2);
        assert_eq!(texts(&surface).last(), Some(&"Year".to_string()));
    }
}
