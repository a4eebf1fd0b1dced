// SPDX-License-Identifier: MIT

//!
//! The egui frontend
//!

use crate::{
    ChartError, ChartTheme, DashPattern, DrawingSurface, Engine, FilledBox, LineStyle,
    MeasureText, Point, RenderOutcome, TextOut,
};
use eframe::egui::{
    Align2, Color32, Context, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Ui,
    Vec2,
};
use log::*;
use open_gantt_core::{RawTask, Settings};

/// Draws Gantt charts in an egui application
pub struct OpenGanttRendererEgui {
    /// The underlying chart [`Engine`]
    engine: Engine,

    tasks: Vec<RawTask>,
    settings: Option<Settings>,

    /// The result of the most recent draw (logged once, not every frame)
    last_result: Option<Result<RenderOutcome, ChartError>>,
}

impl OpenGanttRendererEgui {
    pub fn new(engine: Engine) -> Self {
        info!("Constructing a new EguiRenderer in Rust");
        Self {
            engine,
            tasks: Vec::new(),
            settings: None,
            last_result: None,
        }
    }

    pub fn set_tasks(&mut self, tasks: Vec<RawTask>) {
        self.tasks = tasks;
        self.last_result = None;
    }

    pub fn set_settings(&mut self, settings: Option<Settings>) {
        self.settings = settings;
        self.last_result = None;
    }

    pub fn theme(&self) -> ChartTheme {
        self.engine.theme()
    }

    pub fn set_theme(&mut self, theme: ChartTheme) {
        if theme != self.engine.theme() {
            self.engine.set_theme(theme);
        }
    }

    /// Draw the chart into `ui`, sized to fit the whole chart.  Invalid input
    /// is shown as an error message instead.
    pub fn draw(&mut self, ctx: &Context, ui: &mut Ui) {
        let measurer = EguiMeasurer { ctx: ctx.clone() };
        let model = match self
            .engine
            .build_chart(&self.tasks, self.settings.as_ref(), &measurer)
        {
            Ok(model) => model,
            Err(error) => {
                if self.last_result.is_none() {
                    warn!("Can't draw chart: {error}");
                }
                ui.colored_label(Color32::RED, error.to_string());
                self.last_result = Some(Err(error));
                return;
            }
        };

        let size = Vec2::new(model.width as f32, model.content_height() as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        painter.rect(
            response.rect,
            0.0,
            Color32::WHITE,
            Stroke::NONE,
            StrokeKind::Inside,
        );

        let mut surface = EguiSurface::new(measurer, &painter, response.rect.min);
        let outcome = self.engine.render_model(&model, &mut surface);
        if self.last_result.is_none() {
            debug!("Drew {} bars, skipped {}", outcome.bars.len(), outcome.skipped.len());
        }

        // Task details on hover
        if let Some(pointer) = response.hover_pos() {
            let local = pointer - response.rect.min;
            let x = f64::from(local.x) - model.label_column_width;
            let y = f64::from(local.y);
            let hovered = outcome
                .bars
                .iter()
                .find(|bar| bar.x1 <= x && x <= bar.x2 && bar.y1 <= y && y <= bar.y2);
            if let Some(task) = hovered.and_then(|bar| model.tasks.get(bar.row)) {
                response.on_hover_text(format!("{}\n{} - {}", task.label, task.start, task.end));
            }
        }

        self.last_result = Some(Ok(outcome));
    }
}

/// Measures text with egui's fonts
#[derive(Clone)]
struct EguiMeasurer {
    ctx: Context,
}

impl MeasureText for EguiMeasurer {
    fn measure_text(&self, font_size: f64, text: &str) -> (f64, f64) {
        let text_galley = self.ctx.fonts_mut(|f| {
            f.layout_no_wrap(
                text.to_string(),
                FontId::proportional(font_size as f32),
                Color32::BLACK,
            )
        });
        let text_width: f64 = text_galley.rect.width().into();
        let text_height: f64 = text_galley.rect.height().into();
        (text_width, text_height)
    }
}

/// A [`DrawingSurface`] over an egui [`Painter`]
struct EguiSurface<'a> {
    measurer: EguiMeasurer,
    painter: &'a Painter,
    origin: Vec2,
    saved_origins: Vec<Vec2>,
}

impl<'a> EguiSurface<'a> {
    fn new(measurer: EguiMeasurer, painter: &'a Painter, canvas_min: Pos2) -> Self {
        Self {
            measurer,
            painter,
            origin: canvas_min.to_vec2(),
            saved_origins: Vec::new(),
        }
    }

    fn pos(&self, point: Point) -> Pos2 {
        Pos2::new(point.x as f32, point.y as f32) + self.origin
    }
}

impl MeasureText for EguiSurface<'_> {
    fn measure_text(&self, font_size: f64, text: &str) -> (f64, f64) {
        self.measurer.measure_text(font_size, text)
    }
}

impl DrawingSurface for EguiSurface<'_> {
    fn fill_rect(&mut self, filled_box: &FilledBox) {
        let position_and_size = &filled_box.position_and_size;
        let min = self.pos(position_and_size.position);
        let size = Vec2::new(
            position_and_size.width as f32,
            position_and_size.height as f32,
        );
        let stroke = filled_box
            .border_style
            .map(egui_stroke)
            .unwrap_or(Stroke::NONE);
        self.painter.rect(
            Rect::from_min_size(min, size),
            0.0,
            Color32::from(filled_box.fill_colour),
            stroke,
            StrokeKind::Inside,
        );
    }

    fn draw_line(&mut self, points: &[Point], style: LineStyle, dash: Option<DashPattern>) {
        let points: Vec<Pos2> = points.iter().map(|point| self.pos(*point)).collect();
        let stroke = egui_stroke(style);
        match dash {
            Some(dash) => {
                self.painter.extend(Shape::dashed_line(
                    &points,
                    stroke,
                    dash.dash as f32,
                    dash.gap as f32,
                ));
            }
            None => {
                self.painter.add(Shape::line(points, stroke));
            }
        }
    }

    fn draw_text(&mut self, text: &TextOut) {
        self.painter.text(
            self.pos(text.baseline_left),
            Align2::LEFT_BOTTOM,
            &text.text,
            FontId::proportional(text.font_size as f32),
            Color32::from(text.colour),
        );
    }

    fn push(&mut self) {
        self.saved_origins.push(self.origin);
    }

    fn pop(&mut self) {
        if let Some(origin) = self.saved_origins.pop() {
            self.origin = origin;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin += Vec2::new(dx as f32, dy as f32);
    }
}

/// Convert a [`LineStyle`] to a [`Stroke`]
fn egui_stroke(style: LineStyle) -> Stroke {
    Stroke::new(style.thickness as f32, Color32::from(style.colour))
}
