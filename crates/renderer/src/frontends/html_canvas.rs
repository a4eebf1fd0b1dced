// SPDX-License-Identifier: MIT

//!
//! The HTML Canvas frontend
//!
//! ```sh
//! wasm-pack build --target web
//! python3 -m http.server 8000 --bind 0.0.0.0
//! ```
//!
//! ```js
//! const renderer = new OpenGanttRendererHtmlCanvas("canvas#gantt");
//! renderer.render([{ start: "2016-01-01", end: "-", label: "A" }], { zoomPercent: 200 });
//! ```
//!

use crate::{
    Colour, DashPattern, DrawingSurface, Engine, FilledBox, LineStyle, MeasureText, Point,
    TextOut,
};
use log::{debug, info, warn};
use open_gantt_core::{RawTask, Settings};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT_FAMILY: &str = "sans-serif";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Debug)
        .map_err(|error| JsValue::from_str(&error.to_string()))?;
    info!("Start OpenGantt");
    Ok(())
}

/// Draws Gantt charts onto an HTML canvas
#[wasm_bindgen]
pub struct OpenGanttRendererHtmlCanvas {
    /// The underlying chart [`Engine`]
    engine: Engine,

    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl OpenGanttRendererHtmlCanvas {
    /// Create a renderer drawing onto the canvas matching `selector`
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<OpenGanttRendererHtmlCanvas, JsValue> {
        info!("Constructing a new HtmlCanvas in Rust");
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("No element matches {selector}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("{selector} is not a canvas")))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("No 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            engine: Engine::new(),
            canvas,
            ctx,
        })
    }

    /// Set the task bar colours from hex strings (e.g. `#555555`)
    #[wasm_bindgen]
    pub fn set_task_colours(&mut self, border: &str, fill: &str) -> Result<(), JsValue> {
        let parse = |hex: &str| {
            Colour::from_hex(hex).map_err(|_| JsValue::from_str(&format!("Invalid colour {hex}")))
        };
        let mut theme = self.engine.theme();
        theme.task.border = parse(border)?;
        theme.task.fill = parse(fill)?;
        self.engine.set_theme(theme);
        Ok(())
    }

    /// Render a chart.  `tasks` is an array of `{start, end, label}` and
    /// `settings` (which may be `undefined`) is an object like
    /// `{language, end, zoomPercent, hideDaysFromDayCount, hideWeeksFromDayCount}`.
    ///
    /// The canvas is resized to fit the chart.  Returns the placed task bars.
    #[wasm_bindgen]
    pub fn render(&mut self, tasks: JsValue, settings: JsValue) -> Result<JsValue, JsValue> {
        let started = js_sys::Date::now();
        let tasks: Vec<RawTask> = serde_wasm_bindgen::from_value(tasks)?;
        let settings: Option<Settings> = if settings.is_undefined() || settings.is_null() {
            None
        } else {
            Some(serde_wasm_bindgen::from_value(settings)?)
        };

        let mut surface = CanvasSurface {
            ctx: self.ctx.clone(),
        };
        let model = self
            .engine
            .build_chart(&tasks, settings.as_ref(), &surface)
            .map_err(|error| {
                warn!("Can't draw chart: {error}");
                JsValue::from_str(&error.to_string())
            })?;

        // Resizing the canvas clears it (and resets the context)
        let dpr = device_pixel_ratio();
        self.canvas.set_width((model.width * dpr).ceil() as u32);
        self.canvas.set_height((model.content_height() * dpr).ceil() as u32);
        self.ctx.scale(dpr, dpr)?;

        let outcome = self.engine.render_model(&model, &mut surface);
        debug!(
            "Rendered {} bars in {:.1}ms",
            outcome.bars.len(),
            js_sys::Date::now() - started
        );
        Ok(serde_wasm_bindgen::to_value(&outcome.bars)?)
    }
}

/// A [`DrawingSurface`] over a 2d canvas context
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn set_font(&self, font_size: f64) {
        self.ctx.set_font(&format!("{font_size}px {FONT_FAMILY}"));
    }
}

impl MeasureText for CanvasSurface {
    fn measure_text(&self, font_size: f64, text: &str) -> (f64, f64) {
        self.set_font(font_size);
        match self.ctx.measure_text(text) {
            Ok(metrics) => {
                let height =
                    metrics.actual_bounding_box_ascent() + metrics.actual_bounding_box_descent();
                (metrics.width(), height)
            }
            Err(error) => {
                warn!("Can't measure {text:?}: {error:?}");
                (0.0, 0.0)
            }
        }
    }
}

impl DrawingSurface for CanvasSurface {
    fn fill_rect(&mut self, filled_box: &FilledBox) {
        let position_and_size = &filled_box.position_and_size;
        let x = position_and_size.position.x;
        let y = position_and_size.position.y;
        let width = position_and_size.width;
        let height = position_and_size.height;
        self.ctx.set_fill_style_str(&filled_box.fill_colour.as_css());
        self.ctx.fill_rect(x, y, width, height);
        if let Some(border_style) = filled_box.border_style {
            self.ctx.set_stroke_style_str(&border_style.colour.as_css());
            self.ctx.set_line_width(border_style.thickness);
            self.ctx.stroke_rect(x, y, width, height);
        }
    }

    fn draw_line(&mut self, points: &[Point], style: LineStyle, dash: Option<DashPattern>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let segments = match dash {
            Some(dash) => js_sys::Array::of2(&dash.dash.into(), &dash.gap.into()),
            None => js_sys::Array::new(),
        };
        if let Err(error) = self.ctx.set_line_dash(&segments) {
            warn!("Can't set line dash: {error:?}");
        }
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for point in rest {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.set_stroke_style_str(&style.colour.as_css());
        self.ctx.set_line_width(style.thickness);
        self.ctx.stroke();
        let _ = self.ctx.set_line_dash(&js_sys::Array::new());
    }

    fn draw_text(&mut self, text: &TextOut) {
        self.set_font(text.font_size);
        self.ctx.set_fill_style_str(&text.colour.as_css());
        let _ = self
            .ctx
            .fill_text(&text.text, text.baseline_left.x, text.baseline_left.y);
    }

    fn push(&mut self) {
        self.ctx.save();
    }

    fn pop(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let _ = self.ctx.translate(dx, dy);
    }
}

fn device_pixel_ratio() -> f64 {
    web_sys::window()
        .map(|window| window.device_pixel_ratio())
        .unwrap_or(1.0)
}
