// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider OpenGantt project*
//!
//! Draw a Gantt chart from a JSON file of tasks, either in a window or as a
//! JSON dump of the draw commands
//!

use clap::Parser;
use eframe::egui::{CentralPanel, Context, ScrollArea, ViewportBuilder};
use open_gantt_core::{ChartInput, Date, FixedClock, Settings};
use open_gantt_renderer::{Engine, OpenGanttRendererEgui, RecordingSurface};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the Gantt chart viewer
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging (stderr only, so a dump on stdout stays clean)
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("open_gantt")
        .build();
    CombinedLogger::init(vec![TermLogger::new(
        if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    // Input, with command line settings taking priority over the file's
    let input = match &args.input {
        Some(path) => ChartInput::load(path)?,
        None => {
            info!("No input file given, using the demo tasks");
            ChartInput::demo()
        }
    };
    let settings = args.settings().or(&input.settings.unwrap_or_default());

    let engine = match &args.today {
        Some(stamp) => Engine::with_clock(FixedClock(Date::from_stamp(stamp)?)),
        None => Engine::new(),
    };

    if args.dump {
        let mut surface = RecordingSurface::new(approximate_text_size);
        let outcome = engine.render(&input.tasks, Some(&settings), &mut surface)?;
        for skipped in &outcome.skipped {
            warn!("{skipped}");
        }
        println!("{}", surface.to_json()?);
        return Ok(());
    }

    let mut renderer = OpenGanttRendererEgui::new(engine);
    renderer.set_tasks(input.tasks);
    renderer.set_settings(Some(settings));
    let app = GanttApp { renderer };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1600.0, 900.0]),
        ..Default::default()
    };

    info!("Launching application");
    eframe::run_native("OpenGantt", options, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}

/// OpenGantt CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Draw a Gantt chart from a JSON list of tasks",
    after_help = "Without an input file the built-in demo tasks are drawn"
)]
pub struct Cli {
    /// Path to the chart JSON (`{"tasks": [...], "settings": {...}}`)
    pub input: Option<PathBuf>,

    /// Zoom percentage (default 150)
    #[arg(long)]
    pub zoom: Option<i32>,

    /// Last date shown (`YYYY-MM-DD`, or `-` for today)
    #[arg(long)]
    pub end: Option<String>,

    /// Language tag (carried through, currently unused)
    #[arg(long)]
    pub language: Option<String>,

    /// Treat this date (`YYYY-MM-DD`) as today
    #[arg(long)]
    pub today: Option<String>,

    /// Print the draw commands as JSON instead of opening a window
    #[arg(long)]
    pub dump: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The settings given on the command line
    fn settings(&self) -> Settings {
        Settings {
            language: self.language.clone(),
            end: self.end.clone(),
            zoom_percent: self.zoom,
            ..Settings::default()
        }
    }
}

/// Text size estimate for dumps, where there are no fonts to measure with
fn approximate_text_size(font_size: f64, text: &str) -> (f64, f64) {
    (text.chars().count() as f64 * font_size * 0.55, font_size)
}

struct GanttApp {
    renderer: OpenGanttRendererEgui,
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                self.renderer.draw(ctx, ui);
            });
        });
    }
}
