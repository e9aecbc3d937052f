use std::{env, fs};

use eframe::{run_native, App, CreationContext, Frame, NativeOptions};
use egui::{CentralPanel, Context, RichText, Sense, Vec2};
use log::{error, info};
use plot_defaults::{latest_graph_path, PaletteName, PlotStyle, PlotStyleConfig};

const APP_NAME: &str = "Palette Preview";
const SWATCH_SIZE: f32 = 24.;

pub struct PalettePreviewApp {
    style: PlotStyle,
    graph_present: bool,
}

impl PalettePreviewApp {
    fn new(cc: &CreationContext<'_>, style: PlotStyle) -> Self {
        style.apply(&cc.egui_ctx);

        let graph_present = latest_graph_path().exists();
        info!(
            "latest graph at {} present: {graph_present}",
            latest_graph_path().display()
        );

        Self {
            style,
            graph_present,
        }
    }
}

impl App for PalettePreviewApp {
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("font size {}", self.style.font_size()));
            ui.label(format!(
                "{}: {}",
                latest_graph_path().display(),
                if self.graph_present { "found" } else { "missing" }
            ));
            ui.separator();

            ui.label(RichText::new(format!("active: {}", self.style.palette().name())).strong());
            swatches(ui, self.style.palette().colors());

            ui.separator();
            for name in PaletteName::ALL {
                ui.label(name.as_str());
                swatches(ui, &name.colors());
            }
        });
    }
}

fn swatches(ui: &mut egui::Ui, colors: &[egui::Color32]) {
    ui.horizontal(|ui| {
        for &color in colors {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::hover());
            ui.painter().rect_filled(rect, 2., color);
        }
    });
}

/// Reads the style from the TOML file given as the first argument, or falls back to the default.
fn load_style() -> Result<PlotStyle, Box<dyn std::error::Error>> {
    let Some(path) = env::args().nth(1) else {
        return Ok(PlotStyle::default());
    };

    info!("loading plot style from {path}");
    let content = fs::read_to_string(&path)?;
    let style = PlotStyleConfig::from_toml_str(&content).and_then(|cfg| cfg.resolve())?;
    Ok(style)
}

fn main() {
    env_logger::init();

    let style = match load_style() {
        Ok(style) => style,
        Err(err) => {
            error!("error while loading plot style: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run_native(
        APP_NAME,
        NativeOptions::default(),
        Box::new(move |cc| Ok(Box::new(PalettePreviewApp::new(cc, style)))),
    ) {
        error!("failed to start {APP_NAME}: {err}");
    }
}
