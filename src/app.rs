use anyhow::anyhow;
use eframe::egui;

use crate::state::{SurfaceState, TimingState};
use crate::ui::{panels, plot, surface};

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// Open a native window running `app` and block until it is closed.
pub fn show<A: eframe::App + 'static>(
    window_title: &str,
    (width, height): (u32, u32),
    app: A,
) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title)
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(window_title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow!("failed to open plot window: {e}"))
}

// ---------------------------------------------------------------------------
// eframe App implementations
// ---------------------------------------------------------------------------

pub struct TimingApp {
    pub state: TimingState,
}

impl eframe::App for TimingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            let summary = format!(
                "{} series, {} samples",
                self.state.data.series.len(),
                self.state.data.len()
            );
            panels::title_bar(ui, &self.state.title, &summary, None);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::timing_plot(ui, &self.state);
        });
    }
}

pub struct SurfaceApp {
    pub state: SurfaceState,
}

impl eframe::App for SurfaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            let summary = format!(
                "{} sizes, {} grid points",
                self.state.data.groups.len(),
                self.state.data.len()
            );
            panels::title_bar(
                ui,
                &self.state.title,
                &summary,
                self.state.status_message.as_deref(),
            );
        });

        egui::TopBottomPanel::bottom("hint_bar").show(ctx, |ui| {
            panels::surface_hint(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            surface::surface_view(ui, &mut self.state);
        });
    }
}
