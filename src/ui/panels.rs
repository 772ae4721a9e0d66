use eframe::egui::{self, Color32, RichText, Ui};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar: chart title, data summary and any error.
pub fn title_bar(ui: &mut Ui, title: &str, summary: &str, status: Option<&str>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(title);
        ui.separator();
        ui.label(summary);

        if let Some(msg) = status {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// Hint shown under the 3D view.
pub fn surface_hint(ui: &mut Ui) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
        ui.weak("drag to rotate");
    });
}
