use eframe::egui::{self, Sense, Ui};

use crate::state::SurfaceState;

/// Radians of rotation per dragged point.
const DRAG_SENSITIVITY: f64 = 0.01;

// ---------------------------------------------------------------------------
// Surface view (central panel)
// ---------------------------------------------------------------------------

/// Show the rendered surface; dragging rotates the camera.
pub fn surface_view(ui: &mut Ui, state: &mut SurfaceState) {
    let avail = ui.available_size();
    let ppp = ui.ctx().pixels_per_point();
    let pixels = [
        ((avail.x * ppp) as usize).max(1),
        ((avail.y * ppp) as usize).max(1),
    ];

    let Some(texture) = state.texture(ui.ctx(), pixels) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Nothing to show");
        });
        return;
    };

    let response = ui.add(egui::Image::new((texture.id(), avail)).sense(Sense::drag()));
    if response.dragged() {
        let delta = response.drag_delta();
        state
            .camera
            .rotate(delta.x as f64 * DRAG_SENSITIVITY, delta.y as f64 * DRAG_SENSITIVITY);
    }
}
