use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::data::model::{AggregatePoint, GridData, TimingData};
use crate::render::{render_rgb, Camera, SurfaceChart};

// ---------------------------------------------------------------------------
// 2D timing view
// ---------------------------------------------------------------------------

/// Everything the interactive timing plot needs, computed once.
pub struct TimingState {
    pub data: TimingData,
    /// `aggregates[k]` belongs to `data.series[k]`.
    pub aggregates: Vec<Vec<AggregatePoint>>,
    pub title: String,
}

impl TimingState {
    pub fn new(data: TimingData, title: String) -> Self {
        let aggregates = data.series.iter().map(|s| s.aggregate()).collect();
        Self {
            data,
            aggregates,
            title,
        }
    }
}

// ---------------------------------------------------------------------------
// 3D surface view
// ---------------------------------------------------------------------------

/// The rotatable surface view and its cached rendering.
pub struct SurfaceState {
    pub data: GridData,
    pub title: String,
    pub camera: Camera,

    /// Last rendered image, with the camera and pixel size it was drawn for.
    texture: Option<TextureHandle>,
    rendered_for: Option<(Camera, [usize; 2])>,

    /// Error shown in the UI when drawing fails.
    pub status_message: Option<String>,
}

impl SurfaceState {
    pub fn new(data: GridData, title: String, camera: Camera) -> Self {
        Self {
            data,
            title,
            camera,
            texture: None,
            rendered_for: None,
            status_message: None,
        }
    }

    /// Return a texture showing the surface at `size` pixels, redrawing only
    /// when the camera or size changed since the last call.
    pub fn texture(&mut self, ctx: &egui::Context, size: [usize; 2]) -> Option<&TextureHandle> {
        let key = (self.camera, size);
        if self.rendered_for != Some(key) {
            let chart = SurfaceChart {
                data: &self.data,
                title: &self.title,
                camera: self.camera,
            };
            match render_rgb(&chart, (size[0] as u32, size[1] as u32)) {
                Ok(buf) => {
                    let image = ColorImage::from_rgb(size, &buf);
                    match &mut self.texture {
                        Some(tex) => tex.set(image, TextureOptions::LINEAR),
                        None => {
                            self.texture =
                                Some(ctx.load_texture("surface", image, TextureOptions::LINEAR));
                        }
                    }
                    self.status_message = None;
                }
                Err(e) => {
                    log::error!("Failed to draw surface: {e}");
                    self.status_message = Some(format!("Error: {e}"));
                }
            }
            self.rendered_for = Some(key);
        }
        self.texture.as_ref()
    }
}
