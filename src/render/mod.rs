/// Static chart output shared by both binaries.
///
/// ```text
///   TimingData ──► TimingChart ─┐                  ┌─► .png (RGB buffer → image)
///                               ├──► Chart::draw ──┤
///   GridData ───► SurfaceChart ─┘                  └─► .svg (SVG string → file)
/// ```
///
/// Text uses egui's bundled face (see [`fonts`]), never system fonts.
///
/// The interactive 3D view reuses [`render_rgb`] to fill its texture.

pub mod fonts;
pub mod surface;
pub mod timing;

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{draw_err, RenderError};

pub use surface::{Camera, SurfaceChart};
pub use timing::TimingChart;

pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;

/// Anything that can draw itself onto a plotters drawing area.
pub trait Chart {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError>;
}

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(RenderError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Draw `chart` into a `width * height * 3` RGB buffer.
pub fn render_rgb(
    chart: &impl Chart,
    (width, height): (u32, u32),
) -> Result<Vec<u8>, RenderError> {
    fonts::ensure_registered()?;
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        chart.draw(&root)?;
        root.present().map_err(draw_err)?;
    }
    Ok(buf)
}

/// Draw `chart` as an SVG document.
pub fn render_svg(chart: &impl Chart, size: (u32, u32)) -> Result<String, RenderError> {
    fonts::ensure_registered()?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        chart.draw(&root)?;
        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Save `chart` to `path`, format chosen by extension.
pub fn save_chart(chart: &impl Chart, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
    match OutputFormat::from_path(path)? {
        OutputFormat::Png => {
            let buf = render_rgb(chart, size)?;
            let img = image::RgbImage::from_raw(size.0, size.1, buf)
                .ok_or_else(|| RenderError::Draw("pixel buffer has the wrong size".into()))?;
            img.save_with_format(path, image::ImageFormat::Png)?;
        }
        OutputFormat::Svg => {
            let svg = render_svg(chart, size)?;
            std::fs::write(path, svg)?;
        }
    }
    log::info!("Saved chart to {}", path.display());
    Ok(())
}

/// Axis range covering `min..max` with a margin, never empty.
pub fn padded(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= 0.0 {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        return (min - pad)..(max + pad);
    }
    let pad = span * 0.05;
    (min - pad)..(max + pad)
}
