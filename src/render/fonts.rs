use std::borrow::Cow;
use std::sync::OnceLock;

use eframe::egui::FontDefinitions;
use plotters::style::{register_font, FontStyle};

use crate::error::RenderError;

/// Proportional face bundled with egui, reused for static charts.
const BUNDLED_FACE: &str = "Ubuntu-Light";

/// Register egui's bundled font as plotters' `sans-serif` family.
///
/// Charts then render identically with or without system fonts. Runs once
/// per process; later calls return the first outcome.
pub fn ensure_registered() -> Result<(), RenderError> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

    REGISTERED
        .get_or_init(|| {
            let defs = FontDefinitions::default();
            let data = defs
                .font_data
                .get(BUNDLED_FACE)
                .ok_or_else(|| format!("egui has no bundled font named {BUNDLED_FACE}"))?;
            let bytes: &'static [u8] = match &data.font {
                Cow::Borrowed(bytes) => *bytes,
                Cow::Owned(_) => return Err(format!("{BUNDLED_FACE} is not a static font")),
            };
            register_font("sans-serif", FontStyle::Normal, bytes)
                .map_err(|_| format!("cannot load {BUNDLED_FACE}: invalid font data"))
        })
        .clone()
        .map_err(RenderError::Font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_idempotent() {
        ensure_registered().unwrap();
        ensure_registered().unwrap();
    }
}
