use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

/// Seed used for series colours so repeated runs draw identical charts.
pub const PALETTE_SEED: u64 = 25;

/// An 8-bit sRGB colour shared by the interactive and file renderers.
pub type SeriesColor = Srgb<u8>;

// ---------------------------------------------------------------------------
// Deterministic PRNG (xoshiro256**)
// ---------------------------------------------------------------------------

pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Generates `n` pseudo-random but reproducible colours.
///
/// Hue is drawn from the seeded generator; saturation and lightness stay in
/// a band that reads well on a white background.
pub fn seeded_palette(n: usize, seed: u64) -> Vec<SeriesColor> {
    let mut rng = SimpleRng::new(seed);
    (0..n)
        .map(|_| {
            let hue = rng.next_f32() * 360.0;
            let saturation = 0.55 + rng.next_f32() * 0.3;
            let lightness = 0.40 + rng.next_f32() * 0.15;
            let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
            rgb.into_format()
        })
        .collect()
}

pub fn to_color32(c: SeriesColor) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

pub fn to_rgb(c: SeriesColor) -> RGBColor {
    RGBColor(c.red, c.green, c.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_reproducible() {
        assert_eq!(seeded_palette(5, PALETTE_SEED), seeded_palette(5, PALETTE_SEED));
    }

    #[test]
    fn palette_depends_on_seed() {
        assert_ne!(seeded_palette(3, 1), seeded_palette(3, 2));
    }

    #[test]
    fn palette_len_and_prefix() {
        assert!(seeded_palette(0, PALETTE_SEED).is_empty());
        let four = seeded_palette(4, PALETTE_SEED);
        let two = seeded_palette(2, PALETTE_SEED);
        assert_eq!(four.len(), 4);
        assert_eq!(&four[..2], &two[..]);
    }

    #[test]
    fn colours_are_not_washed_out() {
        for c in seeded_palette(32, PALETTE_SEED) {
            let max = c.red.max(c.green).max(c.blue);
            let min = c.red.min(c.green).min(c.blue);
            assert!(max < 250, "too close to white: {c:?}");
            assert!(max - min > 20, "too grey: {c:?}");
        }
    }

    #[test]
    fn rng_stays_in_unit_interval() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
