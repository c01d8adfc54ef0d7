//! RGBA colors and the random palette sampling the recolor actions use.

use crate::core::rng::Rng;

/// RGBA color with components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Sample a uniform opaque color (one of 256³).
    pub fn random(rng: &mut Rng) -> Self {
        Self::rgb8(
            rng.next_int(256) as u8,
            rng.next_int(256) as u8,
            rng.next_int(256) as u8,
        )
    }

    /// Sample `count` colors. The result always has exactly `count` entries.
    pub fn random_batch(rng: &mut Rng, count: usize) -> Vec<Color> {
        (0..count).map(|_| Self::random(rng)).collect()
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_scales_channels() {
        let c = Color::rgb8(255, 128, 0);
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.5).abs() < 0.01);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn batch_has_exact_length() {
        let mut rng = Rng::new(42);
        for n in [0usize, 1, 2, 12, 100] {
            assert_eq!(Color::random_batch(&mut rng, n).len(), n);
        }
    }

    #[test]
    fn random_is_opaque_and_in_range() {
        let mut rng = Rng::new(9);
        for _ in 0..100 {
            let c = Color::random(&mut rng);
            assert_eq!(c.a, 1.0);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }

    #[test]
    fn random_is_seed_deterministic() {
        let a = Color::random_batch(&mut Rng::new(5), 8);
        let b = Color::random_batch(&mut Rng::new(5), 8);
        assert_eq!(a, b);
    }
}
