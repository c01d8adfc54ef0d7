//! Per-letter glyph layout for the text block.
//!
//! Glyph rasterization is host-side; the layout emits one positioned,
//! colored draw command per letter. Offsets use a fixed advance per glyph
//! plus a constant inter-letter gap, centered as a block on the slot's x.

use glam::Vec2;

use crate::components::color::Color;
use crate::systems::factory::GLYPH_ADVANCE;

/// Host-facing text rendering parameters.
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Font family the host rasterizes with.
    pub family: String,
    /// Weight keyword passed through to the host.
    pub weight: String,
    /// Horizontal advance per glyph as a fraction of font size.
    pub advance: f32,
    /// Extra gap between letters, in pixels.
    pub letter_spacing: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            weight: "bold".to_string(),
            advance: GLYPH_ADVANCE,
            letter_spacing: 20.0,
        }
    }
}

impl TextStyle {
    pub fn with_advance(mut self, advance: f32) -> Self {
        self.advance = advance;
        self
    }

    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// One letter, ready for the host glyph rasterizer.
/// Letters are drawn center-aligned, horizontally and vertically, at (x, y).
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCommand {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

/// Lay out a text block's letters around its x position. Colors cycle when
/// the palette is shorter than the text.
pub fn layout_glyphs(
    text: &str,
    pos: Vec2,
    font_size: f32,
    colors: &[Color],
    style: &TextStyle,
    out: &mut Vec<GlyphCommand>,
) {
    let count = text.chars().count();
    if count == 0 || colors.is_empty() {
        return;
    }

    let step = font_size * style.advance + style.letter_spacing;
    let start = pos.x - (count as f32 - 1.0) / 2.0 * step;

    for (i, ch) in text.chars().enumerate() {
        out.push(GlyphCommand {
            ch,
            x: start + i as f32 * step,
            y: pos.y,
            size: font_size,
            color: colors[i % colors.len()],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(text: &str, colors: &[Color]) -> Vec<GlyphCommand> {
        let mut out = Vec::new();
        layout_glyphs(
            text,
            Vec2::new(400.0, 350.0),
            100.0,
            colors,
            &TextStyle::default(),
            &mut out,
        );
        out
    }

    #[test]
    fn one_command_per_letter() {
        let glyphs = layout("hearts", &[Color::WHITE]);
        assert_eq!(glyphs.len(), 6);
        assert_eq!(glyphs[0].ch, 'h');
        assert_eq!(glyphs[5].ch, 's');
        for g in &glyphs {
            assert_eq!(g.size, 100.0);
            assert_eq!(g.y, 350.0);
        }
    }

    #[test]
    fn block_is_centered_on_x() {
        let glyphs = layout("abcd", &[Color::WHITE]);
        let mid = (glyphs[0].x + glyphs[3].x) / 2.0;
        assert!((mid - 400.0).abs() < 1e-3, "block center was {}", mid);
    }

    #[test]
    fn single_letter_sits_at_x() {
        let glyphs = layout("a", &[Color::WHITE]);
        assert_eq!(glyphs[0].x, 400.0);
    }

    #[test]
    fn colors_cycle_when_palette_is_short() {
        let palette = [Color::RED, Color::BLACK];
        let glyphs = layout("abcde", &palette);
        assert_eq!(glyphs[0].color, Color::RED);
        assert_eq!(glyphs[1].color, Color::BLACK);
        assert_eq!(glyphs[2].color, Color::RED);
        assert_eq!(glyphs[4].color, Color::RED);
    }

    #[test]
    fn letters_advance_by_a_fixed_step() {
        let style = TextStyle::default()
            .with_advance(0.6)
            .with_letter_spacing(20.0);
        let mut glyphs = Vec::new();
        layout_glyphs("abc", Vec2::ZERO, 100.0, &[Color::WHITE], &style, &mut glyphs);
        let step = 100.0 * 0.6 + 20.0;
        assert!((glyphs[1].x - glyphs[0].x - step).abs() < 1e-3);
        assert!((glyphs[2].x - glyphs[1].x - step).abs() < 1e-3);
    }

    #[test]
    fn empty_inputs_emit_nothing() {
        assert!(layout("", &[Color::WHITE]).is_empty());
        assert!(layout("abc", &[]).is_empty());
    }
}
