//! Text measurement for layout
//!
//! Layout code measures text through [`TextMeasure`] so it can be exercised
//! with synthetic metrics, while real cards use the glyph metrics of the
//! embedded font.

use ab_glyph::{Font, PxScale, ScaleFont};

/// Trait for text measurement operations, all values in pixels
pub trait TextMeasure {
    /// Advance width of `text` at `font_size`
    fn measure_width(&self, text: &str, font_size: f32) -> f32;

    /// Distance from the top of a line to its baseline
    fn ascent(&self, font_size: f32) -> f32;

    /// Depth below the baseline (positive value)
    fn descent(&self, font_size: f32) -> f32;

    /// Height of one line of text, never less than `font_size`
    fn line_height(&self, font_size: f32) -> f32 {
        self.ascent(font_size) + self.descent(font_size)
    }
}

/// Measures text with the outlines and kerning of a real font
pub struct GlyphMeasurer<F> {
    font: F,
}

impl<F: Font> GlyphMeasurer<F> {
    pub fn new(font: F) -> Self {
        Self { font }
    }
}

impl<F: Font> TextMeasure for GlyphMeasurer<F> {
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(font_size));
        let mut width = 0.0;
        let mut prev = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }

        width
    }

    fn ascent(&self, font_size: f32) -> f32 {
        self.font.as_scaled(PxScale::from(font_size)).ascent()
    }

    fn descent(&self, font_size: f32) -> f32 {
        -self.font.as_scaled(PxScale::from(font_size)).descent()
    }
}

/// Monospace metrics: every character is `advance * font_size` wide
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasurer {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

#[cfg(test)]
impl Default for FixedMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

#[cfg(test)]
impl TextMeasure for FixedMeasurer {
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance * font_size
    }

    fn ascent(&self, font_size: f32) -> f32 {
        self.ascent * font_size
    }

    fn descent(&self, font_size: f32) -> f32 {
        self.descent * font_size
    }
}
