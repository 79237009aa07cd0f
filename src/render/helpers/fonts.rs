use ab_glyph::FontRef;
use printpdf::{FontId, ParsedFont, PdfDocument};

use crate::error::RenderError;

// Embed the full font at compile time - printpdf handles subsetting when saving
pub const DEJAVU_SANS: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

/// Parse the embedded card font for raster drawing and measurement
pub fn card_font() -> Result<FontRef<'static>, RenderError> {
    FontRef::try_from_slice(DEJAVU_SANS)
        .map_err(|e| RenderError::FontLoad(format!("Failed to parse DejaVuSans: {}", e)))
}

/// Register the embedded card font with a PDF document
pub fn add_pdf_font(doc: &mut PdfDocument) -> Result<FontId, RenderError> {
    let mut warnings = Vec::new();
    let font = ParsedFont::from_bytes(DEJAVU_SANS, 0, &mut warnings)
        .ok_or_else(|| RenderError::FontLoad("Failed to parse DejaVuSans".to_string()))?;
    Ok(doc.add_font(&font))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::Font;

    #[test]
    fn test_embedded_font_parses() {
        let font = card_font().unwrap();
        // Glyph 0 is .notdef; real characters must map elsewhere
        assert_ne!(font.glyph_id('A').0, 0);
        assert_ne!(font.glyph_id('\u{2026}').0, 0);
    }
}
