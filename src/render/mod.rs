//! Card rendering
//!
//! A [`LayoutEngine`] turns a card into backend-independent geometry; the
//! raster and PDF backends draw that geometry, and [`write_card`] stores the
//! result atomically.

pub mod colors;
pub mod format;
pub mod helpers;
pub mod layout;
pub mod output;
pub mod pdf;
pub mod raster;

use std::path::Path;

pub use format::OutputFormat;
pub use helpers::{fit, Bounds, GlyphMeasurer, TextLayout, TextMeasure};
pub use layout::{CardLayout, CellContent, LayoutEngine};
pub use pdf::PdfRenderer;
pub use raster::RasterRenderer;

use crate::config::RenderSettings;
use crate::error::RenderError;
use crate::model::Card;

/// Render `card` to encoded bytes in `format`
pub fn render_card(
    card: &Card,
    settings: &RenderSettings,
    format: OutputFormat,
) -> Result<Vec<u8>, RenderError> {
    settings.validate()?;
    let canvas = settings.canvas_size(card.side())?;
    log::debug!("Rendering {} card on a {}px canvas as {}", card.size(), canvas, format);

    let font = helpers::card_font()?;
    let measurer = GlyphMeasurer::new(font.clone());
    let layout = LayoutEngine::new(settings.clone()).layout(card, &measurer);

    match format.image_format() {
        Some(image_format) => {
            RasterRenderer::new(&font, settings.palette.clone()).render(&layout, image_format)
        }
        None => PdfRenderer::new(settings.palette.clone()).render(&layout),
    }
}

/// Render `card` and write it to `path`, choosing the format by extension.
///
/// The extension is checked before any rendering, and the file only appears
/// once it has been completely written.
pub fn write_card(
    card: &Card,
    settings: &RenderSettings,
    path: &Path,
) -> Result<OutputFormat, RenderError> {
    let format = OutputFormat::from_path(path)?;
    let bytes = render_card(card, settings, format)?;
    output::write_atomic(path, &bytes)?;
    Ok(format)
}
