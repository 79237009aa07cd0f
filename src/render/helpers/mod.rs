//! Helper utilities shared by the card renderers

pub mod compress;
pub mod fit;
pub mod fonts;
pub mod layer;
pub mod text_metrics;

pub use compress::compress_pdf;
pub use fit::{fit, Bounds, TextLayout, TextLine};
pub use fonts::{add_pdf_font, card_font, DEJAVU_SANS};
pub use layer::LayerBuilder;
pub use text_metrics::{GlyphMeasurer, TextMeasure};
