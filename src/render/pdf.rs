//! PDF backend: the same card layout as vector graphics on a single page

use printpdf::{FontId, Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions};

use crate::error::RenderError;

use super::colors::{CardColor, CardPalette};
use super::helpers::compress::compress_pdf;
use super::helpers::fit::{Bounds, TextLayout};
use super::helpers::fonts::add_pdf_font;
use super::helpers::layer::LayerBuilder;
use super::layout::{CardLayout, CellContent};

/// Millimetres per layout pixel (96 dpi)
pub const MM_PER_PX: f32 = 25.4 / 96.0;

/// Points per layout pixel (96 dpi)
pub const PT_PER_PX: f32 = 72.0 / 96.0;

/// Renders card layouts to PDF
pub struct PdfRenderer {
    palette: CardPalette,
}

impl PdfRenderer {
    pub fn new(palette: CardPalette) -> Self {
        Self { palette }
    }

    pub fn render(&self, layout: &CardLayout) -> Result<Vec<u8>, RenderError> {
        let mut doc = PdfDocument::new("Keyword Bingo");
        let font = add_pdf_font(&mut doc)?;

        let page_height = layout.height * MM_PER_PX;
        let mut layer = LayerBuilder::new();
        let canvas = PageCanvas { page_height };

        // Background
        layer.set_fill_color(self.palette.background.to_pdf());
        canvas.rect(
            &mut layer,
            Bounds::new(0.0, 0.0, layout.width, layout.height),
            PaintMode::Fill,
        );

        for cell in &layout.cells {
            match &cell.content {
                CellContent::Text(text) => {
                    canvas.text(&mut layer, text, self.palette.text, &font);
                }
                CellContent::Star(star) => {
                    layer.set_fill_color(self.palette.star.to_pdf());
                    let points: Vec<(Mm, Mm)> =
                        star.points.iter().map(|&(x, y)| canvas.point(x, y)).collect();
                    layer.add_polygon(&points, PaintMode::Fill);

                    if let Some(footer) = &star.footer {
                        canvas.text(&mut layer, footer, self.palette.footer, &font);
                    }
                }
            }
        }

        // Borders last so they sit on top of cell content
        let border = layout.border_width;
        layer.set_outline_color(self.palette.border.to_pdf());
        layer.set_outline_thickness(border * PT_PER_PX);
        for cell in &layout.cells {
            canvas.rect(&mut layer, cell.bounds.inset(border / 2.0), PaintMode::Stroke);
        }

        let page = PdfPage::new(
            Mm(layout.width * MM_PER_PX),
            Mm(page_height),
            layer.into_ops(),
        );
        doc.with_pages(vec![page]);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF generation produced {} warnings", warnings.len());
        }

        compress_pdf(bytes)
    }
}

/// Maps top-left pixel coordinates onto the PDF page
struct PageCanvas {
    page_height: f32,
}

impl PageCanvas {
    fn point(&self, x: f32, y: f32) -> (Mm, Mm) {
        (Mm(x * MM_PER_PX), Mm(self.page_height - y * MM_PER_PX))
    }

    fn rect(&self, layer: &mut LayerBuilder, bounds: Bounds, mode: PaintMode) {
        let (x1, y1) = self.point(bounds.x, bounds.bottom());
        let (x2, y2) = self.point(bounds.right(), bounds.y);
        layer.add_rect(x1, y1, x2, y2, mode);
    }

    fn text(&self, layer: &mut LayerBuilder, text: &TextLayout, color: CardColor, font: &FontId) {
        layer.set_fill_color(color.to_pdf());
        for line in &text.lines {
            let (x, y) = self.point(line.x, line.y + text.ascent);
            layer.use_text(line.text.clone(), text.font_size * PT_PER_PX, x, y, font);
        }
    }
}
