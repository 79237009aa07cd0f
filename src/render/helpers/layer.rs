//! PDF operation collector
//!
//! `LayerBuilder` wraps printpdf's `Vec<Op>` page content with small drawing
//! helpers. All coordinates are in mm from the bottom-left page corner.

use printpdf::{
    Color, FontId, LinePoint, Mm, Op, PaintMode, PdfFontHandle, Point, Polygon, PolygonRing, Pt,
    TextItem, WindingOrder,
};

/// A builder that collects PDF operations for one page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with its baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: &FontId,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::External(font.clone()),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a filled or stroked rectangle
    ///
    /// Takes lower-left x, y and upper-right x, y coordinates
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        self.add_polygon(&[(x1, y1), (x2, y1), (x2, y2), (x1, y2)], mode);
    }

    /// Add a closed polygon through `points`
    pub fn add_polygon(&mut self, points: &[(Mm, Mm)], mode: PaintMode) {
        if points.len() < 3 {
            return;
        }

        let points = points
            .iter()
            .map(|&(x, y)| LinePoint {
                p: Point {
                    x: x.into(),
                    y: y.into(),
                },
                bezier: false,
            })
            .collect();

        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_one_polygon() {
        let mut layer = LayerBuilder::new();
        layer.add_rect(Mm(0.0), Mm(0.0), Mm(10.0), Mm(10.0), PaintMode::Stroke);
        assert_eq!(layer.ops().len(), 1);
        assert!(matches!(&layer.ops()[0], Op::DrawPolygon { polygon } if polygon.rings[0].points.len() == 4));
    }

    #[test]
    fn test_degenerate_input_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.add_polygon(&[(Mm(0.0), Mm(0.0)), (Mm(1.0), Mm(1.0))], PaintMode::Fill);
        assert!(layer.ops().is_empty());
    }
}
