use std::f32::consts::PI;

use crate::config::defaults::{FOOTER_LINES, STAR_INNER_RATIO, STAR_POINTS};
use crate::config::RenderSettings;
use crate::model::{Card, Cell, Position};

use super::helpers::fit::{fit, Bounds, TextLayout};
use super::helpers::text_metrics::TextMeasure;

/// Geometry of a whole card in pixels, shared by every backend
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub width: f32,
    pub height: f32,
    pub border_width: f32,
    pub cells: Vec<CellLayout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub position: Position,
    pub bounds: Bounds,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(TextLayout),
    Star(StarLayout),
}

/// The free-space marker: a filled star and an optional footer line
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayout {
    /// Polygon vertices, alternating outer and inner points
    pub points: Vec<(f32, f32)>,
    pub footer: Option<TextLayout>,
}

/// Layout calculator for card cells
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    settings: RenderSettings,
}

impl LayoutEngine {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Lay out every cell of `card`
    pub fn layout<M>(&self, card: &Card, measurer: &M) -> CardLayout
    where
        M: TextMeasure + ?Sized,
    {
        let side = card.side() as f32 * self.settings.cell_size as f32;

        let cells = card
            .cells()
            .map(|(position, cell)| {
                let bounds = self.cell_bounds(position);
                let content = match cell {
                    Cell::Keyword(word) => CellContent::Text(self.keyword_layout(word, bounds, measurer)),
                    Cell::Free => CellContent::Star(self.star_layout(bounds, measurer)),
                };
                CellLayout {
                    position,
                    bounds,
                    content,
                }
            })
            .collect();

        CardLayout {
            width: side,
            height: side,
            border_width: self.settings.border_width as f32,
            cells,
        }
    }

    /// Outer rectangle of the cell at `position`
    pub fn cell_bounds(&self, position: Position) -> Bounds {
        let size = self.settings.cell_size as f32;
        Bounds::new(position.col as f32 * size, position.row as f32 * size, size, size)
    }

    /// Rectangle inside the border, before padding
    fn inner_bounds(&self, cell: Bounds) -> Bounds {
        cell.inset(self.settings.border_width as f32)
    }

    fn keyword_layout<M>(&self, word: &str, cell: Bounds, measurer: &M) -> TextLayout
    where
        M: TextMeasure + ?Sized,
    {
        let layout = fit(
            word,
            self.inner_bounds(cell),
            self.settings.padding as f32,
            self.settings.max_font_size,
            self.settings.min_font_size,
            measurer,
        );
        log::debug!(
            "Keyword {:?} fitted at {}px on {} line(s)",
            word,
            layout.font_size,
            layout.lines.len()
        );
        layout
    }

    fn star_layout<M>(&self, cell: Bounds, measurer: &M) -> StarLayout
    where
        M: TextMeasure + ?Sized,
    {
        let inner = self.inner_bounds(cell);
        let padding = self.settings.padding as f32;

        let (star_area, footer) = match &self.settings.footer {
            Some(text) => {
                let band_height = (FOOTER_LINES * measurer.line_height(self.settings.footer_font_size)
                    + 2.0 * padding)
                    .min(inner.height / 2.0);
                let band = Bounds::new(inner.x, inner.bottom() - band_height, inner.width, band_height);
                let footer = fit(
                    text,
                    band,
                    padding,
                    self.settings.footer_font_size,
                    self.settings.min_font_size.min(self.settings.footer_font_size),
                    measurer,
                );
                let area = Bounds::new(inner.x, inner.y, inner.width, inner.height - band_height);
                (area.inset(padding), Some(footer))
            }
            None => (inner.inset(padding), None),
        };

        let (cx, cy) = star_area.center();
        let outer = star_area.width.min(star_area.height) / 2.0;

        StarLayout {
            points: star_points(cx, cy, outer, outer * STAR_INNER_RATIO, STAR_POINTS),
            footer,
        }
    }
}

/// Vertices of a star with `points` tips, the first tip pointing up
pub fn star_points(cx: f32, cy: f32, outer: f32, inner: f32, points: usize) -> Vec<(f32, f32)> {
    let step = PI / points as f32;
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + step * i as f32;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build, CardRng};
    use crate::model::KeywordList;
    use crate::render::helpers::text_metrics::FixedMeasurer;

    fn card(size: i64) -> Card {
        let words = KeywordList::new((0..60).map(|i| format!("keyword number {}", i)));
        build(&words, size, &mut CardRng::from_seed(42)).unwrap()
    }

    #[test]
    fn test_canvas_is_square_grid_of_cells() {
        let engine = LayoutEngine::new(RenderSettings::default());
        let layout = engine.layout(&card(5), &FixedMeasurer::default());

        assert_eq!(layout.width, 1000.0);
        assert_eq!(layout.height, 1000.0);
        assert_eq!(layout.cells.len(), 25);

        let last = layout.cells.last().unwrap();
        assert_eq!(last.position, Position::new(4, 4));
        assert_eq!(last.bounds, Bounds::new(800.0, 800.0, 200.0, 200.0));
    }

    #[test]
    fn test_only_center_gets_a_star() {
        let engine = LayoutEngine::new(RenderSettings::default());
        let layout = engine.layout(&card(7), &FixedMeasurer::default());

        let stars: Vec<Position> = layout
            .cells
            .iter()
            .filter(|c| matches!(c.content, CellContent::Star(_)))
            .map(|c| c.position)
            .collect();
        assert_eq!(stars, vec![Position::new(3, 3)]);
    }

    #[test]
    fn test_text_stays_inside_padded_cells() {
        let settings = RenderSettings {
            cell_size: 90,
            padding: 4,
            border_width: 2,
            ..Default::default()
        };
        let engine = LayoutEngine::new(settings);
        let layout = engine.layout(&card(5), &FixedMeasurer::default());

        for cell in &layout.cells {
            if let CellContent::Text(text) = &cell.content {
                let extent = text.extent().unwrap();
                assert!(cell.bounds.inset(6.0).contains(&extent), "{:?}", cell.position);
            }
        }
    }

    #[test]
    fn test_star_geometry() {
        let pts = star_points(100.0, 100.0, 90.0, 45.0, 5);
        assert_eq!(pts.len(), 10);
        // First tip straight up
        assert!((pts[0].0 - 100.0).abs() < 1e-3);
        assert!((pts[0].1 - 10.0).abs() < 1e-3);
        for (i, (x, y)) in pts.iter().enumerate() {
            let r = ((x - 100.0).powi(2) + (y - 100.0).powi(2)).sqrt();
            let expected = if i % 2 == 0 { 90.0 } else { 45.0 };
            assert!((r - expected).abs() < 1e-2);
        }
    }

    #[test]
    fn test_footer_shrinks_star_and_stays_in_cell() {
        let plain = LayoutEngine::new(RenderSettings::default());
        let with_footer = LayoutEngine::new(RenderSettings {
            footer: Some("seed: 42".to_string()),
            ..Default::default()
        });
        let m = FixedMeasurer::default();
        let card = card(3);

        let star = |layout: &CardLayout| match &layout.cells[4].content {
            CellContent::Star(star) => star.clone(),
            other => panic!("expected star, got {:?}", other),
        };

        let a = star(&plain.layout(&card, &m));
        let b = star(&with_footer.layout(&card, &m));
        assert!(a.footer.is_none());

        let top = |s: &StarLayout| s.points[0].1;
        let radius = |s: &StarLayout| {
            let cy = s.points[5].1; // bottom inner point is below center
            cy - top(s)
        };
        assert!(radius(&b) < radius(&a));

        let footer = b.footer.as_ref().unwrap();
        assert_eq!(footer.text(), "seed: 42");
        let cell = Bounds::new(200.0, 200.0, 200.0, 200.0);
        assert!(cell.contains(&footer.extent().unwrap()));
        assert!(footer.lines[0].y > top(&b));
    }

    #[test]
    fn test_digest_footer_wraps_onto_two_lines() {
        let text = "seed: 18446744073709551615 md5: 900150983cd24fb0d6963f7d28e17f72";
        let engine = LayoutEngine::new(RenderSettings {
            footer: Some(text.to_string()),
            ..Default::default()
        });
        let layout = engine.layout(&card(3), &FixedMeasurer::default());

        let CellContent::Star(star) = &layout.cells[4].content else {
            panic!("center cell is not the star");
        };
        let footer = star.footer.as_ref().unwrap();
        assert_eq!(footer.lines.len(), 2);
        assert_eq!(footer.font_size, 11.0);
        assert_eq!(footer.text(), text);
        assert!(layout.cells[4].bounds.contains(&footer.extent().unwrap()));
    }

    #[test]
    fn test_footer_in_smallest_cell_keeps_star_inside() {
        let engine = LayoutEngine::new(RenderSettings {
            cell_size: crate::config::MIN_CELL_SIZE,
            footer: Some("seed: 7 md5: 900150983cd24fb0d6963f7d28e17f72".to_string()),
            ..Default::default()
        });
        let layout = engine.layout(&card(3), &FixedMeasurer::default());
        let cell = &layout.cells[4];

        let CellContent::Star(star) = &cell.content else {
            panic!("center cell is not the star");
        };
        for &(x, y) in &star.points {
            assert!(cell.bounds.contains(&Bounds::new(x, y, 0.0, 0.0)));
        }
        if let Some(extent) = star.footer.as_ref().and_then(|f| f.extent()) {
            assert!(cell.bounds.contains(&extent));
        }
    }
}
