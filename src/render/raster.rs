//! Raster backend: draws a [`CardLayout`] onto an RGB image and encodes it

use std::io::Cursor;

use ab_glyph::{Font, PxScale};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_polygon_mut, draw_text_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::error::RenderError;

use super::colors::CardPalette;
use super::helpers::fit::{Bounds, TextLayout};
use super::layout::{CardLayout, CellContent, StarLayout};

/// Renders card layouts to raster images
pub struct RasterRenderer<'a, F> {
    font: &'a F,
    palette: CardPalette,
}

impl<'a, F: Font> RasterRenderer<'a, F> {
    pub fn new(font: &'a F, palette: CardPalette) -> Self {
        Self { font, palette }
    }

    /// Draw the card into a new image
    pub fn draw(&self, layout: &CardLayout) -> RgbImage {
        let width = layout.width.round() as u32;
        let height = layout.height.round() as u32;
        let mut image = RgbImage::from_pixel(width, height, self.palette.background.to_pixel());

        for cell in &layout.cells {
            match &cell.content {
                CellContent::Text(text) => self.draw_text(&mut image, text, self.palette.text.to_pixel()),
                CellContent::Star(star) => self.draw_star(&mut image, star),
            }
            self.draw_border(&mut image, cell.bounds, layout.border_width);
        }

        image
    }

    /// Draw and encode the card in `format`
    pub fn render(&self, layout: &CardLayout, format: ImageFormat) -> Result<Vec<u8>, RenderError> {
        let image = self.draw(layout);

        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, format)
            .map_err(|e| RenderError::Encode(e.to_string()))?;

        log::debug!(
            "Encoded {}x{} {:?} image ({} bytes)",
            image.width(),
            image.height(),
            format,
            bytes.get_ref().len()
        );
        Ok(bytes.into_inner())
    }

    fn draw_text(&self, image: &mut RgbImage, text: &TextLayout, color: Rgb<u8>) {
        let scale = PxScale::from(text.font_size);
        for line in &text.lines {
            draw_text_mut(
                image,
                color,
                line.x.floor() as i32,
                line.y.floor() as i32,
                scale,
                self.font,
                &line.text,
            );
        }
    }

    fn draw_star(&self, image: &mut RgbImage, star: &StarLayout) {
        let mut points: Vec<Point<i32>> = Vec::with_capacity(star.points.len());
        for &(x, y) in &star.points {
            let p = Point::new(x.round() as i32, y.round() as i32);
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        // draw_polygon_mut rejects explicitly closed paths
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() >= 3 {
            draw_polygon_mut(image, &points, self.palette.star.to_pixel());
        }

        if let Some(footer) = &star.footer {
            self.draw_text(image, footer, self.palette.footer.to_pixel());
        }
    }

    fn draw_border(&self, image: &mut RgbImage, bounds: Bounds, width: f32) {
        let color = self.palette.border.to_pixel();
        let x = bounds.x.round() as i32;
        let y = bounds.y.round() as i32;
        let size = bounds.width.round() as u32;

        for t in 0..width.round() as u32 {
            let inner = size.saturating_sub(2 * t);
            if inner == 0 {
                break;
            }
            let rect = Rect::at(x + t as i32, y + t as i32).of_size(inner, inner);
            draw_hollow_rect_mut(image, rect, color);
        }
    }
}
