use printpdf::{Color, Rgb};

use crate::config::defaults::{
    BACKGROUND_COLOR, BORDER_COLOR, FOOTER_COLOR, STAR_COLOR, TEXT_COLOR,
};

/// An 8-bit RGB color usable by both backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CardColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    pub fn to_pdf(self) -> Color {
        let scale = |v: u8| v as f32 / 255.0;
        Color::Rgb(Rgb::new(scale(self.r), scale(self.g), scale(self.b), None))
    }
}

impl From<(u8, u8, u8)> for CardColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Colors used on a card
#[derive(Debug, Clone, PartialEq)]
pub struct CardPalette {
    pub background: CardColor,
    pub text: CardColor,
    pub border: CardColor,
    pub star: CardColor,
    pub footer: CardColor,
}

impl Default for CardPalette {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR.into(),
            text: TEXT_COLOR.into(),
            border: BORDER_COLOR.into(),
            star: STAR_COLOR.into(),
            footer: FOOTER_COLOR.into(),
        }
    }
}
