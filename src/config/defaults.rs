/// Default card size (cells per side)
pub const DEFAULT_GRID_SIZE: i64 = 5;

/// Default output file, PNG format
pub const DEFAULT_OUTPUT: &str = "bingo.png";

/// Default side length of one cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 200;

/// Smallest cell that can hold readable text
pub const MIN_CELL_SIZE: u32 = 32;

/// Largest accepted cell side in pixels
pub const MAX_CELL_SIZE: u32 = 1000;

/// Largest canvas side in pixels, about 300 MB of RGB pixels
pub const MAX_CANVAS_SIZE: u32 = 10_000;

/// Default space between cell border and content in pixels
pub const DEFAULT_PADDING: u32 = 5;

/// Default starting (largest) keyword font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 25.0;

/// Font size the text fitter will not go below
pub const DEFAULT_MIN_FONT_SIZE: f32 = 6.0;

/// Footer text size in pixels
pub const DEFAULT_FOOTER_FONT_SIZE: f32 = 12.0;

/// Lines reserved for the footer under the star
pub const FOOTER_LINES: f32 = 2.0;

/// Cell border thickness in pixels
pub const DEFAULT_BORDER_WIDTH: u32 = 1;

/// Points on the free-space star
pub const STAR_POINTS: usize = 5;

/// Inner star radius relative to the outer radius
pub const STAR_INNER_RATIO: f32 = 0.5;

/// RGB colors
pub const BACKGROUND_COLOR: (u8, u8, u8) = (255, 255, 255);
pub const TEXT_COLOR: (u8, u8, u8) = (0, 0, 0);
pub const BORDER_COLOR: (u8, u8, u8) = (0, 0, 0);
pub const STAR_COLOR: (u8, u8, u8) = (255, 215, 0); // gold
pub const FOOTER_COLOR: (u8, u8, u8) = (128, 128, 128);
