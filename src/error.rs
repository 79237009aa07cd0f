use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Invalid card size {0}: size must be an odd integer of at least {min}", min = crate::model::MIN_GRID_SIZE)]
    InvalidSize(i64),

    #[error("Not enough keywords: a {size}x{size} card needs {needed} unique keywords, found {available}")]
    InsufficientKeywords {
        size: usize,
        needed: usize,
        available: usize,
    },
}

#[derive(Error, Debug)]
pub enum KeywordError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unsupported output format: {0} (expected png, jpg, jpeg, bmp, tif, tiff or pdf)")]
    UnsupportedFormat(String),

    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("Image encoding error: {0}")]
    Encode(String),

    #[error("Invalid render settings: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Invalid cell size {0}: must be between {min} and {max} pixels",
        min = crate::config::MIN_CELL_SIZE,
        max = crate::config::MAX_CELL_SIZE
    )]
    InvalidCellSize(u32),

    #[error("Padding {padding} leaves no room for text in a {cell_size}px cell")]
    InvalidPadding { padding: u32, cell_size: u32 },

    #[error("Invalid font size range: minimum {min} exceeds maximum {max}")]
    InvalidFontRange { min: f32, max: f32 },

    #[error("Invalid font size {size}: must be a finite value between 0 and {limit} pixels")]
    InvalidFontSize { size: f32, limit: u32 },

    #[error(
        "A {side}x{side} card with {cell_size}px cells exceeds the {max}px canvas limit",
        max = crate::config::MAX_CANVAS_SIZE
    )]
    CanvasTooLarge { side: usize, cell_size: u32 },
}

/// Any failure while turning keywords into an encoded card
#[derive(Error, Debug)]
pub enum BingoError {
    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
