use std::fmt;
use std::path::Path;

use image::ImageFormat;

use crate::error::RenderError;

/// Output file formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
    Pdf,
}

impl OutputFormat {
    /// Determine the format from the extension of `path` (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                RenderError::UnsupportedFormat(format!("no file extension in {}", path.display()))
            })?;
        Self::from_extension(ext)
    }

    pub fn from_extension(ext: &str) -> Result<Self, RenderError> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(RenderError::UnsupportedFormat(format!(".{}", ext))),
        }
    }

    /// The raster encoder for this format, `None` for PDF
    pub fn image_format(&self) -> Option<ImageFormat> {
        match self {
            OutputFormat::Png => Some(ImageFormat::Png),
            OutputFormat::Jpeg => Some(ImageFormat::Jpeg),
            OutputFormat::Bmp => Some(ImageFormat::Bmp),
            OutputFormat::Tiff => Some(ImageFormat::Tiff),
            OutputFormat::Pdf => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Tiff => "TIFF",
            OutputFormat::Pdf => "PDF",
        };
        write!(f, "{}", name)
    }
}
