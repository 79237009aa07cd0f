//! PDF compression helper
//!
//! printpdf writes page content streams uncompressed; lopdf deflates them.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress every stream of a serialized PDF.
pub fn compress_pdf(uncompressed: Vec<u8>) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(&uncompressed)
        .map_err(|e| RenderError::Encode(format!("Failed to parse PDF for compression: {}", e)))?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| RenderError::Encode(format!("Failed to save compressed PDF: {}", e)))?;

    Ok(output.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        let err = compress_pdf(b"not a pdf".to_vec()).unwrap_err();
        assert!(matches!(err, RenderError::Encode(_)));
    }
}
