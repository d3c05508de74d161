use std::path::Path;

use crate::foundation::error::{ChesslineError, ChesslineResult};

/// Decode an encoded raster image (PNG, JPEG, ...) from memory.
pub fn decode_image(bytes: &[u8]) -> ChesslineResult<image::DynamicImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ChesslineError::image(format!("decode image from memory: {e}")))?;
    if img.width() == 0 || img.height() == 0 {
        return Err(ChesslineError::image("decoded image is empty"));
    }
    Ok(img)
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> ChesslineResult<image::DynamicImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| ChesslineError::image(format!("read image '{}': {e}", path.display())))?;
    decode_image(&bytes)
}
