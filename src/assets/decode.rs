use std::path::Path;

use image::RgbaImage;

use crate::foundation::error::{MorphError, MorphResult};

/// Decode an encoded image (PNG, JPEG, GIF, ...) into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> MorphResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| MorphError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode the image at `path`.
pub fn load_image(path: &Path) -> MorphResult<RgbaImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| MorphError::decode(format!("read '{}': {e}", path.display())))?;
    let img = decode_image(&bytes)
        .map_err(|e| MorphError::decode(format!("'{}': {}", path.display(), e.root())))?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded input image"
    );
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
