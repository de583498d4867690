use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::error::{Result, VtoError};

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Strip the `data:image/...;base64,` prefix when present.
pub fn clean_base64(data: &str) -> &str {
    if data.starts_with("data:image") {
        match data.split_once(',') {
            Some((_, payload)) => payload,
            None => data,
        }
    } else {
        data
    }
}

pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(clean_base64(data))
        .map_err(|e| VtoError::InvalidImage(format!("invalid base64 payload: {}", e)))
}

pub fn decode_image_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| VtoError::InvalidImage(format!("undecodable image data: {}", e)))
}

pub fn decode_base64_image(data: &str) -> Result<DynamicImage> {
    let bytes = decode_base64(data)?;
    decode_image_bytes(&bytes)
}

/// Re-encode a pixel buffer as a PNG data URI. The color mode is normalized
/// by channel count: RGBA stays RGBA, RGB stays RGB, anything else is
/// flattened to grayscale.
pub fn image_to_data_uri(image: &DynamicImage) -> Result<String> {
    let normalized = match image.color().channel_count() {
        4 => DynamicImage::ImageRgba8(image.to_rgba8()),
        3 => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => DynamicImage::ImageLuma8(image.to_luma8()),
    };

    let mut buffer = Cursor::new(Vec::new());
    normalized
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| VtoError::Internal(format!("PNG encoding failed: {}", e)))?;

    Ok(format!(
        "{}{}",
        PNG_DATA_URI_PREFIX,
        STANDARD.encode(buffer.get_ref())
    ))
}
