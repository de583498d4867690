use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{Result, VtoError};

use super::codec;

/// File-backed RGB PNG handed to the synthesis client. The file lives in the
/// system temp directory under a unique name and is removed when the guard
/// drops, whatever happened to the surrounding request.
pub struct TempImageFile {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl TempImageFile {
    pub fn from_base64(payload: &str, prefix: &str) -> Result<Self> {
        let image = codec::decode_base64_image(payload)?;
        Self::from_image(&image, prefix)
    }

    pub fn from_image(image: &DynamicImage, prefix: &str) -> Result<Self> {
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let path = std::env::temp_dir().join(format!("{}{}.png", prefix, Uuid::new_v4()));

        rgb.save_with_format(&path, ImageFormat::Png).map_err(|e| {
            VtoError::Internal(format!(
                "failed to write temp image {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!(
            "Temp PNG created: {} ({}x{})",
            path.display(),
            rgb.width(),
            rgb.height()
        );

        Ok(Self {
            path,
            width: rgb.width(),
            height: rgb.height(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for TempImageFile {
    fn drop(&mut self) {
        // cleanup failures are logged, never propagated
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::warn!("Failed to remove temp image {}: {}", self.path.display(), e);
        } else {
            log::debug!("Temp image removed: {}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_materialize_and_cleanup() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(5, 7));
        let temp = TempImageFile::from_image(&image, "selfie_").unwrap();
        let path = temp.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(temp.dimensions(), (5, 7));
        assert!(path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("selfie_"));

        // the written file is a decodable RGB PNG
        let written = image::open(&path).unwrap();
        assert_eq!(written.color().channel_count(), 3);

        drop(temp);
        assert!(!path.exists());
    }

    #[test]
    fn test_from_base64_rejects_non_image() {
        assert!(TempImageFile::from_base64("QUJD", "model_").is_err());
        assert!(TempImageFile::from_base64("%%%", "model_").is_err());
    }
}
