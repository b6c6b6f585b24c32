use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageOutputFormat};

use super::errors::ExtractionError;
use super::model::ImageDigest;

const JPEG_QUALITY: u8 = 90;

/// A decoded receipt photo, ready for hashing and for the model payload.
pub struct PreparedImage {
    pub digest: ImageDigest,
    pub jpeg_base64: String,
}

impl PreparedImage {
    /// Decodes `bytes` (any supported container) and derives:
    /// - the cache digest, from a PNG re-encoding of the RGBA8 pixels, so two
    ///   files with the same pixels hash identically whatever their format;
    /// - the base64 JPEG sent to the vision model.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractionError> {
        let decoded = image::load_from_memory(bytes).map_err(|_| ExtractionError::InvalidImage)?;

        let canonical = encode(
            &DynamicImage::ImageRgba8(decoded.to_rgba8()),
            ImageOutputFormat::Png,
        )?;
        let jpeg = encode(
            &DynamicImage::ImageRgb8(decoded.to_rgb8()),
            ImageOutputFormat::Jpeg(JPEG_QUALITY),
        )?;

        Ok(Self {
            digest: ImageDigest::of_canonical_bytes(&canonical),
            jpeg_base64: STANDARD.encode(jpeg),
        })
    }
}

fn encode(image: &DynamicImage, format: ImageOutputFormat) -> Result<Vec<u8>, ExtractionError> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut buffer, format)
        .map_err(|_| ExtractionError::InvalidImage)?;
    Ok(buffer)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

    /// Encodes a small two-tone test image in the given container format.
    pub fn receipt_photo(format: ImageOutputFormat, shade: u8) -> Vec<u8> {
        let image = RgbImage::from_fn(6, 4, |x, _| {
            if x % 2 == 0 {
                Rgb([shade, shade, shade])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut buffer, format)
            .unwrap();
        buffer
    }
}
