//! Resize-and-recompress pipeline for avatar images.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::data_url::encode_data_url;
use crate::ImagingError;

/// MIME types accepted by the pipeline. Anything else is rejected without decoding.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/png", "image/jpeg", "image/jpg", "image/webp"];

/// Maximum width or height of the compressed avatar, in pixels.
pub const MAX_DIMENSION: u32 = 300;

/// Maximum encoded size of the compressed avatar, in bytes (100 KB).
pub const MAX_ENCODED_BYTES: usize = 100 * 1024;

/// Descending JPEG qualities tried before the image is downscaled further.
const QUALITY_LADDER: [u8; 7] = [85, 75, 65, 55, 45, 35, 25];

/// Whether the declared MIME type is in the allow-list.
pub fn is_allowed_type(mime: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&mime)
}

/// Validate, resize, and recompress an image into a JPEG data URL.
///
/// The result is guaranteed to hold at most [`MAX_ENCODED_BYTES`] of encoded image
/// data with neither dimension exceeding [`MAX_DIMENSION`]. The transform is
/// deterministic: identical input bytes produce an identical data URL.
pub fn compress_to_data_url(bytes: &[u8], mime: &str) -> Result<String, ImagingError> {
    let mut job = CompressionJob::new(bytes, mime)?;
    loop {
        if let Some(url) = job.step()? {
            return Ok(url);
        }
    }
}

/// The compression pipeline broken into one encode attempt per step.
///
/// A single-threaded cooperative caller (the wasm client) drives this with a yield
/// to the event loop between steps so input and rendering stay responsive; running
/// the steps back to back, as [`compress_to_data_url`] does, gives the identical
/// result.
#[derive(Debug)]
pub struct CompressionJob {
    img: DynamicImage,
    quality_idx: usize,
}

impl CompressionJob {
    /// Validate the declared type, decode, and apply the dimension cap.
    pub fn new(bytes: &[u8], mime: &str) -> Result<Self, ImagingError> {
        if !is_allowed_type(mime) {
            return Err(ImagingError::UnsupportedType(mime.to_string()));
        }

        let img = image::load_from_memory(bytes)
            .map_err(|e| ImagingError::Processing(e.to_string()))?;
        let img = if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
            img.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
        } else {
            img
        };
        Ok(Self {
            img,
            quality_idx: 0,
        })
    }

    /// Run one encode attempt down the quality ladder, halving the dimensions once
    /// the ladder is exhausted.
    ///
    /// `Ok(Some(url))` is the finished data URL; `Ok(None)` means the attempt came
    /// out over the byte budget and another step is needed.
    pub fn step(&mut self) -> Result<Option<String>, ImagingError> {
        if self.quality_idx >= QUALITY_LADDER.len() {
            if self.img.width() <= 16 || self.img.height() <= 16 {
                return Err(ImagingError::Processing(
                    "image does not fit the size budget at any quality".to_string(),
                ));
            }
            self.img = self.img.thumbnail(self.img.width() / 2, self.img.height() / 2);
            self.quality_idx = 0;
        }

        let quality = QUALITY_LADDER[self.quality_idx];
        self.quality_idx += 1;

        let buf = encode_jpeg(&self.img, quality)?;
        if buf.len() <= MAX_ENCODED_BYTES {
            return Ok(Some(encode_data_url("image/jpeg", &buf)));
        }
        Ok(None)
    }
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>, ImagingError> {
    // JPEG has no alpha channel, so flatten to RGB first.
    let rgb = img.to_rgb8();
    let mut buf = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buf, quality))
        .map_err(|e| ImagingError::Processing(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_data_url;
    use image::{ImageBuffer, ImageFormat, Rgb};
    use std::io::Cursor;

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_rejects_disallowed_type_without_decoding() {
        // Valid PNG bytes, but a declared type outside the allow-list.
        let png = gradient_png(10, 10);
        let err = compress_to_data_url(&png, "image/gif").unwrap_err();
        assert!(matches!(err, ImagingError::UnsupportedType(ref t) if t == "image/gif"));

        // Garbage bytes with a disallowed type must also fail on the type,
        // never on decoding.
        let err = compress_to_data_url(b"not an image", "text/plain").unwrap_err();
        assert!(matches!(err, ImagingError::UnsupportedType(_)));
    }

    #[test]
    fn test_accepts_jpg_alias() {
        let png = gradient_png(20, 20);
        assert!(compress_to_data_url(&png, "image/jpg").is_ok());
    }

    #[test]
    fn test_corrupt_input_is_processing_error() {
        let err = compress_to_data_url(b"definitely not a png", "image/png").unwrap_err();
        assert!(matches!(err, ImagingError::Processing(_)));
    }

    #[test]
    fn test_output_fits_dimension_and_byte_budget() {
        let png = gradient_png(1200, 800);
        let url = compress_to_data_url(&png, "image/png").unwrap();

        let (mime, bytes) = parse_data_url(&url).unwrap();
        assert_eq!(mime, "image/jpeg");
        assert!(bytes.len() <= MAX_ENCODED_BYTES);

        let out = image::load_from_memory(&bytes).unwrap();
        assert!(out.width() <= MAX_DIMENSION);
        assert!(out.height() <= MAX_DIMENSION);
        // Aspect ratio preserved: 1200x800 fits as 300x200.
        assert_eq!((out.width(), out.height()), (300, 200));
    }

    #[test]
    fn test_small_image_keeps_dimensions() {
        let png = gradient_png(100, 50);
        let url = compress_to_data_url(&png, "image/png").unwrap();
        let (_, bytes) = parse_data_url(&url).unwrap();
        let out = image::load_from_memory(&bytes).unwrap();
        assert_eq!((out.width(), out.height()), (100, 50));
    }

    #[test]
    fn test_stepwise_job_matches_one_shot_result() {
        let png = gradient_png(900, 900);
        let one_shot = compress_to_data_url(&png, "image/png").unwrap();

        let mut job = CompressionJob::new(&png, "image/png").unwrap();
        let stepped = loop {
            if let Some(url) = job.step().unwrap() {
                break url;
            }
        };
        assert_eq!(stepped, one_shot);
    }

    #[test]
    fn test_job_rejects_disallowed_type() {
        let png = gradient_png(10, 10);
        assert!(matches!(
            CompressionJob::new(&png, "image/gif").unwrap_err(),
            ImagingError::UnsupportedType(_)
        ));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let png = gradient_png(640, 480);
        let first = compress_to_data_url(&png, "image/png").unwrap();
        let second = compress_to_data_url(&png, "image/png").unwrap();
        assert_eq!(first, second);
    }
}
