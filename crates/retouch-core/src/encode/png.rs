//! PNG encoding for export.
//!
//! Uses the `image` crate's PNG encoder. PNG is lossless, so an exported
//! bitmap decodes back bit-exact, alpha included.

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::Bitmap;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a bitmap to PNG bytes, keeping its color mode.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for a zero-sized bitmap and
/// `EncodeError::InvalidPixelData` when the buffer length is inconsistent
/// with the dimensions.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    let Bitmap {
        width,
        height,
        mode,
        ref pixels,
    } = *bitmap;

    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = width as usize * height as usize * mode.channels();
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, mode.extended_color_type())
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::{decode, ColorMode};
    use proptest::prelude::*;

    /// Strategy for generating a random bitmap (keep small for speed).
    fn bitmap_strategy() -> impl Strategy<Value = Bitmap> {
        (1u32..=24, 1u32..=24, prop_oneof![Just(ColorMode::Rgb8), Just(ColorMode::Rgba8)])
            .prop_flat_map(|(width, height, mode)| {
                let size = width as usize * height as usize * mode.channels();
                prop::collection::vec(any::<u8>(), size..=size)
                    .prop_map(move |pixels| Bitmap::new(width, height, mode, pixels))
            })
    }

    proptest! {
        /// Property: PNG export decodes back to the identical bitmap.
        #[test]
        fn prop_png_round_trip_bit_exact(bitmap in bitmap_strategy()) {
            let png = encode_png(&bitmap).unwrap();
            let decoded = decode(&png).unwrap();
            prop_assert_eq!(decoded, bitmap);
        }

        /// Property: Encoding is deterministic.
        #[test]
        fn prop_deterministic_output(bitmap in bitmap_strategy()) {
            prop_assert_eq!(encode_png(&bitmap).unwrap(), encode_png(&bitmap).unwrap());
        }
    }
}
