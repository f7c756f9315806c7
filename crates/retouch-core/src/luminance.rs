//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! This is the weighting used when an RGB image is reduced to a single
//! gray channel, and it drives the mean level that contrast pivots around.

use crate::decode::Bitmap;

/// ITU-R BT.601 coefficients, scaled by 1000.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Calculate luma from u8 RGB values (0 to 255), rounded to nearest.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    ((weighted + 500) / 1000) as u8
}

/// Mean luma over every pixel of the bitmap, rounded to nearest.
///
/// Alpha is ignored. Returns 0 for an empty bitmap.
pub fn mean_luma(bitmap: &Bitmap) -> u8 {
    let count = bitmap.pixel_count();
    if count == 0 {
        return 0;
    }
    let sum: u64 = bitmap
        .pixels
        .chunks_exact(bitmap.mode.channels())
        .map(|px| luma_u8(px[0], px[1], px[2]) as u64)
        .sum();
    ((sum as f64 / count as f64).round()).min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ColorMode;

    #[test]
    fn test_coefficients_sum_to_one() {
        assert_eq!(LUMA_R + LUMA_G + LUMA_B, 1000);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(255, 255, 255), 255);
        assert_eq!(luma_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in [0u8, 1, 64, 128, 192, 254, 255] {
            assert_eq!(luma_u8(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
        assert_eq!(luma_u8(255, 0, 0), 76);
        assert_eq!(luma_u8(0, 255, 0), 150);
        assert_eq!(luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_mean_luma_ignores_alpha() {
        let bitmap = Bitmap::new(2, 1, ColorMode::Rgba8, vec![100, 100, 100, 0, 200, 200, 200, 255]);
        assert_eq!(mean_luma(&bitmap), 150);
    }

    #[test]
    fn test_mean_luma_empty() {
        let bitmap = Bitmap::new(0, 0, ColorMode::Rgb8, vec![]);
        assert_eq!(mean_luma(&bitmap), 0);
    }
}
