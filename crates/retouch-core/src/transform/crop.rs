//! Image cropping operations.
//!
//! Crops work in pixel coordinates with the origin at the top-left corner.
//! `crop_to_square` centers the largest square that fits; when the spare
//! length is odd the extra pixel goes to the right/bottom (offsets round
//! down).

use crate::decode::Bitmap;

/// Crop the largest centered square out of the image.
///
/// The side is `min(width, height)` and the offsets are
/// `(width - side) / 2` and `(height - side) / 2`, rounded down.
/// Applying it to an already-square image returns an identical copy.
///
/// # Example
///
/// ```
/// use retouch_core::decode::{Bitmap, ColorMode};
/// use retouch_core::transform::crop_to_square;
///
/// let image = Bitmap::new(100, 200, ColorMode::Rgb8, vec![128u8; 100 * 200 * 3]);
/// let square = crop_to_square(&image);
/// assert_eq!((square.width, square.height), (100, 100));
/// ```
pub fn crop_to_square(image: &Bitmap) -> Bitmap {
    let side = image.width.min(image.height);
    let left = (image.width - side) / 2;
    let top = (image.height - side) / 2;
    crop_region(image, left, top, side, side)
}

/// Crop a pixel rectangle out of the image.
///
/// # Behavior
///
/// - The rectangle is clamped to the image bounds
/// - Minimum output dimension is 1x1 pixels for a non-empty source
/// - A rectangle covering the whole image returns a copy of the original
pub fn crop_region(image: &Bitmap, left: u32, top: u32, width: u32, height: u32) -> Bitmap {
    // Fast path: full crop returns a clone
    if left == 0 && top == 0 && width >= image.width && height >= image.height {
        return image.clone();
    }
    if image.is_empty() {
        return image.clone();
    }

    // Clamp to image bounds
    let left = left.min(image.width - 1);
    let top = top.min(image.height - 1);
    let right = left.saturating_add(width).min(image.width);
    let bottom = top.saturating_add(height).min(image.height);

    let out_width = (right - left).max(1);
    let out_height = (bottom - top).max(1);

    let channels = image.mode.channels();
    let src_stride = image.width as usize * channels;
    let row_len = out_width as usize * channels;
    let mut output = Vec::with_capacity(row_len * out_height as usize);

    // Copy pixel data row by row
    for y in top..top + out_height {
        let start = y as usize * src_stride + left as usize * channels;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    Bitmap::new(out_width, out_height, image.mode, output)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::ColorMode;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep reasonable for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=100, 1u32..=100)
    }

    fn create_test_image(width: u32, height: u32) -> Bitmap {
        let pixels = (0..width * height)
            .flat_map(|i| {
                let v = (i % 256) as u8;
                [v, v, v]
            })
            .collect();
        Bitmap::new(width, height, ColorMode::Rgb8, pixels)
    }

    proptest! {
        /// Property: The square side is always min(width, height).
        #[test]
        fn prop_square_side_is_min_dimension((width, height) in dimensions_strategy()) {
            let img = create_test_image(width, height);
            let result = crop_to_square(&img);
            let side = width.min(height);

            prop_assert_eq!(result.width, side);
            prop_assert_eq!(result.height, side);
            prop_assert_eq!(result.pixels.len(), (side * side * 3) as usize);
        }

        /// Property: Cropping to square twice equals cropping once.
        #[test]
        fn prop_square_is_idempotent((width, height) in dimensions_strategy()) {
            let img = create_test_image(width, height);
            let once = crop_to_square(&img);
            let twice = crop_to_square(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: Region crops never exceed the source.
        #[test]
        fn prop_region_bounded_by_input(
            (width, height) in dimensions_strategy(),
            (left, top, w, h) in (0u32..150, 0u32..150, 0u32..150, 0u32..150),
        ) {
            let img = create_test_image(width, height);
            let result = crop_region(&img, left, top, w, h);

            prop_assert!(result.width >= 1 && result.width <= width);
            prop_assert!(result.height >= 1 && result.height <= height);
            prop_assert_eq!(result.pixels.len(), (result.width * result.height * 3) as usize);
        }
    }
}
