//! Tonal adjustments and blur.
//!
//! ## Filter Order
//! 1. Brightness
//! 2. Contrast
//! 3. Gaussian blur
//!
//! Brightness and contrast do not commute once values clip, and blur is
//! meant to act on the final tonal range, so [`apply_filters`] always runs
//! them in this order. Every function returns a new bitmap and leaves alpha
//! untouched except for blur, which smooths all channels.

use tracing::{debug, warn};

use crate::decode::Bitmap;
use crate::luminance::mean_luma;
use crate::FilterSettings;

/// Apply brightness, contrast and blur as one composite step.
///
/// Each stage consumes the previous stage's output.
pub fn apply_filters(bitmap: &Bitmap, settings: &FilterSettings) -> Bitmap {
    if settings.is_identity() {
        return bitmap.clone();
    }
    let brightened = adjust_brightness(bitmap, settings.brightness);
    let contrasted = adjust_contrast(&brightened, settings.contrast);
    apply_blur(&contrasted, settings.blur)
}

/// Scale every color channel by `factor`.
///
/// Equivalent to blending the image with black: `0.0` gives black,
/// `1.0` is the identity, `2.0` doubles each channel (clamped at 255).
pub fn adjust_brightness(bitmap: &Bitmap, factor: f32) -> Bitmap {
    if factor == 1.0 {
        return bitmap.clone();
    }
    debug!(factor, "Adjusting brightness");
    map_color_channels(bitmap, |c| c * factor)
}

/// Scale the distance of every color channel from the image's mean luma.
///
/// Formula: `output = mean + factor * (input - mean)`
///
/// `1.0` is the identity, `0.0` collapses the image to flat gray.
pub fn adjust_contrast(bitmap: &Bitmap, factor: f32) -> Bitmap {
    if factor == 1.0 {
        return bitmap.clone();
    }
    let mean = mean_luma(bitmap) as f32;
    debug!(factor, mean, "Adjusting contrast");
    map_color_channels(bitmap, |c| mean + factor * (c - mean))
}

/// Gaussian blur with standard deviation `radius` pixels.
///
/// A radius of 0 returns an unchanged copy.
pub fn apply_blur(bitmap: &Bitmap, radius: u32) -> Bitmap {
    if radius == 0 || bitmap.is_empty() {
        return bitmap.clone();
    }
    let Some(img) = bitmap.to_dynamic() else {
        warn!(
            width = bitmap.width,
            height = bitmap.height,
            len = bitmap.pixels.len(),
            "Pixel buffer does not match dimensions, skipping blur"
        );
        return bitmap.clone();
    };
    debug!(radius, "Applying gaussian blur");
    Bitmap::from_dynamic(img.blur(radius as f32))
}

/// Map the R, G and B channels through `f`, rounding and clamping to u8.
fn map_color_channels(bitmap: &Bitmap, f: impl Fn(f32) -> f32) -> Bitmap {
    let mut out = bitmap.clone();
    for px in out.pixels.chunks_exact_mut(bitmap.mode.channels()) {
        for c in &mut px[..3] {
            *c = f(*c as f32).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}


// ============================================================================
// Property-Based Tests
// ============================================================================
