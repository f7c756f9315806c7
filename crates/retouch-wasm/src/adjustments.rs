//! Filter WASM bindings.
//!
//! Exposes the composite brightness → contrast → blur action for pages
//! that want to preview a bitmap without going through an editor session.

use crate::types::JsBitmap;
use retouch_core::adjustments;
use retouch_core::FilterSettings;
use wasm_bindgen::prelude::*;

/// Apply brightness, contrast and blur to an image, in that order.
///
/// # Arguments
///
/// * `image` - Source image (not modified)
/// * `brightness` - Brightness factor, 1.0 = unchanged
/// * `contrast` - Contrast factor, 1.0 = unchanged
/// * `blur` - Gaussian blur radius in pixels, 0 = none
///
/// # Example (TypeScript)
///
/// ```typescript
/// const preview = apply_filters(image, 1.5, 1.0, 0);
/// ```
#[wasm_bindgen]
pub fn apply_filters(image: &JsBitmap, brightness: f32, contrast: f32, blur: u32) -> JsBitmap {
    let settings = FilterSettings {
        brightness,
        contrast,
        blur,
    };
    JsBitmap::from_bitmap(adjustments::apply_filters(image.as_bitmap(), &settings))
}
