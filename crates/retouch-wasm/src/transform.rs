//! WASM bindings for geometry operations.

use crate::types::JsBitmap;
use retouch_core::transform::crop_to_square as core_crop_to_square;
use wasm_bindgen::prelude::*;

/// Crop the largest centered square out of an image.
///
/// The side is `min(width, height)`; when the spare length is odd the
/// extra pixel is dropped from the right or bottom edge.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const square = crop_to_square(image); // 100x200 -> 100x100
/// ```
#[wasm_bindgen]
pub fn crop_to_square(image: &JsBitmap) -> JsBitmap {
    JsBitmap::from_bitmap(core_crop_to_square(image.as_bitmap()))
}
