//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@retouch/wasm';
//!
//! const png = encode_png(image);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsBitmap;
use retouch_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a bitmap to PNG bytes, keeping alpha if present.
///
/// # Errors
///
/// Returns an error if the bitmap is empty or its pixel buffer does not
/// match its dimensions.
#[wasm_bindgen]
pub fn encode_png(image: &JsBitmap) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.as_bitmap()).map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_png_basic() {
        let img = JsBitmap::new(16, 16, vec![10u8; 16 * 16 * 3], false).unwrap();
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[wasm_bindgen_test]
    fn test_encode_png_invalid_pixel_data() {
        let bitmap = retouch_core::decode::Bitmap {
            width: 16,
            height: 16,
            mode: retouch_core::decode::ColorMode::Rgb8,
            pixels: vec![10u8; 5],
        };
        assert!(encode_png(&JsBitmap::from_bitmap(bitmap)).is_err());
    }
}
