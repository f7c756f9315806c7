//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a JPEG or PNG, detecting the format
//! - [`decode_upload`] - Decode a file picked by the user, checking its MIME type
//!
//! # Example
//!
//! ```typescript
//! import { decode_upload } from '@retouch/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_upload(bytes, file.type);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsBitmap;
use retouch_core::decode::{self, MediaType};
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG image from bytes.
///
/// JPEG EXIF orientation is applied.
///
/// # Errors
///
/// Returns an error if the bytes are not a JPEG/PNG or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode::decode(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode an uploaded file given its declared MIME type (`File.type`).
///
/// # Errors
///
/// Returns an error if the MIME type is not `image/jpeg` or `image/png`,
/// or if the bytes cannot be decoded.
#[wasm_bindgen]
pub fn decode_upload(bytes: &[u8], mime: &str) -> Result<JsBitmap, JsValue> {
    MediaType::from_mime(mime)
        .and_then(|media_type| decode::decode_upload(bytes, media_type))
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`. The decoding itself is covered by the tests
/// in `retouch_core::decode`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use retouch_core::decode::{Bitmap, ColorMode};
    use retouch_core::encode::encode_png;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn png(width: u32, height: u32) -> Vec<u8> {
        let bitmap = Bitmap::new(
            width,
            height,
            ColorMode::Rgb8,
            vec![90u8; (width * height * 3) as usize],
        );
        encode_png(&bitmap).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_decode_image_png() {
        let image = decode_image(&png(8, 4)).unwrap();
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 4);
    }

    #[wasm_bindgen_test]
    fn test_decode_image_invalid() {
        assert!(decode_image(&[0, 1, 2, 3]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_upload_rejects_mime() {
        assert!(decode_upload(&png(2, 2), "image/gif").is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_upload_png() {
        let image = decode_upload(&png(3, 5), "image/png").unwrap();
        assert_eq!(image.height(), 5);
    }
}
