//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Retouch
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use retouch_core::decode::{Bitmap, ColorMode, DecodeError};
use retouch_core::render::Download;
use wasm_bindgen::prelude::*;

/// A bitmap wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `rgba_pixels()`
/// copy it to JavaScript memory as a `Uint8Array`. Call `free()` to release
/// a large image early; the finalizer handles it otherwise.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a bitmap from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - Row-major pixel data, 3 (RGB) or 4 (RGBA) bytes per pixel
    /// * `has_alpha` - Whether `pixels` is RGBA
    ///
    /// # Errors
    ///
    /// Returns an error if `pixels` is not exactly
    /// `width * height * channels` bytes long.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        has_alpha: bool,
    ) -> Result<JsBitmap, JsValue> {
        checked_bitmap(width, height, pixels, has_alpha)
            .map(Self::from_bitmap)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[wasm_bindgen(getter)]
    pub fn has_alpha(&self) -> bool {
        self.inner.mode.has_alpha()
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns the pixel data in its own layout (RGB or RGBA).
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Returns RGBA pixel data, ready for `new ImageData(...)`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.inner.to_rgba_pixels()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

fn checked_bitmap(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    has_alpha: bool,
) -> Result<Bitmap, DecodeError> {
    let mode = if has_alpha {
        ColorMode::Rgba8
    } else {
        ColorMode::Rgb8
    };
    Bitmap::from_raw(width, height, mode, pixels)
}

impl JsBitmap {
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    pub(crate) fn as_bitmap(&self) -> &Bitmap {
        &self.inner
    }
}

/// An exported file for the page to offer as a download.
#[wasm_bindgen]
pub struct JsDownload {
    inner: Download,
}

#[wasm_bindgen]
impl JsDownload {
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.inner.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime(&self) -> String {
        self.inner.mime.to_string()
    }

    /// The encoded file as `Uint8Array`.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }
}

impl JsDownload {
    pub(crate) fn from_download(inner: Download) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_bitmap_creation() {
        let img = JsBitmap::new(100, 50, vec![0u8; 100 * 50 * 3], false).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert!(!img.has_alpha());
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_bitmap_rgba_pixels() {
        let rgb = JsBitmap::new(1, 1, vec![1, 2, 3], false).unwrap();
        assert_eq!(rgb.rgba_pixels(), vec![1, 2, 3, 255]);

        let rgba = JsBitmap::new(1, 1, vec![1, 2, 3, 4], true).unwrap();
        assert_eq!(rgba.rgba_pixels(), vec![1, 2, 3, 4]);
        assert_eq!(rgba.pixels(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_checked_bitmap_rejects_short_buffer() {
        let result = checked_bitmap(10, 20, vec![1, 2, 3], false);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidPixelData {
                expected: 600,
                actual: 3
            })
        ));
        // RGB-sized buffer declared as RGBA
        assert!(checked_bitmap(2, 2, vec![0u8; 12], true).is_err());
        assert!(checked_bitmap(2, 2, vec![0u8; 16], true).is_ok());
    }

    #[test]
    fn test_from_bitmap() {
        let bitmap = Bitmap::new(20, 10, ColorMode::Rgba8, vec![0u8; 800]);
        let js = JsBitmap::from_bitmap(bitmap.clone());
        assert!(js.has_alpha());
        assert_eq!(js.as_bitmap(), &bitmap);
    }

    #[test]
    fn test_download_accessors() {
        let download = JsDownload::from_download(Download {
            file_name: "edited_image.png".to_string(),
            mime: "image/png",
            byte_length: 2,
            bytes: vec![7, 8],
        });
        assert_eq!(download.file_name(), "edited_image.png");
        assert_eq!(download.mime(), "image/png");
        assert_eq!(download.bytes(), vec![7, 8]);
    }
}
