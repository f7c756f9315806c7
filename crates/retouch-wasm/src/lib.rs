//! Retouch WASM - WebAssembly bindings for the Retouch editor
//!
//! This crate exposes retouch-core to the editor page.
//!
//! # Module Structure
//!
//! - `editor` - [`EditorHandle`], the command dispatcher for one user
//! - `types` - WASM-compatible wrapper types for bitmaps and downloads
//! - `decode` - Upload decoding bindings (JPEG, PNG)
//! - `encode` - PNG export binding
//! - `adjustments` - Stateless brightness/contrast/blur preview
//! - `transform` - Stateless square crop
//! - `remover` - Background removal through a JS model
//! - `logging` - `tracing` output to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { EditorHandle } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new EditorHandle({ log_level: 'debug' });
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const view = editor.upload(bytes, file.type);
//! console.log(`Editing ${view.image.width}x${view.image.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod editor;
mod encode;
mod logging;
mod remover;
mod transform;
mod types;

// Re-export public types
pub use adjustments::apply_filters;
pub use decode::{decode_image, decode_upload};
pub use editor::EditorHandle;
pub use encode::encode_png;
pub use remover::JsBackgroundRemover;
pub use transform::crop_to_square;
pub use types::{JsBitmap, JsDownload};

/// Initialize the WASM module (called automatically on load)
///
/// Console logging is installed by the first [`EditorHandle`], using the
/// `log_level` from its configuration.
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
