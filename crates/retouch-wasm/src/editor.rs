//! The editor page's entry point from JavaScript.
//!
//! [`EditorHandle`] owns one user's editor. Every command returns the
//! render description as a plain JS object; pixel data is fetched
//! separately with `current_image()` when `view.image` changes.
//!
//! # Example
//!
//! ```typescript
//! import { EditorHandle } from '@retouch/wasm';
//!
//! const editor = new EditorHandle();
//! let view = editor.upload(bytes, file.type);
//! view = editor.apply_filters(1.5, 1.0, 0);
//! const download = editor.save();
//! ```

use retouch_core::editor::{Command, Editor};
use retouch_core::{EditorConfig, EditorError, FilterSettings, MediaType, RenderView};
use tracing::info;
use wasm_bindgen::prelude::*;

use crate::logging;
use crate::remover::JsBackgroundRemover;
use crate::types::{JsBitmap, JsDownload};

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js_view(view: &RenderView) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(view).map_err(to_js_error)
}

/// One user's editing session.
#[wasm_bindgen]
pub struct EditorHandle {
    editor: Editor,
}

#[wasm_bindgen]
impl EditorHandle {
    /// Create an editor.
    ///
    /// `config` is an optional object overriding slider ranges, the export
    /// file name, the background matte and the log level. Missing fields
    /// keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` has the wrong shape or is inconsistent
    /// (e.g. a slider default outside its range).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<EditorHandle, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(to_js_error)?
        };
        config.validate().map_err(to_js_error)?;

        logging::init(&config.log_level);
        info!(version = env!("CARGO_PKG_VERSION"), "Editor created");

        Ok(EditorHandle {
            editor: Editor::new(config),
        })
    }

    /// Use a JS segmentation model instead of the built-in matte.
    ///
    /// `model` is called synchronously as `(png: Uint8Array) => Uint8Array`.
    /// Any session in progress is discarded.
    pub fn with_background_model(&mut self, model: js_sys::Function) {
        let config = self.editor.config().clone();
        self.editor = Editor::with_remover(config, Box::new(JsBackgroundRemover::new(model)));
    }

    /// Describe the page without changing anything.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js_view(&self.editor.view())
    }

    /// Load an uploaded file; `mime` is the browser's `File.type`.
    pub fn upload(&mut self, bytes: Vec<u8>, mime: &str) -> Result<JsValue, JsValue> {
        let media_type = MediaType::from_mime(mime).map_err(to_js_error)?;
        self.run(Command::Upload { bytes, media_type })
    }

    /// Apply brightness, contrast and blur to the current image.
    pub fn apply_filters(
        &mut self,
        brightness: f32,
        contrast: f32,
        blur: u32,
    ) -> Result<JsValue, JsValue> {
        self.run(Command::ApplyFilters(FilterSettings {
            brightness,
            contrast,
            blur,
        }))
    }

    pub fn remove_background(&mut self) -> Result<JsValue, JsValue> {
        self.run(Command::RemoveBackground)
    }

    pub fn crop_to_square(&mut self) -> Result<JsValue, JsValue> {
        self.run(Command::CropToSquare)
    }

    /// Go back to the uploaded image.
    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        self.run(Command::Reset)
    }

    /// Export the current image as PNG.
    pub fn save(&mut self) -> Result<JsDownload, JsValue> {
        let view = self.editor.dispatch(Command::Save).map_err(to_js_error)?;
        view.download
            .map(JsDownload::from_download)
            .ok_or_else(|| to_js_error(EditorError::NoImage))
    }

    /// Select star control `stars` (1 to 5).
    pub fn rate(&mut self, stars: u8) -> Result<JsValue, JsValue> {
        self.run(Command::Rate(stars))
    }

    pub fn set_comment(&mut self, comment: String) -> Result<JsValue, JsValue> {
        self.run(Command::SetComment(comment))
    }

    /// Submit rating and comment; the view carries the thank-you notice.
    pub fn submit_feedback(&mut self) -> Result<JsValue, JsValue> {
        self.run(Command::SubmitFeedback)
    }

    /// The image being edited, or `undefined` before the first upload.
    pub fn current_image(&self) -> Option<JsBitmap> {
        self.editor
            .session()
            .map(|session| JsBitmap::from_bitmap(session.current().clone()))
    }

    /// Forget the uploaded image, edits and feedback.
    pub fn end_session(&mut self) {
        self.editor.end_session();
    }
}

impl EditorHandle {
    fn run(&mut self, command: Command) -> Result<JsValue, JsValue> {
        let view = self.editor.dispatch(command).map_err(to_js_error)?;
        to_js_view(&view)
    }
}
