//! Background removal delegated to a JavaScript model.

use js_sys::{Function, Uint8Array};
use retouch_core::background::{BackgroundRemover, SegmentationError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Calls a synchronous JS function `(png: Uint8Array) => Uint8Array`.
///
/// Anything thrown by the callback, or a return value that is not a
/// `Uint8Array`, is reported as a [`SegmentationError`].
pub struct JsBackgroundRemover {
    callback: Function,
}

impl JsBackgroundRemover {
    pub fn new(callback: Function) -> Self {
        Self { callback }
    }
}

impl BackgroundRemover for JsBackgroundRemover {
    fn name(&self) -> &str {
        "js-callback"
    }

    fn remove(&self, png: &[u8]) -> Result<Vec<u8>, SegmentationError> {
        let input = Uint8Array::from(png);
        let output = self
            .callback
            .call1(&JsValue::NULL, &input)
            .map_err(|e| SegmentationError::ModelFailed(describe(&e)))?;

        output
            .dyn_into::<Uint8Array>()
            .map(|bytes| bytes.to_vec())
            .map_err(|value| {
                SegmentationError::InvalidOutput(format!(
                    "expected Uint8Array, got {}",
                    describe(&value)
                ))
            })
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"))
}
