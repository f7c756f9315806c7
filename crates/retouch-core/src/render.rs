//! Render description returned after every command.
//!
//! The view is plain data: the host page draws it however it likes. Pixel
//! data is not part of the view; hosts fetch it separately when
//! `image` changes.

use serde::Serialize;

use crate::config::SliderRange;
use crate::decode::{Bitmap, ColorMode};

pub const TITLE: &str = "AI-Based Image Editor";
pub const GREETING: &str =
    "Welcome to our AI-based Image Editing Tool! Let’s transform your images with ease!";

/// Everything the page needs to redraw itself.
#[derive(Debug, Clone, Serialize)]
pub struct RenderView {
    pub title: &'static str,
    pub greeting: &'static str,
    /// `None` until an image has been uploaded.
    pub image: Option<ImageInfo>,
    /// Brightness, contrast and blur, in that order.
    pub sliders: [SliderView; 3],
    pub rating: u8,
    /// Five star glyphs, e.g. `★★★☆☆`.
    pub stars: String,
    pub rating_label: String,
    pub comment: String,
    pub notice: Option<Notice>,
    /// Only present right after a save.
    pub download: Option<Download>,
}

/// Shape of the bitmap currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
}

impl From<&Bitmap> for ImageInfo {
    fn from(bitmap: &Bitmap) -> Self {
        Self {
            width: bitmap.width,
            height: bitmap.height,
            color_mode: bitmap.mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderView {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

impl SliderView {
    pub fn new(id: &'static str, label: &'static str, range: &SliderRange, value: f32) -> Self {
        Self {
            id,
            label,
            min: range.min,
            max: range.max,
            step: range.step,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Info(String),
}

/// An exported file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub byte_length: usize,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}
