//! Retouch Core - single-page image editing
//!
//! This crate provides everything behind the Retouch editor page: decoding
//! uploads, brightness/contrast/blur, background removal, square cropping,
//! PNG export, star-rating feedback, and the command dispatcher that ties
//! them to one user's session.

pub mod adjustments;
pub mod background;
pub mod config;
pub mod decode;
pub mod editor;
pub mod encode;
pub mod error;
pub mod feedback;
pub mod luminance;
pub mod render;
pub mod session;
pub mod transform;

pub use background::{remove_background, BackgroundRemover, BorderMatte, SegmentationError};
pub use config::EditorConfig;
pub use decode::{Bitmap, ColorMode, DecodeError, MediaType};
pub use editor::{Command, Editor};
pub use encode::EncodeError;
pub use error::EditorError;
pub use render::RenderView;
pub use session::EditSession;
pub use transform::{crop_to_square, reset};

/// Slider values for the composite filter action.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterSettings {
    /// Brightness factor (1.0 = unchanged)
    pub brightness: f32,
    /// Contrast factor (1.0 = unchanged)
    pub contrast: f32,
    /// Gaussian blur radius in pixels (0 = none)
    pub blur: u32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            blur: 0,
        }
    }
}

impl FilterSettings {
    /// Settings matching the configured slider defaults.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            brightness: config.brightness.default,
            contrast: config.contrast.default,
            blur: config.blur.default.max(0.0).round() as u32,
        }
    }

    /// Check if applying these settings would change nothing
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}
