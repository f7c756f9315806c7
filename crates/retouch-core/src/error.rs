//! Errors surfaced to the user by the editor.

use thiserror::Error;

use crate::background::SegmentationError;
use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Any failure of a dispatched command.
///
/// None of these end the session: the edit state is left exactly as it was
/// before the failing command and the user can try another action.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Upload rejected; the user has to upload again.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Background removal failed; the current image is kept.
    #[error(transparent)]
    Segmentation(#[from] SegmentationError),

    /// Export failed; no download is offered.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("No image loaded; upload a JPEG or PNG first")]
    NoImage,

    #[error("{name} must be between {min} and {max}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}
