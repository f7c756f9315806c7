//! Background removal.
//!
//! Segmentation is delegated to a [`BackgroundRemover`]: an opaque model that
//! takes PNG bytes and returns PNG bytes with the background made
//! transparent. [`remove_background`] does the PNG round trip around it so
//! callers only deal in bitmaps.
//!
//! ## Models
//!
//! - [`BorderMatte`]: built-in color-keyed matte seeded from the image border
//! - Any host-provided implementation (the WASM bindings forward to JS)

mod border_matte;

pub use border_matte::{BorderMatte, BorderMatteConfig};

use thiserror::Error;
use tracing::{info, instrument};

use crate::decode::{decode, Bitmap};
use crate::encode::encode_png;

/// Errors raised while removing a background.
#[derive(Debug, Error)]
pub enum SegmentationError {
    /// The model could not read the image it was handed.
    #[error("Segmentation input rejected: {0}")]
    InvalidInput(String),

    /// The model call itself failed.
    #[error("Background removal failed: {0}")]
    ModelFailed(String),

    /// The model returned bytes that are not a decodable image.
    #[error("Background removal returned an unreadable image: {0}")]
    InvalidOutput(String),
}

/// An opaque segmentation model with a `bytes -> bytes` contract.
///
/// Implementations receive a PNG and must return an encoded image (PNG
/// expected) of the same scene with background pixels transparent. Latency
/// and determinism are up to the implementation; callers block until it
/// returns.
pub trait BackgroundRemover {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Run the model on PNG bytes.
    fn remove(&self, png: &[u8]) -> Result<Vec<u8>, SegmentationError>;
}

/// Remove the background of `bitmap` using `remover`.
///
/// The input is never modified; on error the caller keeps its bitmap.
#[instrument(skip_all, fields(model = remover.name(), width = bitmap.width, height = bitmap.height))]
pub fn remove_background(
    bitmap: &Bitmap,
    remover: &dyn BackgroundRemover,
) -> Result<Bitmap, SegmentationError> {
    let png = encode_png(bitmap).map_err(|e| SegmentationError::InvalidInput(e.to_string()))?;
    let output = remover.remove(&png)?;
    let result = decode(&output).map_err(|e| SegmentationError::InvalidOutput(e.to_string()))?;
    info!(
        out_width = result.width,
        out_height = result.height,
        "Background removed"
    );
    Ok(result)
}
