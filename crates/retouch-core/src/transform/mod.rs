//! Geometry operations: square cropping and reset.
//!
//! # Coordinate System
//!
//! - Pixel coordinates, origin at the top-left corner
//! - Offsets that fall between pixels round down

mod crop;

pub use crop::{crop_region, crop_to_square};

use crate::decode::Bitmap;

/// Discard every edit by returning a fresh copy of the upload.
pub fn reset(original: &Bitmap) -> Bitmap {
    original.clone()
}
