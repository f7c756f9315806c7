//! Upload decoding for Retouch.
//!
//! This module turns uploaded bytes into a [`Bitmap`]:
//! - Validating the declared media type (JPEG or PNG only)
//! - Detecting the real encoding from the file signature
//! - Applying EXIF orientation to JPEG uploads
//! - Normalizing every pixel layout to `Rgb8` or `Rgba8`
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::decode::{decode_upload, MediaType};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let bitmap = decode_upload(&bytes, MediaType::from_mime("image/png")?)?;
//! println!("Decoded {}x{} image", bitmap.width, bitmap.height);
//! ```

mod types;
mod upload;

pub use types::{Bitmap, ColorMode, DecodeError, MediaType, Orientation};
pub use upload::{decode, decode_upload, sniff_media_type};
