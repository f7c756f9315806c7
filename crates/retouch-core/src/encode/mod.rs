//! Export encoding for Retouch.
//!
//! Edited bitmaps are exported as PNG so alpha produced by background
//! removal survives the download.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&bitmap).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError};

/// File name offered for the exported image.
pub const EXPORT_FILE_NAME: &str = "edited_image.png";

/// Media type of the exported image.
pub const EXPORT_MIME: &str = "image/png";
