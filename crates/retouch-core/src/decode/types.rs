//! Core types for image decoding.

use image::{DynamicImage, ExtendedColorType, ImageFormat, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The declared upload type is not one we accept.
    #[error("Unsupported media type: {0} (expected JPEG or PNG)")]
    UnsupportedMediaType(String),

    /// The bytes are not a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Raw pixel data handed in by the host does not fit the dimensions.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Upload media types accepted at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Jpeg,
    Png,
}

impl MediaType {
    /// Parse a declared MIME type such as `image/png`.
    pub fn from_mime(mime: &str) -> Result<Self, DecodeError> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Ok(MediaType::Jpeg),
            "image/png" => Ok(MediaType::Png),
            _ => Err(DecodeError::UnsupportedMediaType(mime.to_string())),
        }
    }

    /// Parse a file extension (without the dot), case-insensitive.
    pub fn from_extension(ext: &str) -> Result<Self, DecodeError> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(MediaType::Jpeg),
            "png" => Ok(MediaType::Png),
            _ => Err(DecodeError::UnsupportedMediaType(ext.to_string())),
        }
    }

    pub(crate) fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(MediaType::Jpeg),
            ImageFormat::Png => Some(MediaType::Png),
            _ => None,
        }
    }

    pub(crate) fn image_format(self) -> ImageFormat {
        match self {
            MediaType::Jpeg => ImageFormat::Jpeg,
            MediaType::Png => ImageFormat::Png,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90CW,
    Transverse,
    Rotate270CW,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Pixel layout of a [`Bitmap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// 3 bytes per pixel.
    Rgb8,
    /// 4 bytes per pixel, straight (non-premultiplied) alpha.
    Rgba8,
}

impl ColorMode {
    /// Bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Rgb8 => 3,
            ColorMode::Rgba8 => 4,
        }
    }

    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::Rgba8)
    }

    pub(crate) fn extended_color_type(self) -> ExtendedColorType {
        match self {
            ColorMode::Rgb8 => ExtendedColorType::Rgb8,
            ColorMode::Rgba8 => ExtendedColorType::Rgba8,
        }
    }
}

/// A decoded raster image.
///
/// Pixels are stored row-major with `mode.channels()` bytes per pixel.
/// Transforms never mutate a bitmap in place; they return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel layout.
    pub mode: ColorMode,
    /// Pixel data, `width * height * mode.channels()` bytes.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a new Bitmap with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, mode: ColorMode, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * mode.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            mode,
            pixels,
        }
    }

    /// Create a Bitmap from untrusted raw pixels, checking the buffer length.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidPixelData` unless `pixels` holds exactly
    /// `width * height * mode.channels()` bytes.
    pub fn from_raw(
        width: u32,
        height: u32,
        mode: ColorMode,
        pixels: Vec<u8>,
    ) -> Result<Self, DecodeError> {
        let expected = width as usize * height as usize * mode.channels();
        if pixels.len() != expected {
            return Err(DecodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self::new(width, height, mode, pixels))
    }

    /// Build a bitmap from any decoded image.
    ///
    /// Sources with an alpha channel become `Rgba8`, everything else `Rgb8`.
    /// Gray and 16-bit layouts are widened/narrowed accordingly.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Self::new(width, height, ColorMode::Rgba8, rgba.into_raw())
        } else {
            let rgb = img.into_rgb8();
            let (width, height) = rgb.dimensions();
            Self::new(width, height, ColorMode::Rgb8, rgb.into_raw())
        }
    }

    /// Convert to an `image::DynamicImage` for library operations.
    ///
    /// Returns `None` when the pixel buffer does not match the dimensions.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        match self.mode {
            ColorMode::Rgb8 => RgbImage::from_raw(self.width, self.height, self.pixels.clone())
                .map(DynamicImage::ImageRgb8),
            ColorMode::Rgba8 => RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
                .map(DynamicImage::ImageRgba8),
        }
    }

    /// Pixel data expanded to RGBA, as a canvas `ImageData` expects.
    pub fn to_rgba_pixels(&self) -> Vec<u8> {
        match self.mode {
            ColorMode::Rgba8 => self.pixels.clone(),
            ColorMode::Rgb8 => {
                let mut out = Vec::with_capacity(self.pixel_count() * 4);
                for px in self.pixels.chunks_exact(3) {
                    out.extend_from_slice(&[px[0], px[1], px[2], 255]);
                }
                out
            }
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
