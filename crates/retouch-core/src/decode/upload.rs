//! JPEG/PNG decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use tracing::{debug, warn};

use super::{Bitmap, DecodeError, MediaType, Orientation};

/// Decode a JPEG or PNG from bytes, detecting the format from its signature.
///
/// JPEGs have their EXIF orientation applied so the bitmap is upright.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are neither JPEG nor PNG.
/// Returns `DecodeError::CorruptedFile` if the data is truncated or malformed.
pub fn decode(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let media_type = sniff_media_type(bytes)?;
    decode_as(bytes, media_type)
}

/// Decode an uploaded file whose media type was declared by the client.
///
/// The declared type is only trusted to be one we accept; the actual bytes
/// decide which decoder runs. A mismatch is logged and tolerated.
pub fn decode_upload(bytes: &[u8], declared: MediaType) -> Result<Bitmap, DecodeError> {
    let detected = sniff_media_type(bytes)?;
    if detected != declared {
        warn!(
            declared = declared.mime(),
            detected = detected.mime(),
            "Upload content does not match its declared type"
        );
    }
    decode_as(bytes, detected)
}

/// Identify the encoding of `bytes` from its magic number.
pub fn sniff_media_type(bytes: &[u8]) -> Result<MediaType, DecodeError> {
    let format = image::guess_format(bytes).map_err(|_| DecodeError::InvalidFormat)?;
    MediaType::from_image_format(format).ok_or(DecodeError::InvalidFormat)
}

fn decode_as(bytes: &[u8], media_type: MediaType) -> Result<Bitmap, DecodeError> {
    let img = image::load_from_memory_with_format(bytes, media_type.image_format())
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = match media_type {
        MediaType::Jpeg => apply_orientation(img, extract_orientation(bytes)),
        MediaType::Png => img,
    };

    let bitmap = Bitmap::from_dynamic(img);
    debug!(
        width = bitmap.width,
        height = bitmap.height,
        mode = ?bitmap.mode,
        "Decoded image"
    );
    Ok(bitmap)
}

/// Returns `Orientation::Normal` when no EXIF orientation is present.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };
    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::ColorMode;
    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn png_bytes(width: u32, height: u32, color: ExtendedColorType, pixels: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(pixels, width, height, color)
            .unwrap();
        buffer
    }

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![128u8; (width * height * 3) as usize];
        let mut buffer = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, 90)
            .write_image(&pixels, width, height, ExtendedColorType::Rgb8)
            .unwrap();
        buffer
    }

    /// Splice an EXIF APP1 segment carrying only an Orientation tag right
    /// after the JPEG SOI marker.
    fn with_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
        let mut tiff = Vec::new();
        tiff.extend_from_slice(b"MM\x00\x2a");
        tiff.extend_from_slice(&8u32.to_be_bytes());
        tiff.extend_from_slice(&1u16.to_be_bytes());
        // Orientation, SHORT, count 1, value left-aligned in the 4-byte slot
        tiff.extend_from_slice(&0x0112u16.to_be_bytes());
        tiff.extend_from_slice(&3u16.to_be_bytes());
        tiff.extend_from_slice(&1u32.to_be_bytes());
        tiff.extend_from_slice(&orientation.to_be_bytes());
        tiff.extend_from_slice(&[0, 0]);
        tiff.extend_from_slice(&0u32.to_be_bytes());

        let mut app1 = b"Exif\x00\x00".to_vec();
        app1.extend_from_slice(&tiff);
        let length = (app1.len() + 2) as u16;

        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&length.to_be_bytes());
        out.extend_from_slice(&app1);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn test_decode_png_rgb() {
        let pixels: Vec<u8> = (0..4 * 3 * 3).map(|i| i as u8).collect();
        let bytes = png_bytes(4, 3, ExtendedColorType::Rgb8, &pixels);

        let bitmap = decode(&bytes).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (4, 3));
        assert_eq!(bitmap.mode, ColorMode::Rgb8);
        assert_eq!(bitmap.pixels, pixels);
    }

    #[test]
    fn test_decode_png_rgba() {
        let pixels = vec![200u8, 100, 50, 0, 1, 2, 3, 255];
        let bytes = png_bytes(2, 1, ExtendedColorType::Rgba8, &pixels);

        let bitmap = decode(&bytes).unwrap();
        assert_eq!(bitmap.mode, ColorMode::Rgba8);
        assert_eq!(bitmap.pixels, pixels);
    }

    #[test]
    fn test_decode_jpeg() {
        let bitmap = decode(&jpeg_bytes(16, 8)).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (16, 8));
        assert_eq!(bitmap.mode, ColorMode::Rgb8);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_rejects_other_formats() {
        // GIF signature
        let result = decode(b"GIF89a\x01\x00\x01\x00");
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(8, 8, ExtendedColorType::Rgb8, &[9u8; 8 * 8 * 3]);
        let result = decode(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_upload_tolerates_mismatched_declaration() {
        let bytes = png_bytes(2, 2, ExtendedColorType::Rgb8, &[0u8; 12]);
        let bitmap = decode_upload(&bytes, MediaType::Jpeg).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (2, 2));
    }

    #[test]
    fn test_sniff_media_type() {
        assert_eq!(sniff_media_type(&jpeg_bytes(2, 2)).unwrap(), MediaType::Jpeg);
        let png = png_bytes(1, 1, ExtendedColorType::Rgb8, &[0, 0, 0]);
        assert_eq!(sniff_media_type(&png).unwrap(), MediaType::Png);
    }

    #[test]
    fn test_no_exif_means_normal_orientation() {
        assert_eq!(extract_orientation(&jpeg_bytes(4, 4)), Orientation::Normal);
    }

    #[test]
    fn test_extract_orientation_from_exif() {
        let bytes = with_orientation(&jpeg_bytes(4, 4), 6);
        assert_eq!(extract_orientation(&bytes), Orientation::Rotate90CW);
    }

    #[test]
    fn test_decode_upload_applies_exif_rotation() {
        let bytes = with_orientation(&jpeg_bytes(16, 8), 6);
        let bitmap = decode_upload(&bytes, MediaType::Jpeg).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (8, 16));

        let upright = with_orientation(&jpeg_bytes(16, 8), 1);
        let bitmap = decode_upload(&upright, MediaType::Jpeg).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (16, 8));
    }

    #[test]
    fn test_jpeg_upload_survives_png_export() {
        let upload = decode_upload(&jpeg_bytes(24, 10), MediaType::Jpeg).unwrap();
        let png = crate::encode::encode_png(&upload).unwrap();
        let exported = decode(&png).unwrap();

        assert_eq!((exported.width, exported.height), (24, 10));
        assert_eq!(exported.mode, upload.mode);
        assert_eq!(exported.pixels, upload.pixels);
    }

    #[test]
    fn test_apply_orientation_swaps_dimensions() {
        let img = DynamicImage::new_rgb8(6, 4);
        let rotated = apply_orientation(img.clone(), Orientation::Rotate90CW);
        assert_eq!((rotated.width(), rotated.height()), (4, 6));

        let flipped = apply_orientation(img, Orientation::FlipHorizontal);
        assert_eq!((flipped.width(), flipped.height()), (6, 4));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::encode::encode_png;
    use image::codecs::jpeg::JpegEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_jpeg_to_png_keeps_shape(
            width in 1u32..40,
            height in 1u32..40,
            value in any::<u8>(),
        ) {
            let pixels = vec![value; (width * height * 3) as usize];
            let mut jpeg = Vec::new();
            JpegEncoder::new_with_quality(&mut jpeg, 85)
                .write_image(&pixels, width, height, ExtendedColorType::Rgb8)
                .unwrap();

            let decoded = decode(&jpeg).unwrap();
            let exported = decode(&encode_png(&decoded).unwrap()).unwrap();

            prop_assert_eq!((exported.width, exported.height), (width, height));
            prop_assert_eq!(exported.mode, decoded.mode);
            prop_assert_eq!(exported.pixels, decoded.pixels);
        }
    }
}
