//! Decoding of uploaded JPEG and PNG files.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use super::{DecodeError, DecodedImage};

/// File name suffixes accepted for upload. Matched case-sensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Check whether an upload's file name ends in one of [`SUPPORTED_EXTENSIONS`].
///
/// The match is a plain, case-sensitive suffix test: `photo.JPG` is rejected.
pub fn is_supported_filename(name: &str) -> bool {
    SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Decode JPEG or PNG bytes into an RGB image.
///
/// The format is guessed from the content, not the file name. Alpha
/// channels and palettes are dropped by converting to RGB8 right away.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized,
/// `DecodeError::UnsupportedFormat` for images that are neither JPEG nor PNG,
/// and `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Jpeg | ImageFormat::Png) => {}
        Some(other) => return Err(DecodeError::UnsupportedFormat(format!("{other:?}"))),
        None => return Err(DecodeError::InvalidFormat),
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}
