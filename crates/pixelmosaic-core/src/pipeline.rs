//! The full transform pipeline.
//!
//! ## Stage Order
//! 1. Decode (JPEG/PNG to RGB8)
//! 2. Pixelate
//! 3. Saturation
//! 4. Hue rotation
//! 5. Encode (JPEG)
//!
//! Every stage returns its own error type, wrapped in [`PipelineError`] so the
//! caller can tell which stage failed.

use thiserror::Error;

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::{encode_image, EncodeError};
use crate::hsv::apply_hue_shift;
use crate::pixelate::{pixelate, PixelateError};
use crate::saturation::apply_saturation;
use crate::TransformParams;

/// A failure in one of the pipeline stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("pixelation failed: {0}")]
    Pixelate(#[from] PixelateError),

    #[error("encode failed: {0}")]
    Encode(#[from] EncodeError),
}

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Final width in pixels, after pixelation truncation.
    pub width: u32,
    /// Final height in pixels, after pixelation truncation.
    pub height: u32,
    /// JPEG-encoded output.
    pub jpeg: Vec<u8>,
}

/// Run the three pixel stages on an already decoded image.
pub fn transform(
    image: &DecodedImage,
    params: &TransformParams,
) -> Result<DecodedImage, PixelateError> {
    let mut out = pixelate(image, params.pixel_size)?;
    tracing::debug!(
        width = out.width,
        height = out.height,
        block_size = params.pixel_size,
        "pixelated"
    );

    apply_saturation(&mut out.pixels, params.saturation);
    tracing::debug!(factor = params.saturation, "saturation applied");

    apply_hue_shift(&mut out.pixels, params.hue);
    tracing::debug!(shift = params.hue, "hue rotated");

    Ok(out)
}

/// Decode, transform and re-encode an uploaded image.
///
/// # Arguments
/// * `bytes` - Uploaded JPEG or PNG file contents
/// * `params` - Pixel size, hue shift and saturation factor
/// * `quality` - JPEG quality for the output (1-100)
pub fn process_image(
    bytes: &[u8],
    params: &TransformParams,
    quality: u8,
) -> Result<ProcessedImage, PipelineError> {
    let decoded = decode_image(bytes)?;
    tracing::debug!(
        width = decoded.width,
        height = decoded.height,
        bytes = bytes.len(),
        "decoded upload"
    );

    let transformed = transform(&decoded, params)?;

    let jpeg = encode_image(&transformed, quality)?;
    tracing::debug!(bytes = jpeg.len(), quality, "encoded output");

    Ok(ProcessedImage {
        width: transformed.width,
        height: transformed.height,
        jpeg,
    })
}
