//! pixelmosaic core - image transform pipeline
//!
//! This crate decodes an uploaded JPEG or PNG, runs it through three
//! pixel-level stages (pixelation, saturation, hue rotation) and encodes the
//! result as JPEG. Everything here is synchronous and operates on buffers
//! owned by the caller.

pub mod decode;
pub mod encode;
pub mod hsv;
pub mod luminance;
pub mod pipeline;
pub mod pixelate;
pub mod saturation;

pub use decode::{decode_image, is_supported_filename, DecodeError, DecodedImage};
pub use encode::{encode_image, EncodeError, DEFAULT_JPEG_QUALITY};
pub use pipeline::{process_image, transform, PipelineError, ProcessedImage};
pub use pixelate::{pixelate, pixelated_dimensions, PixelateError};

/// Parameters for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParams {
    /// Edge length of each mosaic block in pixels (1 = no pixelation)
    pub pixel_size: u32,
    /// Hue shift in 8-bit hue levels, wrapped modulo 256
    pub hue: f64,
    /// Saturation multiplier (1.0 = unchanged, 0.0 = grayscale)
    pub saturation: f32,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            pixel_size: 1,
            hue: 0.0,
            saturation: 1.0,
        }
    }
}
