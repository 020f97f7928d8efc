//! Image encoding for pixelmosaic.
//!
//! Processed images always leave the pipeline as baseline JPEG, whatever
//! format they were uploaded in.

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
