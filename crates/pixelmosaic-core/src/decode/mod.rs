//! Image decoding for pixelmosaic.
//!
//! This module provides functionality for:
//! - Validating upload file names against the accepted extensions
//! - Decoding JPEG and PNG bytes into RGB pixel buffers
//! - Nearest-neighbor resizing of pixel buffers
//!
//! All operations are synchronous and allocate a fresh buffer per call.

mod resize;
mod types;
mod upload;

pub use resize::resize;
pub use types::{DecodeError, DecodedImage};
pub use upload::{decode_image, is_supported_filename, SUPPORTED_EXTENSIONS};
