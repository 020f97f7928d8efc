//! Block-mosaic pixelation.
//!
//! The image is shrunk by the block size with nearest-neighbor sampling and
//! then grown back by the same factor, again nearest-neighbor. No averaging
//! happens in either direction, which is what gives hard-edged blocks instead
//! of a blur.
//!
//! Output dimensions are `(W / p) * p` by `(H / p) * p` using integer
//! division, so up to `p - 1` rows and columns may be cut off the right and
//! bottom edges.

use thiserror::Error;

use crate::decode::{resize, DecodeError, DecodedImage};

/// Errors that can occur while pixelating.
#[derive(Debug, Error)]
pub enum PixelateError {
    /// A block size of zero would divide by zero.
    #[error("Pixel block size must be at least 1")]
    ZeroBlockSize,

    /// The block size is larger than the image in at least one direction.
    #[error(
        "Pixel block size {block_size} is too large for a {width}x{height} image: \
         the downsampled image would be empty"
    )]
    DegenerateDimensions {
        width: u32,
        height: u32,
        block_size: u32,
    },

    /// The underlying resampler failed.
    #[error("Resampling failed: {0}")]
    Resample(#[from] DecodeError),
}

/// Compute the output dimensions for a block size without touching pixels.
///
/// # Errors
///
/// Same as [`pixelate`].
pub fn pixelated_dimensions(
    width: u32,
    height: u32,
    block_size: u32,
) -> Result<(u32, u32), PixelateError> {
    if block_size == 0 {
        return Err(PixelateError::ZeroBlockSize);
    }

    let small_w = width / block_size;
    let small_h = height / block_size;
    if small_w == 0 || small_h == 0 {
        return Err(PixelateError::DegenerateDimensions {
            width,
            height,
            block_size,
        });
    }

    Ok((small_w * block_size, small_h * block_size))
}

/// Pixelate an image into `block_size` x `block_size` blocks.
///
/// A block size of 1 returns the image unchanged.
///
/// # Errors
///
/// Returns `PixelateError::ZeroBlockSize` for a block size of 0 and
/// `PixelateError::DegenerateDimensions` when the block size exceeds the
/// image width or height.
pub fn pixelate(image: &DecodedImage, block_size: u32) -> Result<DecodedImage, PixelateError> {
    let (out_w, out_h) = pixelated_dimensions(image.width, image.height, block_size)?;

    if block_size == 1 {
        return Ok(image.clone());
    }

    let small = resize(image, out_w / block_size, out_h / block_size)?;
    let blocky = resize(&small, out_w, out_h)?;

    Ok(blocky)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 7 % 256) as u8);
                pixels.push((y * 11 % 256) as u8);
                pixels.push(((x + y) * 3 % 256) as u8);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_block_size_one_is_identity() {
        let img = gradient(13, 9);
        let out = pixelate(&img, 1).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_dimensions_truncate() {
        let img = gradient(10, 10);
        let out = pixelate(&img, 3).unwrap();
        assert_eq!((out.width, out.height), (9, 9));
        assert_eq!(out.pixels.len(), 9 * 9 * 3);
    }

    #[test]
    fn test_exact_multiple_keeps_dimensions() {
        let img = DecodedImage::filled(100, 100, [255, 0, 0]);
        let out = pixelate(&img, 10).unwrap();
        assert_eq!((out.width, out.height), (100, 100));
        assert_eq!(out, img);
    }

    #[test]
    fn test_blocks_are_uniform() {
        let img = gradient(24, 16);
        let out = pixelate(&img, 4).unwrap();

        for by in 0..out.height / 4 {
            for bx in 0..out.width / 4 {
                let first = out.pixel(bx * 4, by * 4);
                for dy in 0..4 {
                    for dx in 0..4 {
                        assert_eq!(out.pixel(bx * 4 + dx, by * 4 + dy), first);
                    }
                }
            }
        }
    }

    #[test]
    fn test_block_colors_come_from_source() {
        let img = gradient(24, 16);
        let out = pixelate(&img, 4).unwrap();

        for chunk in out.pixels.chunks_exact(3) {
            assert!(
                img.pixels.chunks_exact(3).any(|src| src == chunk),
                "Nearest-neighbor must not invent colors"
            );
        }
    }

    #[test]
    fn test_zero_block_size() {
        let img = gradient(10, 10);
        assert!(matches!(pixelate(&img, 0), Err(PixelateError::ZeroBlockSize)));
    }

    #[test]
    fn test_block_larger_than_image() {
        let img = gradient(10, 40);
        let err = pixelate(&img, 11).unwrap_err();

        assert!(matches!(
            err,
            PixelateError::DegenerateDimensions {
                width: 10,
                height: 40,
                block_size: 11
            }
        ));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_block_equal_to_image_gives_single_block() {
        let img = gradient(8, 8);
        let out = pixelate(&img, 8).unwrap();

        assert_eq!((out.width, out.height), (8, 8));
        let first = out.pixel(0, 0);
        assert!(out.pixels.chunks_exact(3).all(|p| p == first));
    }

    #[test]
    fn test_pixelated_dimensions() {
        assert_eq!(pixelated_dimensions(10, 10, 3).unwrap(), (9, 9));
        assert_eq!(pixelated_dimensions(640, 480, 7).unwrap(), (637, 476));
        assert!(pixelated_dimensions(5, 5, 0).is_err());
        assert!(pixelated_dimensions(5, 50, 6).is_err());
    }
}
