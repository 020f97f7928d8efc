//! Saturation scaling.
//!
//! Each pixel is blended against its own gray level:
//!
//! `output = gray + factor * (input - gray)`
//!
//! where `gray` is the BT.601 luma of the pixel. A factor of 1.0 leaves the
//! pixel alone, 0.0 collapses it to gray, and anything above 1.0 pushes the
//! channels further from gray. Results are clamped to 0-255 and truncated,
//! not rounded.

use crate::luminance::luma_u8;

/// Scale the saturation of RGB pixel data in place.
///
/// # Arguments
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `factor` - Saturation multiplier; 1.0 is unchanged, 0.0 is grayscale
pub fn apply_saturation(pixels: &mut [u8], factor: f32) {
    // Early exit for the identity factor
    if factor == 1.0 {
        return;
    }

    for chunk in pixels.chunks_exact_mut(3) {
        let gray = luma_u8(chunk[0], chunk[1], chunk[2]) as f32;
        for c in chunk.iter_mut() {
            *c = blend(gray, *c as f32, factor);
        }
    }
}

#[inline]
fn blend(gray: f32, value: f32, factor: f32) -> u8 {
    let out = gray + factor * (value - gray);
    // NaN factors fall back to gray rather than 0
    if out.is_nan() {
        return gray as u8;
    }
    out.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_factor() {
        let mut pixels = vec![200, 40, 10, 0, 0, 0, 255, 255, 255, 13, 180, 99];
        let original = pixels.clone();

        apply_saturation(&mut pixels, 1.0);
        assert_eq!(pixels, original);
    }

    #[test]
    fn test_zero_factor_is_gray() {
        let mut pixels = vec![200, 40, 10];
        apply_saturation(&mut pixels, 0.0);

        let expected = luma_u8(200, 40, 10);
        assert_eq!(pixels, vec![expected; 3]);
    }

    #[test]
    fn test_half_factor_moves_toward_gray() {
        let mut pixels = vec![200, 40, 10];
        apply_saturation(&mut pixels, 0.5);

        let spread_before = 200 - 10;
        let spread_after = pixels[0] as i32 - pixels[2] as i32;
        assert!(spread_after > 0 && spread_after < spread_before);
    }

    #[test]
    fn test_half_factor_truncates() {
        // gray = 76; 76 + 0.5 * 179 = 165.5 lands on 165
        let mut pixels = vec![255, 0, 0];
        apply_saturation(&mut pixels, 0.5);

        assert_eq!(pixels, vec![165, 38, 38]);
    }

    #[test]
    fn test_amplify_clamps() {
        let mut pixels = vec![200, 40, 10];
        apply_saturation(&mut pixels, 1000.0);

        assert_eq!(pixels, vec![255, 0, 0]);
    }

    #[test]
    fn test_gray_pixels_unaffected_by_any_factor() {
        for factor in [0.0, 0.3, 2.0, 50.0, -3.0] {
            let mut pixels = vec![90, 90, 90];
            apply_saturation(&mut pixels, factor);
            assert_eq!(pixels, vec![90, 90, 90], "factor {factor}");
        }
    }

    #[test]
    fn test_negative_factor_inverts_chroma() {
        // Below zero, channels cross over to the other side of gray
        let mut pixels = vec![200, 40, 10];
        apply_saturation(&mut pixels, -1.0);

        assert!(pixels[0] < pixels[2]);
    }

    #[test]
    fn test_nan_factor_collapses_to_gray() {
        let mut pixels = vec![200, 40, 10];
        apply_saturation(&mut pixels, f32::NAN);

        let expected = luma_u8(200, 40, 10);
        assert_eq!(pixels, vec![expected; 3]);
    }

    #[test]
    fn test_partial_trailing_bytes_untouched() {
        let mut pixels = vec![200, 40, 10, 7];
        apply_saturation(&mut pixels, 0.0);

        assert_eq!(pixels[3], 7);
    }
}
