//! 8-bit HSV conversion and hue rotation.
//!
//! Hue, saturation and value are each stored on a 0-255 scale, so an HSV
//! buffer has the same shape as an RGB one and conversions happen in place.
//! Hue 0 and hue 256 are the same angle; hue never clamps, it wraps.
//!
//! The forward conversion truncates hue and saturation to integer levels, so
//! RGB -> HSV -> RGB may move a channel by a few levels.

/// Convert one RGB pixel to 8-bit HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return (0, 0, max);
    }

    let chroma = (max - min) as f32;
    let s = chroma / max as f32;
    let rc = (max - r) as f32 / chroma;
    let gc = (max - g) as f32 / chroma;
    let bc = (max - b) as f32 / chroma;

    // Channel ratios stay f32; the hue offset, wrap and scaling run in f64
    let h = if r == max {
        bc - gc
    } else if g == max {
        (2.0 + f64::from(rc) - f64::from(bc)) as f32
    } else {
        (4.0 + f64::from(gc) - f64::from(rc)) as f32
    };
    let h = ((f64::from(h) / 6.0 + 1.0) % 1.0) as f32;

    (
        to_level(f64::from(h) * 255.0),
        to_level(f64::from(s) * 255.0),
        max,
    )
}

/// Convert one 8-bit HSV pixel back to RGB.
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> (u8, u8, u8) {
    if s == 0 {
        return (v, v, v);
    }

    let scaled = h as f32 * 6.0 / 255.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let fs = s as f32 / 255.0;
    let vf = v as f32;

    let p = to_level(f64::from((vf * (1.0 - fs)).round()));
    let q = to_level(f64::from((vf * (1.0 - fs * f)).round()));
    let t = to_level(f64::from((vf * (1.0 - fs * (1.0 - f))).round()));

    match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Truncate a float level into 0-255.
#[inline]
fn to_level(x: f64) -> u8 {
    x.clamp(0.0, 255.0) as u8
}

/// Convert an RGB buffer to HSV in place.
pub fn rgb_to_hsv_in_place(pixels: &mut [u8]) {
    for chunk in pixels.chunks_exact_mut(3) {
        let (h, s, v) = rgb_to_hsv(chunk[0], chunk[1], chunk[2]);
        chunk.copy_from_slice(&[h, s, v]);
    }
}

/// Convert an HSV buffer to RGB in place.
pub fn hsv_to_rgb_in_place(pixels: &mut [u8]) {
    for chunk in pixels.chunks_exact_mut(3) {
        let (r, g, b) = hsv_to_rgb(chunk[0], chunk[1], chunk[2]);
        chunk.copy_from_slice(&[r, g, b]);
    }
}

/// Shift a single hue level by `shift`, wrapping modulo 256.
///
/// Negative shifts wrap from below; the fractional part of the result is
/// truncated.
#[inline]
pub fn shift_hue(hue: u8, shift: f64) -> u8 {
    let shifted = (hue as f64 + shift).rem_euclid(256.0);
    // rem_euclid can round up to exactly 256.0 for tiny negative inputs
    (shifted as u32 % 256) as u8
}

/// Rotate the hue channel of an HSV buffer in place.
///
/// Saturation and value are left untouched. Each pixel is independent of
/// its neighbours.
pub fn rotate_hue(hsv_pixels: &mut [u8], shift: f64) {
    for chunk in hsv_pixels.chunks_exact_mut(3) {
        chunk[0] = shift_hue(chunk[0], shift);
    }
}

/// Apply a hue shift to an RGB buffer in place.
///
/// Converts to HSV, rotates the hue channel and converts back. Runs the
/// conversion round trip even for a zero shift so the output is the same
/// as for any multiple of 256.
pub fn apply_hue_shift(pixels: &mut [u8], shift: f64) {
    rgb_to_hsv_in_place(pixels);
    rotate_hue(pixels, shift);
    hsv_to_rgb_in_place(pixels);
}
