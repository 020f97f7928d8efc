//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! This is the weighting used when collapsing an RGB pixel to a single gray
//! level, which is what the saturation stage blends toward.

/// ITU-R BT.601 coefficient for red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values (0 to 255), rounded to the nearest level.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    luma.round().clamp(0.0, 255.0) as u8
}
