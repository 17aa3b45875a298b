use super::hex::{decode, encode, Rgb};
use crate::error::ColourResult;

/// Alpha-composite a foreground colour over a background colour.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
///
/// Channels are left fractional; alpha is not range-checked, so values
/// outside 0.0-1.0 extrapolate.
pub fn blend(fg: Rgb, bg: Rgb, alpha: f64) -> Rgb<f64> {
    let mix = |f: u8, b: u8| alpha * f64::from(f) + (1.0 - alpha) * f64::from(b);
    Rgb::new(mix(fg.r, bg.r), mix(fg.g, bg.g), mix(fg.b, bg.b))
}

/// `blend` on hex input, rounded and encoded back to 6-digit hex.
pub fn composite_over(fg_hex: &str, bg_hex: &str, alpha: f64) -> ColourResult<String> {
    let fg = decode(fg_hex)?;
    let bg = decode(bg_hex)?;
    Ok(encode(blend(fg, bg, alpha).round()))
}
