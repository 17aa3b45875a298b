//! RGB <-> HLS conversion, used to sweep a colour's lightness while its
//! hue and saturation stay fixed.

use super::hex::{decode, encode, Rgb};
use super::wcag::{normalize, NormalizedRgb};
use crate::error::ColourResult;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Hue, lightness, saturation. Hue is a fraction of a turn in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

pub fn rgb_to_hls(rgb: NormalizedRgb) -> Hls {
    let NormalizedRgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = sum / 2.0;

    // Achromatic: hue and saturation are both zero.
    if min == max {
        return Hls { h: 0.0, l, s: 0.0 };
    }

    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - sum)
    };

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hls {
        h: (h / 6.0).rem_euclid(1.0),
        l,
        s,
    }
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

pub fn hls_to_rgb(hls: Hls) -> NormalizedRgb {
    let Hls { h, l, s } = hls;
    if s == 0.0 {
        return NormalizedRgb { r: l, g: l, b: l };
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    NormalizedRgb {
        r: hue_to_channel(m1, m2, h + ONE_THIRD),
        g: hue_to_channel(m1, m2, h),
        b: hue_to_channel(m1, m2, h - ONE_THIRD),
    }
}

/// Scale back to 0-255, truncating toward zero. Out-of-range channels
/// saturate at 0 or 255.
fn to_rgb(rgb: NormalizedRgb) -> Rgb {
    Rgb::new(
        (rgb.r * 255.0) as u8,
        (rgb.g * 255.0) as u8,
        (rgb.b * 255.0) as u8,
    )
}

/// Replace the HLS lightness of `hex` with `lightness` (0.0 black to 1.0
/// white), keeping hue and saturation. Returns lowercase `#rrggbb`.
pub fn adjust_lightness(hex: &str, lightness: f64) -> ColourResult<String> {
    let hls = rgb_to_hls(normalize(decode(hex)?));
    let adjusted = to_rgb(hls_to_rgb(Hls { l: lightness, ..hls }));
    let out = encode(adjusted);
    tracing::trace!("adjust_lightness: {hex} -> {out} (l={lightness})");
    Ok(out)
}

pub fn get_lightness(hex: &str) -> ColourResult<f64> {
    Ok(rgb_to_hls(normalize(decode(hex)?)).l)
}
