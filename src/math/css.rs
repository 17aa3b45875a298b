use csscolorparser::Color;

use super::hex::{encode, Rgb};
use crate::types::ResolvedColour;

/// Resolve any CSS colour value to 6-digit hex plus its alpha.
/// Handles: hex (3/4/6/8 digit), rgb(a), hsl(a), hwb, oklch, named colours.
/// Returns None for: transparent, inherit, currentColor, unrecognized.
///
/// `alpha` is None when the colour is fully opaque, so the hex can go
/// straight into `evaluate` and the alpha (if any) becomes its opacity.
pub fn resolve_colour(value: &str) -> Option<ResolvedColour> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    let color = trimmed.parse::<Color>().ok()?;
    let [r, g, b, a] = color.to_rgba8();
    let alpha = (a < 255).then(|| f64::from(a) / 255.0);
    Some(ResolvedColour {
        hex: encode(Rgb::new(r, g, b)),
        alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(value: &str) -> Option<String> {
        resolve_colour(value).map(|c| c.hex)
    }

    #[test]
    fn hex_passthrough() {
        assert_eq!(hex_of("#ff0000"), Some("#ff0000".to_string()));
        assert_eq!(hex_of("#1E293B"), Some("#1e293b".to_string()));
    }

    #[test]
    fn hex_3digit_expansion() {
        assert_eq!(hex_of("#f00"), Some("#ff0000".to_string()));
    }

    #[test]
    fn hex_8digit_splits_alpha() {
        let c = resolve_colour("#ff000080").unwrap();
        assert_eq!(c.hex, "#ff0000");
        let alpha = c.alpha.unwrap();
        assert!((alpha - 0.502).abs() < 0.01); // 128/255 ~ 0.502
    }

    #[test]
    fn opaque_has_no_alpha() {
        assert_eq!(resolve_colour("#ff0000ff").unwrap().alpha, None);
        assert_eq!(resolve_colour("#ff0000").unwrap().alpha, None);
    }

    #[test]
    fn rgb_comma_format() {
        assert_eq!(hex_of("rgb(255, 0, 128)"), Some("#ff0080".to_string()));
    }

    #[test]
    fn rgba_keeps_alpha() {
        let c = resolve_colour("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(c.hex, "#000000");
        assert!((c.alpha.unwrap() - 0.5).abs() < 0.01);
    }

    #[test]
    fn hsl_red() {
        assert_eq!(hex_of("hsl(0, 100%, 50%)"), Some("#ff0000".to_string()));
    }

    #[test]
    fn hwb_red() {
        assert_eq!(hex_of("hwb(0 0% 0%)"), Some("#ff0000".to_string()));
    }

    #[test]
    fn oklch_red() {
        // oklch(0.637 0.237 25.331) is roughly #fb2c36; allow a few units per channel
        let c = resolve_colour("oklch(0.637 0.237 25.331)").expect("oklch should parse");
        let rgb = crate::math::hex::decode(&c.hex).unwrap();
        assert!((245..=255).contains(&rgb.r), "red channel {}", rgb.r);
        assert!(rgb.g < 70, "green channel {}", rgb.g);
        assert!(rgb.b < 80, "blue channel {}", rgb.b);
        assert_eq!(c.alpha, None);
    }

    #[test]
    fn named_colour() {
        assert_eq!(hex_of("green"), Some("#008000".to_string()));
        assert_eq!(hex_of("  White "), Some("#ffffff".to_string()));
    }

    #[test]
    fn special_values_return_none() {
        for v in ["transparent", "inherit", "currentColor", "initial", "unset"] {
            assert!(resolve_colour(v).is_none(), "{v}");
        }
    }

    #[test]
    fn garbage_returns_none() {
        assert!(resolve_colour("not-a-colour").is_none());
        assert!(resolve_colour("#12").is_none());
    }
}
