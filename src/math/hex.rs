use crate::error::{ColourError, ColourResult, FormatFault};

/// An RGB triple. `Rgb<u8>` is a decoded colour; `Rgb<f64>` carries
/// fractional channels on the same 0-255 scale (e.g. a blend result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb<T = u8> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T> Rgb<T> {
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    pub fn map<U>(self, f: impl Fn(T) -> U) -> Rgb<U> {
        Rgb::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<Rgb<u8>> for Rgb<f64> {
    fn from(rgb: Rgb<u8>) -> Self {
        rgb.map(f64::from)
    }
}

impl Rgb<f64> {
    /// Round each channel to the nearest integer, saturating at 0 and 255.
    pub fn round(self) -> Rgb<u8> {
        self.map(|c| c.round() as u8)
    }
}

/// Check that `hex` is `#RGB` or `#RRGGBB` and return the digits after `#`.
fn digits(hex: &str) -> ColourResult<&str> {
    if hex.is_empty() {
        return Err(ColourError::missing());
    }
    let Some(raw) = hex.strip_prefix('#') else {
        return Err(ColourError::invalid(hex, FormatFault::MissingHash));
    };
    // Length counts characters, not bytes, so "#ééé" is a digit error.
    if !matches!(hex.chars().count(), 4 | 7) {
        return Err(ColourError::invalid(hex, FormatFault::Length));
    }
    if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColourError::invalid(hex, FormatFault::NonHexDigit));
    }
    Ok(raw)
}

pub fn validate(hex: &str) -> ColourResult<()> {
    digits(hex).map(|_| ())
}

/// Validate every colour in order, failing on the first bad entry.
/// `None` is always invalid.
pub fn validate_all<S: AsRef<str>>(colours: &[Option<S>]) -> ColourResult<()> {
    for colour in colours {
        match colour {
            Some(c) => validate(c.as_ref())?,
            None => return Err(ColourError::missing()),
        }
    }
    Ok(())
}

/// Decode `#RGB` / `#RRGGBB` into channels.
/// Short form doubles each digit: `#a1f` == `#aa11ff`.
pub fn decode(hex: &str) -> ColourResult<Rgb> {
    let raw = digits(hex)?;
    let expanded: String = if raw.len() == 3 {
        raw.chars().flat_map(|c| [c, c]).collect()
    } else {
        raw.to_string()
    };
    let num = u32::from_str_radix(&expanded, 16)
        .map_err(|_| ColourError::invalid(hex, FormatFault::NonHexDigit))?;
    Ok(Rgb::new(
        ((num >> 16) & 0xff) as u8,
        ((num >> 8) & 0xff) as u8,
        (num & 0xff) as u8,
    ))
}

/// Encode as lowercase 7-character hex.
pub fn encode(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_6digit_hex() {
        assert_eq!(decode("#ff0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(decode("#00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(decode("#1e293b").unwrap(), Rgb::new(30, 41, 59));
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("#1E293B").unwrap(), decode("#1e293b").unwrap());
    }

    #[test]
    fn shorthand_matches_expanded() {
        for (short, long) in [("#f00", "#ff0000"), ("#a1F", "#aa11ff"), ("#000", "#000000"), ("#9c3", "#99cc33")] {
            assert_eq!(decode(short).unwrap(), decode(long).unwrap(), "{short}");
        }
    }

    #[test]
    fn encode_zero_pads() {
        assert_eq!(encode(Rgb::new(0, 8, 255)), "#0008ff");
    }

    #[test]
    fn encode_decode_round_trip() {
        // every byte value in every channel position
        for v in 0..=255u8 {
            for rgb in [Rgb::new(v, 255 - v, v / 2), Rgb::new(v / 2, v, 255 - v), Rgb::new(255 - v, v / 2, v)] {
                assert_eq!(decode(&encode(rgb)).unwrap(), rgb);
            }
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(decode("").unwrap_err().fault(), FormatFault::Missing);
    }

    #[test]
    fn rejects_missing_hash() {
        assert_eq!(decode("ff0000").unwrap_err().fault(), FormatFault::MissingHash);
    }

    #[test]
    fn rejects_bad_length() {
        for bad in ["#12", "#1234", "#12345", "#1234567", "#ff000080"] {
            assert_eq!(decode(bad).unwrap_err().fault(), FormatFault::Length, "{bad}");
        }
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert_eq!(decode("#ZZZZZZ").unwrap_err().fault(), FormatFault::NonHexDigit);
        assert_eq!(decode("#+12345").unwrap_err().fault(), FormatFault::NonHexDigit);
        assert_eq!(decode("#ééé").unwrap_err().fault(), FormatFault::NonHexDigit);
    }

    #[test]
    fn validate_all_accepts_valid_list() {
        assert!(validate_all(&[Some("#fff"), Some("#008000")]).is_ok());
        assert!(validate_all::<&str>(&[]).is_ok());
    }

    #[test]
    fn validate_all_rejects_none() {
        let err = validate_all::<&str>(&[None]).unwrap_err();
        assert_eq!(err.fault(), FormatFault::Missing);
    }

    #[test]
    fn validate_all_rejects_short() {
        assert!(validate_all(&[Some("#12")]).is_err());
    }

    #[test]
    fn validate_all_rejects_non_hex() {
        assert!(validate_all(&[Some("#ZZZZZZ")]).is_err());
    }

    #[test]
    fn validate_all_reports_first_invalid() {
        let err = validate_all(&[Some("#fff"), Some("#12"), Some("nope")]).unwrap_err();
        assert_eq!(
            err,
            ColourError::InvalidColourFormat {
                colour: Some("#12".to_string()),
                fault: FormatFault::Length,
            }
        );
    }

    #[test]
    fn round_saturates() {
        assert_eq!(Rgb::new(127.5, -3.0, 300.0).round(), Rgb::new(128, 0, 255));
    }
}
