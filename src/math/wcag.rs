use serde::Serialize;

use super::hex::Rgb;

/// Channels scaled to 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Gamma-corrected (linear light) channels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

pub fn normalize(rgb: impl Into<Rgb<f64>>) -> NormalizedRgb {
    let rgb = rgb.into();
    NormalizedRgb {
        r: rgb.r / 255.0,
        g: rgb.g / 255.0,
        b: rgb.b / 255.0,
    }
}

/// sRGB -> linear, with the WCAG 2.x threshold:
/// if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn linearize(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

pub fn gamma_correct(rgb: NormalizedRgb) -> LinearRgb {
    LinearRgb {
        r: linearize(rgb.r),
        g: linearize(rgb.g),
        b: linearize(rgb.b),
    }
}

/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: LinearRgb) -> f64 {
    0.2126 * rgb.r + 0.7152 * rgb.g + 0.0722 * rgb.b
}

/// normalize -> gamma_correct -> relative_luminance
pub fn luminance_of(rgb: impl Into<Rgb<f64>>) -> f64 {
    relative_luminance(gamma_correct(normalize(rgb)))
}

/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2.
/// Argument order does not matter.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    if lighter == 0.0 && darker == 0.0 {
        return 1.0;
    }
    (lighter + 0.05) / (darker + 0.05)
}

/// One of the five WCAG 2.x success checks reported per colour pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WcagCheck {
    NormalTextAa,
    NormalTextAaa,
    LargeTextAa,
    LargeTextAaa,
    GraphicalAa,
}

impl WcagCheck {
    pub const ALL: [WcagCheck; 5] = [
        Self::NormalTextAa,
        Self::NormalTextAaa,
        Self::LargeTextAa,
        Self::LargeTextAaa,
        Self::GraphicalAa,
    ];

    /// Key used in serialized reports.
    pub fn key(self) -> &'static str {
        match self {
            Self::NormalTextAa => "normal_text_AA",
            Self::NormalTextAaa => "normal_text_AAA",
            Self::LargeTextAa => "large_text_AA",
            Self::LargeTextAaa => "large_text_AAA",
            Self::GraphicalAa => "graphical_AA",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::NormalTextAa => "Normal Text AA",
            Self::NormalTextAaa => "Normal Text AAA",
            Self::LargeTextAa => "Large Text AA",
            Self::LargeTextAaa => "Large Text AAA",
            Self::GraphicalAa => "Graphical AA",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::NormalTextAa => "Contrast ratio ≥ 4.5:1 for normal text (WCAG AA)",
            Self::NormalTextAaa => "Contrast ratio ≥ 7:1 for normal text (WCAG AAA)",
            Self::LargeTextAa => "Contrast ratio ≥ 3:1 for large text (WCAG AA)",
            Self::LargeTextAaa => "Contrast ratio ≥ 4.5:1 for large text (WCAG AAA)",
            Self::GraphicalAa => "Contrast ratio ≥ 3:1 for graphics and UI components (WCAG AA)",
        }
    }

    pub fn min_ratio(self) -> f64 {
        match self {
            Self::LargeTextAa | Self::GraphicalAa => 3.0,
            Self::NormalTextAa | Self::LargeTextAaa => 4.5,
            Self::NormalTextAaa => 7.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WcagChecks {
    #[serde(rename = "normal_text_AA")]
    pub normal_text_aa: bool,
    #[serde(rename = "normal_text_AAA")]
    pub normal_text_aaa: bool,
    #[serde(rename = "large_text_AA")]
    pub large_text_aa: bool,
    #[serde(rename = "large_text_AAA")]
    pub large_text_aaa: bool,
    #[serde(rename = "graphical_AA")]
    pub graphical_aa: bool,
}

impl WcagChecks {
    pub fn get(&self, check: WcagCheck) -> bool {
        match check {
            WcagCheck::NormalTextAa => self.normal_text_aa,
            WcagCheck::NormalTextAaa => self.normal_text_aaa,
            WcagCheck::LargeTextAa => self.large_text_aa,
            WcagCheck::LargeTextAaa => self.large_text_aaa,
            WcagCheck::GraphicalAa => self.graphical_aa,
        }
    }

    pub fn all_pass(&self) -> bool {
        WcagCheck::ALL.iter().all(|&c| self.get(c))
    }
}

/// Determine pass/fail for all WCAG thresholds.
/// Thresholds apply in ascending order and only ever set flags.
pub fn classify(ratio: f64) -> WcagChecks {
    let mut checks = WcagChecks::default();
    if ratio >= 3.0 {
        checks.large_text_aa = true;
        checks.graphical_aa = true;
    }
    if ratio >= 4.5 {
        checks.normal_text_aa = true;
        checks.large_text_aaa = true;
    }
    if ratio >= 7.0 {
        checks.normal_text_aaa = true;
    }
    checks
}

/// Two decimals, then trailing zeros and a trailing '.' dropped.
/// 4.50 -> "4.5", 7.00 -> "7", 3.333 -> "3.33"
pub fn format_ratio(ratio: f64) -> String {
    let fixed = format!("{ratio:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
