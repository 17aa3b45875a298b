use serde::Serialize;

use crate::error::ColourResult;
use crate::math::composite::blend;
use crate::math::hex::{decode, encode, validate_all, Rgb};
use crate::math::hls::adjust_lightness;
use crate::math::wcag::{classify, contrast_ratio, format_ratio, luminance_of, WcagChecks};
use crate::types::ColourPairInput;

/// Initial colours of the interactive checker.
pub const DEFAULT_FOREGROUND: &str = "#008000";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Outcome of checking one foreground/background pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub foreground: Rgb,
    pub background: Rgb,
    pub alpha: f64,
    /// Foreground composited over the background, channels unrounded.
    pub blended: Rgb<f64>,
    pub ratio: f64,
    pub checks: WcagChecks,
}

/// Serialized form of an [`Evaluation`].
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub foreground: String,
    pub background: String,
    pub alpha: f64,
    pub ratio: f64,
    pub ratio_label: String,
    pub checks: WcagChecks,
}

impl Evaluation {
    pub fn foreground_hex(&self) -> String {
        encode(self.foreground)
    }

    pub fn background_hex(&self) -> String {
        encode(self.background)
    }

    pub fn blended_hex(&self) -> String {
        encode(self.blended.round())
    }

    pub fn ratio_label(&self) -> String {
        format_ratio(self.ratio)
    }

    pub fn report(&self) -> EvaluationReport {
        EvaluationReport {
            foreground: self.foreground_hex(),
            background: self.background_hex(),
            alpha: self.alpha,
            ratio: self.ratio,
            ratio_label: self.ratio_label(),
            checks: self.checks,
        }
    }
}

/// Check contrast for a single colour pair.
/// Validates both colours, composites fg over bg at `alpha`, then computes
/// the WCAG ratio of the blended fg against bg.
pub fn evaluate(fg_hex: &str, bg_hex: &str, alpha: f64) -> ColourResult<Evaluation> {
    validate_all(&[Some(fg_hex), Some(bg_hex)])?;
    let foreground = decode(fg_hex)?;
    let background = decode(bg_hex)?;

    let blended = blend(foreground, background, alpha);
    let ratio = contrast_ratio(luminance_of(blended), luminance_of(background));
    let checks = classify(ratio);

    tracing::debug!("evaluated {fg_hex} over {bg_hex} at alpha {alpha}: {ratio:.2}:1");

    Ok(Evaluation {
        foreground,
        background,
        alpha,
        blended,
        ratio,
        checks,
    })
}

/// Fill in defaults, apply lightness overrides, then [`evaluate`].
pub fn evaluate_pair(pair: &ColourPairInput) -> ColourResult<Evaluation> {
    let fg = pair.foreground.as_deref().unwrap_or(DEFAULT_FOREGROUND);
    let bg = pair.background.as_deref().unwrap_or(DEFAULT_BACKGROUND);
    let alpha = pair.alpha.unwrap_or(DEFAULT_ALPHA);

    let fg = match pair.foreground_lightness {
        Some(l) => adjust_lightness(fg, l)?,
        None => fg.to_string(),
    };
    let bg = match pair.background_lightness {
        Some(l) => adjust_lightness(bg, l)?,
        None => bg.to_string(),
    };

    evaluate(&fg, &bg, alpha)
}
