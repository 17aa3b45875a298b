#[macro_use]
extern crate napi_derive;

pub mod checker;
pub mod engine;
pub mod error;
pub mod math;
pub mod types;

use napi::{Error, Result, Status};
use serde_json::Value;

use error::{ColourError, FormatFault};
use types::{
    BatchResultJs, ColourPairInput, EvaluationJs, InvalidPairJs, ResolvedColour, WcagCheckInfo,
};

#[napi]
pub fn health_check() -> String {
    "contrast-checker-native ok".to_string()
}

/// Contrast ratio and WCAG checks for `foreground` (at `alpha`, default
/// 1.0) over `background`. Throws on an invalid hex colour.
#[napi]
pub fn evaluate(foreground: String, background: String, alpha: Option<f64>) -> Result<EvaluationJs> {
    let alpha = alpha.unwrap_or(checker::DEFAULT_ALPHA);
    let evaluation = checker::evaluate(&foreground, &background, alpha)?;
    Ok(EvaluationJs::from(&evaluation))
}

#[napi]
pub fn evaluate_pair(input: ColourPairInput) -> Result<EvaluationJs> {
    let evaluation = checker::evaluate_pair(&input)?;
    Ok(EvaluationJs::from(&evaluation))
}

/// Same as `evaluate`, as a plain JSON report keyed like
/// `{ ratio, ratio_label, checks: { normal_text_AA, ... } }`.
#[napi]
pub fn evaluate_json(foreground: String, background: String, alpha: Option<f64>) -> Result<Value> {
    let alpha = alpha.unwrap_or(checker::DEFAULT_ALPHA);
    let evaluation = checker::evaluate(&foreground, &background, alpha)?;
    serde_json::to_value(evaluation.report())
        .map_err(|e| Error::new(Status::GenericFailure, e.to_string()))
}

/// Evaluate many pairs on the rayon pool. Invalid pairs are reported in
/// `invalid` rather than thrown.
#[napi]
pub fn evaluate_batch(pairs: Vec<ColourPairInput>) -> BatchResultJs {
    let outcome = engine::evaluate_all(&pairs);
    BatchResultJs {
        results: outcome.results.iter().map(EvaluationJs::from).collect(),
        invalid: outcome
            .invalid
            .into_iter()
            .map(|p| InvalidPairJs {
                index: p.index as u32,
                message: p.error.to_string(),
            })
            .collect(),
    }
}

#[napi]
pub fn adjust_lightness(hex: String, lightness: f64) -> Result<String> {
    Ok(math::hls::adjust_lightness(&hex, lightness)?)
}

#[napi]
pub fn get_lightness(hex: String) -> Result<f64> {
    Ok(math::hls::get_lightness(&hex)?)
}

/// Throws on the first entry that is null, not a string, or not
/// `#RGB` / `#RRGGBB`.
#[napi]
pub fn validate_colours(colours: Vec<Value>) -> Result<()> {
    let colours = colours
        .iter()
        .map(|value| match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(ColourError::InvalidColourFormat {
                colour: Some(other.to_string()),
                fault: FormatFault::NotText,
            }),
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    math::hex::validate_all(&colours)?;
    Ok(())
}

#[napi]
pub fn composite_over(foreground: String, background: String, alpha: f64) -> Result<String> {
    Ok(math::composite::composite_over(&foreground, &background, alpha)?)
}

#[napi]
pub fn resolve_colour(value: String) -> Option<ResolvedColour> {
    math::css::resolve_colour(&value)
}

#[napi]
pub fn check_descriptors() -> Vec<WcagCheckInfo> {
    math::wcag::WcagCheck::ALL.into_iter().map(WcagCheckInfo::from).collect()
}
