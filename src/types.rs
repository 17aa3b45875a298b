use napi_derive::napi;
use serde::Serialize;

use crate::checker::Evaluation;
use crate::math::wcag::{WcagCheck, WcagChecks};

/// One colour pair to evaluate, as sent from JS.
/// Absent fields fall back to the checker defaults.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct ColourPairInput {
    pub foreground: Option<String>,
    pub background: Option<String>,
    /// Foreground opacity (0.0-1.0). None = fully opaque.
    pub alpha: Option<f64>,
    /// HLS lightness override for the foreground (0.0-1.0).
    pub foreground_lightness: Option<f64>,
    /// HLS lightness override for the background (0.0-1.0).
    pub background_lightness: Option<f64>,
}

/// A CSS colour reduced to hex plus alpha.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColour {
    pub hex: String,
    pub alpha: Option<f64>,
}

/// Field names on the JS side match the report keys (`normal_text_AA`, ...)
/// rather than napi's default camelCase.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WcagChecksJs {
    #[napi(js_name = "normal_text_AA")]
    #[serde(rename = "normal_text_AA")]
    pub normal_text_aa: bool,
    #[napi(js_name = "normal_text_AAA")]
    #[serde(rename = "normal_text_AAA")]
    pub normal_text_aaa: bool,
    #[napi(js_name = "large_text_AA")]
    #[serde(rename = "large_text_AA")]
    pub large_text_aa: bool,
    #[napi(js_name = "large_text_AAA")]
    #[serde(rename = "large_text_AAA")]
    pub large_text_aaa: bool,
    #[napi(js_name = "graphical_AA")]
    #[serde(rename = "graphical_AA")]
    pub graphical_aa: bool,
}

impl From<WcagChecks> for WcagChecksJs {
    fn from(c: WcagChecks) -> Self {
        Self {
            normal_text_aa: c.normal_text_aa,
            normal_text_aaa: c.normal_text_aaa,
            large_text_aa: c.large_text_aa,
            large_text_aaa: c.large_text_aaa,
            graphical_aa: c.graphical_aa,
        }
    }
}

/// Result of one evaluation, returned to JS.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct EvaluationJs {
    /// Foreground after any lightness adjustment, lowercase hex.
    pub foreground: String,
    pub background: String,
    pub alpha: f64,
    /// Foreground as actually seen over the background (rounded).
    pub blended: String,
    pub ratio: f64,
    /// `ratio` formatted for display, e.g. "4.5"
    pub ratio_label: String,
    pub checks: WcagChecksJs,
}

impl From<&Evaluation> for EvaluationJs {
    fn from(e: &Evaluation) -> Self {
        Self {
            foreground: e.foreground_hex(),
            background: e.background_hex(),
            alpha: e.alpha,
            blended: e.blended_hex(),
            ratio: e.ratio,
            ratio_label: e.ratio_label(),
            checks: e.checks.into(),
        }
    }
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct InvalidPairJs {
    /// Position of the pair in the input list.
    pub index: u32,
    pub message: String,
}

/// NAPI-compatible version of BatchOutcome for returning to JS
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResultJs {
    /// Input order, minus the invalid pairs.
    pub results: Vec<EvaluationJs>,
    pub invalid: Vec<InvalidPairJs>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct WcagCheckInfo {
    /// Report key, e.g. "normal_text_AA"
    pub key: String,
    pub title: String,
    pub description: String,
    pub min_ratio: f64,
}

impl From<WcagCheck> for WcagCheckInfo {
    fn from(check: WcagCheck) -> Self {
        Self {
            key: check.key().to_string(),
            title: check.title().to_string(),
            description: check.description().to_string(),
            min_ratio: check.min_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::wcag::classify;

    fn keys(value: serde_json::Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn js_check_names_match_report_keys() {
        let checks = classify(4.5);
        let js = keys(serde_json::to_value(WcagChecksJs::from(checks)).unwrap());
        let report = keys(serde_json::to_value(checks).unwrap());
        let mut descriptors: Vec<String> = WcagCheck::ALL.iter().map(|c| c.key().to_string()).collect();
        descriptors.sort();
        assert_eq!(js, report);
        assert_eq!(js, descriptors);
    }

    #[test]
    fn js_checks_carry_flags() {
        let js = serde_json::to_value(WcagChecksJs::from(classify(4.5))).unwrap();
        assert_eq!(js["normal_text_AA"], true);
        assert_eq!(js["normal_text_AAA"], false);
        assert_eq!(js["graphical_AA"], true);
    }
}
