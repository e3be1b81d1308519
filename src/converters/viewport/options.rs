use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::errors::Result;

/// One entry of the selector blacklist: either a literal substring or a
/// regular expression, matched against a rule's raw selector text.
///
/// In JSON form a bare string is a substring entry and
/// `{"regex": "^\\.ad-"}` is a pattern entry. Patterns are compiled when the
/// converter is built; an invalid pattern is a construction error, not a
/// mid-pass failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectorFilter {
    Substring(String),
    Pattern { regex: String },
}

impl SelectorFilter {
    pub fn substring(text: impl Into<String>) -> Self {
        SelectorFilter::Substring(text.into())
    }

    pub fn pattern(regex: impl Into<String>) -> Self {
        SelectorFilter::Pattern {
            regex: regex.into(),
        }
    }
}

/// Options for one conversion pass.
///
/// The field names mirror the JSON configuration surface of the host
/// pipeline (`viewportWidth`, `selectorBlackList`, `isSavePx`, ...); every
/// field is optional in JSON and falls back to its documented default. The
/// options are fixed for the lifetime of a pass — nothing mutates them once
/// a [`PxToViewport`](super::PxToViewport) has been built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Design-reference width the pixel values were authored against.
    pub viewport_width: f64,
    /// Design-reference height; the conversion basis when `viewport_unit`
    /// is not `vw`.
    pub viewport_height: f64,
    /// Decimal digits kept in converted values.
    pub unit_precision: u32,
    /// Target viewport unit, e.g. `vw`.
    pub viewport_unit: String,
    /// Rules whose selector matches any entry are exempt from all
    /// conversion.
    pub selector_black_list: Vec<SelectorFilter>,
    /// Property-name patterns exempt from the rem-duplication path. Forms:
    /// exact (`font-size`), contains (`*position*`), starts-with
    /// (`margin*`), ends-with (`*-width`); a leading `!` negates an entry.
    pub prop_list: Vec<String>,
    /// Inclusive threshold: pixel values at or below this are left as-is.
    pub min_pixel_value: f64,
    /// Also rewrite `@media` parameter strings.
    pub media_query: bool,
    /// Root font size used as the rem conversion basis.
    pub root_value: f64,
    /// Emit root-relative (`rem`) output.
    pub to_rem: bool,
    /// Emit viewport-relative output.
    pub to_viewport: bool,
    /// Keep the original pixel declaration alongside the converted one.
    pub is_save_px: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            unit_precision: DEFAULT_UNIT_PRECISION,
            viewport_unit: DEFAULT_VIEWPORT_UNIT.to_string(),
            selector_black_list: Vec::new(),
            prop_list: Vec::new(),
            min_pixel_value: DEFAULT_MIN_PIXEL_VALUE,
            media_query: false,
            root_value: DEFAULT_ROOT_VALUE,
            to_rem: false,
            to_viewport: true,
            is_save_px: false,
        }
    }
}

impl ConversionOptions {
    /// Loads options from a JSON document, e.g. a pipeline configuration
    /// block. Unknown keys are ignored; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_surface() {
        let opts = ConversionOptions::default();
        assert_eq!(opts.viewport_width, 750.0);
        assert_eq!(opts.viewport_height, 1334.0);
        assert_eq!(opts.unit_precision, 5);
        assert_eq!(opts.viewport_unit, "vw");
        assert!(opts.selector_black_list.is_empty());
        assert!(opts.prop_list.is_empty());
        assert_eq!(opts.min_pixel_value, 1.0);
        assert!(!opts.media_query);
        assert_eq!(opts.root_value, 16.0);
        assert!(!opts.to_rem);
        assert!(opts.to_viewport);
        assert!(!opts.is_save_px);
    }

    #[test]
    fn json_uses_camel_case_names_and_fills_defaults() {
        let opts = ConversionOptions::from_json_str(
            r#"{
                "viewportWidth": 375,
                "unitPrecision": 3,
                "selectorBlackList": [".ignore", {"regex": "^\\.ad-"}],
                "minPixelValue": 2,
                "isSavePx": true
            }"#,
        )
        .expect("options should parse");

        assert_eq!(opts.viewport_width, 375.0);
        assert_eq!(opts.unit_precision, 3);
        assert_eq!(
            opts.selector_black_list,
            vec![
                SelectorFilter::substring(".ignore"),
                SelectorFilter::pattern("^\\.ad-"),
            ]
        );
        assert_eq!(opts.min_pixel_value, 2.0);
        assert!(opts.is_save_px);
        // Untouched keys keep their defaults.
        assert_eq!(opts.viewport_unit, "vw");
        assert!(opts.to_viewport);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ConversionOptions::from_json_str("{not json").is_err());
    }
}
