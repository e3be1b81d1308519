//! Tokenizes declaration values and at-rule params, rewriting bare pixel
//! lengths while passing quoted strings and `url(...)` payloads through
//! untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::units::LengthConverter;

// One combined pattern: quoted strings and url(...) spans match without a
// capture group so they survive as-is even when they contain digit+px text;
// only the final branch captures a convertible magnitude. Case-insensitive
// for the `px` suffix (and `url`). Single-level matching only, no nesting.
static PX_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)"[^"]+"|'[^']+'|url\([^)]+\)|(\d*\.?\d+)px"#).unwrap()
});

/// Rescans `value` from the start and maps every convertible pixel token
/// through `converter`. Everything else, including a numeral that fails to
/// parse, is reproduced verbatim.
pub(crate) fn rewrite_value(value: &str, converter: &impl LengthConverter) -> String {
    PX_TOKEN_RE
        .replace_all(value, |caps: &Captures| match caps.get(1) {
            Some(magnitude) => match magnitude.as_str().parse::<f64>() {
                Ok(pixels) => converter.convert(&caps[0], pixels),
                Err(_) => caps[0].to_string(),
            },
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// True when `value` contains at least one bare pixel length outside quoted
/// strings and `url(...)` spans.
pub(crate) fn has_px_length(value: &str) -> bool {
    PX_TOKEN_RE
        .captures_iter(value)
        .any(|caps| caps.get(1).is_some())
}
