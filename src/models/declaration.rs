use serde::{Deserialize, Serialize};

/// A single property declaration inside a rule or at-rule body.
///
/// The tree is produced and re-serialized by the host pipeline's CSS
/// toolkit; the converter only reads and rewrites `value` and may ask for a
/// copy of the declaration with an overridden value via
/// [`clone_with_value`](Declaration::clone_with_value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    /// The property name, e.g. `width` or `font-size`.
    pub property: String,
    /// The raw value text. Treated as an opaque string and scanned
    /// token-by-token; never parsed as CSS value syntax.
    pub value: String,
    /// Whether the declaration carries `!important`.
    #[serde(default)]
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Copies the declaration, overriding its value. The property name and
    /// the `!important` flag are preserved.
    pub fn clone_with_value(&self, value: impl Into<String>) -> Self {
        Self {
            property: self.property.clone(),
            value: value.into(),
            important: self.important,
        }
    }
}
