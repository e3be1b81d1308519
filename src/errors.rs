use thiserror::Error;

/// Represents errors that can occur while configuring a stylesheet conversion.
///
/// The conversion pass itself never fails: malformed tokens and absent
/// selectors degrade to identity passthrough. Errors surface only from
/// loading options and building a converter.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Error occurred during the deserialization of a JSON options document.
    #[error("Failed to deserialize JSON options: {0}")]
    JsonDeserialization(#[from] serde_json::Error),

    /// A selector blacklist entry carried a pattern that is not a valid
    /// regular expression.
    #[error("Invalid selector pattern '{pattern}': {source}")]
    InvalidSelectorPattern {
        pattern: String,
        source: regex::Error,
    },

    /// An error indicating invalid input was provided to the converter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, ConvertError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;
