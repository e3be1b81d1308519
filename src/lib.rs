pub mod converters;
pub mod errors;
pub mod models;

pub use converters::viewport::{convert_stylesheet, ConversionOptions, PxToViewport, SelectorFilter};
pub use errors::{ConvertError, Result};
pub use models::declaration::Declaration;
pub use models::stylesheet::{AtRule, Node, Rule, Stylesheet};
