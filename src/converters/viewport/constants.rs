//! Defines default option values for the px-to-viewport conversion.

// Reference design width/height the pixel values in the stylesheet were
// authored against.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 750.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 1334.0;

// Decimal digits kept when formatting converted lengths.
pub const DEFAULT_UNIT_PRECISION: u32 = 5;
pub const DEFAULT_VIEWPORT_UNIT: &str = "vw";

// Inclusive threshold: pixel values at or below this stay untouched.
pub const DEFAULT_MIN_PIXEL_VALUE: f64 = 1.0;

// Root font size used as the basis for rem conversion.
pub const DEFAULT_ROOT_VALUE: f64 = 16.0;

pub const REM_UNIT: &str = "rem";

// Name of the at-rule whose params are rewritten when media-query
// conversion is enabled.
pub const MEDIA_AT_RULE: &str = "media";
