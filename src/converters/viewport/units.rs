//! Pure unit-conversion arithmetic: pixel magnitudes to viewport-relative or
//! root-relative lengths, with the fixed-point rounding policy the rest of
//! the pipeline's golden outputs depend on.

use super::constants::REM_UNIT;
use super::options::ConversionOptions;

/// Maps one matched pixel length to its output text.
///
/// `matched` is the full matched token (e.g. `"100px"`); implementations
/// return it unchanged when the value is at or below their threshold.
pub(crate) trait LengthConverter {
    fn convert(&self, matched: &str, pixels: f64) -> String;
}

/// Converts pixel lengths to a viewport-relative unit (`vw` by default).
#[derive(Debug, Clone)]
pub(crate) struct ViewportConverter {
    basis: f64,
    min_pixel_value: f64,
    precision: u32,
    unit: String,
}

impl ViewportConverter {
    /// The conversion basis is the design width when targeting `vw`, the
    /// design height for any other unit.
    pub(crate) fn from_options(options: &ConversionOptions) -> Self {
        let basis = if options.viewport_unit == "vw" {
            options.viewport_width
        } else {
            options.viewport_height
        };
        Self {
            basis,
            min_pixel_value: options.min_pixel_value,
            precision: options.unit_precision,
            unit: options.viewport_unit.clone(),
        }
    }
}

impl LengthConverter for ViewportConverter {
    fn convert(&self, matched: &str, pixels: f64) -> String {
        if pixels <= self.min_pixel_value {
            return matched.to_string();
        }
        let converted = to_fixed(pixels / self.basis * 100.0, self.precision);
        format!("{}{}", converted, self.unit)
    }
}

/// Converts pixel lengths to `rem` against a configured root font size.
#[derive(Debug, Clone)]
pub(crate) struct RootConverter {
    root_value: f64,
    min_pixel_value: f64,
    precision: u32,
}

impl RootConverter {
    pub(crate) fn from_options(options: &ConversionOptions) -> Self {
        Self {
            root_value: options.root_value,
            min_pixel_value: options.min_pixel_value,
            precision: options.unit_precision,
        }
    }
}

impl LengthConverter for RootConverter {
    fn convert(&self, matched: &str, pixels: f64) -> String {
        if pixels <= self.min_pixel_value {
            return matched.to_string();
        }
        let converted = to_fixed(pixels / self.root_value, self.precision);
        format!("{}{}", converted, REM_UNIT)
    }
}

/// Rounds `value` to `precision` decimal digits by truncating one extra
/// digit first, then rounding half-up at the last kept digit.
///
/// Not the same as rounding `value` directly: the intermediate truncation
/// can change the outcome at exact half-way decimal boundaries, and
/// downstream golden outputs were produced with this exact procedure. Must
/// not be replaced with a plain `round`-to-precision call.
fn to_fixed(value: f64, precision: u32) -> f64 {
    let multiplier = 10f64.powi(precision as i32 + 1);
    let whole_number = (value * multiplier).floor();
    (whole_number / 10.0).round() * 10.0 / multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(basis: f64, min: f64, precision: u32, unit: &str) -> ViewportConverter {
        ViewportConverter::from_options(&ConversionOptions {
            viewport_width: basis,
            min_pixel_value: min,
            unit_precision: precision,
            viewport_unit: unit.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn viewport_conversion_with_defaults() {
        let converter = viewport(750.0, 1.0, 5, "vw");
        assert_eq!(converter.convert("100px", 100.0), "13.33333vw");
        assert_eq!(converter.convert("75px", 75.0), "10vw");
    }

    #[test]
    fn threshold_is_inclusive() {
        let converter = viewport(750.0, 1.0, 5, "vw");
        assert_eq!(converter.convert("1px", 1.0), "1px");
        assert_eq!(converter.convert("0.5px", 0.5), "0.5px");
        assert_ne!(converter.convert("1.5px", 1.5), "1.5px");
    }

    #[test]
    fn non_vw_unit_uses_the_height_basis() {
        let converter = ViewportConverter::from_options(&ConversionOptions {
            viewport_width: 750.0,
            viewport_height: 1000.0,
            viewport_unit: "vh".to_string(),
            ..Default::default()
        });
        assert_eq!(converter.convert("100px", 100.0), "10vh");
    }

    #[test]
    fn rem_conversion_drops_trailing_zeros() {
        let converter = RootConverter::from_options(&ConversionOptions {
            root_value: 16.0,
            ..Default::default()
        });
        assert_eq!(converter.convert("32px", 32.0), "2rem");
        assert_eq!(converter.convert("8px", 8.0), "0.5rem");
        assert_eq!(converter.convert("10px", 10.0), "0.625rem");
    }

    #[test]
    fn rounding_truncates_an_extra_digit_before_the_final_round() {
        // Keeps precision+1 digits (truncated), then rounds half-up on the
        // last kept digit: 0.1465 -> 0.146 -> 0.15.
        assert_eq!(to_fixed(0.1465, 2), 0.15);
        // Digits past the extra one are discarded before rounding:
        // 0.14999 -> 0.1499 -> 0.15.
        assert_eq!(to_fixed(0.14999, 3), 0.15);
        assert_eq!(to_fixed(13.333333333333334, 5), 13.33333);
        assert_eq!(to_fixed(2.0, 5), 2.0);
    }

    #[test]
    fn precision_zero_keeps_whole_numbers() {
        assert_eq!(to_fixed(13.333333333333334, 0), 13.0);
        assert_eq!(to_fixed(13.96, 0), 14.0);
    }
}
