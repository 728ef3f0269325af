//! Display labels for output curves.
//!
//! Each curve is tagged with the ratio of one named case parameter to a
//! baseline value, e.g. `R`, `2R`, `1.5R` for fiber radii at 1×, 2×, and
//! 1.5× the baseline. The label is cosmetic metadata for the rendering
//! collaborator; nothing numeric downstream reads it.

/// Relative tolerance for snapping a ratio to an integer multiple.
const SNAP_TOL: f64 = 0.01;

/// Derives a curve label from a parameter value and its baseline.
///
/// The ratio `value / reference` is rendered as the bare parameter name
/// when within 1% of one, as `<k><parameter>` when within 1% of the
/// integer `k`, and otherwise with a two-significant-digit decimal prefix.
pub fn derive(parameter: &str, value: f64, reference: f64) -> String {
    let fraction = value / reference;
    if (fraction - 1.0).abs() < SNAP_TOL {
        parameter.to_owned()
    } else if (fraction - fraction.trunc()).abs() < SNAP_TOL {
        format!("{}{parameter}", fraction.trunc() as i64)
    } else {
        format!("{}{parameter}", sig2(fraction))
    }
}

/// Formats a value with two significant digits, trimming trailing zeros.
fn sig2(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let exponent = value.abs().log10().floor() as i32;
    if (-4..2).contains(&exponent) {
        let decimals = usize::try_from(1 - exponent).unwrap_or(0);
        let rendered = format!("{value:.decimals$}");
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    } else {
        format!("{value:.1e}")
    }
}
