//! Float-to-text conversion for the result file
//!
//! Uses the shortest representation that round-trips. Values with magnitude
//! in `[1e-4, 1e16)` are written positionally with at least one fractional
//! digit (`6.0`); everything else uses scientific notation with a signed,
//! two-digit minimum exponent (`1e+16`, `1.5e-07`). Non-finite values are
//! written as `inf`, `-inf` and `nan`.

/// Render a value the way the result file stores it
pub fn render(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_negative() { "-inf" } else { "inf" };
        return text.to_string();
    }

    // Debug formatting already picks the shortest digits and switches to
    // exponent form at the same thresholds; only the exponent needs work.
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}
