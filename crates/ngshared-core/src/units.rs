//! ngspice numeric literals and scale suffixes.

use crate::error::{Error, Result};

/// Scale suffixes understood by ngspice, in lookup order.
///
/// `meg` must come before `m`, otherwise `1meg` would be read as `1e-3eg`.
pub const SCALE_FACTORS: [(&str, &str, f64); 9] = [
    ("meg", "e6", 1e6),
    ("t", "e12", 1e12),
    ("g", "e9", 1e9),
    ("k", "e3", 1e3),
    ("m", "e-3", 1e-3),
    ("u", "e-6", 1e-6),
    ("n", "e-9", 1e-9),
    ("p", "e-12", 1e-12),
    ("f", "e-15", 1e-15),
];

/// Convert an ngspice number to an `f64`.
///
/// The text is lower-cased and the first scale suffix found in
/// [`SCALE_FACTORS`] is replaced by its exponent before parsing, so
/// `"1Meg"` becomes `1e6` and `"4.7k"` becomes `4.7e3`.
///
/// ```
/// use ngshared_core::to_num;
///
/// assert_eq!(to_num("1meg").unwrap(), 1e6);
/// assert_eq!(to_num("1.3").unwrap(), 1.3);
/// assert!(to_num("abc").is_err());
/// ```
pub fn to_num(text: &str) -> Result<f64> {
    let mut num_text = text.to_lowercase();

    if let Some((suffix, exponent, _)) = SCALE_FACTORS
        .iter()
        .find(|(suffix, _, _)| num_text.contains(suffix))
    {
        num_text = num_text.replace(suffix, exponent);
    }

    num_text
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}

/// Format a value with the matching ngspice scale suffix.
///
/// Mega is written as `meg`, since a bare `m` means milli to the engine.
pub fn format_value(value: f64) -> String {
    let abs_value = value.abs();

    let (scaled, suffix) = if abs_value >= 1e12 {
        (value / 1e12, "t")
    } else if abs_value >= 1e9 {
        (value / 1e9, "g")
    } else if abs_value >= 1e6 {
        (value / 1e6, "meg")
    } else if abs_value >= 1e3 {
        (value / 1e3, "k")
    } else if abs_value >= 1.0 {
        (value, "")
    } else if abs_value >= 1e-3 {
        (value * 1e3, "m")
    } else if abs_value >= 1e-6 {
        (value * 1e6, "u")
    } else if abs_value >= 1e-9 {
        (value * 1e9, "n")
    } else if abs_value >= 1e-12 {
        (value * 1e12, "p")
    } else if abs_value >= 1e-15 {
        (value * 1e15, "f")
    } else if abs_value == 0.0 {
        (0.0, "")
    } else {
        (value, "")
    };

    format!("{:.4}{}", scaled, suffix)
}
