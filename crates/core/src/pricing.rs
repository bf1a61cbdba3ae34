//! Price-query parsing, validation, and range bounds.
//!
//! Query bounds arrive as raw strings and are interpreted in major currency
//! units, while product prices are stored in minor units (cents). Range
//! comparison divides the stored price by 100 instead of scaling the bounds;
//! that asymmetry is the storefront's long-standing filter behavior and is
//! kept as-is.

/// Lenient full-string numeric coercion.
///
/// Blank input coerces to zero. Signed `Infinity` spellings coerce to the
/// infinities. Unsigned hex/octal/binary literals (`0x10`, `0o17`, `0b101`)
/// coerce through their radix. Anything else must be a plain decimal literal
/// (optional sign, fraction, exponent); otherwise the result is NaN.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(rest) = prefixes.iter().find_map(|p| trimmed.strip_prefix(p)) {
            #[allow(clippy::cast_precision_loss)]
            return u64::from_str_radix(rest, radix).map_or(f64::NAN, |value| value as f64);
        }
    }
    // Restrict to decimal-literal characters so spellings like "inf" or
    // "nan", which `f64::from_str` would accept, stay non-numeric here.
    if trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Value of the longest leading decimal literal, or NaN when there is none.
///
/// Leading whitespace is skipped; trailing garbage is ignored ("12.5kg"
/// parses as 12.5). Signed `Infinity` spellings are recognized as prefixes.
fn leading_number(raw: &str) -> f64 {
    let s = raw.trim_start();
    for (token, value) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
    ] {
        if s.starts_with(token) {
            return value;
        }
    }

    // Longest run of decimal-literal characters, then shrink until it parses.
    let mut end = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E') {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    let mut prefix = s.get(..end).unwrap_or_default();
    while !prefix.is_empty() {
        if let Ok(value) = prefix.parse::<f64>() {
            return value;
        }
        prefix = prefix.get(..prefix.len() - 1).unwrap_or_default();
    }
    f64::NAN
}

/// Parse a raw price query value into minor units (cents).
///
/// Returns `None` for blank input, the exact literal token `"Infinity"`, or
/// anything that does not coerce to a number. Callers mostly use the result
/// as a presence signal; range comparisons happen in major units via
/// [`price_bounds`].
#[must_use]
pub fn parse_price_to_cents(raw: &str) -> Option<f64> {
    if raw.is_empty() || raw == "Infinity" || raw.trim().is_empty() {
        return None;
    }
    let value = coerce_number(raw);
    if value.is_nan() {
        return None;
    }
    Some(value * 100.0)
}

/// Inclusive price range in major currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Unbounded on both sides.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// Whether a minor-unit price falls inside the range.
    #[must_use]
    pub fn contains_cents(&self, cents: i64) -> bool {
        #[allow(clippy::cast_precision_loss)] // catalog prices are far below 2^53
        let major = cents as f64 / 100.0;
        major >= self.min && major <= self.max
    }
}

/// Resolve raw query values into filter bounds.
///
/// A side falls back to the matching infinity when it fails to parse or when
/// it parses to zero cents; a zero bound has always meant "unset" in this
/// storefront.
#[must_use]
pub fn price_bounds(min_raw: &str, max_raw: &str) -> PriceBounds {
    let min = match parse_price_to_cents(min_raw) {
        Some(cents) if cents != 0.0 => coerce_number(min_raw),
        _ => f64::NEG_INFINITY,
    };
    let max = match parse_price_to_cents(max_raw) {
        Some(cents) if cents != 0.0 => coerce_number(max_raw),
        _ => f64::INFINITY,
    };
    PriceBounds { min, max }
}

/// Outcome of validating a raw min/max price pair.
///
/// Empty `title` and `message` mean the range is acceptable. When several
/// checks fail, the last failing check wins; exactly one error surfaces at a
/// time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceValidation {
    pub title: String,
    pub message: String,
}

impl PriceValidation {
    /// Whether the validated range is acceptable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.title.is_empty()
    }
}

/// A single bound is invalid when blank, non-numeric, or negative.
fn bound_is_invalid(raw: &str) -> bool {
    raw.is_empty()
        || coerce_number(raw).is_nan()
        || raw.trim().is_empty()
        || leading_number(raw) < 0.0
}

/// Validate a raw min/max price pair.
///
/// Checks run in a fixed order with last-write-wins semantics:
/// 1. minimum invalid
/// 2. maximum invalid (overwrites a minimum error)
/// 3. minimum exceeds maximum (overwrites either)
#[must_use]
pub fn validate_price_range(min_raw: &str, max_raw: &str) -> PriceValidation {
    let mut validation = PriceValidation::default();

    if bound_is_invalid(min_raw) {
        validation.title = "Precio minímo Incorrecto".to_string();
        validation.message = format!(
            "El precio minímo debe ser un valor entero positivo, se ingreso \"{min_raw}\""
        );
    }

    if bound_is_invalid(max_raw) {
        validation.title = "Precio Máximo Incorrecto".to_string();
        validation.message = format!(
            "El precio Máximo debe ser un valor entero positivo, se ingreso \"{max_raw}\""
        );
    }

    if leading_number(min_raw) > leading_number(max_raw) {
        validation.title = "Filtros incorrectos".to_string();
        validation.message = "El precio Minímo no debe ser mayor al precio máximo".to_string();
    }

    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_is_none() {
        for raw in ["", " ", "\t", "   "] {
            assert_eq!(parse_price_to_cents(raw), None, "raw: {raw:?}");
        }
    }

    #[test]
    fn test_parse_non_numeric_is_none() {
        for raw in ["abc", "10abc", "$5", "1,5", "--2", "inf", "nan"] {
            assert_eq!(parse_price_to_cents(raw), None, "raw: {raw:?}");
        }
    }

    #[test]
    fn test_parse_infinity_token_is_none() {
        assert_eq!(parse_price_to_cents("Infinity"), None);
    }

    #[test]
    fn test_parse_radix_literals() {
        assert_eq!(parse_price_to_cents("0x10"), Some(1600.0));
        assert_eq!(parse_price_to_cents("0o17"), Some(1500.0));
        assert_eq!(parse_price_to_cents("0b101"), Some(500.0));
        // Signed or malformed radix forms are not numbers.
        assert_eq!(parse_price_to_cents("-0x10"), None);
        assert_eq!(parse_price_to_cents("0x"), None);
        assert_eq!(parse_price_to_cents("0xZZ"), None);
    }

    #[test]
    fn test_parse_numeric_scales_to_cents() {
        assert_eq!(parse_price_to_cents("10"), Some(1000.0));
        assert_eq!(parse_price_to_cents("0.5"), Some(50.0));
        assert_eq!(parse_price_to_cents(" 7 "), Some(700.0));
        assert_eq!(parse_price_to_cents("1e2"), Some(10_000.0));
    }

    #[test]
    fn test_leading_number_prefix_semantics() {
        assert!((leading_number("12.5kg") - 12.5).abs() < f64::EPSILON);
        assert!((leading_number("10abc") - 10.0).abs() < f64::EPSILON);
        assert!((leading_number("  -3x") - -3.0).abs() < f64::EPSILON);
        assert!((leading_number("1e") - 1.0).abs() < f64::EPSILON);
        assert!(leading_number("abc").is_nan());
        assert!(leading_number("").is_nan());
        assert!(leading_number("Infinity").is_infinite());
    }

    #[test]
    fn test_bounds_default_to_infinities() {
        let bounds = price_bounds("", "");
        assert_eq!(bounds, PriceBounds::unbounded());
        assert!(bounds.contains_cents(0));
        assert!(bounds.contains_cents(1_000_000));
    }

    #[test]
    fn test_bounds_use_major_units() {
        let bounds = price_bounds("6", "20");
        assert!(!bounds.contains_cents(500));
        assert!(bounds.contains_cents(600));
        assert!(bounds.contains_cents(2000));
        assert!(!bounds.contains_cents(2001));
    }

    #[test]
    fn test_bounds_unparseable_side_is_unbounded() {
        let bounds = price_bounds("abc", "20");
        assert!(bounds.min.is_infinite() && bounds.min < 0.0);
        let bounds = price_bounds("5", "Infinity");
        assert!(bounds.max.is_infinite() && bounds.max > 0.0);
    }

    #[test]
    fn test_bounds_radix_literal_is_major_units() {
        let bounds = price_bounds("1", "0x10");
        assert!(bounds.contains_cents(1600));
        assert!(!bounds.contains_cents(1601));
    }

    #[test]
    fn test_bounds_zero_means_unset() {
        // "0" parses to zero cents, which counts as an unset bound.
        let bounds = price_bounds("1", "0");
        assert!(bounds.max.is_infinite() && bounds.max > 0.0);
        assert!(bounds.contains_cents(500));
    }

    #[test]
    fn test_validate_blank_min_reports_minimum() {
        let validation = validate_price_range("", "10");
        assert_eq!(validation.title, "Precio minímo Incorrecto");
        assert!(validation.message.contains("\"\""));
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_validate_blank_max_reports_maximum() {
        let validation = validate_price_range("10", "");
        assert_eq!(validation.title, "Precio Máximo Incorrecto");
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_validate_negative_bound() {
        let validation = validate_price_range("-5", "10");
        assert_eq!(validation.title, "Precio minímo Incorrecto");
        assert!(validation.message.contains("\"-5\""));
    }

    #[test]
    fn test_validate_both_invalid_reports_maximum_only() {
        // Last write wins: the max check overwrites the min error.
        let validation = validate_price_range("abc", "xyz");
        assert_eq!(validation.title, "Precio Máximo Incorrecto");
        assert!(validation.message.contains("\"xyz\""));
    }

    #[test]
    fn test_validate_min_exceeds_max() {
        let validation = validate_price_range("20", "10");
        assert_eq!(validation.title, "Filtros incorrectos");
        assert_eq!(
            validation.message,
            "El precio Minímo no debe ser mayor al precio máximo"
        );
    }

    #[test]
    fn test_validate_range_check_overwrites_field_errors() {
        // Min fails the numeric check, but its leading prefix still exceeds
        // max, so the range error is the one that surfaces.
        let validation = validate_price_range("20abc", "10");
        assert_eq!(validation.title, "Filtros incorrectos");
    }

    #[test]
    fn test_validate_valid_range() {
        let validation = validate_price_range("5", "10");
        assert!(validation.is_valid());
        assert!(validation.title.is_empty());
        assert!(validation.message.is_empty());
    }
}
