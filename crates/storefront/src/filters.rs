//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a minor-unit price (cents) for display, e.g. `$12.50`.
///
/// Usage in templates: `{{ product.price|price }}`
#[askama::filter_fn]
pub fn price(cents: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = cents.to_string();
    Ok(raw.parse::<i64>().map_or(raw, |cents| {
        #[allow(clippy::cast_precision_loss)]
        let major = cents as f64 / 100.0;
        format!("${major:.2}")
    }))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
