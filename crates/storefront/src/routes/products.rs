//! Product detail route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use full_stock_core::{Product, ProductId};
use tracing::instrument;

use super::ErrorPageTemplate;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub name_page: &'static str,
    pub product: Product,
}

/// Resolve the raw path id to its leading integer: optional sign plus
/// decimal digits, trailing garbage ignored ("12abc" resolves to 12).
///
/// Returns `None` when no digits lead, or on overflow (no product carries
/// such an id anyway).
fn leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let rest = s.strip_prefix(['+', '-']).unwrap_or(s);
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits == 0 {
        return None;
    }
    let end = s.len() - rest.len() + digits;
    s.get(..end)?.parse::<i32>().ok()
}

/// Display a product detail page.
///
/// The path parameter stays a string so that a non-numeric id renders the
/// same not-found page as an unknown one, instead of a bare 400.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let catalog = state.catalog().load().await?;

    let product = leading_int(&id)
        .map(ProductId::new)
        .and_then(|id| catalog.product_by_id(id).cloned());

    let Some(product) = product else {
        return Ok((
            StatusCode::NOT_FOUND,
            ErrorPageTemplate {
                name_page: "Error".to_string(),
                title: "Página no encontrada".to_string(),
                message: "Producto no encontrado".to_string(),
                path: "/".to_string(),
            },
        )
            .into_response());
    };

    Ok(ProductTemplate {
        name_page: "Producto",
        product,
    }
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_int_plain_and_signed() {
        assert_eq!(leading_int("12"), Some(12));
        assert_eq!(leading_int("+7"), Some(7));
        assert_eq!(leading_int("-5"), Some(-5));
        assert_eq!(leading_int(" 12"), Some(12));
    }

    #[test]
    fn test_leading_int_ignores_trailing_garbage() {
        assert_eq!(leading_int("12abc"), Some(12));
        assert_eq!(leading_int("12.9"), Some(12));
        assert_eq!(leading_int("-5x"), Some(-5));
    }

    #[test]
    fn test_leading_int_requires_leading_digits() {
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("x12"), None);
        assert_eq!(leading_int("+-3"), None);
    }

    #[test]
    fn test_leading_int_overflow_is_none() {
        assert_eq!(leading_int("99999999999999999999"), None);
    }
}
