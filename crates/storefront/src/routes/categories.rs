//! Category listing with price-range filtering.
//!
//! The `minPrice`/`maxPrice` query values are interpreted in major currency
//! units. Bad bounds are silently treated as unbounded unless the request
//! carries `error=true`, in which case the validation failure is rendered on
//! the error page instead of the listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use full_stock_core::{Category, Product, price_bounds, validate_price_range};
use serde::Deserialize;
use tracing::instrument;

use super::ErrorPageTemplate;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Price-filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    #[serde(default, rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(default, rename = "maxPrice")]
    pub max_price: Option<String>,
    /// When `"true"`, surface price-validation failures instead of treating
    /// bad bounds as unbounded.
    #[serde(default)]
    pub error: Option<String>,
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub name_page: String,
    pub category: Category,
    pub products: Vec<Product>,
    /// Raw query values, echoed back into the filter form.
    pub min_price: String,
    pub max_price: String,
}

/// Display a category listing, filtered by the optional price range.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<CategoryQuery>,
) -> Result<Response> {
    let surface_errors = query.error.as_deref() == Some("true");
    let min_raw = query.min_price.unwrap_or_default();
    let max_raw = query.max_price.unwrap_or_default();

    let catalog = state.catalog().load().await?;

    let Some(category) = catalog.category_by_slug(&slug).cloned() else {
        return Ok((
            StatusCode::NOT_FOUND,
            ErrorPageTemplate {
                name_page: "Error categoría".to_string(),
                title: "Página no encontrada".to_string(),
                message: "Categoria no encontrada".to_string(),
                path: "/".to_string(),
            },
        )
            .into_response());
    };

    let validation = validate_price_range(&min_raw, &max_raw);
    if surface_errors && !validation.is_valid() {
        // Rendered with status 200: the listing URL itself is fine, only the
        // submitted filter values are not.
        return Ok(ErrorPageTemplate {
            name_page: "Error categoría".to_string(),
            title: validation.title,
            message: validation.message,
            path: format!("/category/{slug}"),
        }
        .into_response());
    }

    let bounds = price_bounds(&min_raw, &max_raw);
    let products = catalog.filter_products(category.id, &bounds);

    Ok(CategoryTemplate {
        name_page: category.name.clone(),
        category,
        products,
        min_price: min_raw,
        max_price: max_raw,
    }
    .into_response())
}
