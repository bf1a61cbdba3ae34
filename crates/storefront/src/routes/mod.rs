//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /category/{slug}        - Category listing with price filter
//!                                (query: minPrice, maxPrice, error)
//! GET  /product/{id}           - Product detail
//!
//! # Static pages
//! GET  /cart                   - Cart page
//! GET  /checkout               - Checkout page
//! GET  /order-confirmation     - Order confirmation page
//! GET  /about                  - About page
//! GET  /terms                  - Terms of service
//! GET  /privacy                - Privacy policy
//! ```

pub mod categories;
pub mod home;
pub mod pages;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, routing::get};

use crate::filters;
use crate::state::AppState;

/// Fixed page titles by request path.
const PAGE_TITLES: &[(&str, &str)] = &[
    ("/", "Inicio"),
    ("/cart", "Carrito"),
    ("/checkout", "Checkout"),
    ("/order-confirmation", "Confirmación de compra"),
    ("/about", "Quienes somos"),
    ("/terms", "Términos y Condiciones"),
    ("/privacy", "Política de Privacidad"),
];

/// Default page title for paths without a fixed entry.
const DEFAULT_TITLE: &str = "Full Stock";

/// Look up the page title for a request path.
#[must_use]
pub fn page_title(path: &str) -> &'static str {
    PAGE_TITLES
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map_or(DEFAULT_TITLE, |(_, title)| *title)
}

/// Error page template shared by the not-found and validation-error flows.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct ErrorPageTemplate {
    pub name_page: String,
    pub title: String,
    pub message: String,
    /// Where the "go back" link points.
    pub path: String,
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/category/{slug}", get(categories::show))
        .route("/product/{id}", get(products::show))
        .merge(pages::router())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_known_paths() {
        assert_eq!(page_title("/"), "Inicio");
        assert_eq!(page_title("/cart"), "Carrito");
        assert_eq!(page_title("/order-confirmation"), "Confirmación de compra");
        assert_eq!(page_title("/privacy"), "Política de Privacidad");
    }

    #[test]
    fn test_page_title_falls_back_to_store_name() {
        assert_eq!(page_title("/category/mugs"), "Full Stock");
        assert_eq!(page_title("/nope"), "Full Stock");
    }
}
