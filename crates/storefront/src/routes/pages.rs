//! Static page route handlers.
//!
//! Cart, checkout-flow, and informational pages carry no catalog data; they
//! are plain template renders with the right page title.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, response::IntoResponse, routing::get};
use tracing::instrument;

use super::page_title;
use crate::filters;
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub name_page: &'static str,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub name_page: &'static str,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "order_confirmation.html")]
pub struct OrderConfirmationTemplate {
    pub name_page: &'static str,
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub name_page: &'static str,
}

/// Terms of service page template.
#[derive(Template, WebTemplate)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    pub name_page: &'static str,
}

/// Privacy policy page template.
#[derive(Template, WebTemplate)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub name_page: &'static str,
}

/// Display the cart page.
#[instrument]
pub async fn cart() -> impl IntoResponse {
    CartTemplate {
        name_page: page_title("/cart"),
    }
}

/// Display the checkout page.
#[instrument]
pub async fn checkout() -> impl IntoResponse {
    CheckoutTemplate {
        name_page: page_title("/checkout"),
    }
}

/// Display the order confirmation page.
#[instrument]
pub async fn order_confirmation() -> impl IntoResponse {
    OrderConfirmationTemplate {
        name_page: page_title("/order-confirmation"),
    }
}

/// Display the about page.
#[instrument]
pub async fn about() -> impl IntoResponse {
    AboutTemplate {
        name_page: page_title("/about"),
    }
}

/// Display the Terms of Service page.
#[instrument]
pub async fn terms() -> impl IntoResponse {
    TermsTemplate {
        name_page: page_title("/terms"),
    }
}

/// Display the Privacy Policy page.
#[instrument]
pub async fn privacy() -> impl IntoResponse {
    PrivacyTemplate {
        name_page: page_title("/privacy"),
    }
}

/// Create the static pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart))
        .route("/checkout", get(checkout))
        .route("/order-confirmation", get(order_confirmation))
        .route("/about", get(about))
        .route("/terms", get(terms))
        .route("/privacy", get(privacy))
}
