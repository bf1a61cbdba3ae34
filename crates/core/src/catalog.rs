//! The catalog document: categories, products, and lookups.
//!
//! The storefront reads this document from a single JSON file; the shapes
//! here mirror that file exactly (camelCase keys). The document is read-only
//! at runtime, so all lookups borrow and filtering returns owned clones for
//! rendering.

use serde::{Deserialize, Serialize};

use crate::id::{CategoryId, ProductId};
use crate::pricing::PriceBounds;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    /// URL-safe lookup key, unique under case-insensitive comparison.
    pub slug: String,
    pub name: String,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Owning category. A dangling reference is not an error; the product
    /// just never shows up in any category listing.
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Price in minor currency units (cents), non-negative.
    pub price: i64,
}

/// The full catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Catalog {
    /// Find a category by slug, case-insensitively.
    ///
    /// Slugs are assumed unique; with duplicates the first match wins.
    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        let slug = slug.to_lowercase();
        self.categories
            .iter()
            .find(|category| category.slug.to_lowercase() == slug)
    }

    /// Find a product by ID.
    #[must_use]
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products of a category whose price falls within `bounds`.
    ///
    /// The filter is stable: input order is preserved and nothing is
    /// re-sorted.
    #[must_use]
    pub fn filter_products(&self, category_id: CategoryId, bounds: &PriceBounds) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| {
                product.category_id == category_id && bounds.contains_cents(product.price)
            })
            .cloned()
            .collect()
    }
}
