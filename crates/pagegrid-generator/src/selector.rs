//! Product selection for a page.
//!
//! Picks catalog entries whose category and audience match a page, falling
//! back to the head of the catalog so every page has something to show.

use pagegrid_core::{Catalog, Product};

/// Maximum number of product cards on a page.
pub const MAX_PRODUCTS_PER_PAGE: usize = 3;

/// Products chosen for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Selected products, in catalog order.
    pub products: Vec<&'a Product>,

    /// True when nothing matched and the catalog head was used instead.
    pub fallback: bool,
}

/// Select up to three products matching `category` and `audience`.
///
/// Matching is exact on category and by membership on audience. Without a
/// match the first three catalog entries are returned.
#[must_use]
pub fn select<'a>(catalog: &'a Catalog, category: &str, audience: &str) -> Selection<'a> {
    let matched: Vec<_> = catalog
        .iter()
        .filter(|p| p.category == category && p.is_for(audience))
        .take(MAX_PRODUCTS_PER_PAGE)
        .collect();

    if matched.is_empty() {
        Selection {
            products: catalog.iter().take(MAX_PRODUCTS_PER_PAGE).collect(),
            fallback: true,
        }
    } else {
        Selection {
            products: matched,
            fallback: false,
        }
    }
}

/// Shorthand for [`select`] returning only the products.
#[must_use]
pub fn select_products<'a>(catalog: &'a Catalog, category: &str, audience: &str) -> Vec<&'a Product> {
    select(catalog, category, audience).products
}
