//! Product catalog model and loader.
//!
//! The catalog is a JSON array of product records. It is loaded once per run
//! and only ever lent out by shared reference.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};

/// A single product record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,

    /// Product keyword this entry belongs to (e.g. "laptop").
    pub category: String,

    /// Audience tags this product is recommended for.
    pub best_for: Vec<String>,

    /// Feature bullet points, in display order.
    pub features: Vec<String>,

    /// Pre-formatted price string.
    pub price: String,

    /// Outbound affiliate link.
    pub link: String,
}

impl Product {
    /// Check whether this product is recommended for the given audience.
    #[must_use]
    pub fn is_for(&self, audience: &str) -> bool {
        self.best_for.iter().any(|a| a == audience)
    }
}

/// Ordered, read-only collection of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from already parsed products.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::catalog(path, "catalog file not found"));
        }

        let content = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&content)
            .map_err(|e| CoreError::catalog(path, e.to_string()))?;

        debug!(path = %path.display(), count = products.len(), "loaded catalog");
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self { products })
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
