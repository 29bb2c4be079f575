use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Category filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Number of deals the storefront home page features.
pub const FEATURED_DEALS: usize = 6;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}

/// Discounted products split the way the offers page presents them.
#[derive(Debug, Clone, Serialize)]
pub struct Offers<'a> {
    /// Discount of 25% or more.
    pub flash_deals: Vec<&'a Product>,
    pub regular_offers: Vec<&'a Product>,
}

/// The read-only set of purchasable products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load and validate the catalog from a JSON array on disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` or `CatalogError::Validation`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if any record breaks a catalog rule.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        validate_products(&products)?;
        Ok(Self { products })
    }

    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching `query` and `category`, in catalog order.
    ///
    /// The query is matched case-insensitively against name, description and
    /// tags; a blank query matches everything. A category of `None` or
    /// [`ALL_CATEGORIES`] disables the category filter.
    #[must_use]
    pub fn search(&self, query: Option<&str>, category: Option<&str>) -> Vec<&Product> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        let category = category.filter(|c| *c != ALL_CATEGORIES);

        self.products
            .iter()
            .filter(|p| needle.as_deref().is_none_or(|n| p.matches_lowercase(n)))
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect()
    }

    /// `"All"` followed by each distinct category in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        std::iter::once(ALL_CATEGORIES)
            .chain(
                self.products
                    .iter()
                    .map(|p| p.category.as_str())
                    .filter(|c| seen.insert(*c)),
            )
            .collect()
    }

    pub fn discounted(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_discounted())
    }

    /// The first `limit` discounted products, as featured on the home page.
    #[must_use]
    pub fn featured_deals(&self, limit: usize) -> Vec<&Product> {
        self.discounted().take(limit).collect()
    }

    #[must_use]
    pub fn offers(&self) -> Offers<'_> {
        let (flash_deals, regular_offers): (Vec<_>, Vec<_>) =
            self.discounted().partition(|p| p.is_flash_deal());
        Offers {
            flash_deals,
            regular_offers,
        }
    }
}

fn validate_products(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for product in products {
        if !seen_ids.insert(product.id) {
            return Err(CatalogError::Validation(format!(
                "duplicate product id {}",
                product.id
            )));
        }

        if product.name.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "product {} has an empty name",
                product.id
            )));
        }

        if product.price == 0 {
            return Err(CatalogError::Validation(format!(
                "product '{}' has a non-positive price",
                product.name
            )));
        }

        if let Some(original) = product.original_price.filter(|o| *o < product.price) {
            tracing::warn!(
                id = product.id,
                original,
                price = product.price,
                "original price below price"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
