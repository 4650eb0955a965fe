//! Read operations over the catalog.
//!
//! [`QueryService`] combines the immutable [`Catalog`] with the
//! [`ViewTracker`] to build [`ProductDetail`] view models.
//!
//! # Side Effects
//!
//! [`QueryService::get_product_detail`] is not a pure read: every call
//! counts as one view of the product. Use [`QueryService::product_detail`]
//! for a view-neutral lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::catalog::{Catalog, Product, Sku};
use crate::error::StorefrontError;
use crate::views::ViewTracker;

/// A product with its stock count, detail page URL and view count.
///
/// Never stored; rebuilt on every query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    /// The product.
    pub product: Product,
    /// Units in stock.
    pub inventory: u32,
    /// Path of the HTML detail page.
    pub url: String,
    /// Detail views so far.
    pub views: u64,
}

/// Returns the detail page path for a SKU.
///
/// ```rust
/// use storefront::catalog::Sku;
/// use storefront::query::detail_url;
///
/// assert_eq!(detail_url(&Sku::new("a b")), "/products/a%20b");
/// ```
#[must_use]
pub fn detail_url(sku: &Sku) -> String {
    format!("/products/{}", urlencoding::encode(sku.as_ref()))
}

/// Queries over the catalog and view counts.
///
/// Cloning is cheap; clones share the same catalog and tracker.
#[derive(Clone, Debug)]
pub struct QueryService {
    catalog: Arc<Catalog>,
    views: Arc<ViewTracker>,
}

impl QueryService {
    /// Creates a service over the given catalog and tracker.
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>, views: Arc<ViewTracker>) -> Self {
        Self { catalog, views }
    }

    /// Returns the underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the underlying view tracker.
    #[must_use]
    pub fn views(&self) -> &ViewTracker {
        &self.views
    }

    /// Records a view of `sku` and returns its detail.
    ///
    /// The returned `views` includes this call.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] if the SKU is not in the catalog.
    /// No view is recorded in that case.
    pub fn get_product_detail(&self, sku: &str) -> Result<ProductDetail, StorefrontError> {
        let product = self
            .catalog
            .product(sku)
            .ok_or_else(|| StorefrontError::not_found(sku))?;
        self.views.increment(&product.sku);
        self.product_detail(sku)
    }

    /// Returns the detail of `sku` without recording a view.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] if the SKU is not in the catalog.
    pub fn product_detail(&self, sku: &str) -> Result<ProductDetail, StorefrontError> {
        let product = self
            .catalog
            .product(sku)
            .ok_or_else(|| StorefrontError::not_found(sku))?;
        Ok(self.build_detail(product, self.views.views(sku)))
    }

    /// Returns up to `limit` in-stock products, most viewed first.
    ///
    /// Products with zero stock are skipped. No views are recorded. Products
    /// with equal view counts keep catalog order, which callers should not
    /// rely on.
    #[must_use]
    pub fn get_popular_products(&self, limit: usize) -> Vec<ProductDetail> {
        if limit == 0 {
            return Vec::new();
        }

        let counts = self.views.snapshot();
        let mut details: Vec<ProductDetail> = self
            .catalog
            .products()
            .filter(|product| self.catalog.inventory_of(product.sku.as_ref()).unwrap_or(0) > 0)
            .map(|product| {
                let views = counts.get(&product.sku).copied().unwrap_or(0);
                self.build_detail(product, views)
            })
            .collect();

        details.sort_by(|a, b| b.views.cmp(&a.views));
        details.truncate(limit);
        details
    }

    /// Returns every stock count, ordered by SKU.
    #[must_use]
    pub fn inventory(&self) -> BTreeMap<Sku, u32> {
        self.catalog
            .inventory()
            .iter()
            .map(|(sku, stock)| (sku.clone(), *stock))
            .collect()
    }

    /// Returns the stock count of `sku`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::NotFound`] if the SKU is not in the catalog.
    pub fn inventory_for(&self, sku: &str) -> Result<u32, StorefrontError> {
        self.catalog
            .inventory_of(sku)
            .ok_or_else(|| StorefrontError::not_found(sku))
    }

    fn build_detail(&self, product: &Product, views: u64) -> ProductDetail {
        ProductDetail {
            product: product.clone(),
            inventory: self.catalog.inventory_of(product.sku.as_ref()).unwrap_or(0),
            url: detail_url(&product.sku),
            views,
        }
    }
}
