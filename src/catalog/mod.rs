//! In-memory product catalog.
//!
//! The catalog holds the authoritative product and inventory data for the
//! lifetime of the process. It is populated once at startup, either from a
//! [`CatalogGenerator`] or from explicit fixture entries, and is never
//! mutated afterwards.
//!
//! # Overview
//!
//! - [`Sku`]: opaque product identifier
//! - [`Product`]: title, description and price of a product
//! - [`Money`] / [`Currency`]: fixed-point prices
//! - [`Catalog`]: products and stock counts keyed by SKU
//! - [`CatalogGenerator`] / [`RandomCatalogGenerator`]: synthetic data
//!
//! # Example
//!
//! ```rust
//! use storefront::catalog::{Catalog, CatalogEntry, Currency, Money, Product, Sku};
//!
//! let sku = Sku::new("sku-1");
//! let catalog = Catalog::from_entries(vec![CatalogEntry {
//!     product: Product {
//!         sku: sku.clone(),
//!         title: "Ada Lovelace".to_string(),
//!         description: "A fine product.".to_string(),
//!         price: Money::from_minor(12_500, Currency::Dkk),
//!     },
//!     stock: 3,
//! }])
//! .unwrap();
//!
//! assert_eq!(catalog.inventory_of(sku.as_ref()), Some(3));
//! ```

mod generator;
mod money;
mod words;

pub use generator::{CatalogGenerator, PriceRule, RandomCatalogGenerator};
pub use money::{round_up_to_multiple, Currency, Money};

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use crate::error::ConfigError;

/// A stock-keeping unit, the unique identifier of a product.
///
/// Generated SKUs are the textual form of a random UUID, but any string
/// is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Wraps an existing identifier.
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    /// Builds a SKU from sixteen random bytes, formatted as a UUID v4.
    #[must_use]
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Sku {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product offered by the storefront.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The product identifier.
    pub sku: Sku,
    /// Human-readable title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Unit price.
    pub price: Money,
}

/// A product together with its initial stock count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The product.
    pub product: Product,
    /// Units in stock.
    pub stock: u32,
}

/// Products and inventory keyed by SKU.
///
/// Both maps are built from the same entry list, so every inventory key
/// has a product and vice versa. Iteration follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    order: Vec<Sku>,
    products: HashMap<Sku, Product>,
    inventory: HashMap<Sku, u32>,
}

impl Catalog {
    /// Builds a catalog from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateSku`] if two entries share a SKU.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, ConfigError> {
        let mut catalog = Self::default();
        for CatalogEntry { product, stock } in entries {
            if catalog.products.contains_key(&product.sku) {
                return Err(ConfigError::DuplicateSku {
                    sku: product.sku.to_string(),
                });
            }
            catalog.order.push(product.sku.clone());
            catalog.inventory.insert(product.sku.clone(), stock);
            catalog.products.insert(product.sku.clone(), product);
        }
        Ok(catalog)
    }

    /// Generates `count` products with the given generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateSku`] if the generator repeats a SKU.
    pub fn generate<G: CatalogGenerator + ?Sized>(
        generator: &mut G,
        count: usize,
    ) -> Result<Self, ConfigError> {
        Self::from_entries((0..count).map(|_| generator.next_entry()))
    }

    /// Looks up a product.
    #[must_use]
    pub fn product(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    /// Returns the stock count of a product.
    #[must_use]
    pub fn inventory_of(&self, sku: &str) -> Option<u32> {
        self.inventory.get(sku).copied()
    }

    /// Returns the full inventory map.
    #[must_use]
    pub const fn inventory(&self) -> &HashMap<Sku, u32> {
        &self.inventory
    }

    /// Iterates over products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order.iter().filter_map(|sku| self.products.get(sku))
    }

    /// Returns whether the catalog contains the SKU.
    #[must_use]
    pub fn contains(&self, sku: &str) -> bool {
        self.products.contains_key(sku)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
