//! Synthetic catalog generation.
//!
//! Generation sits behind the [`CatalogGenerator`] trait so that tests and
//! callers can supply their own source of entries. The provided
//! [`RandomCatalogGenerator`] is generic over any [`Rng`] and can be seeded
//! for reproducible catalogs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::money::{round_up_to_multiple, Currency, Money};
use super::words;
use super::{CatalogEntry, Product, Sku};
use crate::config::StorefrontConfig;
use crate::error::ConfigError;

/// A source of catalog entries.
pub trait CatalogGenerator {
    /// Produces the next product and its stock count.
    fn next_entry(&mut self) -> CatalogEntry;
}

/// How random prices are drawn.
///
/// A raw amount is drawn uniformly from `min_minor..=max_minor` and then
/// rounded up to the next multiple of `granularity`, all in minor units.
/// A rule can only be built through [`PriceRule::new`], so every rule
/// has a non-empty positive range and a positive granularity.
///
/// ```rust
/// use storefront::catalog::PriceRule;
///
/// let rule = PriceRule::new(100, 1_000, 50).unwrap();
/// assert_eq!(rule.granularity(), 50);
/// assert!(PriceRule::new(100, 1_000, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRule {
    min_minor: i64,
    max_minor: i64,
    granularity: i64,
}

impl Default for PriceRule {
    /// 50.00 to 2500.00, rounded up to whole multiples of 5.00.
    fn default() -> Self {
        Self {
            min_minor: 5_000,
            max_minor: 250_000,
            granularity: 500,
        }
    }
}

impl PriceRule {
    /// Creates a validated price rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGranularity`] if `granularity` is not
    /// positive, and [`ConfigError::InvalidPriceRange`] if `min_minor` is
    /// not positive, exceeds `max_minor`, or `max_minor` cannot be rounded
    /// up without overflowing.
    pub fn new(min_minor: i64, max_minor: i64, granularity: i64) -> Result<Self, ConfigError> {
        if granularity <= 0 {
            return Err(ConfigError::InvalidGranularity { granularity });
        }
        if min_minor <= 0 || min_minor > max_minor || max_minor > i64::MAX - granularity {
            return Err(ConfigError::InvalidPriceRange {
                min: min_minor,
                max: max_minor,
            });
        }
        Ok(Self {
            min_minor,
            max_minor,
            granularity,
        })
    }

    /// Smallest raw amount, in minor units.
    #[must_use]
    pub const fn min_minor(&self) -> i64 {
        self.min_minor
    }

    /// Largest raw amount, in minor units.
    #[must_use]
    pub const fn max_minor(&self) -> i64 {
        self.max_minor
    }

    /// Rounding step, in minor units.
    #[must_use]
    pub const fn granularity(&self) -> i64 {
        self.granularity
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let raw = rng.gen_range(self.min_minor..=self.max_minor);
        round_up_to_multiple(raw, self.granularity)
    }
}

/// Generates products with random SKUs, names, sentences, prices and
/// stock counts.
///
/// # Example
///
/// ```rust
/// use storefront::catalog::{Catalog, RandomCatalogGenerator};
///
/// let a = Catalog::generate(&mut RandomCatalogGenerator::from_seed(42), 5).unwrap();
/// let b = Catalog::generate(&mut RandomCatalogGenerator::from_seed(42), 5).unwrap();
/// assert_eq!(
///     a.products().collect::<Vec<_>>(),
///     b.products().collect::<Vec<_>>()
/// );
/// ```
#[derive(Debug)]
pub struct RandomCatalogGenerator<R = StdRng> {
    rng: R,
    currency: Currency,
    price_rule: PriceRule,
    max_stock: u32,
}

impl RandomCatalogGenerator<StdRng> {
    /// Creates a deterministic generator with default settings.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator from the storefront configuration.
    ///
    /// Uses the configured seed when present, otherwise OS entropy.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let rng = config
            .seed()
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::new(rng)
            .currency(config.currency())
            .price_rule(config.price_rule())
            .max_stock(config.max_stock())
    }
}

impl<R: Rng> RandomCatalogGenerator<R> {
    /// Creates a generator over the given random source with default
    /// settings: DKK prices per [`PriceRule::default`] and stock in `0..=10`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            currency: Currency::default(),
            price_rule: PriceRule::default(),
            max_stock: 10,
        }
    }

    /// Sets the currency of generated prices.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the price rule.
    #[must_use]
    pub fn price_rule(mut self, rule: PriceRule) -> Self {
        self.price_rule = rule;
        self
    }

    /// Sets the inclusive upper bound of generated stock counts.
    #[must_use]
    pub fn max_stock(mut self, max_stock: u32) -> Self {
        self.max_stock = max_stock;
        self
    }
}

impl<R: Rng> CatalogGenerator for RandomCatalogGenerator<R> {
    fn next_entry(&mut self) -> CatalogEntry {
        let sku = Sku::from_random_bytes(self.rng.gen());
        let stock = self.rng.gen_range(0..=self.max_stock);
        let title = words::person_name(&mut self.rng);
        let description = words::sentence(&mut self.rng);
        let price = Money::from_minor(self.price_rule.draw(&mut self.rng), self.currency);

        CatalogEntry {
            product: Product {
                sku,
                title,
                description,
                price,
            },
            stock,
        }
    }
}
