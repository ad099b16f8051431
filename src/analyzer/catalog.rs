use tracing::debug;
use crate::models::{GemListing, GemRules, GemSnapshot, QualityVariant};

/// Eligibility filters applied when picking a representative price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFilter {
    /// Require level and quality at their maximum.
    pub maxed: bool,
    /// Liquidity floor: listings with fewer offers are ignored.
    pub min_amount: u32,
}

impl PriceFilter {
    pub fn new(maxed: bool, min_amount: u32) -> Self {
        Self { maxed, min_amount }
    }
}

/// Flat, ordered collection of every gem listing in a market snapshot.
///
/// Keeps the rules its listings were parsed with; ranking code reads
/// exclusions, suffixes and max levels from here.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<GemListing>,
    rules: GemRules,
}

impl ListingCatalog {
    pub fn new(listings: Vec<GemListing>, rules: &GemRules) -> Self {
        Self {
            listings,
            rules: rules.clone(),
        }
    }

    pub fn rules(&self) -> &GemRules {
        &self.rules
    }

    /// Structural transform only. Missing numbers fall back to level 1,
    /// quality 0, zero prices and zero count; nothing is filtered here.
    pub fn from_snapshot(snapshot: &GemSnapshot, rules: &GemRules, price_field: &str) -> Self {
        let listings: Vec<GemListing> = snapshot
            .lines
            .iter()
            .map(|line| {
                let identity = rules.parse_name(&line.name, line.corrupted.unwrap_or(false));
                GemListing::new(identity)
                    .with_level(line.gem_level.unwrap_or(1), line.gem_quality.unwrap_or(0))
                    .with_prices(
                        line.chaos_value.unwrap_or(0.0),
                        line.high_value(price_field).unwrap_or(0.0),
                    )
                    .with_count(line.count.unwrap_or(0))
            })
            .collect();

        debug!(listings = listings.len(), price_field, "built listing catalog");
        Self::new(listings, rules)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GemListing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn is_eligible(&self, listing: &GemListing, filter: PriceFilter) -> bool {
        if listing.identity.is_corrupted {
            return false;
        }
        if filter.maxed && !listing.is_maxed(self.rules.max_level, self.rules.max_quality) {
            return false;
        }
        listing.count >= filter.min_amount
    }

    /// Cheapest eligible offer, by high-value price, for an exact
    /// (name, variant) pair.
    pub fn cheapest(
        &self,
        base_name: &str,
        variant: QualityVariant,
        filter: PriceFilter,
    ) -> Option<&GemListing> {
        self.listings
            .iter()
            .filter(|l| l.identity.matches(base_name, variant))
            .filter(|l| self.is_eligible(l, filter))
            .min_by(|a, b| a.price_high.total_cmp(&b.price_high))
    }

    /// Like [`cheapest`](Self::cheapest) but returns the price, or `None`
    /// when no listing survives the filters.
    pub fn lookup_price(&self, base_name: &str, variant: QualityVariant, filter: PriceFilter) -> Option<f64> {
        self.cheapest(base_name, variant, filter).map(|l| l.price_high)
    }
}

/// Cheapest eligible high-value price, with `0.0` standing in for
/// "no eligible listing".
pub fn find_price(
    catalog: &ListingCatalog,
    base_name: &str,
    variant: QualityVariant,
    maxed: bool,
    min_amount: u32,
) -> f64 {
    catalog
        .lookup_price(base_name, variant, PriceFilter::new(maxed, min_amount))
        .unwrap_or(0.0)
}
