use crate::models::GemListing;
use super::catalog::{ListingCatalog, PriceFilter};

/// Most valuable maxed Superior gems by chaos price, ignoring regrading.
/// Returns at most `count` listings.
pub fn best_simple_gems<'a>(
    catalog: &'a ListingCatalog,
    count: usize,
    min_amount: u32,
) -> Vec<&'a GemListing> {
    let rules = catalog.rules();
    let filter = PriceFilter::new(true, min_amount);
    let mut ok: Vec<&GemListing> = catalog
        .iter()
        .filter(|gem| gem.identity.variant.is_default())
        .filter(|gem| !rules.is_excluded(gem.name()))
        .filter(|gem| catalog.is_eligible(gem, filter))
        .collect();

    ok.sort_by(|a, b| b.price_chaos.total_cmp(&a.price_chaos));
    ok.truncate(count);
    ok
}
