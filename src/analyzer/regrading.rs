use tracing::debug;
use crate::data::OutcomeDistributions;
use crate::models::{GemRules, QualityVariant};
use super::catalog::{ListingCatalog, PriceFilter};

/// Lens costs in the high-value currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensPrices {
    /// Applied to skill gems.
    pub primary: f64,
    /// Applied to support gems.
    pub secondary: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct RegradeSettings {
    pub maxed: bool,
    pub guaranteed_only: bool,
    pub min_amount: u32,
    pub lenses: LensPrices,
}

/// One possible regrading result and what it sells for.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomePrice {
    pub chance: f64,
    /// `None` when no eligible listing exists. Counts as zero in the
    /// expectation and always fails the guarantee.
    pub price: Option<f64>,
    pub variant: QualityVariant,
}

impl OutcomePrice {
    pub fn value(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    fn beats(&self, cost: f64) -> bool {
        matches!(self.price, Some(price) if price > cost)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegradeOption {
    pub name: String,
    /// Every outcome sells for more than the total cost.
    pub guaranteed: bool,
    pub expected_profit: f64,
    pub total_cost: f64,
    pub breakdown: Vec<OutcomePrice>,
}

/// Ranks gems by the expected profit of applying a regrading lens.
///
/// Exclusions and the support suffix come from the catalog's rules.
/// Excluded gems are skipped. Results with non-positive expected profit,
/// or without a guarantee when `guaranteed_only` is set, are dropped. The
/// sort is stable, so ties keep the distribution map's order.
pub fn find_best_options(
    distributions: &OutcomeDistributions,
    catalog: &ListingCatalog,
    settings: &RegradeSettings,
) -> Vec<RegradeOption> {
    let rules = catalog.rules();
    let filter = PriceFilter::new(settings.maxed, settings.min_amount);
    let mut good = Vec::new();

    for (name, chances) in distributions {
        if rules.is_excluded(name) {
            continue;
        }

        let breakdown: Vec<OutcomePrice> = chances
            .iter()
            .map(|(variant, chance)| OutcomePrice {
                chance: *chance,
                price: catalog.lookup_price(name, *variant, filter),
                variant: *variant,
            })
            .collect();

        let total_cost = regrade_cost(name, catalog, rules, settings);
        let guaranteed = breakdown.iter().all(|outcome| outcome.beats(total_cost));
        let expected_profit =
            breakdown.iter().map(|o| o.chance * o.value()).sum::<f64>() - total_cost;

        if settings.guaranteed_only && !guaranteed {
            continue;
        }
        if expected_profit <= 0.0 {
            continue;
        }

        good.push(RegradeOption {
            name: name.clone(),
            guaranteed,
            expected_profit,
            total_cost,
            breakdown,
        });
    }

    good.sort_by(|a, b| b.expected_profit.total_cmp(&a.expected_profit));
    debug!(maxed = settings.maxed, options = good.len(), "ranked regrading options");
    good
}

/// Lens cost, plus the price of a maxed Superior copy when regrading 20/20 gems.
/// An unpriceable base copy adds nothing.
fn regrade_cost(
    name: &str,
    catalog: &ListingCatalog,
    rules: &GemRules,
    settings: &RegradeSettings,
) -> f64 {
    let lens = if rules.is_support(name) {
        settings.lenses.secondary
    } else {
        settings.lenses.primary
    };

    if !settings.maxed {
        return lens;
    }
    let base = catalog
        .lookup_price(name, QualityVariant::Superior, PriceFilter::new(true, 0))
        .unwrap_or(0.0);
    lens + base
}
