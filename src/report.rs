use tracing::info;
use crate::analyzer::{
    best_simple_gems, find_best_options, CurrencyNames, CurrencyRates, LensCosts, ListingCatalog,
    OutcomePrice, RegradeOption, RegradeSettings,
};
use crate::data::parse_quality_page;
use crate::errors::Result;
use crate::models::{CurrencySnapshot, GemListing, GemRules, GemSnapshot};

/// Run options that are not tied to where the documents came from.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub min_amount: u32,
    pub count: usize,
    pub guaranteed_only: bool,
    pub price_field: String,
    pub price_label: String,
    pub currencies: CurrencyNames,
}

/// Parses the three source documents and renders the full report.
/// Any malformed document or missing rate aborts the whole report.
pub fn render_report(
    quality_html: &str,
    prices_json: &str,
    currency_json: &str,
    rules: &GemRules,
    options: &ReportOptions,
) -> Result<Vec<String>> {
    let distributions = parse_quality_page(quality_html)?;
    let snapshot: GemSnapshot = serde_json::from_str(prices_json)?;
    let catalog = ListingCatalog::from_snapshot(&snapshot, rules, &options.price_field);
    let currency: CurrencySnapshot = serde_json::from_str(currency_json)?;
    let costs = LensCosts::from_rates(&CurrencyRates::from_snapshot(&currency), &options.currencies)?;
    info!(
        gems = distributions.len(),
        listings = catalog.len(),
        "loaded source documents"
    );

    let formatter = ReportFormatter::new(&options.price_label, &options.currencies.baseline, options.count);
    let mut lines = formatter.currency_summary(&costs);

    for (maxed, title) in [(false, "Regrading level 1 gems"), (true, "Regrading level 20/20 gems")] {
        let settings = RegradeSettings {
            maxed,
            guaranteed_only: options.guaranteed_only,
            min_amount: options.min_amount,
            lenses: costs.in_baseline(),
        };
        let best = find_best_options(&distributions, &catalog, &settings);
        lines.push(String::new());
        lines.extend(formatter.profit_section(title, &best));
    }

    let leveling = best_simple_gems(&catalog, options.count, options.min_amount);
    lines.push(String::new());
    lines.extend(formatter.leveling_section(&leveling));
    Ok(lines)
}

/// Console rendering of one run.
pub struct ReportFormatter {
    pub price_label: String,
    pub baseline_name: String,
    /// Maximum lines per ranked section.
    pub count: usize,
}

impl ReportFormatter {
    pub fn new(price_label: &str, baseline_name: &str, count: usize) -> Self {
        Self {
            price_label: price_label.to_string(),
            baseline_name: baseline_name.to_string(),
            count,
        }
    }

    pub fn currency_summary(&self, costs: &LensCosts) -> Vec<String> {
        let lenses = costs.in_baseline();
        vec![
            "Currency prices:".to_string(),
            format!("  {}: {:.1} c", self.baseline_name, costs.baseline_chaos),
            format!(
                "  Primary: {:.2} {} ({:.1} c)",
                lenses.primary, self.price_label, costs.primary_chaos
            ),
            format!(
                "  Secondary: {:.2} {} ({:.1} c)",
                lenses.secondary, self.price_label, costs.secondary_chaos
            ),
        ]
    }

    pub fn profit_section(&self, title: &str, options: &[RegradeOption]) -> Vec<String> {
        let mut lines = vec![format!("{}:", title)];
        lines.extend(options.iter().take(self.count).map(|o| self.profit_line(o)));
        lines
    }

    pub fn profit_line(&self, option: &RegradeOption) -> String {
        let marker = if option.guaranteed { "!!! " } else { "" };
        let details = option
            .breakdown
            .iter()
            .map(|outcome| self.outcome(outcome))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "  {}{}: {:.2} {} ({})",
            marker, option.name, option.expected_profit, self.price_label, details
        )
    }

    fn outcome(&self, outcome: &OutcomePrice) -> String {
        let price = match outcome.price {
            Some(price) => format!("{:.1} {}", price, self.price_label),
            None => "-".to_string(),
        };
        format!("{:.0}% {} {}", outcome.chance * 100.0, outcome.variant, price)
    }

    pub fn leveling_section(&self, gems: &[&GemListing]) -> Vec<String> {
        let mut lines = vec!["Leveling gems to 20/20:".to_string()];
        lines.extend(
            gems.iter()
                .take(self.count)
                .map(|gem| format!("  {}: {:.1} c", gem.name(), gem.price_chaos)),
        );
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GemIdentity, QualityVariant};

    fn option(name: &str, guaranteed: bool, profit: f64) -> RegradeOption {
        RegradeOption {
            name: name.to_string(),
            guaranteed,
            expected_profit: profit,
            total_cost: 0.5,
            breakdown: vec![
                OutcomePrice { chance: 0.7, price: Some(2.0), variant: QualityVariant::Anomalous },
                OutcomePrice { chance: 0.3, price: None, variant: QualityVariant::Divergent },
            ],
        }
    }

    #[test]
    fn test_profit_line() {
        let formatter = ReportFormatter::new("div", "Divine Orb", 10);
        assert_eq!(
            formatter.profit_line(&option("Fireball", true, 0.9)),
            "  !!! Fireball: 0.90 div (70% Anomalous 2.0 div, 30% Divergent -)"
        );
        assert_eq!(
            formatter.profit_line(&option("Cleave", false, 1.234)),
            "  Cleave: 1.23 div (70% Anomalous 2.0 div, 30% Divergent -)"
        );
    }

    #[test]
    fn test_sections_truncate_to_count() {
        let formatter = ReportFormatter::new("ex", "Exalted Orb", 2);
        let options: Vec<RegradeOption> = (0..5).map(|i| option("Arc", false, 5.0 - i as f64)).collect();
        let lines = formatter.profit_section("Regrading level 1 gems", &options);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Regrading level 1 gems:");

        let gem = GemListing::new(GemIdentity::new("Arc".to_string(), QualityVariant::Superior))
            .with_prices(123.46, 0.6);
        let gems = vec![&gem, &gem, &gem];
        let lines = formatter.leveling_section(&gems);
        assert_eq!(lines, vec!["Leveling gems to 20/20:", "  Arc: 123.5 c", "  Arc: 123.5 c"]);
    }

    #[test]
    fn test_currency_summary() {
        let formatter = ReportFormatter::new("div", "Divine Orb", 10);
        let costs = LensCosts { baseline_chaos: 200.0, primary_chaos: 100.0, secondary_chaos: 120.0 };
        assert_eq!(
            formatter.currency_summary(&costs),
            vec![
                "Currency prices:",
                "  Divine Orb: 200.0 c",
                "  Primary: 0.50 div (100.0 c)",
                "  Secondary: 0.60 div (120.0 c)",
            ]
        );
    }
}
