//! Command-line configuration.
//!
//! Every option has a default so a bare `gem-regrader` run fetches the
//! Standard league. Local document paths skip fetching for that document.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use crate::analyzer::CurrencyNames;
use crate::fetcher::{DEFAULT_NINJA_URL, DEFAULT_QUALITY_URL};
use crate::storage::DEFAULT_DATABASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "gem-regrader", about = "Ranks gems by expected regrading lens profit")]
pub struct Cli {
    /// League to price gems in
    #[arg(long, env = "POE_LEAGUE", default_value = "Standard")]
    pub league: String,

    /// Amount for sale to consider viable
    #[arg(long, default_value_t = 10)]
    pub min_amount: u32,

    /// Show up to this many results per section
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// Only show gems that never result in a loss
    #[arg(long)]
    pub guaranteed: bool,

    /// Local copy of the quality wiki page
    #[arg(long)]
    pub gems_html: Option<PathBuf>,

    /// Local copy of the skill gem price overview
    #[arg(long)]
    pub prices_json: Option<PathBuf>,

    /// Local copy of the currency overview
    #[arg(long)]
    pub currency_json: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_NINJA_URL)]
    pub ninja_url: String,

    #[arg(long, default_value = DEFAULT_QUALITY_URL)]
    pub quality_url: String,

    /// JSON field holding the high-value price of a gem
    #[arg(long, default_value = "divineValue")]
    pub price_field: String,

    /// Short label printed after high-value prices
    #[arg(long, default_value = "div")]
    pub price_label: String,

    /// Currency the high-value prices are quoted in
    #[arg(long, default_value = "Divine Orb")]
    pub baseline_currency: String,

    #[arg(long, default_value = "Prime Regrading Lens")]
    pub primary_lens: String,

    #[arg(long, default_value = "Secondary Regrading Lens")]
    pub secondary_lens: String,

    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Refetch cached documents older than this
    #[arg(long, default_value_t = 60)]
    pub cache_ttl_minutes: u64,

    /// Always fetch, never read or write the cache
    #[arg(long)]
    pub no_cache: bool,
}

impl Cli {
    pub fn currency_names(&self) -> CurrencyNames {
        CurrencyNames {
            baseline: self.baseline_currency.clone(),
            primary_lens: self.primary_lens.clone(),
            secondary_lens: self.secondary_lens.clone(),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes.saturating_mul(60))
    }

    /// True when nothing needs fetching.
    pub fn is_offline(&self) -> bool {
        self.gems_html.is_some() && self.prices_json.is_some() && self.currency_json.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gem-regrader"]).unwrap();
        assert_eq!(cli.min_amount, 10);
        assert_eq!(cli.count, 10);
        assert!(!cli.guaranteed);
        assert_eq!(cli.price_field, "divineValue");
        assert_eq!(cli.currency_names().baseline, "Divine Orb");
        assert_eq!(cli.cache_ttl(), Duration::from_secs(3600));
        assert!(!cli.is_offline());
    }

    #[test]
    fn test_local_documents_and_overrides() {
        let cli = Cli::try_parse_from([
            "gem-regrader",
            "--gems-html", "data/quality.html",
            "--prices-json", "data/gems.json",
            "--currency-json", "data/currency.json",
            "--price-field", "exaltedValue",
            "--baseline-currency", "Exalted Orb",
            "--count", "3",
            "--guaranteed",
        ])
        .unwrap();
        assert!(cli.is_offline());
        assert!(cli.guaranteed);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.price_field, "exaltedValue");
        assert_eq!(cli.currency_names().baseline, "Exalted Orb");
    }

    #[test]
    fn test_huge_cache_ttl_saturates() {
        let cli = Cli::try_parse_from(["gem-regrader", "--cache-ttl-minutes", &u64::MAX.to_string()]).unwrap();
        assert_eq!(cli.cache_ttl(), Duration::from_secs(u64::MAX));
    }
}
