use std::collections::HashMap;
use crate::errors::{Result, ScraperError};
use crate::models::CurrencySnapshot;
use super::regrading::LensPrices;

/// Chaos equivalents keyed by currency name.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRates {
    rates: HashMap<String, f64>,
}

impl CurrencyRates {
    /// Lines missing either the name or the chaos equivalent are skipped.
    pub fn from_snapshot(snapshot: &CurrencySnapshot) -> Self {
        let rates = snapshot
            .lines
            .iter()
            .filter_map(|line| match (&line.currency_type_name, line.chaos_equivalent) {
                (Some(name), Some(rate)) => Some((name.clone(), rate)),
                _ => None,
            })
            .collect();
        Self { rates }
    }

    pub fn rate(&self, name: &str) -> Result<f64> {
        self.rates
            .get(name)
            .copied()
            .ok_or_else(|| ScraperError::MissingCurrency(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Names of the three rates needed to cost a regrade.
#[derive(Debug, Clone)]
pub struct CurrencyNames {
    /// The high-value currency prices are quoted in.
    pub baseline: String,
    pub primary_lens: String,
    pub secondary_lens: String,
}

impl Default for CurrencyNames {
    fn default() -> Self {
        Self {
            baseline: "Divine Orb".to_string(),
            primary_lens: "Prime Regrading Lens".to_string(),
            secondary_lens: "Secondary Regrading Lens".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LensCosts {
    pub baseline_chaos: f64,
    pub primary_chaos: f64,
    pub secondary_chaos: f64,
}

impl LensCosts {
    pub fn from_rates(rates: &CurrencyRates, names: &CurrencyNames) -> Result<Self> {
        let baseline_chaos = rates.rate(&names.baseline)?;
        if !(baseline_chaos > 0.0) {
            return Err(ScraperError::ValidationError(format!(
                "{} rate must be positive, got {}",
                names.baseline, baseline_chaos
            )));
        }

        Ok(Self {
            baseline_chaos,
            primary_chaos: rates.rate(&names.primary_lens)?,
            secondary_chaos: rates.rate(&names.secondary_lens)?,
        })
    }

    /// Lens costs converted into the high-value currency.
    pub fn in_baseline(&self) -> LensPrices {
        LensPrices {
            primary: self.primary_chaos / self.baseline_chaos,
            secondary: self.secondary_chaos / self.baseline_chaos,
        }
    }
}
