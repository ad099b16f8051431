use scraper::{ElementRef, Html, Selector};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};
use crate::errors::{Result, ScraperError};
use crate::models::QualityVariant;

/// Element id of the wiki section holding the regrading weight table.
pub const QUALITY_TABLE_ANCHOR: &str = "GrantedEffectQualityStatsQualityGem";

const NAME_COLUMN: usize = 0;
const VARIANT_COLUMN: usize = 1;
const WEIGHT_COLUMN: usize = 3;

/// Per-variant outcome probabilities for one gem. Sums to 1.
pub type OutcomeChances = BTreeMap<QualityVariant, f64>;

/// Base gem name to its regrading outcome probabilities.
pub type OutcomeDistributions = BTreeMap<String, OutcomeChances>;

pub fn parse_quality_page(html: &str) -> Result<OutcomeDistributions> {
    let document = Html::parse_document(html);
    parse_quality_table(&document, QUALITY_TABLE_ANCHOR)
}

/// Reads (name, variant, weight) rows from the table under `anchor` and
/// normalizes the weights of every non-default variant per gem.
///
/// Gems that only have default rows never enter the map.
pub fn parse_quality_table(document: &Html, anchor: &str) -> Result<OutcomeDistributions> {
    let anchor_sel = selector(&format!("#{}", anchor))?;
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    let section = document
        .select(&anchor_sel)
        .next()
        .ok_or_else(|| ScraperError::DocumentFormat(format!("anchor #{} not found", anchor)))?;
    let table = section
        .select(&table_sel)
        .next()
        .ok_or_else(|| ScraperError::DocumentFormat(format!("no table under #{}", anchor)))?;

    let mut totals: HashMap<String, u64> = HashMap::new();
    let mut weights: HashMap<String, HashMap<QualityVariant, u64>> = HashMap::new();
    let mut rows = 0usize;

    for row in table.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
        // Header rows carry <th> cells only.
        if cells.is_empty() {
            continue;
        }
        if cells.len() <= WEIGHT_COLUMN {
            return Err(ScraperError::DocumentFormat(format!(
                "row has {} cells, expected at least {}: {:?}",
                cells.len(),
                WEIGHT_COLUMN + 1,
                cells
            )));
        }
        rows += 1;

        let name = &cells[NAME_COLUMN];
        let label = &cells[VARIANT_COLUMN];
        let weight: u64 = cells[WEIGHT_COLUMN].parse().map_err(|_| {
            ScraperError::DocumentFormat(format!(
                "invalid weight {:?} for {} ({})",
                cells[WEIGHT_COLUMN], name, label
            ))
        })?;

        let variant = match QualityVariant::from_label(label) {
            Some(v) => v,
            None => {
                warn!(gem = %name, label = %label, "skipping unknown quality variant");
                continue;
            }
        };
        if variant.is_default() {
            continue;
        }

        *totals.entry(name.clone()).or_default() += weight;
        *weights.entry(name.clone()).or_default().entry(variant).or_default() += weight;
    }

    if rows == 0 {
        return Err(ScraperError::DocumentFormat(format!("no data rows under #{}", anchor)));
    }

    let mut distributions = OutcomeDistributions::new();
    for (name, gem_weights) in weights {
        let total = totals.get(&name).copied().unwrap_or(0);
        if total == 0 {
            debug!(gem = %name, "all outcome weights are zero");
            continue;
        }
        let chances = gem_weights
            .into_iter()
            .map(|(variant, weight)| (variant, weight as f64 / total as f64))
            .collect();
        distributions.insert(name, chances);
    }

    debug!(rows, gems = distributions.len(), "parsed quality table");
    Ok(distributions)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ScraperError::ValidationError(format!("bad selector {}: {:?}", css, e)))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
