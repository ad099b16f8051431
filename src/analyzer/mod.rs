pub mod catalog;
pub mod currency;
pub mod leveling;
pub mod regrading;

pub use catalog::{find_price, ListingCatalog, PriceFilter};
pub use currency::{CurrencyNames, CurrencyRates, LensCosts};
pub use leveling::best_simple_gems;
pub use regrading::{find_best_options, LensPrices, OutcomePrice, RegradeOption, RegradeSettings};
