//! Expected-profit ranking for regrading lenses on skill gems.
//!
//! Combines the quality-outcome weights scraped from the wiki with current
//! market listings to estimate what each regrade is worth.

pub mod analyzer;
pub mod config;
pub mod data;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod report;
pub mod storage;

pub use errors::{Result, ScraperError};
