use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use crate::errors::{Result, ScraperError};

pub const DEFAULT_NINJA_URL: &str = "https://poe.ninja/api/data";
pub const DEFAULT_QUALITY_URL: &str = "https://poedb.tw/us/Gem_Quality";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0";

/// The three source documents a report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    QualityTable,
    GemPrices,
    CurrencyRates,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::QualityTable => "quality_table",
            DocumentKind::GemPrices => "gem_prices",
            DocumentKind::CurrencyRates => "currency_rates",
        }
    }
}

/// Client for the price aggregator and the quality wiki page.
pub struct NinjaClient {
    client: Client,
    league: String,
    ninja_url: String,
    quality_url: String,
    last_request: Option<Instant>,
    rate_limit_delay: Duration,
}

impl NinjaClient {
    pub fn new(league: String, ninja_url: String, quality_url: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            league,
            ninja_url: ninja_url.trim_end_matches('/').to_string(),
            quality_url,
            last_request: None,
            rate_limit_delay: Duration::from_millis(500),
        })
    }

    pub fn url_for(&self, kind: DocumentKind) -> String {
        match kind {
            DocumentKind::QualityTable => self.quality_url.clone(),
            DocumentKind::GemPrices => format!(
                "{}/itemoverview?league={}&type=SkillGem",
                self.ninja_url, self.league
            ),
            DocumentKind::CurrencyRates => format!(
                "{}/currencyoverview?league={}&type=Currency",
                self.ninja_url, self.league
            ),
        }
    }

    /// Cache key; price documents are per league, the wiki page is not.
    pub fn cache_key(&self, kind: DocumentKind) -> String {
        match kind {
            DocumentKind::QualityTable => kind.as_str().to_string(),
            _ => format!("{}:{}", kind.as_str(), self.league),
        }
    }

    pub async fn fetch(&mut self, kind: DocumentKind) -> Result<String> {
        let url = self.url_for(kind);
        self.fetch_text(&url).await
    }

    pub async fn fetch_text(&mut self, url: &str) -> Result<String> {
        // Add some randomness to avoid synchronization with other clients
        let delay = self.rate_limit_delay + Duration::from_millis(rand::random::<u64>() % 100);
        self.respect_rate_limit(delay).await;

        info!(url, "fetching document");
        let response = self.client.get(url).header("Accept", "*/*").send().await?;
        self.last_request = Some(Instant::now());

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::NetworkError(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "fetched document");
        Ok(body)
    }

    async fn respect_rate_limit(&self, delay: Duration) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < delay {
                tokio::time::sleep(delay - elapsed).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NinjaClient {
        NinjaClient::new(
            "Settlers".to_string(),
            "https://example.test/api/data/".to_string(),
            "https://wiki.test/quality".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(
            client.url_for(DocumentKind::GemPrices),
            "https://example.test/api/data/itemoverview?league=Settlers&type=SkillGem"
        );
        assert_eq!(
            client.url_for(DocumentKind::CurrencyRates),
            "https://example.test/api/data/currencyoverview?league=Settlers&type=Currency"
        );
        assert_eq!(client.url_for(DocumentKind::QualityTable), "https://wiki.test/quality");
    }

    #[test]
    fn test_cache_keys() {
        let client = client();
        assert_eq!(client.cache_key(DocumentKind::QualityTable), "quality_table");
        assert_eq!(client.cache_key(DocumentKind::GemPrices), "gem_prices:Settlers");
        assert_eq!(client.cache_key(DocumentKind::CurrencyRates), "currency_rates:Settlers");
    }
}
