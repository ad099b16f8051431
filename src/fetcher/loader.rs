use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use crate::errors::Result;
use crate::storage::DocumentCache;
use super::ninja_api::{DocumentKind, NinjaClient};

/// Serves source documents from the cache while fresh, fetching otherwise.
pub struct DocumentLoader {
    client: NinjaClient,
    cache: Option<DocumentCache>,
    max_age: Duration,
}

impl DocumentLoader {
    pub fn new(client: NinjaClient, cache: Option<DocumentCache>, max_age: Duration) -> Self {
        Self { client, cache, max_age }
    }

    pub async fn load(&mut self, kind: DocumentKind) -> Result<String> {
        let key = self.client.cache_key(kind);

        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get_fresh(&key, self.max_age).await? {
                debug!(key = %key, "using cached document");
                return Ok(body);
            }
        }

        let body = self.client.fetch(kind).await?;
        if let Some(cache) = &self.cache {
            cache.store(&key, &body).await?;
        }
        Ok(body)
    }
}

/// Reads a document from `path` when given, otherwise goes through the loader.
pub async fn read_or_load(
    path: Option<&Path>,
    kind: DocumentKind,
    loader: &mut DocumentLoader,
) -> Result<String> {
    match path {
        Some(path) => {
            info!(path = %path.display(), kind = kind.as_str(), "reading local document");
            Ok(tokio::fs::read_to_string(path).await?)
        }
        None => loader.load(kind).await,
    }
}
