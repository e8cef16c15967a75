//! Upstream card sources.
//!
//! optcgapi exposes two flat catalogs (main booster sets and starter decks).
//! Each query fetches both concurrently and keeps whatever succeeded; only a
//! failure of both is reported to the caller.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{self, CatalogSource};
use crate::error::{CatalogError, Result};
use crate::models::RawCard;

/// Anything that can produce the raw records of one upstream catalog.
///
/// Implemented over HTTP by [`HttpSource`]; tests and offline callers plug in
/// their own implementation through
/// [`CatalogClientBuilder::source`](crate::CatalogClientBuilder::source).
pub trait CardSource: Send + Sync {
    fn fetch(&self, catalog: CatalogSource) -> Result<Vec<RawCard>>;
}

// ---------------------------------------------------------------------------
// HttpSource
// ---------------------------------------------------------------------------

/// Fetches catalogs from the optcgapi HTTP endpoints.
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    /// Create a source rooted at `base_url` (e.g. `https://www.optcgapi.com`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CardSource for HttpSource {
    fn fetch(&self, catalog: CatalogSource) -> Result<Vec<RawCard>> {
        let url = config::join_url(&self.base_url, catalog.path());
        debug!(%catalog, %url, "fetching catalog");
        let resp = self.client.get(&url).send()?.error_for_status()?;
        let values: Vec<Value> = resp.json()?;
        Ok(decode_records(catalog, values))
    }
}

/// Decode one catalog's entries, dropping any entry that is not a card
/// record (e.g. `null` or a bare string) instead of failing the catalog.
pub fn decode_records(catalog: CatalogSource, values: Vec<Value>) -> Vec<RawCard> {
    let total = values.len();
    let cards: Vec<RawCard> = values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();

    let skipped = total - cards.len();
    if skipped > 0 {
        warn!(%catalog, skipped, "skipped malformed catalog entries");
    }
    cards
}

// ---------------------------------------------------------------------------
// fetch_all
// ---------------------------------------------------------------------------

/// Fetch every catalog concurrently and concatenate the results in
/// [`CatalogSource::ALL`] order.
///
/// A failed catalog contributes nothing. Returns
/// [`CatalogError::UpstreamUnavailable`] only when every catalog failed.
pub fn fetch_all(source: &dyn CardSource) -> Result<Vec<RawCard>> {
    let results: Vec<(CatalogSource, Result<Vec<RawCard>>)> = thread::scope(|s| {
        let handles: Vec<_> = CatalogSource::ALL
            .iter()
            .map(|&catalog| (catalog, s.spawn(move || source.fetch(catalog))))
            .collect();

        handles
            .into_iter()
            .map(|(catalog, handle)| {
                let result = handle.join().unwrap_or_else(|_| {
                    Err(CatalogError::UpstreamUnavailable(format!(
                        "{catalog} fetch panicked"
                    )))
                });
                (catalog, result)
            })
            .collect()
    });

    let mut cards = Vec::new();
    let mut failures = Vec::new();
    for (catalog, result) in results {
        match result {
            Ok(batch) => {
                debug!(%catalog, count = batch.len(), "catalog fetched");
                cards.extend(batch);
            }
            Err(e) => {
                warn!(%catalog, error = %e, "catalog fetch failed, continuing without it");
                failures.push(format!("{catalog}: {e}"));
            }
        }
    }

    if failures.len() == CatalogSource::ALL.len() {
        return Err(CatalogError::UpstreamUnavailable(failures.join("; ")));
    }
    Ok(cards)
}
