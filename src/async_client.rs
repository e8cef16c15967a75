//! Async wrapper around [`CatalogClient`] for use in async runtimes (Tokio, etc.).
//!
//! The client is built on blocking `reqwest`, so every operation runs on the
//! blocking thread pool via [`tokio::task::spawn_blocking`], keeping the
//! async event loop free while upstream requests are in flight.
//!
//! # Example
//!
//! ```no_run
//! use optcg_catalog::{AsyncCatalogClient, SearchCardsParams};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AsyncCatalogClient::builder().build().await.unwrap();
//!
//!     let page = client.search(SearchCardsParams::default()).await.unwrap();
//!
//!     // Run any sync operation via closure
//!     let raw = client.run(|c| c.cards().raw()).await.unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::models::{CanonicalCard, Page};
use crate::queries::SearchCardsParams;
use crate::{CardSource, CatalogClient, CatalogClientBuilder};

// ---------------------------------------------------------------------------
// AsyncCatalogClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCatalogClient`].
#[derive(Default)]
pub struct AsyncCatalogClientBuilder {
    inner: CatalogClientBuilder,
}

impl AsyncCatalogClientBuilder {
    /// Set the upstream API root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    /// Set the HTTP request timeout for upstream and image requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Cap on the page size a search may request.
    pub fn max_page_size(mut self, max_page_size: usize) -> Self {
        self.inner = self.inner.max_page_size(max_page_size);
        self
    }

    pub fn max_image_bytes(mut self, max_image_bytes: u64) -> Self {
        self.inner = self.inner.max_image_bytes(max_image_bytes);
        self
    }

    /// Replace the HTTP catalog source with a custom one.
    pub fn source<S: CardSource + 'static>(mut self, source: S) -> Self {
        self.inner = self.inner.source(source);
        self
    }

    /// Build the async client.
    ///
    /// Construction runs on the blocking thread pool, since the blocking HTTP
    /// client may not be created from inside the async runtime.
    pub async fn build(self) -> Result<AsyncCatalogClient> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let client = inner.build()?;
            Ok(AsyncCatalogClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalogClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`CatalogClient`].
///
/// Cheap to clone; clones share the same underlying client.
#[derive(Clone)]
pub struct AsyncCatalogClient {
    inner: Arc<CatalogClient>,
}

impl AsyncCatalogClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncCatalogClientBuilder {
        AsyncCatalogClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    ///
    /// ```no_run
    /// # use optcg_catalog::AsyncCatalogClient;
    /// # async fn example() -> optcg_catalog::Result<()> {
    /// # let client = AsyncCatalogClient::builder().build().await?;
    /// let card = client.run(|c| c.cards().get_by_set_id("OP01-001")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Search the catalog asynchronously.
    pub async fn search(&self, params: SearchCardsParams) -> Result<Page> {
        self.run(move |c| c.cards().search(&params)).await
    }

    /// Pick a random printing asynchronously.
    pub async fn random(&self) -> Result<CanonicalCard> {
        self.run(|c| c.cards().random()).await
    }

    /// Look up one grouped card by set id asynchronously.
    pub async fn get_by_set_id(&self, set_id: &str) -> Result<Option<CanonicalCard>> {
        let set_id = set_id.to_string();
        self.run(move |c| c.cards().get_by_set_id(&set_id)).await
    }

    /// Return a reference to the wrapped sync client.
    pub fn client(&self) -> &CatalogClient {
        &self.inner
    }
}
