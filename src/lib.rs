//! One Piece TCG card catalog for Rust.
//!
//! optcgapi.com serves every printing of every card as one flat list, with
//! alternate arts repeated under the same set id and no search or paging.
//! This crate fetches the main-set and starter-deck catalogs, groups the
//! printings into one card per set id (variants attached as `versions`), and
//! answers filtered, naturally sorted, paginated queries over the result.
//!
//! # Quick start
//!
//! ```no_run
//! use optcg_catalog::{CatalogClient, SearchCardsParams};
//!
//! let client = CatalogClient::builder().build().unwrap();
//!
//! // Red characters from OP01, second page
//! let page = client
//!     .cards()
//!     .search(&SearchCardsParams {
//!         color: Some("Red".into()),
//!         card_type: Some("Character".into()),
//!         set: Some("OP01".into()),
//!         page: 2,
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! // Any single printing
//! let card = client.cards().random().unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod image;
pub mod models;
pub mod pipeline;
pub mod queries;
pub mod source;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogClient;
pub use config::CatalogSource;
pub use error::{CatalogError, Result};
pub use image::{ImageData, ImageFetcher, ImageMode};
pub use models::{CanonicalCard, Page, RawCard};
pub use queries::SearchCardsParams;
pub use source::{decode_records, CardSource, HttpSource};

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogClient`].
///
/// Use [`CatalogClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogClientBuilder::build).
pub struct CatalogClientBuilder {
    base_url: String,
    timeout: Duration,
    max_page_size: usize,
    max_image_bytes: u64,
    source: Option<Arc<dyn CardSource>>,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            max_page_size: config::MAX_PAGE_SIZE,
            max_image_bytes: config::MAX_IMAGE_BYTES,
            source: None,
        }
    }
}

impl CatalogClientBuilder {
    /// Set the upstream API root.
    ///
    /// Used both for fetching catalogs and for absolutizing relative image
    /// paths. Defaults to [`config::API_BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout for upstream and image requests.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cap on the page size a search may request. Defaults to 250.
    pub fn max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size.max(1);
        self
    }

    /// Largest image the proxy fetcher will buffer. Defaults to 10 MiB.
    pub fn max_image_bytes(mut self, max_image_bytes: u64) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    /// Replace the HTTP catalog source with a custom one.
    ///
    /// The base URL is still used to absolutize relative image paths.
    pub fn source<S: CardSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Build the client. No network traffic happens until the first query.
    pub fn build(self) -> Result<CatalogClient> {
        let source = match self.source {
            Some(source) => source,
            None => Arc::new(HttpSource::new(self.base_url.clone(), self.timeout)?),
        };
        Ok(CatalogClient {
            source,
            base_url: self.base_url,
            max_page_size: self.max_page_size,
            images: ImageFetcher::new(self.timeout).with_max_bytes(self.max_image_bytes),
        })
    }
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// The main entry point of the crate.
///
/// Holds the upstream source and configuration, and hands out lightweight
/// query interfaces that borrow from it. Holds no card data: every query
/// fetches and aggregates from scratch.
pub struct CatalogClient {
    source: Arc<dyn CardSource>,
    base_url: String,
    max_page_size: usize,
    images: ImageFetcher,
}

impl CatalogClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    /// Access the card query interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(self)
    }

    /// Access the image fetcher used for proxying card images.
    pub fn images(&self) -> &ImageFetcher {
        &self.images
    }

    pub fn source(&self) -> &dyn CardSource {
        self.source.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }
}

impl fmt::Display for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogClient(base_url={}, max_page_size={})",
            self.base_url, self.max_page_size
        )
    }
}
