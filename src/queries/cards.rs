//! Card queries over the merged upstream catalogs.

use rand::seq::SliceRandom;
use tracing::info;

use crate::config::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::{CatalogError, Result};
use crate::models::{CanonicalCard, Page, RawCard};
use crate::pipeline;
use crate::source;
use crate::CatalogClient;

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Parameters for the card search.
///
/// Filter fields are optional; `None`, an empty string, or the `"All"`
/// sentinel skip the corresponding filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCardsParams {
    /// Comma-separated allow-list of exact set ids.
    pub ids: Option<String>,
    /// Case-insensitive substring of the card name.
    pub name: Option<String>,
    /// Exact cost, compared as text.
    pub cost: Option<String>,
    /// Case-insensitive exact color.
    pub color: Option<String>,
    /// Case-insensitive exact card type (`Leader`, `Character`, ...).
    pub card_type: Option<String>,
    /// Set-code prefix (`OP01`, `ST-10`, `P`, ...).
    pub set: Option<String>,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for SearchCardsParams {
    fn default() -> Self {
        Self {
            ids: None,
            name: None,
            cost: None,
            color: None,
            card_type: None,
            set: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for cards. Every call fetches both upstream catalogs
/// afresh; nothing is cached between calls.
pub struct CardQuery<'a> {
    client: &'a CatalogClient,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given client.
    pub fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// Every printing from both catalogs, with absolute image URLs.
    pub fn raw(&self) -> Result<Vec<RawCard>> {
        let raw = source::fetch_all(self.client.source())?;
        Ok(pipeline::normalize(raw, self.client.base_url()))
    }

    // -- Search ------------------------------------------------------------

    /// Group, filter, sort and paginate the catalog.
    ///
    /// `page` and `page_size` are clamped to at least 1, and `page_size` to
    /// the client's maximum. Fails only if both upstream catalogs fail.
    pub fn search(&self, params: &SearchCardsParams) -> Result<Page> {
        let raw = source::fetch_all(self.client.source())?;

        let mut params = params.clone();
        params.page = params.page.max(1);
        params.page_size = params.page_size.clamp(1, self.client.max_page_size());

        let page = pipeline::run(raw, self.client.base_url(), &params);
        info!(
            page = page.current_page,
            total_pages = page.total_pages,
            total_cards = page.total_cards,
            returned = page.data.len(),
            "card search"
        );
        Ok(page)
    }

    // -- Single card lookup ------------------------------------------------

    /// The grouped card for an exact set id, with all its versions.
    pub fn get_by_set_id(&self, set_id: &str) -> Result<Option<CanonicalCard>> {
        let set_id = set_id.trim();
        if set_id.is_empty() {
            return Err(CatalogError::InvalidArgument("Empty set id".into()));
        }

        let cards = pipeline::group_printings(self.raw()?);
        Ok(cards.into_iter().find(|c| c.set_id() == Some(set_id)))
    }

    // -- Random sampling ---------------------------------------------------

    /// One printing picked uniformly from the whole ungrouped pool.
    ///
    /// Alternate-art printings count as separate entries, so cards with many
    /// variants are proportionally more likely. The result has no versions.
    pub fn random(&self) -> Result<CanonicalCard> {
        let pool = self.raw()?;
        let mut rng = rand::thread_rng();
        pool.choose(&mut rng)
            .cloned()
            .map(CanonicalCard::single)
            .ok_or(CatalogError::NoDataAvailable)
    }
}
