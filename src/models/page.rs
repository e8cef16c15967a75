use serde::{Deserialize, Serialize};

use super::CanonicalCard;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub data: Vec<CanonicalCard>,
    pub current_page: usize,
    /// `ceil(total_cards / page_size)`, or 0 when nothing matched.
    pub total_pages: usize,
    /// Number of grouped cards that matched the filters, across all pages.
    pub total_cards: usize,
}
