//! The aggregation and query pipeline.
//!
//! Raw printings from upstream flow through, in order:
//! [`normalize`] -> [`group_printings`] -> [`apply_filters`] -> [`sort_cards`]
//! -> [`paginate`]. Every stage works on the full in-memory collection and is
//! total over its input: odd records are skipped or sort first, never fail.

pub mod filter;
pub mod group;
pub mod normalize;
pub mod paginate;
pub mod sort;

pub use filter::{apply_filters, matches_set, Filters};
pub use group::{group_printings, is_parallel_printing, PARALLEL_IMAGE_MARKER};
pub use normalize::normalize;
pub use paginate::paginate;
pub use sort::{natural_cmp, sort_cards, sort_key};

use crate::models::{Page, RawCard};
use crate::queries::SearchCardsParams;

/// Run every stage over an already fetched, not yet normalized record pool.
///
/// `params.page_size` is expected to be clamped by the caller already.
pub fn run(raw: Vec<RawCard>, base_url: &str, params: &SearchCardsParams) -> Page {
    let normalized = normalize(raw, base_url);
    let grouped = group_printings(normalized);
    let mut filtered = apply_filters(grouped, params);
    sort_cards(&mut filtered);
    paginate(filtered, params.page, params.page_size)
}
