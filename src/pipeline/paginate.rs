use crate::models::{CanonicalCard, Page};

/// Cut one page out of the sorted result set.
///
/// `page` and `page_size` are clamped to at least 1. A page past the end is
/// empty rather than an error.
pub fn paginate(cards: Vec<CanonicalCard>, page: usize, page_size: usize) -> Page {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_cards = cards.len();
    let total_pages = total_cards.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let data = if start >= total_cards {
        Vec::new()
    } else {
        cards.into_iter().skip(start).take(page_size).collect()
    };

    Page {
        data,
        current_page: page,
        total_pages,
        total_cards,
    }
}
