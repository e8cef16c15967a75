//! Grouping of printings into one [`CanonicalCard`] per set id.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::models::{CanonicalCard, RawCard};

/// File-name marker optcgapi uses for parallel (alternate art) scans. It is
/// always followed by the variant number, e.g. `OP01-001_p1.jpg`.
pub const PARALLEL_IMAGE_MARKER: &str = "_p";

/// Whether a printing is a parallel/alternate-art variant rather than the
/// base printing.
///
/// Upstream has no explicit flag for this, so it is sniffed from the image
/// file name and the card name. Replace this if upstream ever provides one.
pub fn is_parallel_printing(card: &RawCard) -> bool {
    let image_marked = card
        .image()
        .map(|url| url.rsplit('/').next().unwrap_or(url))
        .is_some_and(has_parallel_marker);
    let name_marked = card
        .name()
        .is_some_and(|name| name.to_lowercase().contains("parallel"));
    image_marked || name_marked
}

/// Group printings by set id, in first-seen order of the set ids.
///
/// Records without a set id are skipped. Within each group the base printing
/// becomes the card and every other printing goes to `versions`.
pub fn group_printings(cards: Vec<RawCard>) -> Vec<CanonicalCard> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<RawCard>> = HashMap::new();
    let mut skipped = 0usize;

    for card in cards {
        let Some(id) = card.set_id().map(str::to_string) else {
            skipped += 1;
            continue;
        };
        match buckets.entry(id) {
            Entry::Occupied(mut entry) => entry.get_mut().push(card),
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(vec![card]);
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped printings without a set id");
    }

    order
        .into_iter()
        .filter_map(|id| buckets.remove(&id))
        .filter_map(pick_canonical)
        .collect()
}

/// Stable-sort one bucket and split it into canonical card and versions.
fn pick_canonical(mut printings: Vec<RawCard>) -> Option<CanonicalCard> {
    printings.sort_by(compare_printings);
    let mut iter = printings.into_iter();
    let card = iter.next()?;
    Some(CanonicalCard::new(card, iter.collect()))
}

/// Base printings first, then shorter names first.
// The name-length rule has no known rationale beyond preferring plain names
// over longer promo/reprint naming. Kept for compatibility.
fn compare_printings(a: &RawCard, b: &RawCard) -> Ordering {
    is_parallel_printing(a)
        .cmp(&is_parallel_printing(b))
        .then_with(|| name_len(a).cmp(&name_len(b)))
}

/// `_p` immediately followed by a digit, so `_p1` counts and `_pre` does not.
fn has_parallel_marker(file: &str) -> bool {
    file.match_indices(PARALLEL_IMAGE_MARKER).any(|(at, marker)| {
        file[at + marker.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    })
}

fn name_len(card: &RawCard) -> usize {
    card.name().map_or(0, |n| n.chars().count())
}
