use std::cmp::Ordering;

use crate::models::CanonicalCard;

/// Split a set id into its code prefix and numeric index.
///
/// `OP01-010` gives `("OP01", 10)` and `P005` gives `("P", 5)`. A missing or
/// non-numeric index is 0; a missing id is `("", 0)`.
pub fn sort_key(set_id: Option<&str>) -> (&str, u64) {
    let Some(id) = set_id else {
        return ("", 0);
    };
    if let Some((prefix, rest)) = id.split_once('-') {
        return (prefix, leading_number(rest));
    }
    let letters_end = id
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(id.len());
    (&id[..letters_end], leading_number(&id[letters_end..]))
}

fn leading_number(s: &str) -> u64 {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}

/// Natural ordering of two set ids: code prefix, then numeric index, then the
/// raw id so that the order is total.
pub fn natural_cmp(a: Option<&str>, b: Option<&str>) -> Ordering {
    sort_key(a)
        .cmp(&sort_key(b))
        .then_with(|| a.unwrap_or("").cmp(b.unwrap_or("")))
}

/// Sort cards into natural set-id order (stable).
pub fn sort_cards(cards: &mut [CanonicalCard]) {
    cards.sort_by(|a, b| natural_cmp(a.set_id(), b.set_id()));
}
