//! The search filter chain.
//!
//! Every predicate is optional and they are AND-combined. A card missing the
//! field a predicate looks at never matches that predicate. Predicates only
//! look at the canonical printing, not at its versions.
//!
//! Older revisions of the catalog treated an all-digit `name` as a cost
//! search. That shortcut is gone: `name` is always a name search and cost has
//! its own parameter.

use std::collections::HashSet;

use tracing::debug;

use crate::config::{ALL, ALL_SETS};
use crate::models::CanonicalCard;
use crate::queries::SearchCardsParams;

/// Parsed, ready-to-apply form of the filter part of [`SearchCardsParams`].
#[derive(Debug, Default)]
pub struct Filters<'a> {
    ids: Option<HashSet<&'a str>>,
    name: Option<String>,
    cost: Option<&'a str>,
    color: Option<String>,
    card_type: Option<String>,
    set: Option<&'a str>,
}

impl<'a> Filters<'a> {
    pub fn from_params(params: &'a SearchCardsParams) -> Self {
        let ids = params.ids.as_deref().and_then(|raw| {
            let ids: HashSet<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .collect();
            (!ids.is_empty()).then_some(ids)
        });

        Self {
            ids,
            name: given(params.name.as_deref(), &[]).map(str::to_lowercase),
            cost: given(params.cost.as_deref(), &[ALL]),
            color: given(params.color.as_deref(), &[ALL]).map(str::to_lowercase),
            card_type: given(params.card_type.as_deref(), &[ALL]).map(str::to_lowercase),
            set: given(params.set.as_deref(), &[ALL, ALL_SETS]),
        }
    }

    /// Returns `true` when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.ids.is_none()
            && self.name.is_none()
            && self.cost.is_none()
            && self.color.is_none()
            && self.card_type.is_none()
            && self.set.is_none()
    }

    /// Check every active predicate, in chain order.
    pub fn matches(&self, card: &CanonicalCard) -> bool {
        let card = &card.card;

        if let Some(ref ids) = self.ids {
            if !card.set_id().is_some_and(|id| ids.contains(id)) {
                return false;
            }
        }

        if let Some(ref name) = self.name {
            if !card
                .name()
                .is_some_and(|n| n.to_lowercase().contains(name.as_str()))
            {
                return false;
            }
        }

        if let Some(cost) = self.cost {
            if card.cost_text().as_deref() != Some(cost) {
                return false;
            }
        }

        if let Some(ref color) = self.color {
            if !card.color().is_some_and(|c| c.to_lowercase() == *color) {
                return false;
            }
        }

        if let Some(ref card_type) = self.card_type {
            if !card.card_type().is_some_and(|t| t.to_lowercase() == *card_type) {
                return false;
            }
        }

        if let Some(set) = self.set {
            if !card.set_id().is_some_and(|id| matches_set(id, set)) {
                return false;
            }
        }

        true
    }
}

/// Keep only the cards matching every filter in `params`.
pub fn apply_filters(cards: Vec<CanonicalCard>, params: &SearchCardsParams) -> Vec<CanonicalCard> {
    let filters = Filters::from_params(params);
    if filters.is_empty() {
        return cards;
    }

    let before = cards.len();
    let kept: Vec<CanonicalCard> = cards.into_iter().filter(|c| filters.matches(c)).collect();
    debug!(before, after = kept.len(), "applied filters");
    kept
}

/// Set-code prefix match.
///
/// Separators are ignored on both sides, so `OP-01`, `OP01` and `op01` all
/// select `OP01-xxx`. The promo query `P` (either case) matches `P-xxx` and
/// `Pxxx` codes but not the `PRB` family, which would otherwise share the
/// prefix.
pub fn matches_set(set_id: &str, query: &str) -> bool {
    if query.eq_ignore_ascii_case("P") {
        let id = set_id.to_ascii_uppercase();
        return id.starts_with("P-") || (id.starts_with('P') && !id.starts_with("PRB"));
    }
    strip_separators(set_id).starts_with(&strip_separators(query))
}

fn strip_separators(code: &str) -> String {
    code.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Trimmed, non-empty value that is not one of the "no filter" sentinels.
fn given<'a>(value: Option<&'a str>, sentinels: &[&str]) -> Option<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .filter(|v| !sentinels.iter().any(|s| v.eq_ignore_ascii_case(s)))
}
