use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// RawCard — one printing exactly as optcgapi returns it
// ---------------------------------------------------------------------------

/// A single printing of a card as returned by one of the upstream catalogs.
///
/// Only the fields the query pipeline reads are typed; everything else the
/// upstream sends (rarity, power, counter, effect text, prices, ...) lands in
/// [`extra`](Self::extra) and is serialized back out unchanged.
///
/// String fields are lenient: upstream occasionally sends numbers where text
/// is expected, and those are kept as their textual rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCard {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_set_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_color: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_cost: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawCard {
    /// The set identifier (e.g. `"OP01-001"`), or `None` when absent or blank.
    pub fn set_id(&self) -> Option<&str> {
        non_blank(self.card_set_id.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        self.card_name.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.card_color.as_deref()
    }

    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        non_blank(self.card_image.as_deref())
    }

    /// Render the cost as text, so that a numeric `3`, a float `3.0` and a
    /// string `"3"` all compare equal to the query value `"3"`.
    pub fn cost_text(&self) -> Option<String> {
        match self.card_cost.as_ref()? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i.to_string())
                } else if let Some(u) = n.as_u64() {
                    Some(u.to_string())
                } else {
                    n.as_f64().map(|f| {
                        if f.is_finite() && f.fract() == 0.0 {
                            format!("{}", f as i64)
                        } else {
                            f.to_string()
                        }
                    })
                }
            }
            Value::String(s) => non_blank(Some(s.trim())).map(str::to_string),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// CanonicalCard — the printing chosen to represent a set id
// ---------------------------------------------------------------------------

/// One logical card: the canonical printing's own fields, flattened, plus the
/// other printings sharing its set id.
///
/// `versions` never contains the canonical printing itself. Build through
/// [`new`](Self::new) or [`single`](Self::single) so an upstream field that is
/// also called `versions` cannot collide with it on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalCard {
    #[serde(flatten)]
    pub card: RawCard,
    #[serde(default)]
    pub versions: Vec<RawCard>,
}

impl CanonicalCard {
    pub fn new(mut card: RawCard, versions: Vec<RawCard>) -> Self {
        card.extra.remove(VERSIONS_KEY);
        Self { card, versions }
    }

    /// Wrap a single printing with no alternate versions.
    pub fn single(card: RawCard) -> Self {
        Self::new(card, Vec::new())
    }

    pub fn set_id(&self) -> Option<&str> {
        self.card.set_id()
    }

    /// Every printing in the group, canonical first.
    pub fn printings(&self) -> impl Iterator<Item = &RawCard> {
        std::iter::once(&self.card).chain(self.versions.iter())
    }

    /// Flatten back into the raw printings, canonical first.
    pub fn into_printings(self) -> Vec<RawCard> {
        let mut out = Vec::with_capacity(self.versions.len() + 1);
        out.push(self.card);
        out.extend(self.versions);
        out
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const VERSIONS_KEY: &str = "versions";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
