//! Shared test fixtures for the catalog integration tests.
//!
//! Provides [`StaticSource`], an in-memory [`CardSource`] whose catalogs can
//! be made to fail individually, and a small sample of optcgapi-shaped
//! records covering variants, reprints, promos and malformed rows.

#![allow(dead_code)]

use optcg_catalog::{
    decode_records, CanonicalCard, CardSource, CatalogClient, CatalogError, CatalogSource,
    RawCard, Result,
};
use serde_json::{json, Value};

pub const BASE_URL: &str = "https://www.optcgapi.com";

/// In-memory catalogs. `None` makes that catalog fail.
pub struct StaticSource {
    pub main_sets: Option<Vec<Value>>,
    pub starter_decks: Option<Vec<Value>>,
}

impl StaticSource {
    pub fn new(main_sets: Vec<Value>, starter_decks: Vec<Value>) -> Self {
        Self {
            main_sets: Some(main_sets),
            starter_decks: Some(starter_decks),
        }
    }
}

impl CardSource for StaticSource {
    fn fetch(&self, catalog: CatalogSource) -> Result<Vec<RawCard>> {
        let records = match catalog {
            CatalogSource::MainSets => &self.main_sets,
            CatalogSource::StarterDecks => &self.starter_decks,
        };
        match records {
            Some(values) => Ok(decode_records(catalog, values.clone())),
            None => Err(CatalogError::UpstreamUnavailable(format!(
                "{catalog} is down"
            ))),
        }
    }
}

/// A client over the sample catalogs.
pub fn sample_client() -> CatalogClient {
    client_with(StaticSource::new(sample_main_sets(), sample_starter_decks()))
}

pub fn client_with(source: StaticSource) -> CatalogClient {
    CatalogClient::builder()
        .base_url(BASE_URL)
        .source(source)
        .build()
        .unwrap()
}

/// Build one raw record from the fields the pipeline cares about.
pub fn card(set_id: &str, name: &str, image: &str) -> RawCard {
    serde_json::from_value(json!({
        "card_set_id": set_id,
        "card_name": name,
        "card_image": image,
    }))
    .unwrap()
}

pub fn set_ids(cards: &[CanonicalCard]) -> Vec<&str> {
    cards.iter().map(|c| c.set_id().unwrap_or("")).collect()
}

fn record(
    set_id: Option<&str>,
    name: &str,
    color: &str,
    card_type: &str,
    cost: Value,
    image: &str,
) -> Value {
    json!({
        "card_set_id": set_id,
        "card_name": name,
        "card_color": color,
        "card_type": card_type,
        "card_cost": cost,
        "card_image": image,
        "rarity": "C",
        "set_name": "sample",
    })
}

/// Main-set catalog: 10 records, 7 distinct set ids, one record without a
/// set id.
pub fn sample_main_sets() -> Vec<Value> {
    vec![
        record(
            Some("OP01-010"),
            "Usopp",
            "Red",
            "Character",
            json!(2),
            "/media/static/Card_Images/OP01-010.jpg",
        ),
        record(
            Some("OP01-001"),
            "Roronoa Zoro (Parallel)",
            "Red",
            "Leader",
            Value::Null,
            "/media/static/Card_Images/OP01-001_p1.jpg",
        ),
        record(
            Some("OP01-001"),
            "Roronoa Zoro",
            "Red",
            "Leader",
            Value::Null,
            "/media/static/Card_Images/OP01-001.jpg",
        ),
        record(
            Some("OP01-002"),
            "Trafalgar Law",
            "Red Green",
            "Leader",
            Value::Null,
            "/media/static/Card_Images/OP01-002.jpg",
        ),
        record(
            Some("OP02-001"),
            "Edward.Newgate",
            "Red",
            "Leader",
            Value::Null,
            "/media/static/Card_Images/OP02-001.jpg",
        ),
        record(
            Some("OP01-016"),
            "Nami (Reprint)",
            "Red",
            "Character",
            json!("1"),
            "/media/static/Card_Images/OP01-016_r1.jpg",
        ),
        record(
            Some("OP01-016"),
            "Nami",
            "Red",
            "Character",
            json!("1"),
            "/media/static/Card_Images/OP01-016.jpg",
        ),
        record(
            None,
            "Broken Record",
            "Red",
            "Character",
            json!(1),
            "/media/static/Card_Images/broken.jpg",
        ),
        record(
            Some("P-001"),
            "Monkey.D.Luffy",
            "Red",
            "Character",
            json!(4),
            "https://cdn.example.com/P-001.png",
        ),
        record(
            Some("PRB01-001"),
            "Sanji",
            "Yellow",
            "Character",
            json!(5),
            "/media/static/Card_Images/PRB01-001.jpg",
        ),
    ]
}

/// Starter-deck catalog: 2 distinct set ids.
pub fn sample_starter_decks() -> Vec<Value> {
    vec![
        record(
            Some("ST01-012"),
            "Monkey.D.Luffy",
            "Red",
            "Character",
            json!(5.0),
            "/media/static/Card_Images/ST01-012.jpg",
        ),
        record(
            Some("ST01-001"),
            "Monkey.D.Luffy",
            "Red",
            "Leader",
            Value::Null,
            "/media/static/Card_Images/ST01-001.jpg",
        ),
    ]
}
