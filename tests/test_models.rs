//! Record deserialization and serialized response shape.

use optcg_catalog::{CanonicalCard, Page, RawCard};
use serde_json::json;

#[test]
fn unknown_fields_pass_through() {
    let value = json!({
        "card_set_id": "OP01-001",
        "card_name": "Roronoa Zoro",
        "rarity": "L",
        "life": "5",
        "inventory_price": 1.25,
    });
    let card: RawCard = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(card.extra["rarity"], "L");
    assert_eq!(card.extra["inventory_price"], 1.25);

    let back = serde_json::to_value(&card).unwrap();
    assert_eq!(back["rarity"], "L");
    assert_eq!(back["life"], "5");
    assert_eq!(back["card_set_id"], "OP01-001");
}

#[test]
fn string_fields_accept_numbers_and_null() {
    let card: RawCard = serde_json::from_value(json!({
        "card_set_id": "OP01-001",
        "card_name": 1234,
        "card_color": null,
    }))
    .unwrap();
    assert_eq!(card.name(), Some("1234"));
    assert_eq!(card.color(), None);
    assert_eq!(card.card_type(), None);
}

#[test]
fn blank_set_id_counts_as_missing() {
    let card: RawCard = serde_json::from_value(json!({ "card_set_id": "   " })).unwrap();
    assert_eq!(card.set_id(), None);
}

#[test]
fn cost_text_renders_every_upstream_shape() {
    let cost = |v: serde_json::Value| {
        serde_json::from_value::<RawCard>(json!({ "card_cost": v }))
            .unwrap()
            .cost_text()
    };
    assert_eq!(cost(json!(3)), Some("3".to_string()));
    assert_eq!(cost(json!(3.0)), Some("3".to_string()));
    assert_eq!(cost(json!(2.5)), Some("2.5".to_string()));
    assert_eq!(cost(json!(" 4 ")), Some("4".to_string()));
    assert_eq!(cost(json!("")), None);
    assert_eq!(cost(json!(null)), None);
    assert_eq!(cost(json!([1])), None);
}

#[test]
fn canonical_card_serializes_flat_with_versions() {
    let base: RawCard = serde_json::from_value(json!({
        "card_set_id": "OP01-001",
        "card_name": "Roronoa Zoro",
        "rarity": "L",
    }))
    .unwrap();
    let alt: RawCard = serde_json::from_value(json!({
        "card_set_id": "OP01-001",
        "card_name": "Roronoa Zoro (Parallel)",
    }))
    .unwrap();
    let card = CanonicalCard::new(base, vec![alt]);

    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["card_name"], "Roronoa Zoro");
    assert_eq!(value["rarity"], "L");
    assert_eq!(value["versions"][0]["card_name"], "Roronoa Zoro (Parallel)");
    assert!(value["versions"][0].get("versions").is_none());

    let back: CanonicalCard = serde_json::from_value(value).unwrap();
    assert_eq!(back, card);
}

#[test]
fn absent_typed_fields_stay_absent() {
    let card: RawCard = serde_json::from_value(json!({
        "card_set_id": "OP01-001",
        "rarity": "L",
    }))
    .unwrap();

    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value, json!({ "card_set_id": "OP01-001", "rarity": "L" }));
}

#[test]
fn upstream_versions_field_does_not_duplicate_key() {
    let raw: RawCard = serde_json::from_value(json!({
        "card_set_id": "OP01-001",
        "card_name": "Roronoa Zoro",
        "versions": "x",
    }))
    .unwrap();
    let alt = raw.clone();

    let text = serde_json::to_string(&CanonicalCard::new(raw.clone(), vec![alt])).unwrap();
    assert_eq!(text.matches("\"versions\":").count(), 2);
    assert!(!text.contains("\"versions\":\"x\",\"versions\""));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["versions"].is_array());
    assert_eq!(value["versions"][0]["versions"], "x");

    let single = serde_json::to_string(&CanonicalCard::single(raw)).unwrap();
    assert_eq!(single.matches("\"versions\":").count(), 1);
    assert!(single.contains("\"versions\":[]"));
}

#[test]
fn page_uses_camel_case_keys() {
    let page = Page {
        data: Vec::new(),
        current_page: 2,
        total_pages: 3,
        total_cards: 45,
    };
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["currentPage"], 2);
    assert_eq!(value["totalPages"], 3);
    assert_eq!(value["totalCards"], 45);
    assert!(value["data"].as_array().unwrap().is_empty());
}
