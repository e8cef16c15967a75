//! Async wrapper tests. Only built with `--features async`.

#![cfg(feature = "async")]

mod common;

use common::StaticSource;
use optcg_catalog::{AsyncCatalogClient, CatalogError, SearchCardsParams};

async fn sample_async_client() -> AsyncCatalogClient {
    AsyncCatalogClient::builder()
        .base_url(common::BASE_URL)
        .source(StaticSource::new(
            common::sample_main_sets(),
            common::sample_starter_decks(),
        ))
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn async_search_matches_sync_pipeline() {
    let client = sample_async_client().await;
    let page = client
        .search(SearchCardsParams {
            set: Some("OP01".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(
        common::set_ids(&page.data),
        vec!["OP01-001", "OP01-002", "OP01-010", "OP01-016"]
    );
}

#[tokio::test]
async fn async_get_by_set_id_and_random() {
    let client = sample_async_client().await;

    let card = client.get_by_set_id("ST01-012").await.unwrap().unwrap();
    assert_eq!(card.card.cost_text().as_deref(), Some("5"));

    let pick = client.random().await.unwrap();
    assert!(pick.versions.is_empty());
}

#[tokio::test]
async fn async_run_propagates_errors() {
    let client = sample_async_client().await;
    let err = client
        .run(|c| c.cards().get_by_set_id(""))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidArgument(_)));
}
