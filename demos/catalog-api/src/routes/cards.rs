use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use optcg_catalog::config::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use optcg_catalog::{CanonicalCard, Page, SearchCardsParams};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// Query string of `/onepiece`. Paging values are taken as text so that
/// garbage falls back to the defaults instead of rejecting the request.
#[derive(Deserialize)]
pub struct SearchParams {
    pub ids: Option<String>,
    pub name: Option<String>,
    pub cost: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub set: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

impl From<SearchParams> for SearchCardsParams {
    fn from(p: SearchParams) -> Self {
        SearchCardsParams {
            ids: p.ids,
            name: p.name,
            cost: p.cost,
            color: p.color,
            card_type: p.card_type,
            set: p.set,
            page: parse_positive(p.page.as_deref(), DEFAULT_PAGE),
            page_size: parse_positive(p.page_size.as_deref(), DEFAULT_PAGE_SIZE),
        }
    }
}

/// Non-numeric input gives `default`; numbers below 1 are clamped to 1.
fn parse_positive(raw: Option<&str>, default: usize) -> usize {
    match raw.map(str::trim).map(str::parse::<i64>) {
        Some(Ok(n)) => usize::try_from(n.max(1)).unwrap_or(default),
        _ => default,
    }
}

/// GET /onepiece?name=luffy&color=Red&type=Leader&cost=5&set=OP01&ids=OP01-001,OP01-002&page=1&pageSize=20
///
/// Search the grouped catalog. One entry per set id, alternate arts under
/// `versions`.
pub async fn search_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Page>, AppError> {
    let page = state.catalog.search(params.into()).await?;
    Ok(Json(page))
}

/// GET /onepiece/random
///
/// One printing picked at random from every printing of every card.
pub async fn random_card(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CanonicalCard>, AppError> {
    let card = state.catalog.random().await?;
    Ok(Json(card))
}

/// GET /onepiece/:set_id
///
/// One grouped card with all its versions.
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Path(set_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let card = state.catalog.get_by_set_id(&set_id).await?;

    match card {
        Some(c) => Ok(Json(json!({ "data": c }))),
        None => Err(AppError::not_found(format!("No card with set id '{set_id}'"))),
    }
}
