use super::{FromValidate, HttpError, Json, Query, SharedState};
use crate::dynamodb::types::Record;

use axum::{extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct RawItemsQuery {
    #[serde(rename = "itemIds")]
    #[validate(required, custom = "has_item_ids")]
    item_ids: Option<String>,
}

#[derive(Debug)]
pub struct ItemsQuery {
    item_ids: Vec<String>,
}

impl FromValidate for ItemsQuery {
    type Validatable = RawItemsQuery;

    fn from(q: RawItemsQuery) -> ItemsQuery {
        ItemsQuery {
            item_ids: q.item_ids.as_deref().map(parse_ids).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RawItemQuery {
    #[serde(rename = "itemId")]
    #[validate(required, custom = "not_blank")]
    item_id: Option<String>,
}

#[derive(Debug)]
pub struct ItemQuery {
    item_id: String,
}

impl FromValidate for ItemQuery {
    type Validatable = RawItemQuery;

    fn from(q: RawItemQuery) -> ItemQuery {
        ItemQuery {
            item_id: q.item_id.unwrap_or_default().trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemsBody {
    item_ids: Vec<String>,
    items: Vec<Record>,
}

#[derive(Debug, Serialize)]
struct AllItemsBody {
    items: Vec<Record>,
}

/// Splits a comma separated id list, trimming each id and dropping empty ones.
fn parse_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

fn has_item_ids(raw: &str) -> Result<(), ValidationError> {
    if parse_ids(raw).is_empty() {
        let mut err = ValidationError::new("empty");
        err.message = Some("at least one item id is required".into());
        return Err(err);
    }
    Ok(())
}

fn not_blank(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("item id must not be blank".into());
        return Err(err);
    }
    Ok(())
}

pub async fn index(
    State(state): State<SharedState>,
    Query(query): Query<ItemsQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let ItemsQuery { item_ids } = query;

    let items = state
        .within_deadline(state.selector().resolve(&item_ids))
        .await?;

    Ok(Json(ItemsBody { item_ids, items }))
}

pub async fn all(State(state): State<SharedState>) -> Result<impl IntoResponse, HttpError> {
    let items = state.within_deadline(state.selector().scan_all()).await?;
    Ok(Json(AllItemsBody { items }))
}

pub async fn show(
    State(state): State<SharedState>,
    Query(query): Query<ItemQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let ItemQuery { item_id } = query;

    state
        .within_deadline(state.selector().get(&item_id))
        .await?
        .ok_or(HttpError::NotFound(format!("Item id: {item_id}")))
        .map(Json)
}
