//! Items API handlers.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::constants::{DEFAULT_ITEMS_PAGE_SIZE, ERR_ITEM_NOT_FOUND};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::Item;
use crate::routes::health_check;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Query parameters for list endpoints; values are not bounds-checked
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_ITEMS_PAGE_SIZE
}

/// Build the items API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items/", post(create_item).get(list_items))
        .route(
            "/items/:id",
            get(read_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>> {
    let id =
        db::items::insert_item(&state.pool, &payload.name, payload.description.as_deref()).await?;

    tracing::info!("New item created: {}", payload.name);
    Ok(Json(Item {
        id,
        name: payload.name,
        description: payload.description,
    }))
}

pub async fn list_items(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Item>>> {
    let items = db::items::list_items(&state.pool, page.skip, page.limit).await?;

    tracing::info!("Retrieved {} items", items.len());
    Ok(Json(items))
}

pub async fn read_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>> {
    let item = db::items::find_item(&state.pool, item_id)
        .await?
        .ok_or(AppError::NotFound(ERR_ITEM_NOT_FOUND))?;

    tracing::info!("Retrieved item: {}", item_id);
    Ok(Json(item))
}

/// Update an item's name and description
///
/// The existence check and the update are separate statements; a concurrent
/// delete between them is not handled.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<Item>> {
    if db::items::find_item(&state.pool, item_id).await?.is_none() {
        return Err(AppError::NotFound(ERR_ITEM_NOT_FOUND));
    }

    db::items::update_item(
        &state.pool,
        item_id,
        &payload.name,
        payload.description.as_deref(),
    )
    .await?;

    tracing::info!("Item updated: {}", item_id);
    Ok(Json(Item {
        id: item_id,
        name: payload.name,
        description: payload.description,
    }))
}

/// Delete an item, responding with the row as it was before deletion
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<Item>> {
    let existing = db::items::find_item(&state.pool, item_id)
        .await?
        .ok_or(AppError::NotFound(ERR_ITEM_NOT_FOUND))?;

    db::items::delete_item(&state.pool, item_id).await?;

    tracing::info!("Item deleted: {}", item_id);
    Ok(Json(existing))
}
