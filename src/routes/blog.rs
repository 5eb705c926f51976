//! Blog API handlers: users, posts, comments.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::constants::{DEFAULT_POSTS_PAGE_SIZE, ERR_POST_NOT_FOUND, PLACEHOLDER_PASSWORD_HASH};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{Comment, Post, User};
use crate::routes::health_check;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Accepted from the caller but replaced by the generated row id
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub post_id: i64,
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
    DEFAULT_POSTS_PAGE_SIZE
}

/// Build the blog API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(create_user))
        .route("/posts", post(create_post).get(list_posts))
        .route(
            "/posts/:id",
            get(read_post).put(update_post).delete(delete_post),
        )
        .route("/comments", post(create_comment))
        .with_state(state)
}

/// Create a user with a placeholder password hash
///
/// The response carries the generated id, not the caller-supplied one.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<User>> {
    tracing::info!("Creating user: {}", payload.username);
    tracing::debug!("Ignoring caller-supplied user id: {}", payload.id);

    let id = db::blog::insert_user(&state.pool, &payload.username, PLACEHOLDER_PASSWORD_HASH)
        .await?;

    tracing::info!("New user created: {}", payload.username);
    Ok(Json(User {
        id,
        username: payload.username,
    }))
}

/// Create a post; created_at is server time at insert
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>> {
    let created_at = Utc::now();
    let id = db::blog::insert_post(&state.pool, &payload.title, &payload.content, created_at)
        .await?;

    tracing::info!("New post created: {}", payload.title);
    Ok(Json(Post {
        id,
        title: payload.title,
        content: payload.content,
        created_at,
    }))
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Post>>> {
    let posts = db::blog::list_posts(&state.pool, page.skip, page.limit).await?;

    tracing::info!("Retrieved {} posts", posts.len());
    Ok(Json(posts))
}

pub async fn read_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<Json<Post>> {
    let post = db::blog::find_post(&state.pool, post_id)
        .await?
        .ok_or(AppError::NotFound(ERR_POST_NOT_FOUND))?;

    tracing::info!("Retrieved post: {}", post_id);
    Ok(Json(post))
}

/// Update a post's title and content, preserving its original created_at
///
/// The existence check and the update are separate statements; a concurrent
/// delete between them is not handled.
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<Post>> {
    let existing = db::blog::find_post(&state.pool, post_id)
        .await?
        .ok_or(AppError::NotFound(ERR_POST_NOT_FOUND))?;

    db::blog::update_post(&state.pool, post_id, &payload.title, &payload.content).await?;

    tracing::info!("Post updated: {}", post_id);
    Ok(Json(Post {
        id: post_id,
        title: payload.title,
        content: payload.content,
        created_at: existing.created_at,
    }))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<StatusCode> {
    if db::blog::find_post(&state.pool, post_id).await?.is_none() {
        return Err(AppError::NotFound(ERR_POST_NOT_FOUND));
    }

    db::blog::delete_post(&state.pool, post_id).await?;

    tracing::info!("Post deleted: {}", post_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Create a comment; post_id is stored as given, without a parent check
pub async fn create_comment(
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<Json<Comment>> {
    let created_at = Utc::now();
    let id =
        db::blog::insert_comment(&state.pool, &payload.content, payload.post_id, created_at)
            .await?;

    tracing::info!("New comment created for post {}", payload.post_id);
    Ok(Json(Comment {
        id,
        content: payload.content,
        post_id: payload.post_id,
        created_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        let page: Pagination = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, DEFAULT_POSTS_PAGE_SIZE);
    }

    #[test]
    fn test_pagination_passes_values_through() {
        // Negative values are accepted; nothing bounds-checks them
        let page: Pagination = serde_json::from_value(json!({"skip": -3, "limit": 5000})).unwrap();
        assert_eq!(page.skip, -3);
        assert_eq!(page.limit, 5000);
    }
}
