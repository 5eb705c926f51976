//! Persistence gateway for the blog store: users, posts, comments.
//!
//! One function per operation, each mapping 1:1 to a single statement. No
//! transaction spans multiple statements and there is no retry policy; any
//! driver failure propagates to the caller.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::Post;

/// Create the blog tables on first run
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            username        TEXT NOT NULL UNIQUE,
            hashed_password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS posts (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            content     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS comments (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            content     TEXT NOT NULL,
            post_id     INTEGER NOT NULL REFERENCES posts(id),
            created_at  TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    tracing::info!("Blog database initialized successfully");

    Ok(())
}

pub async fn insert_user(
    pool: &SqlitePool,
    username: &str,
    hashed_password: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO users (username, hashed_password) VALUES (?, ?)")
        .bind(username)
        .bind(hashed_password)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn insert_post(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    created_at: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO posts (title, content, created_at) VALUES (?, ?, ?)")
        .bind(title)
        .bind(content)
        .bind(created_at)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_post(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT id, title, content, created_at FROM posts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List posts in storage order; skip and limit pass through unchecked
pub async fn list_posts(
    pool: &SqlitePool,
    skip: i64,
    limit: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT id, title, content, created_at FROM posts LIMIT ? OFFSET ?")
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await
}

/// Update exactly the mutable post fields; created_at is never touched
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    content: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE posts SET title = ?, content = ? WHERE id = ?")
        .bind(title)
        .bind(content)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn insert_comment(
    pool: &SqlitePool,
    content: &str,
    post_id: i64,
    created_at: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO comments (content, post_id, created_at) VALUES (?, ?, ?)")
        .bind(content)
        .bind(post_id)
        .bind(created_at)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}
