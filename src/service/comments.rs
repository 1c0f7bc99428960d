//! Comments on events.

use crate::error::AppError;
use crate::models::{Comment, CommentRow};
use crate::timestamps;
use sqlx::AnyConnection;

const COMMENT_COLUMNS: &str = "id, event_id, user_id, author, content, created_at, updated_at";

pub struct CommentService;

impl CommentService {
    /// Comments of one event, newest first, joined with their author's user row.
    pub async fn list_for_event(conn: &mut AnyConnection, event_id: i64) -> Result<Vec<CommentRow>, AppError> {
        let sql = "SELECT c.id, c.event_id, c.user_id, c.author, c.content, c.created_at, c.updated_at, \
                   u.name AS user_name, u.email AS user_email \
                   FROM event_comments c LEFT JOIN users u ON u.id = c.user_id \
                   WHERE c.event_id = $1 ORDER BY c.created_at DESC, c.id DESC";
        tracing::debug!(sql = %sql, event_id, "query");
        let rows = sqlx::query_as::<_, CommentRow>(sql)
            .bind(event_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    pub async fn find(conn: &mut AnyConnection, id: i64) -> Result<Option<Comment>, AppError> {
        let sql = format!("SELECT {} FROM event_comments WHERE id = $1", COMMENT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(comment)
    }

    pub async fn insert(
        conn: &mut AnyConnection,
        event_id: i64,
        user_id: Option<i64>,
        author: &str,
        content: &str,
    ) -> Result<Comment, AppError> {
        let sql = "INSERT INTO event_comments (event_id, user_id, author, content, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";
        tracing::debug!(sql = %sql, event_id, ?user_id, "query");
        let now = timestamps::now();
        let id: i64 = sqlx::query_scalar(sql)
            .bind(event_id)
            .bind(user_id)
            .bind(author)
            .bind(content)
            .bind(now.as_str())
            .bind(now.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Self::find(conn, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn update_content(conn: &mut AnyConnection, id: i64, content: &str) -> Result<Comment, AppError> {
        let sql = "UPDATE event_comments SET content = $1, updated_at = $2 WHERE id = $3";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(sql)
            .bind(content)
            .bind(timestamps::now())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Self::find(conn, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM event_comments WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Keep comments when their user goes away, but drop the link.
    pub async fn detach_user(conn: &mut AnyConnection, user_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE event_comments SET user_id = NULL WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
