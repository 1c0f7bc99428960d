//! `/api/eventos/{id}/comentarios` handlers.

use super::required;
use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody, NestedIds};
use crate::models::{Comment, CommentPayload, CommentView};
use crate::response::{created, message, ok};
use crate::service::{CommentService, EventService, RequestValidator, UserService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use sqlx::AnyConnection;

const EVENT_NOT_FOUND: &str = "Evento não encontrado";
const COMMENT_NOT_FOUND: &str = "Comentário não encontrado";

/// Load a comment and make sure it hangs off `event_id`.
async fn comment_of_event(conn: &mut AnyConnection, event_id: i64, comment_id: i64) -> Result<Comment, AppError> {
    let comment = CommentService::find(conn, comment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.into()))?;
    if comment.event_id != event_id {
        return Err(AppError::BadRequest("Comentário não pertence a este evento".into()));
    }
    Ok(comment)
}

pub async fn list_comments(
    State(state): State<AppState>,
    EntityId(event_id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    if !EventService::exists(&mut conn, event_id).await? {
        return Err(AppError::NotFound(EVENT_NOT_FOUND.into()));
    }
    let comments: Vec<CommentView> = CommentService::list_for_event(&mut conn, event_id)
        .await?
        .into_iter()
        .map(CommentView::from)
        .collect();
    Ok(ok(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    EntityId(event_id): EntityId,
    JsonBody(payload): JsonBody<CommentPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("autor", &payload.author)
        .require("conteudo", &payload.content)
        .finish()?;

    let mut conn = state.pool.acquire().await?;
    if !EventService::exists(&mut conn, event_id).await? {
        return Err(AppError::NotFound(EVENT_NOT_FOUND.into()));
    }
    // An unknown user id is stored as an anonymous comment.
    let mut user_id = None;
    if let Some(id) = payload.user_id {
        if UserService::find(&mut conn, id).await?.is_some() {
            user_id = Some(id);
        }
    }
    let comment = CommentService::insert(
        &mut conn,
        event_id,
        user_id,
        required(&payload.author),
        required(&payload.content),
    )
    .await?;
    tracing::info!(event_id, id = comment.id, "comment created");
    Ok(created(comment))
}

pub async fn update_comment(
    State(state): State<AppState>,
    NestedIds(event_id, comment_id): NestedIds,
    JsonBody(payload): JsonBody<CommentPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("conteudo", &payload.content)
        .finish()?;
    let mut conn = state.pool.acquire().await?;
    comment_of_event(&mut conn, event_id, comment_id).await?;
    let comment = CommentService::update_content(&mut conn, comment_id, required(&payload.content)).await?;
    tracing::info!(event_id, id = comment_id, "comment updated");
    Ok(ok(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    NestedIds(event_id, comment_id): NestedIds,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    comment_of_event(&mut conn, event_id, comment_id).await?;
    CommentService::delete(&mut conn, comment_id).await?;
    tracing::info!(event_id, id = comment_id, "comment deleted");
    Ok(message("Comentário deletado com sucesso"))
}
