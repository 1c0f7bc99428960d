//! `/api/eventos` handlers. Parent row and child sets are written in one transaction.

use super::required;
use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody, QueryParams};
use crate::models::{EventFilter, EventPayload, DEFAULT_STATUS, MAX_TAG_NUMBER};
use crate::response::{created, message, ok};
use crate::service::{non_blank, EventChanges, EventService, NewEvent, RequestValidator};
use crate::state::AppState;
use crate::timestamps;
use axum::{extract::State, response::IntoResponse};

const NOT_FOUND: &str = "Evento não encontrado";

/// Tag numbers from the payload, range-checked and deduplicated in order.
fn validated_tags(payload: &EventPayload) -> Result<Option<Vec<i64>>, AppError> {
    let Some(numbers) = payload.tag_numbers() else {
        return Ok(None);
    };
    let mut tags = Vec::with_capacity(numbers.len());
    for n in numbers {
        if !(1..=MAX_TAG_NUMBER).contains(&n) {
            return Err(AppError::BadRequest(format!(
                "odsNumero inválido: {} (esperado 1 a {})",
                n, MAX_TAG_NUMBER
            )));
        }
        if !tags.contains(&n) {
            tags.push(n);
        }
    }
    Ok(Some(tags))
}

fn attachment_names(payload: &EventPayload) -> Option<Vec<String>> {
    payload.attachment_names().map(|names| {
        names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect()
    })
}

pub async fn list_events(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<EventFilter>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let events = EventService::list(&mut conn, non_blank(&filter.course)).await?;
    Ok(ok(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let event = EventService::detail(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(ok(event))
}

pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<EventPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("titulo", &payload.title)
        .require("data", &payload.date)
        .require("responsavel", &payload.responsible)
        .require("tipoEvento", &payload.event_type)
        .require("modalidade", &payload.modality)
        .finish()?;
    let date = timestamps::normalize("data", required(&payload.date))?;
    let tags = validated_tags(&payload)?;
    let attachments = attachment_names(&payload);

    let new = NewEvent {
        title: required(&payload.title),
        date: &date,
        responsible: required(&payload.responsible),
        status: non_blank(&payload.status).unwrap_or(DEFAULT_STATUS),
        location: payload.location.as_deref(),
        course: non_blank(&payload.course).unwrap_or(state.config.default_course.as_str()),
        event_type: required(&payload.event_type),
        modality: required(&payload.modality),
        description: payload.description.as_deref(),
        image: payload.image.as_deref(),
        document: payload.document.as_deref(),
        link: payload.link.as_deref(),
    };

    let mut tx = state.pool.begin().await?;
    let id = EventService::insert(&mut tx, &new).await?;
    if let Some(tags) = &tags {
        EventService::replace_tags(&mut tx, id, tags).await?;
    }
    if let Some(names) = &attachments {
        EventService::replace_attachments(&mut tx, id, names).await?;
    }
    let event = EventService::detail(&mut tx, id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    tx.commit().await?;

    tracing::info!(id, title = %event.event.title, "event created");
    Ok(created(event))
}

pub async fn update_event(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<EventPayload>,
) -> Result<impl IntoResponse, AppError> {
    let date = non_blank(&payload.date)
        .map(|raw| timestamps::normalize("data", raw))
        .transpose()?;
    let tags = validated_tags(&payload)?;
    let attachments = attachment_names(&payload);
    let changes = EventChanges {
        title: non_blank(&payload.title),
        date: date.as_deref(),
        responsible: non_blank(&payload.responsible),
        status: payload.status.as_deref(),
        location: payload.location.as_deref(),
        course: non_blank(&payload.course),
        event_type: non_blank(&payload.event_type),
        modality: non_blank(&payload.modality),
        description: payload.description.as_deref(),
        image: payload.image.as_deref(),
        document: payload.document.as_deref(),
        link: payload.link.as_deref(),
    };

    let mut tx = state.pool.begin().await?;
    if EventService::update(&mut tx, id, &changes).await? == 0 {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    if let Some(tags) = &tags {
        EventService::replace_tags(&mut tx, id, tags).await?;
    }
    if let Some(names) = &attachments {
        EventService::replace_attachments(&mut tx, id, names).await?;
    }
    let event = EventService::detail(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    tx.commit().await?;

    tracing::info!(id, "event updated");
    Ok(ok(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if EventService::delete(&mut tx, id).await? == 0 {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tx.commit().await?;
    tracing::info!(id, "event deleted");
    Ok(message("Evento deletado com sucesso"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagInput;

    #[test]
    fn tags_are_range_checked_and_deduplicated() {
        let payload = EventPayload {
            tags: Some(vec![TagInput::Number(5), TagInput::Number(5), TagInput::Number(17)]),
            ..Default::default()
        };
        assert_eq!(validated_tags(&payload).unwrap(), Some(vec![5, 17]));

        let payload = EventPayload {
            tags: Some(vec![TagInput::Number(18)]),
            ..Default::default()
        };
        assert!(matches!(validated_tags(&payload), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn blank_attachment_names_are_dropped() {
        let payload: EventPayload =
            serde_json::from_value(serde_json::json!({"anexos": ["  ", "ata.pdf "]})).unwrap();
        assert_eq!(attachment_names(&payload), Some(vec!["ata.pdf".to_string()]));
    }
}
