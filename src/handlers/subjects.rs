//! `/api/materias` handlers, including the professors linked to a subject.

use super::required;
use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody, NestedIds};
use crate::models::{SubjectPayload, SubjectProfessorPayload, COORDINATION_KINDS};
use crate::response::{created, ok};
use crate::service::{non_blank, ProfessorService, RequestValidator, SubjectService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

const NOT_FOUND: &str = "Matéria não encontrada";
const NAME_TAKEN: &str = "Matéria já existe";
const LINK_NOT_FOUND: &str = "Vínculo não encontrado";

pub async fn list_subjects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    Ok(ok(SubjectService::list(&mut conn).await?))
}

pub async fn get_subject(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let subject = SubjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(ok(subject))
}

pub async fn create_subject(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SubjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new().require("nome", &payload.name).finish()?;
    let name = required(&payload.name);

    let mut conn = state.pool.acquire().await?;
    if SubjectService::id_by_name(&mut conn, name).await?.is_some() {
        return Err(AppError::BadRequest(NAME_TAKEN.into()));
    }
    let id = SubjectService::insert(&mut conn, name, payload.description.as_deref()).await?;
    let subject = SubjectService::find(&mut conn, id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    tracing::info!(id, "subject created");
    Ok(created(subject))
}

pub async fn update_subject(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<SubjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    let name = non_blank(&payload.name);
    let mut conn = state.pool.acquire().await?;
    if SubjectService::find(&mut conn, id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    if let Some(name) = name {
        if matches!(SubjectService::id_by_name(&mut conn, name).await?, Some(other) if other != id) {
            return Err(AppError::BadRequest(NAME_TAKEN.into()));
        }
    }
    SubjectService::update(&mut conn, id, name, payload.description.as_deref()).await?;
    let subject = SubjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    tracing::info!(id, "subject updated");
    Ok(ok(subject))
}

pub async fn delete_subject(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let subject = SubjectService::find(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    SubjectService::delete(&mut tx, id).await?;
    tx.commit().await?;
    tracing::info!(id, "subject deleted");
    Ok(ok(subject))
}

pub async fn list_subject_professors(
    State(state): State<AppState>,
    EntityId(subject_id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    if SubjectService::find(&mut conn, subject_id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(ok(SubjectService::list_links(&mut conn, subject_id).await?))
}

/// Link a professor to a subject. Re-linking with the same coordination kind is rejected.
pub async fn link_professor(
    State(state): State<AppState>,
    EntityId(subject_id): EntityId,
    JsonBody(payload): JsonBody<SubjectProfessorPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("professorId", &payload.professor_id)
        .require("tipoCoordenacao", &payload.coordination)
        .finish()?;
    let coordination = required(&payload.coordination);
    if !COORDINATION_KINDS.contains(&coordination) {
        return Err(AppError::BadRequest(format!(
            "tipoCoordenacao deve ser um de: {}",
            COORDINATION_KINDS.join(", ")
        )));
    }
    let professor_id = payload.professor_id.unwrap_or_default();

    let mut conn = state.pool.acquire().await?;
    if SubjectService::find(&mut conn, subject_id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    if !ProfessorService::exists(&mut conn, professor_id).await? {
        return Err(AppError::BadRequest("Professor não encontrado".into()));
    }
    if SubjectService::existing_link(&mut conn, subject_id, professor_id, coordination)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Professor já vinculado a esta matéria".into()));
    }
    let link_id = SubjectService::insert_link(&mut conn, subject_id, professor_id, coordination).await?;
    let link = SubjectService::find_link(&mut conn, link_id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    tracing::info!(subject_id, professor_id, coordination, "professor linked to subject");
    Ok(created(link))
}

pub async fn unlink_professor(
    State(state): State<AppState>,
    NestedIds(subject_id, link_id): NestedIds,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let link = SubjectService::find_link(&mut conn, link_id)
        .await?
        .ok_or_else(|| AppError::NotFound(LINK_NOT_FOUND.into()))?;
    if link.subject_id != subject_id {
        return Err(AppError::BadRequest("Vínculo não pertence a esta matéria".into()));
    }
    SubjectService::delete_link(&mut conn, link_id).await?;
    tracing::info!(subject_id, link_id, professor_id = link.professor_id, "professor unlinked from subject");
    Ok(ok(link))
}
