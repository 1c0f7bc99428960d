//! `/api/professores` handlers.

use super::required;
use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody, QueryParams};
use crate::models::{ProfessorFilter, ProfessorPayload};
use crate::response::{created, ok};
use crate::service::{
    non_blank, validate_email, NewProfessor, ProfessorChanges, ProfessorService, RequestValidator,
};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

const NOT_FOUND: &str = "Professor não encontrado";
const EMAIL_TAKEN: &str = "Email já cadastrado";

pub async fn list_professors(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<ProfessorFilter>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let professors = ProfessorService::list(&mut conn, non_blank(&filter.course)).await?;
    Ok(ok(professors))
}

pub async fn get_professor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let professor = ProfessorService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(ok(professor))
}

pub async fn create_professor(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProfessorPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("nome", &payload.name)
        .require("email", &payload.email)
        .require("senha", &payload.password)
        .require("curso", &payload.course)
        .finish()?;
    let email = required(&payload.email);
    validate_email("email", email)?;

    let mut conn = state.pool.acquire().await?;
    if ProfessorService::id_by_email(&mut conn, email).await?.is_some() {
        return Err(AppError::BadRequest(EMAIL_TAKEN.into()));
    }
    let id = ProfessorService::insert(
        &mut conn,
        &NewProfessor {
            name: required(&payload.name),
            email,
            password: required(&payload.password),
            course: required(&payload.course),
        },
    )
    .await?;
    let professor = ProfessorService::find(&mut conn, id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    tracing::info!(id, "professor created");
    Ok(created(professor))
}

pub async fn update_professor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<ProfessorPayload>,
) -> Result<impl IntoResponse, AppError> {
    let email = non_blank(&payload.email);
    if let Some(email) = email {
        validate_email("email", email)?;
    }

    let mut conn = state.pool.acquire().await?;
    if ProfessorService::find(&mut conn, id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    if let Some(email) = email {
        if matches!(ProfessorService::id_by_email(&mut conn, email).await?, Some(other) if other != id) {
            return Err(AppError::BadRequest(EMAIL_TAKEN.into()));
        }
    }
    let changes = ProfessorChanges {
        name: non_blank(&payload.name),
        email,
        password: non_blank(&payload.password),
        course: non_blank(&payload.course),
    };
    ProfessorService::update(&mut conn, id, &changes).await?;
    let professor = ProfessorService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    tracing::info!(id, "professor updated");
    Ok(ok(professor))
}

/// Delete and answer with the row as it was.
pub async fn delete_professor(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let professor = ProfessorService::find(&mut tx, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    ProfessorService::delete(&mut tx, id).await?;
    tx.commit().await?;
    tracing::info!(id, "professor deleted");
    Ok(ok(professor))
}
