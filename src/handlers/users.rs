//! `/api/usuarios` handlers.

use super::required;
use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody};
use crate::models::{is_teaching_role, UserPayload};
use crate::response::{created, message, ok};
use crate::service::{
    non_blank, validate_email, CommentService, NewProfessor, NewUser, ProfessorService,
    RequestValidator, UserChanges, UserService,
};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

const NOT_FOUND: &str = "Usuário não encontrado";

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    Ok(ok(UserService::list(&mut conn).await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let user = UserService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(ok(user))
}

/// Create the user; teaching roles also get a professors row unless that email is already there.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("nome", &payload.name)
        .require("email", &payload.email)
        .require("senha", &payload.password)
        .require("cargo", &payload.role)
        .finish()?;
    let email = required(&payload.email);
    validate_email("email", email)?;
    let new = NewUser {
        name: required(&payload.name),
        email,
        password: required(&payload.password),
        role: required(&payload.role),
        course: non_blank(&payload.course),
    };

    let mut tx = state.pool.begin().await?;
    if UserService::email_taken(&mut tx, email).await? {
        return Err(AppError::BadRequest("Email já cadastrado".into()));
    }
    let id = UserService::insert(&mut tx, &new).await?;
    if is_teaching_role(new.role) && ProfessorService::id_by_email(&mut tx, email).await?.is_none() {
        let professor = NewProfessor {
            name: new.name,
            email,
            password: new.password,
            course: new.course.unwrap_or(state.config.default_course.as_str()),
        };
        let professor_id = ProfessorService::insert(&mut tx, &professor).await?;
        tracing::info!(user_id = id, professor_id, "professor created for user");
    }
    let user = UserService::find(&mut tx, id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    tx.commit().await?;

    tracing::info!(id, role = %user.role, "user created");
    Ok(created(user))
}

pub async fn update_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let changes = UserChanges {
        name: non_blank(&payload.name),
        password: non_blank(&payload.password),
        role: non_blank(&payload.role),
        course: non_blank(&payload.course),
    };
    let mut conn = state.pool.acquire().await?;
    if UserService::update(&mut conn, id, &changes).await? == 0 {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    let user = UserService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    tracing::info!(id, role = %user.role, "user updated");
    Ok(ok(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    let detached = CommentService::detach_user(&mut tx, id).await?;
    if UserService::delete(&mut tx, id).await? == 0 {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tx.commit().await?;
    tracing::info!(id, detached, "user deleted");
    Ok(message("Usuário deletado com sucesso"))
}
