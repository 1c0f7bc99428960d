//! `/api/projetos-pesquisa` and `/api/projetos-extensao` handlers.

use super::required;
use crate::error::AppError;
use crate::extractors::{EntityId, JsonBody, QueryParams};
use crate::models::{ExtensionProjectPayload, ProjectFilter, ResearchProjectPayload};
use crate::response::{created, ok};
use crate::service::{
    non_blank, ExtensionFields, ExtensionProjectService, ProfessorService, RequestValidator,
    ResearchFields, ResearchProjectService,
};
use crate::state::AppState;
use crate::timestamps;
use axum::{extract::State, response::IntoResponse};
use sqlx::AnyConnection;

const RESEARCH_NOT_FOUND: &str = "Projeto de pesquisa não encontrado";
const EXTENSION_NOT_FOUND: &str = "Projeto de extensão não encontrado";

async fn ensure_coordinator(conn: &mut AnyConnection, coordinator_id: Option<i64>) -> Result<(), AppError> {
    if let Some(id) = coordinator_id {
        if !ProfessorService::exists(conn, id).await? {
            return Err(AppError::BadRequest(format!(
                "Professor coordenador {} não encontrado",
                id
            )));
        }
    }
    Ok(())
}

fn occurs_at(raw: &Option<String>) -> Result<Option<String>, AppError> {
    non_blank(raw)
        .map(|value| timestamps::normalize("momentoOcorre", value))
        .transpose()
}

pub async fn list_research_projects(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<ProjectFilter>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    Ok(ok(ResearchProjectService::list(&mut conn, filter.coordinator_id).await?))
}

pub async fn get_research_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let project = ResearchProjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESEARCH_NOT_FOUND.into()))?;
    Ok(ok(project))
}

pub async fn create_research_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ResearchProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("titulo", &payload.title)
        .require("areaTematica", &payload.theme)
        .require("descricao", &payload.description)
        .require("momentoOcorre", &payload.occurs_at)
        .require("problemaPesquisa", &payload.research_problem)
        .require("metodologia", &payload.methodology)
        .require("resultadosEsperados", &payload.expected_results)
        .require("professorCoordenadorId", &payload.coordinator_id)
        .finish()?;
    let occurs_at = occurs_at(&payload.occurs_at)?;
    let fields = ResearchFields {
        title: Some(required(&payload.title)),
        theme: Some(required(&payload.theme)),
        description: Some(required(&payload.description)),
        occurs_at: occurs_at.as_deref(),
        research_problem: Some(required(&payload.research_problem)),
        methodology: Some(required(&payload.methodology)),
        expected_results: Some(required(&payload.expected_results)),
        image: non_blank(&payload.image),
        coordinator_id: payload.coordinator_id,
    };

    let mut conn = state.pool.acquire().await?;
    ensure_coordinator(&mut conn, fields.coordinator_id).await?;
    let id = ResearchProjectService::insert(&mut conn, &fields).await?;
    let project = ResearchProjectService::find(&mut conn, id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    tracing::info!(id, coordinator_id = project.coordinator_id, "research project created");
    Ok(created(project))
}

pub async fn update_research_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<ResearchProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    let occurs_at = occurs_at(&payload.occurs_at)?;
    let fields = ResearchFields {
        title: non_blank(&payload.title),
        theme: non_blank(&payload.theme),
        description: non_blank(&payload.description),
        occurs_at: occurs_at.as_deref(),
        research_problem: non_blank(&payload.research_problem),
        methodology: non_blank(&payload.methodology),
        expected_results: non_blank(&payload.expected_results),
        image: payload.image.as_deref(),
        coordinator_id: payload.coordinator_id,
    };

    let mut conn = state.pool.acquire().await?;
    if ResearchProjectService::find(&mut conn, id).await?.is_none() {
        return Err(AppError::NotFound(RESEARCH_NOT_FOUND.into()));
    }
    ensure_coordinator(&mut conn, fields.coordinator_id).await?;
    ResearchProjectService::update(&mut conn, id, &fields).await?;
    let project = ResearchProjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESEARCH_NOT_FOUND.into()))?;
    tracing::info!(id, "research project updated");
    Ok(ok(project))
}

pub async fn delete_research_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let project = ResearchProjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(RESEARCH_NOT_FOUND.into()))?;
    ResearchProjectService::delete(&mut conn, id).await?;
    tracing::info!(id, "research project deleted");
    Ok(ok(project))
}

pub async fn list_extension_projects(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<ProjectFilter>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    Ok(ok(ExtensionProjectService::list(&mut conn, filter.coordinator_id).await?))
}

pub async fn get_extension_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let project = ExtensionProjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(EXTENSION_NOT_FOUND.into()))?;
    Ok(ok(project))
}

pub async fn create_extension_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ExtensionProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new()
        .require("titulo", &payload.title)
        .require("areaTematica", &payload.theme)
        .require("descricao", &payload.description)
        .require("momentoOcorre", &payload.occurs_at)
        .require("tipoPessoasProcuram", &payload.target_audience)
        .require("comunidadeEnvolvida", &payload.community)
        .require("professorCoordenadorId", &payload.coordinator_id)
        .finish()?;
    let occurs_at = occurs_at(&payload.occurs_at)?;
    let fields = ExtensionFields {
        title: Some(required(&payload.title)),
        theme: Some(required(&payload.theme)),
        description: Some(required(&payload.description)),
        occurs_at: occurs_at.as_deref(),
        target_audience: Some(required(&payload.target_audience)),
        community: Some(required(&payload.community)),
        image: non_blank(&payload.image),
        coordinator_id: payload.coordinator_id,
    };

    let mut conn = state.pool.acquire().await?;
    ensure_coordinator(&mut conn, fields.coordinator_id).await?;
    let id = ExtensionProjectService::insert(&mut conn, &fields).await?;
    let project = ExtensionProjectService::find(&mut conn, id)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    tracing::info!(id, coordinator_id = project.coordinator_id, "extension project created");
    Ok(created(project))
}

pub async fn update_extension_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(payload): JsonBody<ExtensionProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    let occurs_at = occurs_at(&payload.occurs_at)?;
    let fields = ExtensionFields {
        title: non_blank(&payload.title),
        theme: non_blank(&payload.theme),
        description: non_blank(&payload.description),
        occurs_at: occurs_at.as_deref(),
        target_audience: non_blank(&payload.target_audience),
        community: non_blank(&payload.community),
        image: payload.image.as_deref(),
        coordinator_id: payload.coordinator_id,
    };

    let mut conn = state.pool.acquire().await?;
    if ExtensionProjectService::find(&mut conn, id).await?.is_none() {
        return Err(AppError::NotFound(EXTENSION_NOT_FOUND.into()));
    }
    ensure_coordinator(&mut conn, fields.coordinator_id).await?;
    ExtensionProjectService::update(&mut conn, id, &fields).await?;
    let project = ExtensionProjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(EXTENSION_NOT_FOUND.into()))?;
    tracing::info!(id, "extension project updated");
    Ok(ok(project))
}

pub async fn delete_extension_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let project = ExtensionProjectService::find(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(EXTENSION_NOT_FOUND.into()))?;
    ExtensionProjectService::delete(&mut conn, id).await?;
    tracing::info!(id, "extension project deleted");
    Ok(ok(project))
}
