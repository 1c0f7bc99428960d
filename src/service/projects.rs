//! Research and extension projects. Both tables share the coordinator filter
//! and newest-first ordering.

use crate::error::AppError;
use crate::models::{ExtensionProject, ResearchProject};
use crate::timestamps;
use sqlx::AnyConnection;

const RESEARCH_COLUMNS: &str = "id, title, theme, description, occurs_at, research_problem, methodology, \
     expected_results, image, coordinator_id, created_at, updated_at";

const EXTENSION_COLUMNS: &str = "id, title, theme, description, occurs_at, target_audience, community, \
     image, coordinator_id, created_at, updated_at";

#[derive(Debug, Default)]
pub struct ResearchFields<'a> {
    pub title: Option<&'a str>,
    pub theme: Option<&'a str>,
    pub description: Option<&'a str>,
    pub occurs_at: Option<&'a str>,
    pub research_problem: Option<&'a str>,
    pub methodology: Option<&'a str>,
    pub expected_results: Option<&'a str>,
    pub image: Option<&'a str>,
    pub coordinator_id: Option<i64>,
}

#[derive(Debug, Default)]
pub struct ExtensionFields<'a> {
    pub title: Option<&'a str>,
    pub theme: Option<&'a str>,
    pub description: Option<&'a str>,
    pub occurs_at: Option<&'a str>,
    pub target_audience: Option<&'a str>,
    pub community: Option<&'a str>,
    pub image: Option<&'a str>,
    pub coordinator_id: Option<i64>,
}

fn coordinator_filter(coordinator_id: Option<i64>) -> &'static str {
    if coordinator_id.is_some() {
        " WHERE coordinator_id = $1"
    } else {
        ""
    }
}

pub struct ResearchProjectService;

impl ResearchProjectService {
    pub async fn list(
        conn: &mut AnyConnection,
        coordinator_id: Option<i64>,
    ) -> Result<Vec<ResearchProject>, AppError> {
        let sql = format!(
            "SELECT {} FROM research_projects{} ORDER BY created_at DESC, id DESC",
            RESEARCH_COLUMNS,
            coordinator_filter(coordinator_id)
        );
        tracing::debug!(sql = %sql, ?coordinator_id, "query");
        let mut query = sqlx::query_as::<_, ResearchProject>(&sql);
        if let Some(id) = coordinator_id {
            query = query.bind(id);
        }
        Ok(query.fetch_all(&mut *conn).await?)
    }

    pub async fn find(conn: &mut AnyConnection, id: i64) -> Result<Option<ResearchProject>, AppError> {
        let sql = format!("SELECT {} FROM research_projects WHERE id = $1", RESEARCH_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let project = sqlx::query_as::<_, ResearchProject>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(project)
    }

    /// Insert a project; every field except `image` must be set by the caller.
    pub async fn insert(conn: &mut AnyConnection, fields: &ResearchFields<'_>) -> Result<i64, AppError> {
        let sql = "INSERT INTO research_projects (title, theme, description, occurs_at, research_problem, \
                   methodology, expected_results, image, coordinator_id, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id";
        tracing::debug!(sql = %sql, title = ?fields.title, "query");
        let now = timestamps::now();
        let id: i64 = sqlx::query_scalar(sql)
            .bind(fields.title)
            .bind(fields.theme)
            .bind(fields.description)
            .bind(fields.occurs_at)
            .bind(fields.research_problem)
            .bind(fields.methodology)
            .bind(fields.expected_results)
            .bind(fields.image)
            .bind(fields.coordinator_id)
            .bind(now.as_str())
            .bind(now.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn update(conn: &mut AnyConnection, id: i64, fields: &ResearchFields<'_>) -> Result<u64, AppError> {
        let sql = "UPDATE research_projects SET title = COALESCE($1, title), theme = COALESCE($2, theme), \
                   description = COALESCE($3, description), occurs_at = COALESCE($4, occurs_at), \
                   research_problem = COALESCE($5, research_problem), \
                   methodology = COALESCE($6, methodology), \
                   expected_results = COALESCE($7, expected_results), image = COALESCE($8, image), \
                   coordinator_id = COALESCE($9, coordinator_id), updated_at = $10 WHERE id = $11";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(fields.title)
            .bind(fields.theme)
            .bind(fields.description)
            .bind(fields.occurs_at)
            .bind(fields.research_problem)
            .bind(fields.methodology)
            .bind(fields.expected_results)
            .bind(fields.image)
            .bind(fields.coordinator_id)
            .bind(timestamps::now())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM research_projects WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}

pub struct ExtensionProjectService;

impl ExtensionProjectService {
    pub async fn list(
        conn: &mut AnyConnection,
        coordinator_id: Option<i64>,
    ) -> Result<Vec<ExtensionProject>, AppError> {
        let sql = format!(
            "SELECT {} FROM extension_projects{} ORDER BY created_at DESC, id DESC",
            EXTENSION_COLUMNS,
            coordinator_filter(coordinator_id)
        );
        tracing::debug!(sql = %sql, ?coordinator_id, "query");
        let mut query = sqlx::query_as::<_, ExtensionProject>(&sql);
        if let Some(id) = coordinator_id {
            query = query.bind(id);
        }
        Ok(query.fetch_all(&mut *conn).await?)
    }

    pub async fn find(conn: &mut AnyConnection, id: i64) -> Result<Option<ExtensionProject>, AppError> {
        let sql = format!("SELECT {} FROM extension_projects WHERE id = $1", EXTENSION_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let project = sqlx::query_as::<_, ExtensionProject>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(project)
    }

    pub async fn insert(conn: &mut AnyConnection, fields: &ExtensionFields<'_>) -> Result<i64, AppError> {
        let sql = "INSERT INTO extension_projects (title, theme, description, occurs_at, target_audience, \
                   community, image, coordinator_id, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING id";
        tracing::debug!(sql = %sql, title = ?fields.title, "query");
        let now = timestamps::now();
        let id: i64 = sqlx::query_scalar(sql)
            .bind(fields.title)
            .bind(fields.theme)
            .bind(fields.description)
            .bind(fields.occurs_at)
            .bind(fields.target_audience)
            .bind(fields.community)
            .bind(fields.image)
            .bind(fields.coordinator_id)
            .bind(now.as_str())
            .bind(now.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn update(conn: &mut AnyConnection, id: i64, fields: &ExtensionFields<'_>) -> Result<u64, AppError> {
        let sql = "UPDATE extension_projects SET title = COALESCE($1, title), theme = COALESCE($2, theme), \
                   description = COALESCE($3, description), occurs_at = COALESCE($4, occurs_at), \
                   target_audience = COALESCE($5, target_audience), community = COALESCE($6, community), \
                   image = COALESCE($7, image), coordinator_id = COALESCE($8, coordinator_id), \
                   updated_at = $9 WHERE id = $10";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(fields.title)
            .bind(fields.theme)
            .bind(fields.description)
            .bind(fields.occurs_at)
            .bind(fields.target_audience)
            .bind(fields.community)
            .bind(fields.image)
            .bind(fields.coordinator_id)
            .bind(timestamps::now())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM extension_projects WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
