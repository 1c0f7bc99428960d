//! Professors (coordinators) directory.

use crate::error::AppError;
use crate::models::Professor;
use crate::timestamps;
use sqlx::AnyConnection;

const PROFESSOR_COLUMNS: &str = "id, name, email, course, created_at, updated_at";

#[derive(Debug)]
pub struct NewProfessor<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub course: &'a str,
}

#[derive(Debug, Default)]
pub struct ProfessorChanges<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
    pub course: Option<&'a str>,
}

pub struct ProfessorService;

impl ProfessorService {
    pub async fn list(conn: &mut AnyConnection, course: Option<&str>) -> Result<Vec<Professor>, AppError> {
        let filter = if course.is_some() { " WHERE course = $1" } else { "" };
        let sql = format!("SELECT {} FROM professors{} ORDER BY name, id", PROFESSOR_COLUMNS, filter);
        tracing::debug!(sql = %sql, ?course, "query");
        let mut query = sqlx::query_as::<_, Professor>(&sql);
        if let Some(course) = course {
            query = query.bind(course);
        }
        Ok(query.fetch_all(&mut *conn).await?)
    }

    pub async fn find(conn: &mut AnyConnection, id: i64) -> Result<Option<Professor>, AppError> {
        let sql = format!("SELECT {} FROM professors WHERE id = $1", PROFESSOR_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let professor = sqlx::query_as::<_, Professor>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(professor)
    }

    pub async fn exists(conn: &mut AnyConnection, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM professors WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(found.is_some())
    }

    /// Id of the professor holding `email`, if any.
    pub async fn id_by_email(conn: &mut AnyConnection, email: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar("SELECT id FROM professors WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn insert(conn: &mut AnyConnection, new: &NewProfessor<'_>) -> Result<i64, AppError> {
        let sql = "INSERT INTO professors (name, email, password, course, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";
        tracing::debug!(sql = %sql, email = new.email, "query");
        let now = timestamps::now();
        let id: i64 = sqlx::query_scalar(sql)
            .bind(new.name)
            .bind(new.email)
            .bind(new.password)
            .bind(new.course)
            .bind(now.as_str())
            .bind(now.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn update(
        conn: &mut AnyConnection,
        id: i64,
        changes: &ProfessorChanges<'_>,
    ) -> Result<u64, AppError> {
        let sql = "UPDATE professors SET name = COALESCE($1, name), email = COALESCE($2, email), \
                   password = COALESCE($3, password), course = COALESCE($4, course), updated_at = $5 \
                   WHERE id = $6";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(changes.name)
            .bind(changes.email)
            .bind(changes.password)
            .bind(changes.course)
            .bind(timestamps::now())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the professor and its subject links. Projects keep their
    /// `coordinator_id`; it is only checked again when a write sends it.
    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, AppError> {
        let links = sqlx::query("DELETE FROM subject_professors WHERE professor_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        let result = sqlx::query("DELETE FROM professors WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        tracing::debug!(id, links, "professor deleted");
        Ok(result.rows_affected())
    }
}
