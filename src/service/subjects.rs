//! Subjects and the professors linked to them.

use crate::error::AppError;
use crate::models::{Subject, SubjectProfessor};
use crate::timestamps;
use sqlx::AnyConnection;

const SUBJECT_COLUMNS: &str = "id, name, description, created_at, updated_at";

const LINK_SELECT: &str = "SELECT l.id, l.subject_id, l.professor_id, l.coordination, \
     p.name AS professor_name, p.email AS professor_email, l.created_at \
     FROM subject_professors l LEFT JOIN professors p ON p.id = l.professor_id";

pub struct SubjectService;

impl SubjectService {
    pub async fn list(conn: &mut AnyConnection) -> Result<Vec<Subject>, AppError> {
        let sql = format!("SELECT {} FROM subjects ORDER BY name, id", SUBJECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Subject>(&sql).fetch_all(&mut *conn).await?)
    }

    pub async fn find(conn: &mut AnyConnection, id: i64) -> Result<Option<Subject>, AppError> {
        let sql = format!("SELECT {} FROM subjects WHERE id = $1", SUBJECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let subject = sqlx::query_as::<_, Subject>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(subject)
    }

    pub async fn id_by_name(conn: &mut AnyConnection, name: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar("SELECT id FROM subjects WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn insert(conn: &mut AnyConnection, name: &str, description: Option<&str>) -> Result<i64, AppError> {
        let sql = "INSERT INTO subjects (name, description, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4) RETURNING id";
        tracing::debug!(sql = %sql, name, "query");
        let now = timestamps::now();
        let id: i64 = sqlx::query_scalar(sql)
            .bind(name)
            .bind(description)
            .bind(now.as_str())
            .bind(now.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn update(
        conn: &mut AnyConnection,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<u64, AppError> {
        let sql = "UPDATE subjects SET name = COALESCE($1, name), description = COALESCE($2, description), \
                   updated_at = $3 WHERE id = $4";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(name)
            .bind(description)
            .bind(timestamps::now())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the subject and its professor links.
    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, AppError> {
        sqlx::query("DELETE FROM subject_professors WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_links(conn: &mut AnyConnection, subject_id: i64) -> Result<Vec<SubjectProfessor>, AppError> {
        let sql = format!("{} WHERE l.subject_id = $1 ORDER BY l.id", LINK_SELECT);
        tracing::debug!(sql = %sql, subject_id, "query");
        let links = sqlx::query_as::<_, SubjectProfessor>(&sql)
            .bind(subject_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(links)
    }

    pub async fn find_link(conn: &mut AnyConnection, link_id: i64) -> Result<Option<SubjectProfessor>, AppError> {
        let sql = format!("{} WHERE l.id = $1", LINK_SELECT);
        tracing::debug!(sql = %sql, link_id, "query");
        let link = sqlx::query_as::<_, SubjectProfessor>(&sql)
            .bind(link_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(link)
    }

    /// Id of an existing link with the same subject, professor and coordination kind.
    pub async fn existing_link(
        conn: &mut AnyConnection,
        subject_id: i64,
        professor_id: i64,
        coordination: &str,
    ) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar(
            "SELECT id FROM subject_professors WHERE subject_id = $1 AND professor_id = $2 AND coordination = $3",
        )
        .bind(subject_id)
        .bind(professor_id)
        .bind(coordination)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(id)
    }

    pub async fn insert_link(
        conn: &mut AnyConnection,
        subject_id: i64,
        professor_id: i64,
        coordination: &str,
    ) -> Result<i64, AppError> {
        let sql = "INSERT INTO subject_professors (subject_id, professor_id, coordination, created_at) \
                   VALUES ($1, $2, $3, $4) RETURNING id";
        tracing::debug!(sql = %sql, subject_id, professor_id, coordination, "query");
        let id: i64 = sqlx::query_scalar(sql)
            .bind(subject_id)
            .bind(professor_id)
            .bind(coordination)
            .bind(timestamps::now())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn delete_link(conn: &mut AnyConnection, link_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM subject_professors WHERE id = $1")
            .bind(link_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
