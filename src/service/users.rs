//! Users. The password column is written but never selected.

use crate::error::AppError;
use crate::models::User;
use crate::timestamps;
use sqlx::AnyConnection;

const USER_COLUMNS: &str = "id, name, email, role, course, created_at, updated_at";

#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: &'a str,
    pub course: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct UserChanges<'a> {
    pub name: Option<&'a str>,
    pub password: Option<&'a str>,
    pub role: Option<&'a str>,
    pub course: Option<&'a str>,
}

pub struct UserService;

impl UserService {
    pub async fn list(conn: &mut AnyConnection) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let users = sqlx::query_as::<_, User>(&sql).fetch_all(&mut *conn).await?;
        Ok(users)
    }

    pub async fn find(conn: &mut AnyConnection, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    pub async fn email_taken(conn: &mut AnyConnection, email: &str) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(found.is_some())
    }

    pub async fn insert(conn: &mut AnyConnection, new: &NewUser<'_>) -> Result<i64, AppError> {
        let sql = "INSERT INTO users (name, email, password, role, course, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id";
        tracing::debug!(sql = %sql, email = new.email, role = new.role, "query");
        let now = timestamps::now();
        let id: i64 = sqlx::query_scalar(sql)
            .bind(new.name)
            .bind(new.email)
            .bind(new.password)
            .bind(new.role)
            .bind(new.course)
            .bind(now.as_str())
            .bind(now.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    pub async fn update(conn: &mut AnyConnection, id: i64, changes: &UserChanges<'_>) -> Result<u64, AppError> {
        let sql = "UPDATE users SET name = COALESCE($1, name), password = COALESCE($2, password), \
                   role = COALESCE($3, role), course = COALESCE($4, course), updated_at = $5 WHERE id = $6";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(changes.name)
            .bind(changes.password)
            .bind(changes.role)
            .bind(changes.course)
            .bind(timestamps::now())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
