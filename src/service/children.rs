//! Child collections owned by a parent row, updated by full replacement.

use crate::error::AppError;
use crate::timestamps;
use sqlx::{Any, AnyConnection, Encode, Type};

/// A table of child values keyed by the parent's id.
#[derive(Clone, Copy, Debug)]
pub struct ChildTable {
    pub table: &'static str,
    pub parent_column: &'static str,
    pub value_column: &'static str,
}

pub const EVENT_TAGS: ChildTable = ChildTable {
    table: "event_tags",
    parent_column: "event_id",
    value_column: "tag_number",
};

pub const EVENT_ATTACHMENTS: ChildTable = ChildTable {
    table: "event_attachments",
    parent_column: "event_id",
    value_column: "name",
};

impl ChildTable {
    /// Delete every child of `parent_id`, then insert `values` in order. No
    /// diffing: an empty slice leaves the parent with no children.
    pub async fn replace<T>(
        &self,
        conn: &mut AnyConnection,
        parent_id: i64,
        values: &[T],
    ) -> Result<(), AppError>
    where
        T: Clone + Send + std::fmt::Debug + for<'q> Encode<'q, Any> + Type<Any> + 'static,
    {
        let removed = self.delete_all(conn, parent_id).await?;
        let sql = format!(
            "INSERT INTO {} ({}, {}, created_at) VALUES ($1, $2, $3)",
            self.table, self.parent_column, self.value_column
        );
        let now = timestamps::now();
        for value in values {
            tracing::debug!(sql = %sql, parent_id, ?value, "query");
            sqlx::query(&sql)
                .bind(parent_id)
                .bind(value.clone())
                .bind(now.as_str())
                .execute(&mut *conn)
                .await?;
        }
        tracing::debug!(
            table = self.table,
            parent_id,
            removed,
            inserted = values.len(),
            "children replaced"
        );
        Ok(())
    }

    pub async fn delete_all(&self, conn: &mut AnyConnection, parent_id: i64) -> Result<u64, AppError> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", self.table, self.parent_column);
        tracing::debug!(sql = %sql, parent_id, "query");
        let result = sqlx::query(&sql).bind(parent_id).execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{connect, ensure_tables, Backend};

    async fn tag_numbers(conn: &mut AnyConnection, event_id: i64) -> Vec<i64> {
        sqlx::query_scalar("SELECT tag_number FROM event_tags WHERE event_id = $1 ORDER BY id")
            .bind(event_id)
            .fetch_all(&mut *conn)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_set() {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool, Backend::Sqlite).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        EVENT_TAGS.replace(&mut conn, 1, &[3_i64, 7]).await.unwrap();
        EVENT_TAGS.replace(&mut conn, 2, &[9_i64]).await.unwrap();
        assert_eq!(tag_numbers(&mut conn, 1).await, vec![3, 7]);

        EVENT_TAGS.replace(&mut conn, 1, &[5_i64]).await.unwrap();
        assert_eq!(tag_numbers(&mut conn, 1).await, vec![5]);
        assert_eq!(tag_numbers(&mut conn, 2).await, vec![9]);

        EVENT_TAGS.replace::<i64>(&mut conn, 1, &[]).await.unwrap();
        assert!(tag_numbers(&mut conn, 1).await.is_empty());
    }

    #[tokio::test]
    async fn attachments_use_text_values() {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool, Backend::Sqlite).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let names = vec!["a.pdf".to_string(), "b.png".to_string()];
        EVENT_ATTACHMENTS.replace(&mut conn, 4, &names).await.unwrap();
        let stored: Vec<String> =
            sqlx::query_scalar("SELECT name FROM event_attachments WHERE event_id = $1 ORDER BY id")
                .bind(4_i64)
                .fetch_all(&mut *conn)
                .await
                .unwrap();
        assert_eq!(stored, names);
        assert_eq!(EVENT_ATTACHMENTS.delete_all(&mut conn, 4).await.unwrap(), 2);
    }
}
