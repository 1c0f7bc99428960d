//! Events and their tag/attachment children.

use super::children::{EVENT_ATTACHMENTS, EVENT_TAGS};
use crate::error::AppError;
use crate::models::{Event, EventAttachment, EventDetail, EventTag};
use crate::timestamps;
use sqlx::AnyConnection;
use std::collections::HashMap;

const EVENT_COLUMNS: &str = "id, title, date, responsible, status, location, course, event_type, \
     modality, description, image, document, link, created_at, updated_at";

/// Validated values for a new event row.
#[derive(Debug)]
pub struct NewEvent<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub responsible: &'a str,
    pub status: &'a str,
    pub location: Option<&'a str>,
    pub course: &'a str,
    pub event_type: &'a str,
    pub modality: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub document: Option<&'a str>,
    pub link: Option<&'a str>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct EventChanges<'a> {
    pub title: Option<&'a str>,
    pub date: Option<&'a str>,
    pub responsible: Option<&'a str>,
    pub status: Option<&'a str>,
    pub location: Option<&'a str>,
    pub course: Option<&'a str>,
    pub event_type: Option<&'a str>,
    pub modality: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub document: Option<&'a str>,
    pub link: Option<&'a str>,
}

pub struct EventService;

impl EventService {
    /// All events, newest date first, each with its tags and attachments.
    pub async fn list(conn: &mut AnyConnection, course: Option<&str>) -> Result<Vec<EventDetail>, AppError> {
        let filter = if course.is_some() { " WHERE course = $1" } else { "" };
        let sql = format!(
            "SELECT {} FROM events{} ORDER BY date DESC, id DESC",
            EVENT_COLUMNS, filter
        );
        tracing::debug!(sql = %sql, ?course, "query");
        let mut query = sqlx::query_as::<_, Event>(&sql);
        if let Some(course) = course {
            query = query.bind(course);
        }
        let events = query.fetch_all(&mut *conn).await?;
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let tag_sql = format!(
            "SELECT t.id, t.event_id, t.tag_number, t.created_at FROM event_tags t \
             JOIN events e ON e.id = t.event_id{} ORDER BY t.id",
            filter.replace("course", "e.course")
        );
        let attachment_sql = format!(
            "SELECT a.id, a.event_id, a.name, a.created_at FROM event_attachments a \
             JOIN events e ON e.id = a.event_id{} ORDER BY a.id",
            filter.replace("course", "e.course")
        );
        tracing::debug!(sql = %tag_sql, "query");
        let mut tag_query = sqlx::query_as::<_, EventTag>(&tag_sql);
        if let Some(course) = course {
            tag_query = tag_query.bind(course);
        }
        let tags = tag_query.fetch_all(&mut *conn).await?;
        tracing::debug!(sql = %attachment_sql, "query");
        let mut attachment_query = sqlx::query_as::<_, EventAttachment>(&attachment_sql);
        if let Some(course) = course {
            attachment_query = attachment_query.bind(course);
        }
        let attachments = attachment_query.fetch_all(&mut *conn).await?;

        let mut tags_by_event = group_by(tags, |t| t.event_id);
        let mut attachments_by_event = group_by(attachments, |a| a.event_id);
        Ok(events
            .into_iter()
            .map(|event| EventDetail {
                tags: tags_by_event.remove(&event.id).unwrap_or_default(),
                attachments: attachments_by_event.remove(&event.id).unwrap_or_default(),
                event,
            })
            .collect())
    }

    pub async fn find(conn: &mut AnyConnection, id: i64) -> Result<Option<Event>, AppError> {
        let sql = format!("SELECT {} FROM events WHERE id = $1", EVENT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(event)
    }

    pub async fn exists(conn: &mut AnyConnection, id: i64) -> Result<bool, AppError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(found.is_some())
    }

    pub async fn detail(conn: &mut AnyConnection, id: i64) -> Result<Option<EventDetail>, AppError> {
        let Some(event) = Self::find(conn, id).await? else {
            return Ok(None);
        };
        let tags = sqlx::query_as::<_, EventTag>(
            "SELECT id, event_id, tag_number, created_at FROM event_tags WHERE event_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;
        let attachments = sqlx::query_as::<_, EventAttachment>(
            "SELECT id, event_id, name, created_at FROM event_attachments WHERE event_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(Some(EventDetail {
            event,
            tags,
            attachments,
        }))
    }

    pub async fn insert(conn: &mut AnyConnection, new: &NewEvent<'_>) -> Result<i64, AppError> {
        let sql = "INSERT INTO events (title, date, responsible, status, location, course, event_type, \
                   modality, description, image, document, link, created_at, updated_at) \
                   VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) RETURNING id";
        tracing::debug!(sql = %sql, title = new.title, "query");
        let now = timestamps::now();
        let id: i64 = sqlx::query_scalar(sql)
            .bind(new.title)
            .bind(new.date)
            .bind(new.responsible)
            .bind(new.status)
            .bind(new.location)
            .bind(new.course)
            .bind(new.event_type)
            .bind(new.modality)
            .bind(new.description)
            .bind(new.image)
            .bind(new.document)
            .bind(new.link)
            .bind(now.as_str())
            .bind(now.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Ok(id)
    }

    /// COALESCE update; returns rows affected (0 when the event does not exist).
    pub async fn update(conn: &mut AnyConnection, id: i64, changes: &EventChanges<'_>) -> Result<u64, AppError> {
        let sql = "UPDATE events SET title = COALESCE($1, title), date = COALESCE($2, date), \
                   responsible = COALESCE($3, responsible), status = COALESCE($4, status), \
                   location = COALESCE($5, location), course = COALESCE($6, course), \
                   event_type = COALESCE($7, event_type), modality = COALESCE($8, modality), \
                   description = COALESCE($9, description), image = COALESCE($10, image), \
                   document = COALESCE($11, document), link = COALESCE($12, link), \
                   updated_at = $13 WHERE id = $14";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(changes.title)
            .bind(changes.date)
            .bind(changes.responsible)
            .bind(changes.status)
            .bind(changes.location)
            .bind(changes.course)
            .bind(changes.event_type)
            .bind(changes.modality)
            .bind(changes.description)
            .bind(changes.image)
            .bind(changes.document)
            .bind(changes.link)
            .bind(timestamps::now())
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn replace_tags(conn: &mut AnyConnection, id: i64, numbers: &[i64]) -> Result<(), AppError> {
        EVENT_TAGS.replace(conn, id, numbers).await
    }

    pub async fn replace_attachments(conn: &mut AnyConnection, id: i64, names: &[String]) -> Result<(), AppError> {
        EVENT_ATTACHMENTS.replace(conn, id, names).await
    }

    /// Delete the event and everything it owns. Returns rows affected on `events`.
    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<u64, AppError> {
        EVENT_TAGS.delete_all(conn, id).await?;
        EVENT_ATTACHMENTS.delete_all(conn, id).await?;
        let comments = sqlx::query("DELETE FROM event_comments WHERE event_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        tracing::debug!(id, comments, "event deleted with children");
        Ok(result.rows_affected())
    }
}

fn group_by<T, F>(rows: Vec<T>, key: F) -> HashMap<i64, Vec<T>>
where
    F: Fn(&T) -> i64,
{
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}
