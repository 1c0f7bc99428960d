//! Connection setup and table DDL. One `AnyPool` serves both the local SQLite
//! database and a hosted PostgreSQL database; only the id column DDL differs.

use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else {
            Err(ConfigError::UnsupportedDatabase(url.to_string()))
        }
    }

    fn id_column(self) -> &'static str {
        match self {
            Backend::Sqlite => "id INTEGER PRIMARY KEY AUTOINCREMENT",
            Backend::Postgres => "id BIGSERIAL PRIMARY KEY",
        }
    }
}

/// Open the pool. An in-memory SQLite database lives only as long as its
/// connection, so it is pinned to a single connection that never expires.
pub async fn connect(url: &str, max_connections: u32) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let in_memory = url.contains(":memory:");
    let mut options = AnyPoolOptions::new().acquire_timeout(Duration::from_secs(5));
    options = if in_memory {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options.max_connections(max_connections.max(1))
    };
    let pool = options.connect(url).await?;
    Ok(pool)
}

/// Tables in creation order. `{id}` is replaced with the backend's id column.
const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            {id},
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            role TEXT NOT NULL,
            course TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "events",
        r#"
        CREATE TABLE IF NOT EXISTS events (
            {id},
            title TEXT NOT NULL,
            date TEXT NOT NULL,
            responsible TEXT NOT NULL,
            status TEXT NOT NULL,
            location TEXT,
            course TEXT NOT NULL,
            event_type TEXT NOT NULL,
            modality TEXT NOT NULL,
            description TEXT,
            image TEXT,
            document TEXT,
            link TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "event_tags",
        r#"
        CREATE TABLE IF NOT EXISTS event_tags (
            {id},
            event_id BIGINT NOT NULL,
            tag_number BIGINT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "event_attachments",
        r#"
        CREATE TABLE IF NOT EXISTS event_attachments (
            {id},
            event_id BIGINT NOT NULL,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "event_comments",
        r#"
        CREATE TABLE IF NOT EXISTS event_comments (
            {id},
            event_id BIGINT NOT NULL,
            user_id BIGINT,
            author TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "professors",
        r#"
        CREATE TABLE IF NOT EXISTS professors (
            {id},
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            course TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "subjects",
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            {id},
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "subject_professors",
        r#"
        CREATE TABLE IF NOT EXISTS subject_professors (
            {id},
            subject_id BIGINT NOT NULL,
            professor_id BIGINT NOT NULL,
            coordination TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "research_projects",
        r#"
        CREATE TABLE IF NOT EXISTS research_projects (
            {id},
            title TEXT NOT NULL,
            theme TEXT NOT NULL,
            description TEXT NOT NULL,
            occurs_at TEXT NOT NULL,
            research_problem TEXT NOT NULL,
            methodology TEXT NOT NULL,
            expected_results TEXT NOT NULL,
            image TEXT,
            coordinator_id BIGINT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
    (
        "extension_projects",
        r#"
        CREATE TABLE IF NOT EXISTS extension_projects (
            {id},
            title TEXT NOT NULL,
            theme TEXT NOT NULL,
            description TEXT NOT NULL,
            occurs_at TEXT NOT NULL,
            target_audience TEXT NOT NULL,
            community TEXT NOT NULL,
            image TEXT,
            coordinator_id BIGINT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_event_tags_event ON event_tags (event_id)",
    "CREATE INDEX IF NOT EXISTS idx_event_attachments_event ON event_attachments (event_id)",
    "CREATE INDEX IF NOT EXISTS idx_event_comments_event ON event_comments (event_id)",
    "CREATE INDEX IF NOT EXISTS idx_subject_professors_subject ON subject_professors (subject_id)",
    "CREATE INDEX IF NOT EXISTS idx_research_projects_coordinator ON research_projects (coordinator_id)",
    "CREATE INDEX IF NOT EXISTS idx_extension_projects_coordinator ON extension_projects (coordinator_id)",
];

/// Create every table and index that does not exist yet. Safe to run on every start.
pub async fn ensure_tables(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        let ddl = ddl.replace("{id}", backend.id_column());
        sqlx::query(&ddl).execute(pool).await?;
        tracing::debug!(table = name, "table ensured");
    }
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(tables = TABLES.len(), ?backend, "schema ready");
    Ok(())
}
