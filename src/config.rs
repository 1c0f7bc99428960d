//! Runtime configuration from environment variables (optionally a `.env` file).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_COURSE: &str = "Análise e Desenvolvimento de Sistemas";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub log_filter: String,
    /// Course assigned to events created without one.
    pub default_course: String,
    pub seed_demo_data: bool,
    pub body_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            database_url: "sqlite:campus_events.db?mode=rwc".into(),
            max_connections: 5,
            log_filter: "campus_events=info,tower_http=info".into(),
            default_course: DEFAULT_COURSE.into(),
            seed_demo_data: false,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; unset keys fall back to [`AppConfig::default`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or(default);
        Ok(Self {
            host: text("HOST", defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            database_url: text("DATABASE_URL", defaults.database_url),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            log_filter: text("RUST_LOG", defaults.log_filter),
            default_course: text("DEFAULT_COURSE", defaults.default_course),
            seed_demo_data: parse_var(&lookup, "SEED_DEMO_DATA", defaults.seed_demo_data)?,
            body_limit_bytes: parse_var(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var, value: raw }),
    }
}
