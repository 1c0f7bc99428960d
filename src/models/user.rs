use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Roles that also get a row in the professors directory.
pub const TEACHING_ROLES: &[&str] = &["Professor", "Coordenador"];

pub fn is_teaching_role(role: &str) -> bool {
    TEACHING_ROLES.contains(&role.trim())
}

/// Stored user without the password column; nothing that reaches the wire carries it.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "curso")]
    pub course: Option<String>,
    #[serde(rename = "criadoEm")]
    pub created_at: String,
    #[serde(rename = "atualizadoEm")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "cargo", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "curso", skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}
