use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Accepted values for `tipoCoordenacao` on a subject-professor link.
pub const COORDINATION_KINDS: &[&str] = &["pesquisa", "extensao"];

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectPayload {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A professor linked to a subject, joined with the professor's name and email.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct SubjectProfessor {
    pub id: i64,
    #[serde(rename = "materiaId")]
    pub subject_id: i64,
    #[serde(rename = "professorId")]
    pub professor_id: i64,
    #[serde(rename = "tipoCoordenacao")]
    pub coordination: String,
    #[serde(rename = "professorNome")]
    pub professor_name: Option<String>,
    #[serde(rename = "professorEmail")]
    pub professor_email: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectProfessorPayload {
    #[serde(rename = "professorId", skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<i64>,
    #[serde(rename = "tipoCoordenacao", skip_serializing_if = "Option::is_none")]
    pub coordination: Option<String>,
}
