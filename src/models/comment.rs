use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "eventoId")]
    pub event_id: i64,
    #[serde(rename = "usuarioId")]
    pub user_id: Option<i64>,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "conteudo")]
    pub content: String,
    #[serde(rename = "criadoEm")]
    pub created_at: String,
    #[serde(rename = "atualizadoEm")]
    pub updated_at: String,
}

/// Comment joined with the user that wrote it (left join, user may be gone).
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    #[sqlx(flatten)]
    pub comment: Comment,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(rename = "usuario")]
    pub user: Option<CommentAuthor>,
}

impl From<CommentRow> for CommentView {
    fn from(row: CommentRow) -> Self {
        let user = match (row.comment.user_id, row.user_name, row.user_email) {
            (Some(id), Some(name), Some(email)) => Some(CommentAuthor { id, name, email }),
            _ => None,
        };
        CommentView {
            comment: row.comment,
            user,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentPayload {
    #[serde(rename = "usuarioId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "autor", skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "conteudo", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
