use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_STATUS: &str = "Pendente";

/// Highest ODS (sustainable development goal) number a tag may carry.
pub const MAX_TAG_NUMBER: i64 = 17;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "responsavel")]
    pub responsible: String,
    pub status: String,
    #[serde(rename = "local")]
    pub location: Option<String>,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "tipoEvento")]
    pub event_type: String,
    #[serde(rename = "modalidade")]
    pub modality: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "imagem")]
    pub image: Option<String>,
    #[serde(rename = "documento")]
    pub document: Option<String>,
    pub link: Option<String>,
    #[serde(rename = "criadoEm")]
    pub created_at: String,
    #[serde(rename = "atualizadoEm")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct EventTag {
    pub id: i64,
    #[serde(rename = "eventoId")]
    pub event_id: i64,
    #[serde(rename = "odsNumero")]
    pub tag_number: i64,
    #[serde(rename = "criadoEm")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct EventAttachment {
    pub id: i64,
    #[serde(rename = "eventoId")]
    pub event_id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "criadoEm")]
    pub created_at: String,
}

/// An event together with its child collections, the shape every event route returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "odsAssociadas", default)]
    pub tags: Vec<EventTag>,
    #[serde(rename = "anexos", default)]
    pub attachments: Vec<EventAttachment>,
}

impl EventDetail {
    pub fn tag_numbers(&self) -> Vec<i64> {
        self.tags.iter().map(|t| t.tag_number).collect()
    }
}

/// Tags arrive either as bare numbers or as the objects a previous GET returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    Number(i64),
    Record {
        #[serde(rename = "odsNumero")]
        tag_number: i64,
    },
}

impl TagInput {
    pub fn number(&self) -> i64 {
        match self {
            TagInput::Number(n) => *n,
            TagInput::Record { tag_number } => *tag_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttachmentInput {
    Name(String),
    Record {
        #[serde(rename = "nome")]
        name: String,
    },
}

impl AttachmentInput {
    pub fn name(&self) -> &str {
        match self {
            AttachmentInput::Name(name) | AttachmentInput::Record { name } => name,
        }
    }
}

/// Body of `POST /api/eventos` and `PUT /api/eventos/{id}`. On update, absent
/// fields keep their stored value; `odsAssociadas`/`anexos` replace the whole
/// child set only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "responsavel", skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "local", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "curso", skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(rename = "tipoEvento", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(rename = "modalidade", skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imagem", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "documento", skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "odsAssociadas", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagInput>>,
    #[serde(rename = "anexos", skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentInput>>,
}

impl EventPayload {
    pub fn tag_numbers(&self) -> Option<Vec<i64>> {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().map(TagInput::number).collect())
    }

    pub fn attachment_names(&self) -> Option<Vec<String>> {
        self.attachments
            .as_ref()
            .map(|items| items.iter().map(|a| a.name().to_string()).collect())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    #[serde(rename = "curso")]
    pub course: Option<String>,
}
