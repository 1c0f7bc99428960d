use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ResearchProject {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "areaTematica")]
    pub theme: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "momentoOcorre")]
    pub occurs_at: String,
    #[serde(rename = "problemaPesquisa")]
    pub research_problem: String,
    #[serde(rename = "metodologia")]
    pub methodology: String,
    #[serde(rename = "resultadosEsperados")]
    pub expected_results: String,
    #[serde(rename = "imagem")]
    pub image: Option<String>,
    #[serde(rename = "professorCoordenadorId")]
    pub coordinator_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchProjectPayload {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "areaTematica", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "momentoOcorre", skip_serializing_if = "Option::is_none")]
    pub occurs_at: Option<String>,
    #[serde(rename = "problemaPesquisa", skip_serializing_if = "Option::is_none")]
    pub research_problem: Option<String>,
    #[serde(rename = "metodologia", skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    #[serde(rename = "resultadosEsperados", skip_serializing_if = "Option::is_none")]
    pub expected_results: Option<String>,
    #[serde(rename = "imagem", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "professorCoordenadorId", skip_serializing_if = "Option::is_none")]
    pub coordinator_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ExtensionProject {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "areaTematica")]
    pub theme: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "momentoOcorre")]
    pub occurs_at: String,
    #[serde(rename = "tipoPessoasProcuram")]
    pub target_audience: String,
    #[serde(rename = "comunidadeEnvolvida")]
    pub community: String,
    #[serde(rename = "imagem")]
    pub image: Option<String>,
    #[serde(rename = "professorCoordenadorId")]
    pub coordinator_id: i64,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionProjectPayload {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "areaTematica", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "momentoOcorre", skip_serializing_if = "Option::is_none")]
    pub occurs_at: Option<String>,
    #[serde(rename = "tipoPessoasProcuram", skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(rename = "comunidadeEnvolvida", skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
    #[serde(rename = "imagem", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "professorCoordenadorId", skip_serializing_if = "Option::is_none")]
    pub coordinator_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    #[serde(rename = "professorCoordenadorId")]
    pub coordinator_id: Option<i64>,
}
