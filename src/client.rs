//! Typed HTTP client for the API, used by front-end tooling and scripts.

use crate::models::{
    CommentPayload, CommentView, Comment, EventDetail, EventPayload, ExtensionProject,
    ExtensionProjectPayload, Professor, ProfessorPayload, ResearchProject, ResearchProjectPayload,
    Subject, SubjectPayload, SubjectProfessor, SubjectProfessorPayload, User, UserPayload,
};
use crate::response::{ErrorBody, MessageBody};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    /// Send and decode a success body; non-2xx answers become [`ClientError::Api`].
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("erro").to_string(),
        };
        tracing::debug!(%status, %message, "api error");
        Err(ClientError::Api { status, message })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    // Events

    /// All events, or only those of one course.
    pub async fn list_events(&self, course: Option<&str>) -> Result<Vec<EventDetail>, ClientError> {
        let mut request = self.request(Method::GET, "/api/eventos");
        if let Some(course) = course {
            request = request.query(&[("curso", course)]);
        }
        self.send(request).await
    }

    pub async fn get_event(&self, id: i64) -> Result<EventDetail, ClientError> {
        self.get(&format!("/api/eventos/{}", id)).await
    }

    pub async fn create_event(&self, payload: &EventPayload) -> Result<EventDetail, ClientError> {
        self.post("/api/eventos", payload).await
    }

    pub async fn update_event(&self, id: i64, payload: &EventPayload) -> Result<EventDetail, ClientError> {
        self.put(&format!("/api/eventos/{}", id), payload).await
    }

    pub async fn delete_event(&self, id: i64) -> Result<MessageBody, ClientError> {
        self.delete(&format!("/api/eventos/{}", id)).await
    }

    // Comments

    pub async fn list_comments(&self, event_id: i64) -> Result<Vec<CommentView>, ClientError> {
        self.get(&format!("/api/eventos/{}/comentarios", event_id)).await
    }

    pub async fn create_comment(&self, event_id: i64, payload: &CommentPayload) -> Result<Comment, ClientError> {
        self.post(&format!("/api/eventos/{}/comentarios", event_id), payload)
            .await
    }

    pub async fn update_comment(
        &self,
        event_id: i64,
        comment_id: i64,
        content: &str,
    ) -> Result<Comment, ClientError> {
        let payload = CommentPayload {
            content: Some(content.to_string()),
            ..Default::default()
        };
        self.put(
            &format!("/api/eventos/{}/comentarios/{}", event_id, comment_id),
            &payload,
        )
        .await
    }

    pub async fn delete_comment(&self, event_id: i64, comment_id: i64) -> Result<MessageBody, ClientError> {
        self.delete(&format!("/api/eventos/{}/comentarios/{}", event_id, comment_id))
            .await
    }

    // Users

    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get("/api/usuarios").await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        self.get(&format!("/api/usuarios/{}", id)).await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, ClientError> {
        self.post("/api/usuarios", payload).await
    }

    pub async fn update_user(&self, id: i64, payload: &UserPayload) -> Result<User, ClientError> {
        self.put(&format!("/api/usuarios/{}", id), payload).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageBody, ClientError> {
        self.delete(&format!("/api/usuarios/{}", id)).await
    }

    // Professors

    pub async fn list_professors(&self, course: Option<&str>) -> Result<Vec<Professor>, ClientError> {
        let mut request = self.request(Method::GET, "/api/professores");
        if let Some(course) = course {
            request = request.query(&[("curso", course)]);
        }
        self.send(request).await
    }

    pub async fn get_professor(&self, id: i64) -> Result<Professor, ClientError> {
        self.get(&format!("/api/professores/{}", id)).await
    }

    pub async fn create_professor(&self, payload: &ProfessorPayload) -> Result<Professor, ClientError> {
        self.post("/api/professores", payload).await
    }

    pub async fn update_professor(&self, id: i64, payload: &ProfessorPayload) -> Result<Professor, ClientError> {
        self.put(&format!("/api/professores/{}", id), payload).await
    }

    pub async fn delete_professor(&self, id: i64) -> Result<Professor, ClientError> {
        self.delete(&format!("/api/professores/{}", id)).await
    }

    // Subjects

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ClientError> {
        self.get("/api/materias").await
    }

    pub async fn get_subject(&self, id: i64) -> Result<Subject, ClientError> {
        self.get(&format!("/api/materias/{}", id)).await
    }

    pub async fn create_subject(&self, payload: &SubjectPayload) -> Result<Subject, ClientError> {
        self.post("/api/materias", payload).await
    }

    pub async fn update_subject(&self, id: i64, payload: &SubjectPayload) -> Result<Subject, ClientError> {
        self.put(&format!("/api/materias/{}", id), payload).await
    }

    pub async fn delete_subject(&self, id: i64) -> Result<Subject, ClientError> {
        self.delete(&format!("/api/materias/{}", id)).await
    }

    pub async fn list_subject_professors(&self, subject_id: i64) -> Result<Vec<SubjectProfessor>, ClientError> {
        self.get(&format!("/api/materias/{}/professores", subject_id)).await
    }

    pub async fn link_professor(
        &self,
        subject_id: i64,
        payload: &SubjectProfessorPayload,
    ) -> Result<SubjectProfessor, ClientError> {
        self.post(&format!("/api/materias/{}/professores", subject_id), payload)
            .await
    }

    pub async fn unlink_professor(&self, subject_id: i64, link_id: i64) -> Result<SubjectProfessor, ClientError> {
        self.delete(&format!("/api/materias/{}/professores/{}", subject_id, link_id))
            .await
    }

    // Projects

    /// Research projects, optionally only those coordinated by one professor.
    pub async fn list_research_projects(&self, coordinator_id: Option<i64>) -> Result<Vec<ResearchProject>, ClientError> {
        let mut request = self.request(Method::GET, "/api/projetos-pesquisa");
        if let Some(id) = coordinator_id {
            request = request.query(&[("professorCoordenadorId", id)]);
        }
        self.send(request).await
    }

    pub async fn get_research_project(&self, id: i64) -> Result<ResearchProject, ClientError> {
        self.get(&format!("/api/projetos-pesquisa/{}", id)).await
    }

    pub async fn create_research_project(
        &self,
        payload: &ResearchProjectPayload,
    ) -> Result<ResearchProject, ClientError> {
        self.post("/api/projetos-pesquisa", payload).await
    }

    pub async fn update_research_project(
        &self,
        id: i64,
        payload: &ResearchProjectPayload,
    ) -> Result<ResearchProject, ClientError> {
        self.put(&format!("/api/projetos-pesquisa/{}", id), payload).await
    }

    pub async fn delete_research_project(&self, id: i64) -> Result<ResearchProject, ClientError> {
        self.delete(&format!("/api/projetos-pesquisa/{}", id)).await
    }

    pub async fn list_extension_projects(
        &self,
        coordinator_id: Option<i64>,
    ) -> Result<Vec<ExtensionProject>, ClientError> {
        let mut request = self.request(Method::GET, "/api/projetos-extensao");
        if let Some(id) = coordinator_id {
            request = request.query(&[("professorCoordenadorId", id)]);
        }
        self.send(request).await
    }

    pub async fn get_extension_project(&self, id: i64) -> Result<ExtensionProject, ClientError> {
        self.get(&format!("/api/projetos-extensao/{}", id)).await
    }

    pub async fn create_extension_project(
        &self,
        payload: &ExtensionProjectPayload,
    ) -> Result<ExtensionProject, ClientError> {
        self.post("/api/projetos-extensao", payload).await
    }

    pub async fn update_extension_project(
        &self,
        id: i64,
        payload: &ExtensionProjectPayload,
    ) -> Result<ExtensionProject, ClientError> {
        self.put(&format!("/api/projetos-extensao/{}", id), payload).await
    }

    pub async fn delete_extension_project(&self, id: i64) -> Result<ExtensionProject, ClientError> {
        self.delete(&format!("/api/projetos-extensao/{}", id)).await
    }

    pub async fn list_courses(&self) -> Result<Vec<String>, ClientError> {
        self.get("/api/cursos").await
    }
}
