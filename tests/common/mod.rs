#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use campus_events::{build_app, connect, ensure_tables, AppConfig, AppState, Backend};
use serde_json::Value;
use sqlx::AnyPool;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: AnyPool,
}

pub async fn test_app() -> TestApp {
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        ..AppConfig::default()
    };
    let pool = connect(&config.database_url, 1).await.unwrap();
    ensure_tables(&pool, Backend::Sqlite).await.unwrap();
    let router = build_app(AppState::new(pool.clone(), config));
    TestApp { router, pool }
}

impl TestApp {
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    /// Run a prepared request and decode the JSON body (`Null` when it is not JSON).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, None).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    /// Create a professor and return its id.
    pub async fn professor(&self, name: &str, email: &str, course: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/professores",
                serde_json::json!({"nome": name, "email": email, "senha": "senha123", "curso": course}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Create an event with the given tags and return its id.
    pub async fn event(&self, title: &str, tags: &[i64]) -> i64 {
        let (status, body) = self
            .post(
                "/api/eventos",
                serde_json::json!({
                    "titulo": title,
                    "data": "2025-03-15T14:00:00Z",
                    "responsavel": "Prof. Ana Silva",
                    "tipoEvento": "Workshop",
                    "modalidade": "Presencial",
                    "odsAssociadas": tags,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}

pub fn tag_numbers(event: &Value) -> Vec<i64> {
    event["odsAssociadas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["odsNumero"].as_i64().unwrap())
        .collect()
}
