mod common;

use axum::http::StatusCode;
use common::test_app;
use serde_json::json;

#[tokio::test]
async fn comment_on_missing_event_is_404() {
    let app = test_app().await;
    let (status, body) = app
        .post("/api/eventos/42/comentarios", json!({"autor": "Ana", "conteudo": "Oi"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Evento não encontrado");
    assert_eq!(app.count("event_comments").await, 0);
}

#[tokio::test]
async fn comment_requires_author_and_content() {
    let app = test_app().await;
    let id = app.event("Workshop", &[]).await;
    let (status, body) = app
        .post(&format!("/api/eventos/{}/comentarios", id), json!({"conteudo": ""}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Campos obrigatórios faltando: autor, conteudo");
    assert_eq!(app.count("event_comments").await, 0);
}

#[tokio::test]
async fn list_is_newest_first_with_embedded_user() {
    let app = test_app().await;
    let event = app.event("Workshop", &[]).await;
    let (_, user) = app
        .post(
            "/api/usuarios",
            json!({"nome": "Bruno Lima", "email": "bruno@pucminas.br", "senha": "x1", "cargo": "Aluno"}),
        )
        .await;
    let user_id = user["id"].as_i64().unwrap();

    let uri = format!("/api/eventos/{}/comentarios", event);
    app.post(&uri, json!({"autor": "Anônimo", "conteudo": "primeiro"})).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (status, created) = app
        .post(&uri, json!({"usuarioId": user_id, "autor": "Bruno Lima", "conteudo": "segundo"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["usuarioId"], user_id);

    let (status, list) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["conteudo"], "segundo");
    assert_eq!(list[0]["usuario"]["nome"], "Bruno Lima");
    assert_eq!(list[0]["usuario"]["email"], "bruno@pucminas.br");
    assert!(list[1]["usuario"].is_null());
}

#[tokio::test]
async fn comment_of_another_event_cannot_be_deleted() {
    let app = test_app().await;
    let first = app.event("Primeiro", &[]).await;
    let second = app.event("Segundo", &[]).await;
    let (_, comment) = app
        .post(
            &format!("/api/eventos/{}/comentarios", first),
            json!({"autor": "Ana", "conteudo": "Legal"}),
        )
        .await;
    let comment_id = comment["id"].as_i64().unwrap();

    let (status, body) = app
        .delete(&format!("/api/eventos/{}/comentarios/{}", second, comment_id))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Comentário não pertence a este evento");
    assert_eq!(app.count("event_comments").await, 1);

    let (status, _) = app
        .delete(&format!("/api/eventos/{}/comentarios/{}", first, comment_id + 100))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .delete(&format!("/api/eventos/{}/comentarios/{}", first, comment_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comentário deletado com sucesso");
    assert_eq!(app.count("event_comments").await, 0);
}

#[tokio::test]
async fn update_changes_only_content() {
    let app = test_app().await;
    let event = app.event("Workshop", &[]).await;
    let (_, comment) = app
        .post(
            &format!("/api/eventos/{}/comentarios", event),
            json!({"autor": "Ana", "conteudo": "rascunho"}),
        )
        .await;
    let uri = format!("/api/eventos/{}/comentarios/{}", event, comment["id"]);

    let (status, _) = app.put(&uri, json!({"autor": "Outra"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = app.put(&uri, json!({"conteudo": "final", "autor": "Outra"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["conteudo"], "final");
    assert_eq!(updated["autor"], "Ana");

    let (status, _) = app
        .put(&format!("/api/eventos/{}/comentarios/999", event), json!({"conteudo": "x"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_user_keeps_their_comments() {
    let app = test_app().await;
    let event = app.event("Workshop", &[]).await;
    let (_, user) = app
        .post(
            "/api/usuarios",
            json!({"nome": "Carla", "email": "carla@pucminas.br", "senha": "x", "cargo": "Aluno"}),
        )
        .await;
    let uri = format!("/api/eventos/{}/comentarios", event);
    app.post(&uri, json!({"usuarioId": user["id"], "autor": "Carla", "conteudo": "Oi"}))
        .await;

    let (status, _) = app.delete(&format!("/api/usuarios/{}", user["id"])).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.get(&uri).await;
    assert_eq!(list[0]["autor"], "Carla");
    assert!(list[0]["usuarioId"].is_null());
    assert!(list[0]["usuario"].is_null());
}
