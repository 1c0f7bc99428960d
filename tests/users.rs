mod common;

use axum::http::StatusCode;
use common::test_app;
use serde_json::json;

fn user(name: &str, email: &str, role: &str) -> serde_json::Value {
    json!({"nome": name, "email": email, "senha": "segredo", "cargo": role})
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = test_app().await;
    let (status, _) = app.post("/api/usuarios", user("Ana", "ana@pucminas.br", "Aluno")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/api/usuarios", user("Outra Ana", "ana@pucminas.br", "Aluno")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email já cadastrado");
    assert_eq!(app.count("users").await, 1);
}

#[tokio::test]
async fn missing_fields_and_bad_email_are_400() {
    let app = test_app().await;
    let (status, body) = app.post("/api/usuarios", json!({"nome": "Ana"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Campos obrigatórios faltando: email, senha, cargo");

    let (status, _) = app.post("/api/usuarios", user("Ana", "ana-sem-arroba", "Aluno")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn password_is_never_returned() {
    let app = test_app().await;
    let (_, created) = app.post("/api/usuarios", user("Ana", "ana@pucminas.br", "Aluno")).await;
    assert!(created.get("senha").is_none());

    let (_, list) = app.get("/api/usuarios").await;
    assert!(list[0].get("senha").is_none());
    let (_, fetched) = app.get(&format!("/api/usuarios/{}", created["id"])).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn teaching_roles_also_register_a_professor() {
    let app = test_app().await;
    app.post("/api/usuarios", user("Prof. Rui", "rui@pucminas.br", "Professor")).await;
    let (status, _) = app
        .post(
            "/api/usuarios",
            json!({"nome": "Coord. Lia", "email": "lia@pucminas.br", "senha": "x", "cargo": "Coordenador", "curso": "Direito"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    app.post("/api/usuarios", user("Aluno", "aluno@pucminas.br", "Aluno")).await;

    let (_, professors) = app.get("/api/professores").await;
    let professors = professors.as_array().unwrap();
    assert_eq!(professors.len(), 2);
    let lia = professors.iter().find(|p| p["email"] == "lia@pucminas.br").unwrap();
    assert_eq!(lia["curso"], "Direito");
    let rui = professors.iter().find(|p| p["email"] == "rui@pucminas.br").unwrap();
    assert_eq!(rui["curso"], "Análise e Desenvolvimento de Sistemas");
}

#[tokio::test]
async fn existing_professor_email_is_not_duplicated() {
    let app = test_app().await;
    app.professor("Prof. Rui", "rui@pucminas.br", "Direito").await;
    let (status, _) = app.post("/api/usuarios", user("Prof. Rui", "rui@pucminas.br", "Professor")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(app.count("professors").await, 1);
}

#[tokio::test]
async fn update_keeps_absent_fields() {
    let app = test_app().await;
    let (_, created) = app.post("/api/usuarios", user("Ana", "ana@pucminas.br", "Aluno")).await;
    let uri = format!("/api/usuarios/{}", created["id"]);

    let (status, updated) = app.put(&uri, json!({"cargo": "Coordenador", "curso": "Direito"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nome"], "Ana");
    assert_eq!(updated["cargo"], "Coordenador");
    assert_eq!(updated["curso"], "Direito");
    assert_eq!(updated["email"], "ana@pucminas.br");
}

#[tokio::test]
async fn update_and_delete_of_missing_user_are_404() {
    let app = test_app().await;
    let (status, body) = app.put("/api/usuarios/7", json!({"nome": "Ninguém"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Usuário não encontrado");

    let (status, _) = app.delete("/api/usuarios/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get("/api/usuarios/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
