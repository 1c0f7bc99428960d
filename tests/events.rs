mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{tag_numbers, test_app};
use serde_json::json;

#[tokio::test]
async fn create_without_required_fields_is_rejected_and_writes_nothing() {
    let app = test_app().await;
    let (status, body) = app
        .post("/api/eventos", json!({"titulo": "Semana Acadêmica", "responsavel": "  "}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("data"));
    assert!(message.contains("responsavel"));
    assert!(message.contains("tipoEvento"));
    assert!(!message.contains("titulo"));
    assert_eq!(app.count("events").await, 0);
}

#[tokio::test]
async fn post_then_get_returns_submitted_values() {
    let app = test_app().await;
    let (status, created) = app
        .post(
            "/api/eventos",
            json!({
                "titulo": "Semana Acadêmica",
                "data": "2025-03-15T14:00:00.000Z",
                "responsavel": "Prof. Ana Silva",
                "local": "Auditório",
                "curso": "Nutrição",
                "tipoEvento": "Palestra",
                "modalidade": "Híbrido",
                "descricao": "Abertura",
                "link": "https://pucminas.br/semana",
                "odsAssociadas": [4, 10],
                "anexos": ["programacao.pdf"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = app.get(&format!("/api/eventos/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["titulo"], "Semana Acadêmica");
    assert_eq!(fetched["data"], "2025-03-15T14:00:00.000Z");
    assert_eq!(fetched["local"], "Auditório");
    assert_eq!(fetched["curso"], "Nutrição");
    assert_eq!(fetched["modalidade"], "Híbrido");
    assert_eq!(fetched["link"], "https://pucminas.br/semana");
    assert_eq!(tag_numbers(&fetched), vec![4, 10]);
    assert_eq!(fetched["anexos"][0]["nome"], "programacao.pdf");
}

#[tokio::test]
async fn defaults_fill_status_and_course() {
    let app = test_app().await;
    let id = app.event("Hackathon", &[]).await;
    let (_, event) = app.get(&format!("/api/eventos/{}", id)).await;
    assert_eq!(event["status"], "Pendente");
    assert_eq!(event["curso"], "Análise e Desenvolvimento de Sistemas");
}

#[tokio::test]
async fn updating_tags_replaces_the_whole_set() {
    let app = test_app().await;
    let id = app.event("Feira de Ciências", &[3, 7]).await;
    let other = app.event("Mostra", &[3]).await;

    let (status, updated) = app
        .put(&format!("/api/eventos/{}", id), json!({"odsAssociadas": [5]}))
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(tag_numbers(&updated), vec![5]);

    let (_, fetched) = app.get(&format!("/api/eventos/{}", id)).await;
    assert_eq!(tag_numbers(&fetched), vec![5]);
    let (_, untouched) = app.get(&format!("/api/eventos/{}", other)).await;
    assert_eq!(tag_numbers(&untouched), vec![3]);
}

#[tokio::test]
async fn absent_children_are_kept_and_empty_children_are_cleared() {
    let app = test_app().await;
    let id = app.event("Oficina", &[1, 2]).await;
    let uri = format!("/api/eventos/{}", id);
    app.put(&uri, json!({"anexos": [{"nome": "lista.pdf"}]})).await;

    let (status, updated) = app.put(&uri, json!({"titulo": "Oficina de Robótica"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["titulo"], "Oficina de Robótica");
    assert_eq!(updated["responsavel"], "Prof. Ana Silva");
    assert_eq!(tag_numbers(&updated), vec![1, 2]);
    assert_eq!(updated["anexos"].as_array().unwrap().len(), 1);

    let (_, cleared) = app.put(&uri, json!({"odsAssociadas": [], "anexos": []})).await;
    assert!(tag_numbers(&cleared).is_empty());
    assert!(cleared["anexos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn tags_read_back_can_be_sent_again() {
    let app = test_app().await;
    let id = app.event("Congresso", &[6, 12]).await;
    let uri = format!("/api/eventos/{}", id);
    let (_, event) = app.get(&uri).await;

    let (status, updated) = app
        .put(&uri, json!({"odsAssociadas": event["odsAssociadas"].clone()}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tag_numbers(&updated), vec![6, 12]);
}

#[tokio::test]
async fn out_of_range_tag_is_rejected_without_changes() {
    let app = test_app().await;
    let id = app.event("Seminário", &[2]).await;
    let (status, _) = app
        .put(&format!("/api/eventos/{}", id), json!({"titulo": "X", "odsAssociadas": [0]}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, event) = app.get(&format!("/api/eventos/{}", id)).await;
    assert_eq!(event["titulo"], "Seminário");
    assert_eq!(tag_numbers(&event), vec![2]);
}

#[tokio::test]
async fn update_of_missing_event_is_404() {
    let app = test_app().await;
    let (status, body) = app.put("/api/eventos/999", json!({"titulo": "Nada"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Evento não encontrado");
    assert_eq!(app.count("events").await, 0);
}

#[tokio::test]
async fn delete_removes_children_and_comments() {
    let app = test_app().await;
    let id = app.event("Palestra", &[8, 9]).await;
    let uri = format!("/api/eventos/{}", id);
    app.put(&uri, json!({"anexos": ["slides.pdf"]})).await;
    let (status, _) = app
        .post(
            &format!("{}/comentarios", uri),
            json!({"autor": "Maria", "conteudo": "Vou participar"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Evento deletado com sucesso");
    assert_eq!(app.count("event_tags").await, 0);
    assert_eq!(app.count("event_attachments").await, 0);
    assert_eq!(app.count("event_comments").await, 0);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_filtered_by_course_and_sorted_by_date() {
    let app = test_app().await;
    for (title, date, course) in [
        ("Antigo", "2024-01-10", "Direito"),
        ("Recente", "2025-06-01T10:00", "Direito"),
        ("Outro curso", "2025-07-01", "Psicologia"),
    ] {
        let (status, _) = app
            .post(
                "/api/eventos",
                json!({
                    "titulo": title, "data": date, "responsavel": "Coordenação",
                    "curso": course, "tipoEvento": "Palestra", "modalidade": "Online",
                    "odsAssociadas": [4]
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, all) = app.get("/api/eventos").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = all.as_array().unwrap().iter().map(|e| e["titulo"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Outro curso", "Recente", "Antigo"]);

    let (_, direito) = app.get("/api/eventos?curso=Direito").await;
    let direito = direito.as_array().unwrap();
    assert_eq!(direito.len(), 2);
    assert!(direito.iter().all(|e| e["curso"] == "Direito"));
    assert!(direito.iter().all(|e| tag_numbers(e) == vec![4]));
    assert_eq!(direito[0]["data"], "2025-06-01T10:00:00.000Z");
}

#[tokio::test]
async fn invalid_date_and_invalid_id_are_400() {
    let app = test_app().await;
    let (status, body) = app
        .post(
            "/api/eventos",
            json!({"titulo": "X", "data": "amanhã", "responsavel": "Y", "tipoEvento": "Z", "modalidade": "W"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("data"));

    let (status, body) = app.get("/api/eventos/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_400_with_json_error() {
    let app = test_app().await;
    let (status, body) = app.post("/api/eventos", json!([1, 2, 3])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("JSON inválido"));
}

#[tokio::test]
async fn wrong_method_is_405_and_unknown_path_is_404() {
    let app = test_app().await;
    let (status, body) = app.call(Method::PATCH, "/api/eventos", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");

    let (status, body) = app.call(Method::POST, "/api/eventos/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");

    let (status, body) = app.get("/api/nada").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "API endpoint not found");
}

#[tokio::test]
async fn oversized_body_is_413_with_json_error() {
    let app = test_app().await;
    let huge = "x".repeat(2 * 1024 * 1024);
    let (status, body) = app
        .post(
            "/api/eventos",
            json!({"titulo": huge, "data": "2025-03-15", "responsavel": "Y", "tipoEvento": "Z", "modalidade": "W"}),
        )
        .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Corpo da requisição excede o limite");
    assert_eq!(app.count("events").await, 0);
}

#[tokio::test]
async fn oversized_body_with_content_length_has_the_same_shape() {
    let app = test_app().await;
    let payload = json!({"titulo": "x".repeat(2 * 1024 * 1024)}).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/usuarios")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Corpo da requisição excede o limite");
}
