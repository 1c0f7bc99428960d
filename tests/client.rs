//! Typed client against a live server on an ephemeral port.

use campus_events::models::{
    AttachmentInput, CommentPayload, EventPayload, ProfessorPayload, ResearchProjectPayload, TagInput,
    UserPayload,
};
use campus_events::{build_app, connect, ensure_tables, ApiClient, AppConfig, AppState, Backend};
use reqwest::StatusCode;
use tokio::net::TcpListener;

async fn spawn_server() -> ApiClient {
    let config = AppConfig {
        database_url: "sqlite::memory:".into(),
        ..AppConfig::default()
    };
    let pool = connect(&config.database_url, 1).await.unwrap();
    ensure_tables(&pool, Backend::Sqlite).await.unwrap();
    let app = build_app(AppState::new(pool, config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ApiClient::new(format!("http://{}/", addr))
}

#[tokio::test]
async fn event_lifecycle_through_the_client() {
    let client = spawn_server().await;

    let created = client
        .create_event(&EventPayload {
            title: Some("Semana de Tecnologia".into()),
            date: Some("2025-05-20T13:00:00Z".into()),
            responsible: Some("Prof. Carlos Oliveira".into()),
            course: Some("Sistemas de Informação".into()),
            event_type: Some("Palestra".into()),
            modality: Some("Online".into()),
            tags: Some(vec![TagInput::Number(3), TagInput::Number(7)]),
            attachments: Some(vec![AttachmentInput::Name("cartaz.png".into())]),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.tag_numbers(), vec![3, 7]);
    assert_eq!(created.event.status, "Pendente");

    let id = created.event.id;
    let updated = client
        .update_event(
            id,
            &EventPayload {
                tags: Some(vec![TagInput::Number(5)]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.tag_numbers(), vec![5]);
    assert_eq!(updated.attachments.len(), 1);

    let by_course = client.list_events(Some("Sistemas de Informação")).await.unwrap();
    assert_eq!(by_course.len(), 1);
    assert!(client.list_events(Some("Direito")).await.unwrap().is_empty());

    let comment = client
        .create_comment(
            id,
            &CommentPayload {
                author: Some("Visitante".into()),
                content: Some("Haverá gravação?".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let edited = client.update_comment(id, comment.id, "Haverá certificado?").await.unwrap();
    assert_eq!(edited.content, "Haverá certificado?");
    assert_eq!(client.list_comments(id).await.unwrap().len(), 1);

    let err = client.delete_comment(id + 1, comment.id).await.unwrap_err();
    assert!(matches!(err.status(), Some(StatusCode::BAD_REQUEST) | Some(StatusCode::NOT_FOUND)));

    let deleted = client.delete_event(id).await.unwrap();
    assert_eq!(deleted.message, "Evento deletado com sucesso");
    let err = client.get_event(id).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "404 Not Found: Evento não encontrado");
}

#[tokio::test]
async fn coordinator_view_through_the_client() {
    let client = spawn_server().await;

    let professor = client
        .create_professor(&ProfessorPayload {
            name: Some("Prof. Júlia Costa".into()),
            email: Some("julia.costa@pucminas.br".into()),
            password: Some("senha123".into()),
            course: Some("Análise e Desenvolvimento de Sistemas".into()),
        })
        .await
        .unwrap();

    let project = client
        .create_research_project(&ResearchProjectPayload {
            title: Some("Acessibilidade Digital".into()),
            theme: Some("Interação Humano-Computador".into()),
            description: Some("Avaliação de acessibilidade em portais públicos".into()),
            occurs_at: Some("2025-08-01".into()),
            research_problem: Some("Portais públicos atendem às diretrizes?".into()),
            methodology: Some("Auditoria automatizada e testes com usuários".into()),
            expected_results: Some("Relatório de conformidade".into()),
            coordinator_id: Some(professor.id),
            ..Default::default()
        })
        .await
        .unwrap();

    let mine = client.list_research_projects(Some(professor.id)).await.unwrap();
    assert_eq!(mine, vec![project.clone()]);
    assert!(client.list_research_projects(Some(professor.id + 1)).await.unwrap().is_empty());

    let user = UserPayload {
        name: Some("Júlia".into()),
        email: Some("julia.costa@pucminas.br".into()),
        password: Some("x".into()),
        role: Some("Professor".into()),
        course: None,
    };
    client.create_user(&user).await.unwrap();
    let err = client.create_user(&user).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert_eq!(client.list_professors(None).await.unwrap().len(), 1);

    let courses = client.list_courses().await.unwrap();
    assert!(courses.contains(&professor.course));

    let removed = client.delete_research_project(project.id).await.unwrap();
    assert_eq!(removed.title, "Acessibilidade Digital");
}
