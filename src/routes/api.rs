//! `/api/*` resource routes. Every path answers unsupported methods with a JSON 405.

use crate::error::AppError;
use crate::handlers::{comments, courses, events, professors, projects, subjects, users};
use crate::state::AppState;
use axum::{
    routing::{get, MethodRouter},
    Router,
};

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

fn strict(methods: MethodRouter<AppState>) -> MethodRouter<AppState> {
    methods.fallback(method_not_allowed)
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/eventos",
            strict(get(events::list_events).post(events::create_event)),
        )
        .route(
            "/api/eventos/:id",
            strict(
                get(events::get_event)
                    .put(events::update_event)
                    .delete(events::delete_event),
            ),
        )
        .route(
            "/api/eventos/:id/comentarios",
            strict(get(comments::list_comments).post(comments::create_comment)),
        )
        .route(
            "/api/eventos/:id/comentarios/:comment_id",
            strict(
                axum::routing::put(comments::update_comment).delete(comments::delete_comment),
            ),
        )
        .route(
            "/api/usuarios",
            strict(get(users::list_users).post(users::create_user)),
        )
        .route(
            "/api/usuarios/:id",
            strict(
                get(users::get_user)
                    .put(users::update_user)
                    .delete(users::delete_user),
            ),
        )
        .route(
            "/api/professores",
            strict(get(professors::list_professors).post(professors::create_professor)),
        )
        .route(
            "/api/professores/:id",
            strict(
                get(professors::get_professor)
                    .put(professors::update_professor)
                    .delete(professors::delete_professor),
            ),
        )
        .route(
            "/api/materias",
            strict(get(subjects::list_subjects).post(subjects::create_subject)),
        )
        .route(
            "/api/materias/:id",
            strict(
                get(subjects::get_subject)
                    .put(subjects::update_subject)
                    .delete(subjects::delete_subject),
            ),
        )
        .route(
            "/api/materias/:id/professores",
            strict(get(subjects::list_subject_professors).post(subjects::link_professor)),
        )
        .route(
            "/api/materias/:id/professores/:link_id",
            strict(axum::routing::delete(subjects::unlink_professor)),
        )
        .route(
            "/api/projetos-pesquisa",
            strict(get(projects::list_research_projects).post(projects::create_research_project)),
        )
        .route(
            "/api/projetos-pesquisa/:id",
            strict(
                get(projects::get_research_project)
                    .put(projects::update_research_project)
                    .delete(projects::delete_research_project),
            ),
        )
        .route(
            "/api/projetos-extensao",
            strict(get(projects::list_extension_projects).post(projects::create_extension_project)),
        )
        .route(
            "/api/projetos-extensao/:id",
            strict(
                get(projects::get_extension_project)
                    .put(projects::update_extension_project)
                    .delete(projects::delete_extension_project),
            ),
        )
        .route("/api/cursos", strict(get(courses::list_courses)))
        .with_state(state)
}
