use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

/// `axum::Json` with an `AppError` rejection (`400 {"error": "JSON inválido: ..."}`).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Query` with an `AppError` rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
