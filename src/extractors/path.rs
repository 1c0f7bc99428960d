//! Numeric path ids. A non-numeric segment is a 400 before the handler runs.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The single `:id` of a resource route.
#[derive(Clone, Copy, Debug)]
pub struct EntityId(pub i64);

/// Parent id and child id of a nested route, in path order.
#[derive(Clone, Copy, Debug)]
pub struct NestedIds(pub i64, pub i64);

async fn numeric_segments<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<Vec<i64>, AppError> {
    let Path(segments) = Path::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
    segments
        .into_iter()
        .map(|(_, raw)| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("ID inválido: '{}'", raw)))
        })
        .collect()
}

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match numeric_segments(parts, state).await?.as_slice() {
            [id] => Ok(EntityId(*id)),
            _ => Err(AppError::BadRequest("rota sem ID".into())),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for NestedIds
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match numeric_segments(parts, state).await?.as_slice() {
            [parent, child] => Ok(NestedIds(*parent, *child)),
            _ => Err(AppError::BadRequest("rota sem ID".into())),
        }
    }
}
