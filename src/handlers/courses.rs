use crate::courses::COURSES;
use axum::Json;

pub async fn list_courses() -> Json<&'static [&'static str]> {
    Json(COURSES)
}
