//! HTTP handlers, one module per resource.

pub mod comments;
pub mod courses;
pub mod events;
pub mod professors;
pub mod projects;
pub mod subjects;
pub mod users;

use crate::service::non_blank;

/// Value of a field that validation already proved present and non-blank.
fn required(value: &Option<String>) -> &str {
    non_blank(value).unwrap_or_default()
}
