//! Data access: one service per table family, all running on a caller-supplied
//! connection so handlers can group statements in a transaction.

pub mod children;
mod comments;
mod events;
mod professors;
mod projects;
mod subjects;
mod users;
mod validation;

pub use children::ChildTable;
pub use comments::CommentService;
pub use events::{EventChanges, EventService, NewEvent};
pub use professors::{NewProfessor, ProfessorChanges, ProfessorService};
pub use projects::{ExtensionFields, ExtensionProjectService, ResearchFields, ResearchProjectService};
pub use subjects::SubjectService;
pub use users::{NewUser, UserChanges, UserService};
pub use validation::{non_blank, validate_email, RequestValidator};
