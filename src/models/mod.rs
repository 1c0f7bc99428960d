//! Row and payload types. Rust fields follow the column names; serde renames
//! carry the JSON names the frontend uses.

mod comment;
mod event;
mod professor;
mod project;
mod subject;
mod user;

pub use comment::{Comment, CommentAuthor, CommentPayload, CommentRow, CommentView};
pub use event::{
    AttachmentInput, Event, EventAttachment, EventDetail, EventFilter, EventPayload, EventTag,
    TagInput, DEFAULT_STATUS, MAX_TAG_NUMBER,
};
pub use professor::{Professor, ProfessorFilter, ProfessorPayload};
pub use project::{
    ExtensionProject, ExtensionProjectPayload, ProjectFilter, ResearchProject,
    ResearchProjectPayload,
};
pub use subject::{
    Subject, SubjectPayload, SubjectProfessor, SubjectProfessorPayload, COORDINATION_KINDS,
};
pub use user::{is_teaching_role, User, UserPayload, TEACHING_ROLES};
