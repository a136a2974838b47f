// Data model for generated project descriptors

pub mod object_id;
pub mod project;
pub mod source_file;

pub use object_id::ObjectId;
pub use project::{ProjectIds, ProjectSpec};
pub use source_file::{FileEntry, SourceFile};
