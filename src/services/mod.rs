// Services module for discovery, rendering, emission, and patching

pub mod discovery;
pub mod emitter;
pub mod patcher;
pub mod pbxproj;
pub mod scheme;

pub use discovery::discover_sources;
pub use emitter::{write_project, GeneratedProject};
pub use patcher::{group_child_line, insert_after_anchor, Patched, DEFAULT_ANCHOR};
pub use pbxproj::render_pbxproj;
pub use scheme::render_scheme;
