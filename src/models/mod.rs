// Models module for data structures
pub mod binding;
pub mod layout;
pub mod request;

pub use binding::TemplateBinding;
pub use layout::{PlannedFile, ProjectLayout};
pub use request::ScaffoldRequest;
