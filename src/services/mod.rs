// Services module for scaffolding logic
pub mod environment;
pub mod scaffolder;
pub mod template_store;

pub use environment::EnvironmentManager;
pub use scaffolder::{FileOptions, ProjectScaffolder};
pub use template_store::TemplateStore;
