// formlift-core/src/infrastructure/config/mod.rs

pub mod project;

pub use project::{HeuristicsConfig, ProjectConfig, load_project_config};
