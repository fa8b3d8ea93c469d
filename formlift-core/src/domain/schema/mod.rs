// formlift-core/src/domain/schema/mod.rs

pub mod infer;
pub mod node;

// Re-exports
pub use infer::{infer_field, infer_schema};
pub use node::SchemaNode;
