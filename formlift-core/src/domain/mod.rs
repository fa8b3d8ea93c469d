// formlift-core/src/domain/mod.rs

pub mod error;
pub mod normalize;
pub mod schema;
pub mod title;
pub mod validation;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::DomainError;
pub use normalize::normalize;
pub use schema::{SchemaNode, infer_schema};
pub use title::format_title;
pub use validation::{ErrorMap, FieldRule, FormatRegistry, RuleBuilder, Validator};
