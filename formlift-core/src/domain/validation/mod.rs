// formlift-core/src/domain/validation/mod.rs

pub mod format;
pub mod report;
pub mod rule;

// Re-exports
pub use format::{CompiledHeuristic, FormatHeuristic, FormatRegistry, builtin_heuristics};
pub use report::{ErrorMap, Failure, Validator};
pub use rule::{FieldRule, RuleBuilder};
