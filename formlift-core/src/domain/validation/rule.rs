// formlift-core/src/domain/validation/rule.rs

use super::format::FormatRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One node of the validation ruleset. Mirrors the normalized tree's
/// shape the same way the display schema does, but carries constraints
/// instead of rendering hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldRule {
    String {
        required: bool,
        /// Names of format heuristics this field must satisfy, in table
        /// order. Every matching heuristic is enforced (strict AND).
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        formats: Vec<String>,
    },
    Number {
        required: bool,
    },
    Boolean,
    Object {
        fields: BTreeMap<String, FieldRule>,
    },
    Array {
        min_items: usize,
        /// Element rule, carried for consumers of the artifact. List
        /// entries are not validated field-by-field; only the length
        /// constraint is enforced.
        items: Box<FieldRule>,
    },
}

/// Walks a normalized tree and derives the validation ruleset.
///
/// Same traversal as schema inference, different product. Absence of
/// information never raises: a blank leaf simply becomes a required
/// string rule.
pub struct RuleBuilder<'a> {
    registry: &'a FormatRegistry,
}

impl<'a> RuleBuilder<'a> {
    pub fn new(registry: &'a FormatRegistry) -> Self {
        Self { registry }
    }

    pub fn infer(&self, value: &Value) -> FieldRule {
        self.infer_field("", value)
    }

    /// Per-key rule policy, evaluated in the same priority order as
    /// schema inference.
    pub fn infer_field(&self, key: &str, value: &Value) -> FieldRule {
        match value {
            // A blank leaf was an acceptable *display* default, but the
            // field must be filled in before submission.
            Value::Null => self.required_string(key),
            Value::String(text) if text.is_empty() => self.required_string(key),
            Value::Object(map) => FieldRule::Object {
                fields: map
                    .iter()
                    .map(|(k, v)| (k.clone(), self.infer_field(k, v)))
                    .collect(),
            },
            Value::Array(items) => {
                // The collapsed single-string shape validates as a plain
                // string field, mirroring the normalizer.
                if let [Value::String(_)] = items.as_slice() {
                    self.required_string(key)
                } else {
                    FieldRule::Array {
                        min_items: 1,
                        items: Box::new(FieldRule::String {
                            required: false,
                            formats: Vec::new(),
                        }),
                    }
                }
            }
            Value::Bool(_) => FieldRule::Boolean,
            Value::Number(_) => FieldRule::Number { required: true },
            Value::String(_) => self.required_string(key),
        }
    }

    fn required_string(&self, key: &str) -> FieldRule {
        FieldRule::String {
            required: true,
            formats: self.registry.matching_names(key),
        }
    }
}
