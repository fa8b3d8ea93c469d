// formlift-core/src/domain/validation/report.rs

use super::format::FormatRegistry;
use super::rule::FieldRule;
use crate::domain::error::DomainError;
use crate::domain::title::format_title;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

static JSON_NULL: Value = Value::Null;

/// A single rule failure, located by the dotted path of the field it
/// applies to (e.g. `applicantDetails.email`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub path: String,
    pub message: String,
}

/// Nested failure messages, keyed by field, mirroring the edited data.
/// Leaves hold every message for that field in rule order; branches only
/// exist to reach leaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorMap(BTreeMap<String, ErrorNode>);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorNode {
    Messages(Vec<String>),
    Nested(ErrorMap),
}

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Folds a flat failure list into the nested map, creating
    /// intermediate branches as needed.
    pub fn project(failures: Vec<Failure>) -> Self {
        let mut map = ErrorMap::default();
        for failure in failures {
            map.append(&failure.path, failure.message);
        }
        map
    }

    fn append(&mut self, path: &str, message: String) {
        let segments: Vec<&str> = path.split('.').collect();
        Self::append_at(&mut self.0, &segments, message);
    }

    fn append_at(map: &mut BTreeMap<String, ErrorNode>, segments: &[&str], message: String) {
        match segments {
            [] => {}
            [leaf] => {
                let node = map
                    .entry((*leaf).to_string())
                    .or_insert_with(|| ErrorNode::Messages(Vec::new()));
                if let ErrorNode::Messages(messages) = node {
                    messages.push(message);
                }
            }
            [head, rest @ ..] => {
                let node = map
                    .entry((*head).to_string())
                    .or_insert_with(|| ErrorNode::Nested(ErrorMap::default()));
                if let ErrorNode::Nested(nested) = node {
                    Self::append_at(&mut nested.0, rest, message);
                }
            }
        }
    }

    /// Messages at a dotted path, if that leaf is populated.
    pub fn messages_at(&self, path: &str) -> Option<&[String]> {
        let mut current = &self.0;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            match current.get(segment)? {
                ErrorNode::Messages(messages) if segments.peek().is_none() => {
                    return Some(messages);
                }
                ErrorNode::Nested(nested) if segments.peek().is_some() => {
                    current = &nested.0;
                }
                _ => return None,
            }
        }
        None
    }

    /// Number of populated leaves across the whole map.
    pub fn leaf_count(&self) -> usize {
        self.0
            .values()
            .map(|node| match node {
                ErrorNode::Messages(_) => 1,
                ErrorNode::Nested(nested) => nested.leaf_count(),
            })
            .sum()
    }
}

/// Executes a ruleset against live edited data.
///
/// Construction resolves every format name the ruleset references
/// against the registry (fail-secure: a stale ruleset referencing a
/// removed custom heuristic is rejected up front). Validation itself can
/// never fail; it only produces failures.
pub struct Validator<'a> {
    ruleset: &'a FieldRule,
    registry: &'a FormatRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(ruleset: &'a FieldRule, registry: &'a FormatRegistry) -> Result<Self, DomainError> {
        verify_formats(ruleset, registry)?;
        Ok(Self { ruleset, registry })
    }

    /// Runs every leaf rule and folds the failures into the nested map.
    pub fn validate(&self, data: &Value) -> ErrorMap {
        ErrorMap::project(self.run(data))
    }

    /// Runs every leaf rule against the corresponding data location,
    /// collecting ALL failures in one pass (no short-circuit) so the
    /// rendering layer can show every problem at once.
    pub fn run(&self, data: &Value) -> Vec<Failure> {
        let mut failures = Vec::new();
        check_node(self.ruleset, data, "", self.registry, &mut failures);
        failures
    }
}

fn verify_formats(rule: &FieldRule, registry: &FormatRegistry) -> Result<(), DomainError> {
    match rule {
        FieldRule::String { formats, .. } => {
            for name in formats {
                if registry.get(name).is_none() {
                    return Err(DomainError::UnknownFormat(name.clone()));
                }
            }
            Ok(())
        }
        FieldRule::Object { fields } => fields
            .values()
            .try_for_each(|child| verify_formats(child, registry)),
        FieldRule::Array { items, .. } => verify_formats(items, registry),
        FieldRule::Number { .. } | FieldRule::Boolean => Ok(()),
    }
}

fn check_node(
    rule: &FieldRule,
    data: &Value,
    path: &str,
    registry: &FormatRegistry,
    failures: &mut Vec<Failure>,
) {
    match rule {
        FieldRule::String { required, formats } => {
            let text = leaf_text(data);
            if text.is_empty() {
                if *required {
                    failures.push(required_failure(path));
                }
                return;
            }
            for name in formats {
                // Names were resolved at construction; a miss here means
                // the check is simply skipped.
                let Some(check) = registry.get(name) else {
                    continue;
                };
                if !check.is_match(&text) {
                    failures.push(Failure {
                        path: path.to_string(),
                        message: format!("{} {}", display_name(path), check.message),
                    });
                }
            }
        }
        FieldRule::Number { required } => match data {
            Value::Number(_) => {}
            Value::Null => {
                if *required {
                    failures.push(required_failure(path));
                }
            }
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    if *required {
                        failures.push(required_failure(path));
                    }
                } else if trimmed.parse::<f64>().is_err() {
                    failures.push(type_mismatch(path));
                }
            }
            _ => failures.push(type_mismatch(path)),
        },
        FieldRule::Boolean => {}
        FieldRule::Object { fields } => {
            for (key, child_rule) in fields {
                let child_path = join_path(path, key);
                check_node(child_rule, member(data, key), &child_path, registry, failures);
            }
        }
        FieldRule::Array { min_items, .. } => {
            let length = match data {
                Value::Array(items) => items.len(),
                // A collapsed single-string array edits as a bare
                // string; its presence counts as one element.
                Value::String(text) if !text.is_empty() => 1,
                _ => 0,
            };
            if length < *min_items {
                failures.push(Failure {
                    path: path.to_string(),
                    message: format!(
                        "{} must contain at least {} item(s)",
                        display_name(path),
                        min_items
                    ),
                });
            }
        }
    }
}

/// A key absent from the edited data evaluates as an empty string, so
/// required rules fire instead of the field being silently skipped.
fn member<'v>(data: &'v Value, key: &str) -> &'v Value {
    data.get(key).unwrap_or(&JSON_NULL)
}

fn leaf_text(data: &Value) -> String {
    match data {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn required_failure(path: &str) -> Failure {
    Failure {
        path: path.to_string(),
        message: format!("{} is required", display_name(path)),
    }
}

fn type_mismatch(path: &str) -> Failure {
    Failure {
        path: path.to_string(),
        message: format!("{} must be a number", display_name(path)),
    }
}

fn display_name(path: &str) -> String {
    let leaf = path.rsplit('.').next().unwrap_or(path);
    if leaf.is_empty() {
        "Field".to_string()
    } else {
        format_title(leaf)
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::normalize::normalize;
    use crate::domain::validation::rule::RuleBuilder;
    use anyhow::Result;
    use serde_json::json;

    fn validate(shape: Value, edited: Value) -> Result<ErrorMap> {
        let registry = FormatRegistry::builtin()?;
        let rules = RuleBuilder::new(&registry).infer(&normalize(shape));
        let validator = Validator::new(&rules, &registry)?;
        Ok(validator.validate(&edited))
    }

    #[test]
    fn test_email_heuristic_rejects_and_accepts() -> Result<()> {
        let shape = json!({ "email": "x" });

        let errors = validate(shape.clone(), json!({ "email": "not-an-email" }))?;
        let messages = errors.messages_at("email").unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("email"), "message was: {}", messages[0]);

        let errors = validate(shape, json!({ "email": "a@b.com" }))?;
        assert!(errors.is_empty());
        Ok(())
    }

    #[test]
    fn test_postal_heuristic_bounds() -> Result<()> {
        let shape = json!({ "zipCode": "12345" });
        for accepted in ["12345", "123456"] {
            let errors = validate(shape.clone(), json!({ "zipCode": accepted }))?;
            assert!(errors.is_empty(), "{accepted} should be accepted");
        }
        for rejected in ["1234", "abcde"] {
            let errors = validate(shape.clone(), json!({ "zipCode": rejected }))?;
            assert!(errors.messages_at("zipCode").is_some(), "{rejected} should be rejected");
        }
        Ok(())
    }

    #[test]
    fn test_nested_round_trip() -> Result<()> {
        let shape = json!({ "applicantDetails": { "name": "", "email": "" } });

        let clean = validate(
            shape.clone(),
            json!({ "applicantDetails": { "name": "John", "email": "john@x.com" } }),
        )?;
        assert!(clean.is_empty());

        let errors = validate(
            shape,
            json!({ "applicantDetails": { "name": "", "email": "bad" } }),
        )?;
        let name_messages = errors.messages_at("applicantDetails.name").unwrap();
        assert!(name_messages[0].contains("required"));
        let email_messages = errors.messages_at("applicantDetails.email").unwrap();
        assert!(email_messages[0].contains("valid email"));
        Ok(())
    }

    #[test]
    fn test_all_failures_collected_in_one_pass() -> Result<()> {
        let shape = json!({
            "name": "x",
            "email": "x",
            "details": { "zipCode": "12345" }
        });
        let errors = validate(
            shape,
            json!({
                "name": "",
                "email": "nope",
                "details": { "zipCode": "12" }
            }),
        )?;
        assert_eq!(errors.leaf_count(), 3);
        Ok(())
    }

    #[test]
    fn test_absent_key_fires_required() -> Result<()> {
        let shape = json!({ "name": "x" });
        let errors = validate(shape, json!({}))?;
        assert!(errors.messages_at("name").unwrap()[0].contains("required"));
        Ok(())
    }

    #[test]
    fn test_number_type_mismatch_reported_not_thrown() -> Result<()> {
        let shape = json!({ "amount": 10 });

        let errors = validate(shape.clone(), json!({ "amount": "abc" }))?;
        assert!(errors.messages_at("amount").unwrap()[0].contains("number"));

        // A numeric string parses; the edit layer works in text.
        let errors = validate(shape.clone(), json!({ "amount": "12.5" }))?;
        assert!(errors.is_empty());

        let errors = validate(shape, json!({}))?;
        assert!(errors.messages_at("amount").unwrap()[0].contains("required"));
        Ok(())
    }

    #[test]
    fn test_array_minimum_length() -> Result<()> {
        let shape = json!({ "items": [1, 2] });

        let errors = validate(shape.clone(), json!({ "items": [] }))?;
        assert!(errors.messages_at("items").unwrap()[0].contains("at least"));

        let errors = validate(shape, json!({ "items": [3] }))?;
        assert!(errors.is_empty());
        Ok(())
    }

    #[test]
    fn test_collapsed_string_satisfies_array_rule() -> Result<()> {
        // Built from the raw (un-normalized) two-element shape, edited
        // with the collapsed single string.
        let registry = FormatRegistry::builtin()?;
        let rules = RuleBuilder::new(&registry).infer(&json!({ "tags": ["a", "b"] }));
        let validator = Validator::new(&rules, &registry)?;
        assert!(validator.validate(&json!({ "tags": "urgent" })).is_empty());
        assert!(!validator.validate(&json!({ "tags": "" })).is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_format_rejected_at_construction() -> Result<()> {
        let registry = FormatRegistry::builtin()?;
        let rules = FieldRule::String {
            required: true,
            formats: vec!["vanished".to_string()],
        };
        assert!(Validator::new(&rules, &registry).is_err());
        Ok(())
    }

    #[test]
    fn test_error_map_serialization_shape() -> Result<()> {
        let errors = ErrorMap::project(vec![
            Failure {
                path: "applicantDetails.email".to_string(),
                message: "Email must be a valid email address".to_string(),
            },
            Failure {
                path: "name".to_string(),
                message: "Name is required".to_string(),
            },
        ]);
        let value = serde_json::to_value(&errors)?;
        assert_eq!(
            value,
            json!({
                "applicantDetails": {
                    "email": ["Email must be a valid email address"]
                },
                "name": ["Name is required"]
            })
        );
        Ok(())
    }
}
