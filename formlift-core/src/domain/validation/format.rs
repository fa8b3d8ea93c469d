// formlift-core/src/domain/validation/format.rs

use crate::domain::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A key-name-based guess about what validation a string field needs.
///
/// Matching looks at the FIELD NAME, never the value: a key containing
/// "email" is assumed to hold an email address. This is best-effort by
/// nature; a key the table misses simply stays a plain required string.
#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct FormatHeuristic {
    pub name: String,

    /// Case-insensitive substrings; the heuristic applies when the
    /// lower-cased key contains any of them.
    #[validate(length(min = 1, message = "At least one key token is required"))]
    pub key_tokens: Vec<String>,

    #[validate(length(min = 1, message = "Regex cannot be empty"))]
    pub regex: String,

    /// Message appended to the error map when the value does not match.
    pub message: String,
}

/// Runtime version of a heuristic. The Regex is compiled only once at
/// registry construction.
pub struct CompiledHeuristic {
    pub name: String,
    key_tokens: Vec<String>,
    regex: Regex,
    pub message: String,
}

impl CompiledHeuristic {
    pub fn applies_to(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.key_tokens.iter().any(|token| key.contains(token.as_str()))
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

/// The built-in heuristic table, in evaluation order. Patterns stay
/// deliberately loose: they catch obvious OCR and typing mistakes, they
/// do not prove deliverability.
pub fn builtin_heuristics() -> Vec<FormatHeuristic> {
    vec![
        FormatHeuristic {
            name: "email".to_string(),
            key_tokens: vec!["email".to_string()],
            regex: r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$".to_string(),
            message: "must be a valid email address".to_string(),
        },
        FormatHeuristic {
            name: "phone".to_string(),
            key_tokens: vec![
                "phone".to_string(),
                "mobile".to_string(),
                "contact".to_string(),
            ],
            regex: r"^\+?\(?[0-9]{1,4}\)?[-\s./0-9]*$".to_string(),
            message: "must be a valid phone number".to_string(),
        },
        FormatHeuristic {
            name: "postal_code".to_string(),
            key_tokens: vec!["postal".to_string(), "zip".to_string()],
            regex: r"^[0-9]{5,6}$".to_string(),
            message: "must be a 5 or 6 digit postal code".to_string(),
        },
    ]
}

/// The ordered heuristic table: built-ins first, then any custom
/// patterns from the project config.
pub struct FormatRegistry {
    checks: Vec<CompiledHeuristic>,
}

impl FormatRegistry {
    /// Registry with only the built-in heuristics.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::compile(&builtin_heuristics())
    }

    /// Built-ins plus custom patterns appended in config order.
    pub fn with_custom(custom: &[FormatHeuristic]) -> Result<Self, DomainError> {
        let mut heuristics = builtin_heuristics();
        heuristics.extend_from_slice(custom);
        Self::compile(&heuristics)
    }

    fn compile(heuristics: &[FormatHeuristic]) -> Result<Self, DomainError> {
        // Pre-allocate vector to avoid reallocations during initialization
        let mut checks = Vec::with_capacity(heuristics.len());

        for heuristic in heuristics {
            // Strict config: a malformed custom pattern is a hard error.
            let regex = Regex::new(&heuristic.regex).map_err(|e| DomainError::InvalidHeuristic {
                name: heuristic.name.clone(),
                reason: e.to_string(),
            })?;
            checks.push(CompiledHeuristic {
                name: heuristic.name.clone(),
                key_tokens: heuristic
                    .key_tokens
                    .iter()
                    .map(|token| token.to_lowercase())
                    .collect(),
                regex,
                message: heuristic.message.clone(),
            });
        }

        Ok(Self { checks })
    }

    /// Names of every heuristic whose key tokens match, in table order.
    /// Additive: a key matching several heuristics gets ALL of them.
    pub fn matching_names(&self, key: &str) -> Vec<String> {
        self.checks
            .iter()
            .filter(|check| check.applies_to(key))
            .map(|check| check.name.clone())
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&CompiledHeuristic> {
        self.checks.iter().find(|check| check.name == name)
    }
}
