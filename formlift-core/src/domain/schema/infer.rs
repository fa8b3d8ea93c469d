// formlift-core/src/domain/schema/infer.rs

use super::node::SchemaNode;
use crate::domain::title::format_title;
use serde_json::Value;
use std::collections::BTreeMap;

/// Derives the display schema for a whole normalized tree.
///
/// The root is usually an object; whatever the extraction produced, the
/// result is always *something* a form renderer can display.
pub fn infer_schema(value: &Value) -> SchemaNode {
    infer_field("", value)
}

/// Per-key type inference. Policies are evaluated in priority order; the
/// first that applies wins.
pub fn infer_field(key: &str, value: &Value) -> SchemaNode {
    if is_blank(value) {
        return blank_field(key);
    }

    match value {
        Value::Object(map) => {
            let properties: BTreeMap<String, SchemaNode> = map
                .iter()
                .map(|(k, v)| (k.clone(), infer_field(k, v)))
                .collect();
            SchemaNode::Object {
                title: format_title(key),
                section: true,
                properties,
            }
        }
        Value::Array(items) => array_field(key, items),
        Value::Bool(flag) => SchemaNode::Boolean {
            title: format_title(key),
            default: *flag,
        },
        Value::Number(number) => SchemaNode::Number {
            title: format_title(key),
            default: number.clone(),
        },
        other => string_field(key, &leaf_text(other)),
    }
}

// --- NAMED POLICIES ---

/// Policy: blank means null or an empty string. Empty arrays and objects
/// are NOT blank; they keep their structural type.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Policy: a missing, null or empty-string leaf still has to be editable,
/// so it becomes a string field with an empty default.
fn blank_field(key: &str) -> SchemaNode {
    SchemaNode::String {
        title: format_title(key),
        default: String::new(),
    }
}

/// Policy: a one-string array is the extraction wrapper shape and renders
/// as a plain string field. The normalizer already collapses it; this
/// covers a tree that skipped normalization upstream. Otherwise the
/// element schema comes from the first element, and an empty array falls
/// back to string items.
fn array_field(key: &str, items: &[Value]) -> SchemaNode {
    if let [Value::String(single)] = items {
        return string_field(key, single);
    }
    let item_schema = match items.first() {
        Some(first) => infer_field(key, first),
        None => blank_field(key),
    };
    SchemaNode::Array {
        title: format_title(key),
        items: Box::new(item_schema),
    }
}

fn string_field(key: &str, text: &str) -> SchemaNode {
    SchemaNode::String {
        title: format_title(key),
        default: text.to_string(),
    }
}

/// String representation for leaves: bare text for strings, compact JSON
/// for anything else.
fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
