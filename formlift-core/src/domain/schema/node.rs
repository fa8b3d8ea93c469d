// formlift-core/src/domain/schema/node.rs

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

/// One node of the display schema handed to the rendering layer.
///
/// The shape mirrors what a schema-driven form renderer expects: a type
/// tag, a human title, a pre-filled default, nested `properties` for
/// groups and an `items` schema for lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    String {
        title: String,
        default: String,
    },
    Number {
        title: String,
        default: Number,
    },
    Boolean {
        title: String,
        default: bool,
    },
    Object {
        title: String,
        /// Rendering hint only: nested groups get sectioned styling.
        section: bool,
        properties: BTreeMap<String, SchemaNode>,
    },
    Array {
        title: String,
        items: Box<SchemaNode>,
    },
}
