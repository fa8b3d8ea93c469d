// formlift/src/commands/inspect.rs
//
// USE CASE: show an inferred schema as a field/type/title table.

use std::path::PathBuf;

use comfy_table::{Table, presets::UTF8_FULL};
use formlift_core::domain::schema::SchemaNode;
use formlift_core::infrastructure::config::load_project_config;
use formlift_core::infrastructure::fs::load_json;

pub fn execute(project_dir: PathBuf, document: String) -> anyhow::Result<()> {
    let config = load_project_config(&project_dir)?;
    let schema_path = project_dir
        .join(&config.target_path)
        .join(&document)
        .join("schema.json");
    if !schema_path.exists() {
        anyhow::bail!(
            "❌ No schema found for '{}'.\n👉 Have you run 'formlift run'?",
            document
        );
    }

    let schema: SchemaNode = load_json(&schema_path)?;

    println!("\n🔍 Inspecting schema: '{}'", document);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Type", "Title", "Default"]);
    push_rows(&mut table, "", &schema);
    println!("{table}");

    Ok(())
}

fn push_rows(table: &mut Table, path: &str, node: &SchemaNode) {
    match node {
        SchemaNode::Object { properties, .. } => {
            for (key, child) in properties {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                push_rows(table, &child_path, child);
            }
        }
        SchemaNode::Array { title, items } => {
            table.add_row(vec![
                path.to_string(),
                "array".to_string(),
                title.clone(),
                String::new(),
            ]);
            push_rows(table, &format!("{path}[]"), items);
        }
        SchemaNode::String { title, default } => {
            table.add_row(vec![
                path.to_string(),
                "string".to_string(),
                title.clone(),
                default.clone(),
            ]);
        }
        SchemaNode::Number { title, default } => {
            table.add_row(vec![
                path.to_string(),
                "number".to_string(),
                title.clone(),
                default.to_string(),
            ]);
        }
        SchemaNode::Boolean { title, default } => {
            table.add_row(vec![
                path.to_string(),
                "boolean".to_string(),
                title.clone(),
                default.to_string(),
            ]);
        }
    }
}
