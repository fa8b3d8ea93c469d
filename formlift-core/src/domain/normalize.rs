// formlift-core/src/domain/normalize.rs

use serde_json::Value;

/// Canonicalizes a raw extracted tree before schema inference.
///
/// The extraction model frequently wraps a single recognized string in a
/// one-element array (`["Acme Corp"]`). Rendering and validation both want
/// the bare string, so any array whose normalized content is exactly one
/// string collapses to that string. Everything else keeps its shape.
///
/// Total over arbitrary JSON, side-effect-free, and idempotent:
/// `normalize(normalize(x))` always equals `normalize(x)`.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Array(items) => {
            // Inner values first, so nested single-string arrays collapse
            // before the outer check runs.
            let mut items: Vec<Value> = items.into_iter().map(normalize).collect();
            if items.len() == 1 && items[0].is_string() {
                items.remove(0)
            } else {
                Value::Array(items)
            }
        }
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect())
        }
        scalar => scalar,
    }
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_string_array_collapses() {
        assert_eq!(normalize(json!(["Acme Corp"])), json!("Acme Corp"));
    }

    #[test]
    fn test_multi_element_array_unchanged() {
        assert_eq!(normalize(json!(["a", "b"])), json!(["a", "b"]));
    }

    #[test]
    fn test_single_non_string_element_unchanged() {
        assert_eq!(normalize(json!([42])), json!([42]));
        assert_eq!(normalize(json!([{ "sku": "A1" }])), json!([{ "sku": "A1" }]));
    }

    #[test]
    fn test_nested_arrays_collapse_inner_first() {
        // [["x"]] -> ["x"] after the inner pass -> "x" after the outer check
        assert_eq!(normalize(json!([["x"]])), json!("x"));
    }

    #[test]
    fn test_object_values_normalized_recursively() {
        let raw = json!({
            "company": ["Acme Corp"],
            "contacts": { "emails": ["a@b.com", "c@d.com"] }
        });
        let expected = json!({
            "company": "Acme Corp",
            "contacts": { "emails": ["a@b.com", "c@d.com"] }
        });
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn test_scalars_and_null_pass_through() {
        assert_eq!(normalize(json!(null)), json!(null));
        assert_eq!(normalize(json!(true)), json!(true));
        assert_eq!(normalize(json!(3.5)), json!(3.5));
        assert_eq!(normalize(json!("text")), json!("text"));
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            json!(null),
            json!(["Acme Corp"]),
            json!([["deep"], "flat"]),
            json!({
                "a": [["x"]],
                "b": { "c": ["only"], "d": [1, 2] },
                "e": []
            }),
        ];
        for sample in samples {
            let once = normalize(sample.clone());
            let twice = normalize(once.clone());
            assert_eq!(once, twice, "normalize must be idempotent for {sample}");
        }
    }
}
