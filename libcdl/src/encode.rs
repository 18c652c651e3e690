//! Encode a parsed document as JSON text.
//!
//! YAML and TOML renditions are handled by the CLI tool using dedicated
//! libraries; JSON is simple enough to render here. Keys are emitted in the
//! document's insertion order.

use crate::value::{Document, Value};

/// Render a document as a pretty-printed JSON object.
pub fn encode_json(document: &Document) -> String {
    if document.is_empty() {
        return "{}".to_string();
    }

    let items: Vec<String> = document
        .iter()
        .map(|(name, value)| {
            format!("{}: {}", encode_json_string(name), encode_json_value(value, 1))
        })
        .collect();

    format!(
        "{{\n{}\n}}",
        items
            .iter()
            .map(|item| format!("  {}", item))
            .collect::<Vec<_>>()
            .join(",\n")
    )
}

fn encode_json_value(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let pad1 = "  ".repeat(indent + 1);

    match value {
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => {
            // Keep a fractional part so the token reads back as a float.
            let s = format!("{}", f);
            if s.contains('.') || s.contains('e') {
                s
            } else {
                format!("{}.0", s)
            }
        }
        Value::String(s) => encode_json_string(s),
        Value::Array(arr) => {
            if arr.is_empty() {
                "[]".to_string()
            } else {
                let items: Vec<String> = arr
                    .iter()
                    .map(|v| encode_json_value(v, indent + 1))
                    .collect();
                format!(
                    "[\n{}\n{}]",
                    items
                        .iter()
                        .map(|item| format!("{}{}", pad1, item))
                        .collect::<Vec<_>>()
                        .join(",\n"),
                    pad
                )
            }
        }
    }
}

fn encode_json_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x08' => result.push_str("\\b"),
            '\x0c' => result.push_str("\\f"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
