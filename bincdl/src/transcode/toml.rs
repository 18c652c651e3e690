//! TOML transcoding: render CDL documents as TOML text.
//!
//! Mapping from CDL to TOML:
//!   - Document        -> TOML table (CDL documents are always top-level
//!                        tables, so the TOML root requirement is met)
//!   - Value::Bool     -> TOML boolean
//!   - Value::Integer  -> TOML integer
//!   - Value::Float    -> TOML float
//!   - Value::String   -> TOML string
//!   - Value::Array    -> TOML array
//!
//! CDL has no null and its integers are already i64, so the conversion
//! cannot fail.

use libcdl::{Document, Value};
use toml_edit::DocumentMut;

/// Encode a CDL document as a TOML string.
pub fn encode(document: &Document) -> String {
    let mut doc = DocumentMut::new();
    for (name, value) in document.iter() {
        doc[name] = toml_edit::value(value_to_toml(value));
    }
    doc.to_string()
}

fn value_to_toml(value: &Value) -> toml_edit::Value {
    match value {
        Value::Bool(b) => toml_edit::Value::from(*b),
        Value::Integer(n) => toml_edit::Value::from(*n),
        Value::Float(f) => toml_edit::Value::from(*f),
        Value::String(s) => toml_edit::Value::from(s.as_str()),
        Value::Array(arr) => {
            let mut array = toml_edit::Array::new();
            for item in arr {
                array.push(value_to_toml(item));
            }
            toml_edit::Value::Array(array)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcdl::parse;

    #[test]
    fn scalars_and_arrays_render_as_toml() {
        let document = parse(
            "port = 8080;\n\
             temperature = -25.5;\n\
             name = 'server';\n\
             debug = true;\n\
             sizes = array(10, 20, 30);\n",
        )
        .unwrap();

        let text = encode(&document);
        let reloaded: DocumentMut = text.parse().unwrap();

        assert_eq!(reloaded["port"].as_integer(), Some(8080));
        assert_eq!(reloaded["temperature"].as_float(), Some(-25.5));
        assert_eq!(reloaded["name"].as_str(), Some("server"));
        assert_eq!(reloaded["debug"].as_bool(), Some(true));
        let sizes = reloaded["sizes"].as_array().unwrap();
        assert_eq!(sizes.len(), 3);
    }

    #[test]
    fn nested_arrays_survive_reload() {
        let document = parse("layout = array(array(1, 2), array(3));\n").unwrap();
        let text = encode(&document);
        let reloaded: DocumentMut = text.parse().unwrap();

        let layout = reloaded["layout"].as_array().unwrap();
        assert_eq!(layout.len(), 2);
    }
}
