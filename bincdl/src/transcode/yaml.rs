//! YAML transcoding: render CDL documents as YAML text.
//!
//! Mapping from CDL to YAML:
//!   - Document        -> YAML mapping (insertion order preserved)
//!   - Value::Bool     -> YAML bool
//!   - Value::Integer  -> YAML integer
//!   - Value::Float    -> YAML float
//!   - Value::String   -> YAML string
//!   - Value::Array    -> YAML sequence

use libcdl::{Document, Value};

/// Encode a CDL document as a YAML string.
pub fn encode(document: &Document) -> Result<String, String> {
    let mapping = document_to_yaml(document);
    serde_yaml::to_string(&mapping).map_err(|e| format!("YAML encode error: {}", e))
}

fn document_to_yaml(document: &Document) -> serde_yaml::Value {
    let mut mapping = serde_yaml::Mapping::new();
    for (name, value) in document.iter() {
        mapping.insert(
            serde_yaml::Value::String(name.to_string()),
            value_to_yaml(value),
        );
    }
    serde_yaml::Value::Mapping(mapping)
}

fn value_to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Integer(n) => serde_yaml::Value::Number(serde_yaml::Number::from(*n)),
        Value::Float(f) => serde_yaml::Value::Number(serde_yaml::Number::from(*f)),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(arr) => serde_yaml::Value::Sequence(arr.iter().map(value_to_yaml).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libcdl::parse;

    /// Walk a reloaded YAML value and check it matches the original.
    fn assert_matches(value: &Value, yaml: &serde_yaml::Value) {
        match value {
            Value::Bool(b) => assert_eq!(yaml.as_bool(), Some(*b)),
            Value::Integer(n) => assert_eq!(yaml.as_i64(), Some(*n)),
            Value::Float(f) => assert_eq!(yaml.as_f64(), Some(*f)),
            Value::String(s) => assert_eq!(yaml.as_str(), Some(s.as_str())),
            Value::Array(arr) => {
                let seq = yaml.as_sequence().expect("expected a YAML sequence");
                assert_eq!(seq.len(), arr.len());
                for (item, reloaded) in arr.iter().zip(seq) {
                    assert_matches(item, reloaded);
                }
            }
        }
    }

    #[test]
    fn roundtrip_preserves_keys_order_and_types() {
        let document = parse(
            "(def sizes array(10, 20, 30));\n\
             port = 8080;\n\
             temperature = -25.5;\n\
             name = 'server';\n\
             debug = true;\n\
             layout = array({sizes}, array(1, 2), 'end');\n",
        )
        .unwrap();

        let text = encode(&document).unwrap();
        let reloaded: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        let mapping = reloaded.as_mapping().expect("expected a YAML mapping");

        // Same keys in the same order
        let reloaded_keys: Vec<&str> = mapping
            .iter()
            .map(|(k, _)| k.as_str().expect("string key"))
            .collect();
        let original_keys: Vec<&str> = document.keys().collect();
        assert_eq!(reloaded_keys, original_keys);

        // Same scalar types and nesting throughout
        for (name, value) in document.iter() {
            assert_matches(value, &reloaded[name]);
        }
    }

    #[test]
    fn integer_and_float_stay_distinct() {
        let document = parse("count = 25;\nratio = 25.0;\n").unwrap();
        let text = encode(&document).unwrap();
        let reloaded: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();

        assert!(reloaded["count"].is_i64());
        assert!(reloaded["ratio"].is_f64());
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        let document = parse("").unwrap();
        let text = encode(&document).unwrap();
        let reloaded: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert!(reloaded.as_mapping().map_or(false, |m| m.is_empty()) || reloaded.is_null());
    }
}
