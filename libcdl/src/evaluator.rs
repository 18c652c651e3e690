//! Phase-agnostic value evaluator.
//!
//! Both constant definitions and assignments delegate their right-hand side
//! to [`parse_value`], which recursively evaluates a token string into a
//! [`Value`]:
//! - `{name}` substitutes a previously defined constant
//! - `array(...)` splits its interior at top-level commas and recurses
//! - numbers follow the canonical grammar (no leading zeros)
//! - quoted strings are taken verbatim, without escape processing
//! - `true` and `false` are boolean literals; any other bare identifier
//!   is rejected

use crate::error::{ParseError, Result};
use crate::value::Value;
use std::collections::HashMap;

/// Evaluate a single token string against the constant table.
pub fn parse_value(token: &str, constants: &HashMap<String, Value>) -> Result<Value> {
    let token = token.trim();

    // Constant reference: {name}
    if let Some(interior) = token.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        let name = interior.trim();
        return constants
            .get(name)
            .cloned()
            .ok_or_else(|| ParseError::UnknownConstant {
                name: name.to_string(),
            });
    }

    // Array: array(elem, elem, ...)
    if let Some(interior) = token
        .strip_prefix("array(")
        .and_then(|t| t.strip_suffix(')'))
    {
        let mut items = Vec::new();
        for element in split_elements(interior) {
            items.push(parse_value(element, constants)?);
        }
        return Ok(Value::Array(items));
    }

    // Number: optional sign, "0" or nonzero-led digits, optional fraction
    if is_canonical_number(token) {
        return if token.contains('.') {
            token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ParseError::InvalidValue {
                    token: token.to_string(),
                })
        } else {
            // Out-of-range i64 tokens match the grammar but are not values.
            token
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ParseError::InvalidValue {
                    token: token.to_string(),
                })
        };
    }

    // String: matching pair of single or double quotes, interior verbatim
    if token.len() >= 2 {
        let bytes = token.as_bytes();
        let quote = bytes[0];
        if (quote == b'\'' || quote == b'"') && bytes[bytes.len() - 1] == quote {
            return Ok(Value::String(token[1..token.len() - 1].to_string()));
        }
    }

    // Boolean literals are the only bare words with a meaning.
    match token {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if is_identifier(token) {
        return Err(ParseError::UnknownIdentifier {
            token: token.to_string(),
        });
    }

    Err(ParseError::InvalidValue {
        token: token.to_string(),
    })
}

/// Split an array interior at top-level commas.
///
/// Depth is tracked by `(`/`)` and `{`/`}` pairs; a comma only delimits
/// elements at depth zero. Empty and whitespace-only segments are skipped,
/// so a trailing comma is harmless.
fn split_elements(interior: &str) -> Vec<&str> {
    let mut elements = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (at, ch) in interior.char_indices() {
        match ch {
            '(' | '{' => depth += 1,
            ')' | '}' => depth -= 1,
            ',' if depth == 0 => {
                let segment = interior[start..at].trim();
                if !segment.is_empty() {
                    elements.push(segment);
                }
                start = at + 1;
            }
            _ => {}
        }
    }

    let segment = interior[start..].trim();
    if !segment.is_empty() {
        elements.push(segment);
    }

    elements
}

/// Check a token against the canonical number grammar:
/// `["+"|"-"] ("0" | [1-9][0-9]*) ["." [0-9]+]`.
///
/// A multi-digit integer part may not start with `0`, so `007` falls
/// through to the later value forms (and ultimately fails).
fn is_canonical_number(token: &str) -> bool {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if int_part.len() > 1 && int_part.starts_with('0') {
        return false;
    }
    match frac_part {
        Some(frac) => !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// Check a token against the identifier grammar `[a-z][a-z0-9_]*`.
pub(crate) fn is_identifier(token: &str) -> bool {
    let mut bytes = token.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_lowercase() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
