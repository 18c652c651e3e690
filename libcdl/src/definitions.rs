//! Phase 2: Constant definitions.
//!
//! A definition occupies a whole line: `(def <ident> <value-expr>);`.
//! Matched lines are evaluated against the constants registered so far and
//! removed from the stream; everything else passes through unchanged for
//! the assignment phase. Constants may therefore not be referenced before
//! the line that defines them.

use crate::error::{ParseError, Result};
use crate::evaluator::{is_identifier, parse_value};
use crate::value::Value;
use std::collections::HashMap;

/// Scan comment-stripped text for constant definitions.
///
/// Returns the frozen constant table and the remaining lines in their
/// original order. Redefining a name overwrites the earlier value.
pub fn process_definitions(text: &str) -> Result<(HashMap<String, Value>, Vec<&str>)> {
    let mut constants = HashMap::new();
    let mut remaining = Vec::new();

    for line in text.lines() {
        match split_definition(line.trim()) {
            Some((name, expression)) => {
                let value = parse_value(expression, &constants).map_err(|cause| {
                    ParseError::InvalidDefinition {
                        name: name.to_string(),
                        cause: Box::new(cause),
                    }
                })?;
                constants.insert(name.to_string(), value);
            }
            None => remaining.push(line),
        }
    }

    Ok((constants, remaining))
}

/// Match a trimmed line against `(def <ident> <value-expr>);`.
///
/// The expression is everything between the identifier and the line's
/// final `);`. Returns `None` when the line is not a definition.
fn split_definition(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix("(def")?.strip_suffix(");")?;
    if !body.starts_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }
    let body = body.trim_start();

    let name_end = body.find(|c: char| c.is_ascii_whitespace())?;
    let (name, expression) = body.split_at(name_end);
    if !is_identifier(name) {
        return None;
    }

    Some((name, expression.trim_start()))
}
