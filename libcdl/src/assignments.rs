//! Phase 3: Assignments.
//!
//! After definitions are removed, every remaining non-empty line must be an
//! assignment `<ident> = <value-expr>;`. Lines that still begin with a
//! comment marker (`C ` or `--`, e.g. the head of an unterminated block
//! comment) are skipped rather than misread as assignments.

use crate::error::{ParseError, Result};
use crate::evaluator::{is_identifier, parse_value};
use crate::value::{Document, Value};
use std::collections::HashMap;

/// Evaluate the remaining lines into the ordered output mapping.
///
/// Assigning a name twice overwrites the earlier value; the document keeps
/// one entry per name, holding the last assignment.
pub fn process_assignments(
    lines: &[&str],
    constants: &HashMap<String, Value>,
) -> Result<Document> {
    let mut document = Document::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with("C ") || line.starts_with("--") {
            continue;
        }

        let (name, expression) =
            split_assignment(line).ok_or_else(|| ParseError::InvalidAssignment {
                statement: line.to_string(),
                cause: None,
            })?;

        let value =
            parse_value(expression, constants).map_err(|cause| ParseError::InvalidAssignment {
                statement: line.to_string(),
                cause: Some(Box::new(cause)),
            })?;

        document.insert(name, value);
    }

    Ok(document)
}

/// Match a trimmed line against `<ident> = <value-expr>;`.
///
/// The expression is everything between the first `=` and the line's final
/// `;`. Returns `None` when the line is not a well-formed assignment.
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_suffix(';')?;
    let (name, expression) = body.split_once('=')?;
    let name = name.trim();
    if !is_identifier(name) {
        return None;
    }
    Some((name, expression.trim()))
}
