//! CDL (Configuration Description Language) parser implementation.
//!
//! CDL is a small configuration language with named constants, scalar
//! values (integers, floats, strings, booleans), and arbitrarily nested
//! arrays. A document is a sequence of constant definitions and
//! assignments; parsing produces an ordered name/value mapping suitable
//! for serialization into a standard markup format.
//!
//! # Parsing Pipeline
//!
//! The parser operates in three phases:
//!
//! 1. **Comment stripping**: removes `C ` line comments and `--[[ ... ]]`
//!    block comments from the raw text.
//!
//! 2. **Definitions**: scans lines for `(def name value);` statements,
//!    evaluates them in order, and builds the constant table. Matched
//!    lines are consumed; the table is frozen afterwards.
//!
//! 3. **Assignments**: evaluates the remaining `name = value;` lines
//!    against the frozen constants and builds the output document.
//!
//! Any failure aborts the parse immediately; the first error encountered
//! is the one surfaced.

mod assignments;
mod comments;
mod definitions;
mod encode;
mod error;
mod evaluator;
mod value;

pub use encode::encode_json;
pub use error::{ParseError, Result};
pub use value::{Document, Value};

/// Parse a CDL document from a string.
///
/// Every call starts from fresh constant and output tables; no state
/// survives between parses.
///
/// # Example
///
/// ```
/// use libcdl::parse;
///
/// let document = parse("port = 8080;").unwrap();
/// assert_eq!(document.get("port").unwrap().as_integer(), Some(8080));
/// ```
pub fn parse(input: &str) -> Result<Document> {
    // Phase 1: strip comments
    let text = comments::strip_comments(input);

    // Phase 2: collect constant definitions, keep the rest
    let (constants, lines) = definitions::process_definitions(&text)?;

    // Phase 3: evaluate assignments against the frozen constants
    assignments::process_assignments(&lines, &constants)
}
