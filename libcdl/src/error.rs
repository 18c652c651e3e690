//! Error types for CDL parsing.

use thiserror::Error;

/// Result type for CDL parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for CDL parsing.
///
/// Definition and assignment errors wrap the value-evaluation error that
/// produced them; the chain is reachable through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// A `{name}` reference to a constant that is not (yet) defined.
    #[error("unknown constant `{name}`")]
    UnknownConstant {
        /// The referenced constant name.
        name: String,
    },

    /// A bare identifier where a value was expected (only `true` and
    /// `false` are valid bare words).
    #[error("unknown bare identifier `{token}`")]
    UnknownIdentifier {
        /// The offending token.
        token: String,
    },

    /// A token that matches no value form.
    #[error("invalid value `{token}`")]
    InvalidValue {
        /// The offending token.
        token: String,
    },

    /// A non-empty line that is not a well-formed assignment, or an
    /// assignment whose value failed to evaluate.
    #[error("invalid assignment `{statement}`")]
    InvalidAssignment {
        /// The offending line, trimmed.
        statement: String,
        /// The evaluation error, when the line matched but its value did not.
        #[source]
        cause: Option<Box<ParseError>>,
    },

    /// A constant definition whose value failed to evaluate.
    #[error("invalid definition of constant `{name}`")]
    InvalidDefinition {
        /// The constant being defined.
        name: String,
        /// The evaluation error.
        #[source]
        cause: Box<ParseError>,
    },
}
