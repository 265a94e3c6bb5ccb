//! Error types for the Weft styling compiler

use thiserror::Error;

/// A single validation failure anywhere in the pipeline.
///
/// Grammar-level failures (`MalformedLiteral`, `OutOfRange`, `UnknownKeyword`)
/// carry the attribute name and the offending text so batch reports stay
/// readable. Schema-level failures are reported per node kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("malformed {field} literal: '{raw}'")]
    MalformedLiteral { field: String, raw: String },

    #[error("{field} value out of range: '{raw}'")]
    OutOfRange { field: String, raw: String },

    #[error("unknown keyword '{raw}' for {field}")]
    UnknownKeyword { field: String, raw: String },

    #[error("schema violation on <{kind}>: {violation}")]
    Schema {
        kind: String,
        violation: SchemaViolation,
    },

    #[error("unknown node kind '{raw}'")]
    UnknownKind { raw: String },

    #[error("invalid gradient: {message}")]
    InvalidGradient { message: String },

    #[error("IO error: {0}")]
    Io(String),
}

/// The ways an attribute bag can violate its node-kind schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("missing required fields: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("conflicting fields set together: {}", .0.join(", "))]
    Conflicting(Vec<String>),

    #[error("exactly one of {} must be set", .0.join(", "))]
    MissingExclusive(Vec<String>),

    #[error("field '{0}' is not accepted")]
    UnknownField(String),

    #[error("columns must list at least one grid column")]
    EmptyColumns,

    #[error("expected {expected} children, found {found}")]
    Children { expected: &'static str, found: usize },
}

pub type Result<T> = std::result::Result<T, StyleError>;

impl StyleError {
    pub fn malformed(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::MalformedLiteral {
            field: field.into(),
            raw: raw.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::OutOfRange {
            field: field.into(),
            raw: raw.into(),
        }
    }

    pub fn unknown_keyword(field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::UnknownKeyword {
            field: field.into(),
            raw: raw.into(),
        }
    }

    pub fn schema(kind: impl Into<String>, violation: SchemaViolation) -> Self {
        Self::Schema {
            kind: kind.into(),
            violation,
        }
    }

    pub fn invalid_gradient(message: impl Into<String>) -> Self {
        Self::InvalidGradient {
            message: message.into(),
        }
    }
}
