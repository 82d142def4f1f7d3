//! Error types for cron-expand

use std::fmt;

use thiserror::Error;

/// Why a field or segment was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Token is not an unsigned decimal integer
    NotNumeric,
    /// Value falls outside the field's bounds
    OutOfRange,
    /// Range start is greater than its end, or an endpoint is out of bounds
    InvalidRange,
    /// Stepped segment does not have exactly one `/`
    MalformedStep,
    /// Step of zero
    ZeroStep,
    /// Field name is not a schedule position, or is out of order
    UnknownField,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Reason::NotNumeric => "not a number",
            Reason::OutOfRange => "value out of range",
            Reason::InvalidRange => "invalid range",
            Reason::MalformedStep => "malformed step",
            Reason::ZeroStep => "step must be greater than zero",
            Reason::UnknownField => "unknown field",
        };
        f.write_str(s)
    }
}

/// Errors that can occur while expanding a cron expression
#[derive(Debug, Error)]
pub enum CronError {
    /// Wrong number of whitespace-separated tokens
    #[error(
        "Expected {expected} fields (minute hour day-of-month month day-of-week command), got {found}"
    )]
    InvalidShape { expected: usize, found: usize },

    /// A field token could not be expanded
    #[error(
        "Invalid cron expression{}: {token}{} ({reason})",
        field_label(.field),
        bounds_label(.bounds)
    )]
    InvalidExpression {
        /// Field name, when known at the point of failure
        field: Option<String>,
        /// The offending segment or token
        token: String,
        /// `(min, max)` of the field, when known
        bounds: Option<(u32, u32)>,
        reason: Reason,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CronError {
    /// Build an `InvalidExpression` with no field context yet.
    pub fn invalid(token: impl Into<String>, reason: Reason) -> Self {
        CronError::InvalidExpression {
            field: None,
            token: token.into(),
            bounds: None,
            reason,
        }
    }

    /// Fill in field name and bounds if the error was raised without them.
    ///
    /// Context that is already present is left untouched, so the innermost
    /// layer that knew the field wins.
    pub fn in_field(self, name: &str, min: u32, max: u32) -> Self {
        match self {
            CronError::InvalidExpression {
                field,
                token,
                bounds,
                reason,
            } => CronError::InvalidExpression {
                field: field.or_else(|| Some(name.to_string())),
                token,
                bounds: bounds.or(Some((min, max))),
                reason,
            },
            other => other,
        }
    }

    /// The rejection reason, if this is an expression error
    pub fn reason(&self) -> Option<Reason> {
        match self {
            CronError::InvalidExpression { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

fn field_label(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|name| format!(" for {name}"))
        .unwrap_or_default()
}

fn bounds_label(bounds: &Option<(u32, u32)>) -> String {
    bounds
        .map(|(min, max)| format!(" (min: {min}, max: {max})"))
        .unwrap_or_default()
}

/// Result type alias for cron-expand operations
pub type Result<T> = std::result::Result<T, CronError>;
