//! Cron expression parser
//!
//! An expression is six whitespace-separated tokens: five schedule fields
//! followed by the command.
//!
//! Special characters inside a field:
//! - `*` - any value
//! - `,` - value list separator (e.g., `1,3,5`)
//! - `-` - range (e.g., `1-5`)
//! - `/` - step (e.g., `*/5`, `0-30/5` or `10/5`)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CronError, Reason, Result};
use crate::field::{ExpandedField, FieldSpec, FIELD_SPECS};
use crate::segment::expand_segment;

/// Number of tokens in a well-formed expression: five fields plus the command.
pub const TOKEN_COUNT: usize = FIELD_SPECS.len() + 1;

const COMMAND_INDEX: usize = FIELD_SPECS.len();
const SEPARATOR: char = ',';

/// Whether `tokens` has the shape of a full expression.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.len() == TOKEN_COUNT
}

/// Expand field `index` of `tokens` against `spec`.
///
/// Every value produced is checked against the field bounds before the
/// result is frozen; the first failing segment aborts the whole field.
pub fn expand<S: AsRef<str>>(
    spec: &FieldSpec,
    tokens: &[S],
    index: usize,
) -> Result<ExpandedField> {
    let raw: &str = tokens
        .get(index)
        .map(|token| token.as_ref())
        .ok_or(CronError::InvalidShape {
            expected: TOKEN_COUNT,
            found: tokens.len(),
        })?;

    let segments: Vec<&str> = raw.split(SEPARATOR).map(str::trim).collect();

    let mut working = Vec::new();
    for segment in &segments {
        let values = expand_segment(segment, spec)
            .map_err(|e| e.in_field(spec.name, spec.min, spec.max))?;
        working.extend(values);
    }

    if working.iter().any(|&value| !spec.contains(value)) {
        return Err(CronError::InvalidExpression {
            field: Some(spec.name.to_string()),
            token: segments.join(","),
            bounds: Some((spec.min, spec.max)),
            reason: Reason::OutOfRange,
        });
    }

    let field = ExpandedField::freeze(spec.name, working);
    tracing::debug!(
        field = spec.name,
        segments = segments.len(),
        values = field.values().len(),
        "Expanded field"
    );
    Ok(field)
}

/// A fully expanded expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCronExpansion")]
pub struct CronExpansion {
    /// One entry per schedule position, in expression order
    fields: Vec<ExpandedField>,
    /// The command token, verbatim
    command: String,
}

#[derive(Deserialize)]
struct RawCronExpansion {
    fields: Vec<ExpandedField>,
    command: String,
}

impl TryFrom<RawCronExpansion> for CronExpansion {
    type Error = CronError;

    fn try_from(raw: RawCronExpansion) -> Result<Self> {
        if raw.fields.len() != FIELD_SPECS.len() {
            return Err(CronError::InvalidShape {
                expected: TOKEN_COUNT,
                found: raw.fields.len() + 1,
            });
        }
        if let Some((field, _)) = raw
            .fields
            .iter()
            .zip(FIELD_SPECS.iter())
            .find(|(field, spec)| field.name() != spec.name)
        {
            return Err(CronError::invalid(field.name(), Reason::UnknownField));
        }
        Ok(Self {
            fields: raw.fields,
            command: raw.command,
        })
    }
}

impl CronExpansion {
    /// Expand a raw expression string.
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_expand::CronExpansion;
    ///
    /// let expansion = CronExpansion::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
    /// assert_eq!(expansion.fields()[0].values(), &[0, 15, 30, 45]);
    /// assert_eq!(expansion.command(), "/usr/bin/find");
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let tokens: Vec<&str> = expression.split_whitespace().collect();

        if !validate(&tokens[..]) {
            tracing::debug!(found = tokens.len(), "Rejected expression shape");
            return Err(CronError::InvalidShape {
                expected: TOKEN_COUNT,
                found: tokens.len(),
            });
        }

        let fields = FIELD_SPECS
            .iter()
            .enumerate()
            .map(|(index, spec)| expand(spec, &tokens[..], index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            fields,
            command: tokens[COMMAND_INDEX].to_string(),
        })
    }

    /// Expanded fields, one per schedule position in expression order
    pub fn fields(&self) -> &[ExpandedField] {
        &self.fields
    }

    /// The command token, verbatim
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&ExpandedField> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

impl FromStr for CronExpansion {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Expand a raw expression string. Shorthand for [`CronExpansion::parse`].
pub fn expand_expression(expression: &str) -> Result<CronExpansion> {
    CronExpansion::parse(expression)
}
