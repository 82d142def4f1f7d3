//! Field domains and expanded field values
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-7, 0 and 7 both Sunday)
//! │ │ │ │ │
//! * * * * * command
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CronError, Reason, Result};

/// Legal numeric domain of one schedule position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

impl FieldSpec {
    pub const fn new(name: &'static str, min: u32, max: u32) -> Self {
        Self { name, min, max }
    }

    /// Whether `value` lies inside `[min, max]`
    pub fn contains(&self, value: u32) -> bool {
        crate::numeric::is_between(value, self.min, self.max)
    }

    /// Find a schedule position by name
    pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
        FIELD_SPECS.iter().find(|spec| spec.name == name)
    }
}

/// Schedule positions in expression order.
///
/// Day of week keeps 7 as a value distinct from 0.
pub const FIELD_SPECS: [FieldSpec; 5] = [
    FieldSpec::new("minute", 0, 59),
    FieldSpec::new("hour", 0, 23),
    FieldSpec::new("day of month", 1, 31),
    FieldSpec::new("month", 1, 12),
    FieldSpec::new("day of week", 0, 7),
];

/// The values one field matches, strictly ascending and in bounds
///
/// Deserialized input is checked against the field's domain and then
/// frozen, so the invariant holds for values read back from JSON too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExpandedField")]
pub struct ExpandedField {
    name: String,
    values: Vec<u32>,
}

#[derive(Deserialize)]
struct RawExpandedField {
    name: String,
    values: Vec<u32>,
}

impl TryFrom<RawExpandedField> for ExpandedField {
    type Error = CronError;

    fn try_from(raw: RawExpandedField) -> Result<Self> {
        let spec = FieldSpec::lookup(&raw.name)
            .ok_or_else(|| CronError::invalid(raw.name.as_str(), Reason::UnknownField))?;
        if let Some(value) = raw.values.iter().find(|&&v| !spec.contains(v)) {
            return Err(CronError::invalid(value.to_string(), Reason::OutOfRange).in_field(
                spec.name,
                spec.min,
                spec.max,
            ));
        }
        Ok(Self::freeze(spec.name, raw.values))
    }
}

impl ExpandedField {
    /// Freeze a working list: sort ascending and drop duplicates.
    pub(crate) fn freeze(name: &str, mut values: Vec<u32>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self {
            name: name.to_string(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Whether the field matches `value`
    pub fn contains(&self, value: u32) -> bool {
        self.values.binary_search(&value).is_ok()
    }
}
