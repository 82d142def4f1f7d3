//! Segment grammar
//!
//! One comma-separated clause of a field, checked in this order:
//! - `*` - every value in the field
//! - `base/step` - every `step`-th value, where `base` is `*`, `a-b` or a
//!   starting number
//! - `a-b` - inclusive range
//! - `n` - single value

use crate::error::{CronError, Reason, Result};
use crate::field::FieldSpec;
use crate::numeric::{is_between, is_step_range_valid, parse_numeric};

const ANY: &str = "*";
const RANGE: char = '-';
const STEP: char = '/';

/// Where a stepped segment starts and stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBase {
    /// `*/n`: from the field minimum to its maximum
    Any,
    /// `a-b/n`
    Range { start: u32, end: u32 },
    /// `a/n`: from `a` to the field maximum
    From(u32),
}

/// A parsed segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Any,
    Step { base: StepBase, step: u32 },
    Range { start: u32, end: u32 },
    Value(u32),
}

impl Segment {
    /// Parse one segment against `spec`.
    ///
    /// Ranges and step bases are checked against the field bounds here.
    /// Single values are not; the field parser's domain check rejects them.
    /// Every error names the whole segment along with the field and bounds,
    /// even when only one side of a range or step was bad.
    pub fn parse(text: &str, spec: &FieldSpec) -> Result<Self> {
        Self::parse_parts(text, spec).map_err(|e| match e.reason() {
            Some(reason) => segment_error(spec, text, reason),
            None => e,
        })
    }

    fn parse_parts(text: &str, spec: &FieldSpec) -> Result<Self> {
        if text == ANY {
            return Ok(Segment::Any);
        }

        if text.contains(STEP) {
            let parts: Vec<&str> = text.split(STEP).collect();
            let [base, step] = parts[..] else {
                return Err(segment_error(spec, text, Reason::MalformedStep));
            };

            let step = parse_numeric(step)?;
            if step == 0 {
                return Err(segment_error(spec, text, Reason::ZeroStep));
            }

            let base = if base == ANY {
                StepBase::Any
            } else if base.contains(RANGE) {
                let (start, end) = parse_range(base)?;
                if !is_step_range_valid([start, end], spec.min, spec.max) {
                    return Err(segment_error(spec, text, Reason::InvalidRange));
                }
                StepBase::Range { start, end }
            } else {
                let start = parse_numeric(base)?;
                if !is_between(start, spec.min, spec.max) {
                    return Err(segment_error(spec, text, Reason::OutOfRange));
                }
                StepBase::From(start)
            };

            return Ok(Segment::Step { base, step });
        }

        if text.contains(RANGE) {
            let (start, end) = parse_range(text)?;
            if !is_step_range_valid([start, end], spec.min, spec.max) {
                return Err(segment_error(spec, text, Reason::InvalidRange));
            }
            return Ok(Segment::Range { start, end });
        }

        Ok(Segment::Value(parse_numeric(text)?))
    }

    /// Enumerate the values this segment matches, ascending.
    pub fn values(&self, spec: &FieldSpec) -> Vec<u32> {
        match *self {
            Segment::Any => (spec.min..=spec.max).collect(),
            Segment::Step { base, step } => {
                let (start, end) = match base {
                    StepBase::Any => (spec.min, spec.max),
                    StepBase::Range { start, end } => (start, end),
                    StepBase::From(start) => (start, spec.max),
                };
                (start..=end).step_by(step as usize).collect()
            }
            Segment::Range { start, end } => (start..=end).collect(),
            Segment::Value(value) => vec![value],
        }
    }
}

/// Parse and enumerate one segment of a field.
pub fn expand_segment(text: &str, spec: &FieldSpec) -> Result<Vec<u32>> {
    let segment = Segment::parse(text, spec)?;
    let values = segment.values(spec);
    tracing::trace!(
        field = spec.name,
        segment = text,
        count = values.len(),
        "Expanded segment"
    );
    Ok(values)
}

fn parse_range(text: &str) -> Result<(u32, u32)> {
    let (start, end) = text
        .split_once(RANGE)
        .ok_or_else(|| CronError::invalid(text, Reason::InvalidRange))?;
    Ok((parse_numeric(start)?, parse_numeric(end)?))
}

fn segment_error(spec: &FieldSpec, text: &str, reason: Reason) -> CronError {
    CronError::invalid(text, reason).in_field(spec.name, spec.min, spec.max)
}
