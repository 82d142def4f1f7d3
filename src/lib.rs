//! # cron-expand
//!
//! Expand a cron schedule expression into the concrete values each field
//! matches.
//!
//! ## Quick Start
//!
//! ```rust
//! use cron_expand::{render_table, CronExpansion, TableConfig};
//!
//! # fn example() -> cron_expand::Result<()> {
//! let expansion = CronExpansion::parse("*/15 0 1,15 * 1-5 /usr/bin/find")?;
//!
//! assert_eq!(expansion.fields()[0].values(), &[0, 15, 30, 45]);
//! println!("{}", render_table(&expansion, &TableConfig::default()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **numeric** — typed token parsing and bounds checks
//! - **segment** — grammar of one comma-separated clause
//! - **parser** — shape check, per-field expansion, whole-expression expansion
//! - **format** — text table and JSON rendering
//! - **cli** — `cron-expand` argument parsing

pub mod cli;
pub mod error;
pub mod field;
pub mod format;
pub mod numeric;
pub mod parser;
pub mod segment;

pub use error::{CronError, Reason, Result};
pub use field::{ExpandedField, FieldSpec, FIELD_SPECS};
pub use format::{render_json, render_table, TableConfig};
pub use numeric::{is_between, is_step_range_valid, parse_numeric};
pub use parser::{expand, expand_expression, validate, CronExpansion};
pub use segment::{expand_segment, Segment, StepBase};
