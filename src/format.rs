//! Rendering of expanded expressions

use crate::error::Result;
use crate::parser::CronExpansion;

/// Width of the name column in the default table layout
pub const DEFAULT_NAME_WIDTH: usize = 14;

const COMMAND_LABEL: &str = "command";

/// Table layout options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Names are left-aligned and padded to this many characters
    pub name_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

/// Render one line per field plus a final `command` line.
///
/// Values are space-separated and ascending. No trailing newline.
pub fn render_table(expansion: &CronExpansion, config: &TableConfig) -> String {
    let width = config.name_width;
    let mut lines: Vec<String> = expansion
        .fields()
        .iter()
        .map(|field| {
            let values: Vec<String> = field.values().iter().map(u32::to_string).collect();
            format!("{:<width$}{}", field.name(), values.join(" "))
        })
        .collect();
    lines.push(format!("{:<width$}{}", COMMAND_LABEL, expansion.command()));
    lines.join("\n")
}

/// Render the expansion as pretty-printed JSON.
pub fn render_json(expansion: &CronExpansion) -> Result<String> {
    Ok(serde_json::to_string_pretty(expansion)?)
}
