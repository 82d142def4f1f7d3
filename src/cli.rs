//! Command-line interface

use clap::{Parser, ValueEnum};

use crate::error::Result;
use crate::format::{render_json, render_table, TableConfig, DEFAULT_NAME_WIDTH};
use crate::parser::CronExpansion;

/// Expand a cron expression into the values each field matches
#[derive(Debug, Parser)]
#[command(name = "cron-expand", version, about)]
pub struct Cli {
    /// Cron expression: "minute hour day-of-month month day-of-week command"
    pub expression: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Width of the field name column in table output
    #[arg(long, default_value_t = DEFAULT_NAME_WIDTH)]
    pub name_width: usize,
}

/// How the expansion is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Expand the expression and render it in the requested format.
    pub fn execute(&self) -> Result<String> {
        let expansion = CronExpansion::parse(&self.expression)?;
        tracing::debug!(command = expansion.command(), "Expanded expression");

        match self.format {
            OutputFormat::Table => Ok(render_table(
                &expansion,
                &TableConfig {
                    name_width: self.name_width,
                },
            )),
            OutputFormat::Json => render_json(&expansion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CronError;

    #[test]
    fn test_parse_args_defaults() {
        let cli = Cli::try_parse_from(["cron-expand", "*/15 0 1,15 * 1-5 /usr/bin/find"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.name_width, DEFAULT_NAME_WIDTH);
    }

    #[test]
    fn test_parse_args_json() {
        let cli =
            Cli::try_parse_from(["cron-expand", "--format", "json", "* * * * * /bin/true"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_expression_rejected() {
        assert!(Cli::try_parse_from(["cron-expand"]).is_err());
    }

    #[test]
    fn test_execute_table() {
        let cli = Cli::try_parse_from(["cron-expand", "1 1-2 */3 * * /user/user"]).unwrap();
        let out = cli.execute().unwrap();
        assert!(out.starts_with("minute        1\nhour          1 2\n"));
        assert!(out.ends_with("command       /user/user"));
    }

    #[test]
    fn test_execute_json() {
        let cli = Cli::try_parse_from(["cron-expand", "-f", "json", "0 0 1 1 0 /bin/true"]).unwrap();
        let out = cli.execute().unwrap();
        assert!(out.contains("\"command\": \"/bin/true\""));
    }

    #[test]
    fn test_execute_propagates_error() {
        let cli = Cli::try_parse_from(["cron-expand", "0 0 1 1 /bin/true"]).unwrap();
        assert!(matches!(
            cli.execute().unwrap_err(),
            CronError::InvalidShape { found: 5, .. }
        ));
    }
}
