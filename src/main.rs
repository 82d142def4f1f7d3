use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cron_expand::cli::Cli;
use cron_expand::CronError;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.execute() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{} {e}", "[cron-expand]".red().bold());
            if matches!(e, CronError::InvalidShape { .. }) {
                eprintln!("Usage: cron-expand \"minute hour day-of-month month day-of-week command\"");
            }
            std::process::exit(1);
        }
    }
}
