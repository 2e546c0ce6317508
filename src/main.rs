//! Searchbox CLI
//!
//! Launches the interactive search box in the terminal.

use clap::Parser;
use console::style;
use searchbox::{logging, CandidateList, WidgetConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Searchbox - filter a list of names as you type
///
/// Results update once typing pauses; the matched part of each
/// name is highlighted.
#[derive(Parser)]
#[command(name = "searchbox")]
#[command(author = "Searchbox Contributors")]
#[command(version)]
#[command(about = "Interactive search box for the terminal", long_about = None)]
struct Cli {
    /// Quiet interval in milliseconds before results update
    #[arg(long, default_value = "220")]
    debounce_ms: u64,

    /// Item to search (repeatable; replaces the built-in list)
    #[arg(short, long = "item", value_name = "TEXT")]
    items: Vec<String>,

    /// Number of example terms shown in the hint
    #[arg(long, default_value = "3")]
    hint_count: usize,

    /// Write the log here instead of next to the executable
    #[arg(long, value_name = "PATH", conflicts_with = "no_log")]
    log_file: Option<PathBuf>,

    /// Disable logging
    #[arg(long)]
    no_log: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> searchbox::Result<()> {
    if !cli.no_log {
        let path = cli.log_file.unwrap_or_else(logging::default_log_path);
        logging::init(&path)?;
    }
    info!(version = searchbox::VERSION, "searchbox starting up");

    let config = WidgetConfig {
        quiet_interval: Duration::from_millis(cli.debounce_ms),
        hint_count: cli.hint_count,
        ..Default::default()
    };
    config.validate()?;

    let candidates = if cli.items.is_empty() {
        CandidateList::default()
    } else {
        CandidateList::from_user_items(cli.items)?
    };

    searchbox::tui::run(candidates, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn repeated_items_are_collected() {
        let cli = Cli::parse_from(["searchbox", "-i", "Siri", "--item", "Alexa", "--debounce-ms", "100"]);
        assert_eq!(cli.items, ["Siri", "Alexa"]);
        assert_eq!(cli.debounce_ms, 100);
        assert_eq!(cli.hint_count, 3);
    }

    #[test]
    fn log_file_conflicts_with_no_log() {
        let parsed = Cli::try_parse_from(["searchbox", "--no-log", "--log-file", "x.log"]);
        assert!(parsed.is_err());
    }
}
