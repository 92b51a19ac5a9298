use clap::Parser;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;
use todoc::{App, Config, Filter, session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todoc")]
#[command(about = "TodoC - a priority-sorted to-do list for the terminal")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Settings file (default: <config dir>/todoc/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter tab selected at startup (all, in-progress, completed)
    #[arg(short, long)]
    filter: Option<Filter>,

    /// Disable colour output
    #[arg(long)]
    no_color: bool,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing; logs go to stderr so frames on stdout stay clean
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .with_ansi(log_ansi(cli.no_color, io::stderr().is_terminal()))
        .init();

    let config = Config::resolve(cli.config.as_deref())?.with_overrides(cli.filter, cli.no_color);
    let options = config.render_options();

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open script {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let interactive = cli.script.is_none() && io::stdin().is_terminal();

    let filter = config.default_filter;
    info!(?filter, interactive, "Starting todoc");

    let mut app = App::new(filter);
    let mut stdout = io::stdout().lock();
    session::run(&mut app, input, &mut stdout, &options, interactive)
}

/// Colour log lines only on a terminal, and never with --no-color
fn log_ansi(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_ansi_respects_no_color() {
        assert!(log_ansi(false, true));
        assert!(!log_ansi(true, true));
        assert!(!log_ansi(false, false));
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::try_parse_from(["todoc", "--no-color", "--filter", "completed"]).unwrap();
        let config = Config::default().with_overrides(cli.filter, cli.no_color);

        assert_eq!(config.default_filter, Filter::Completed);
        assert!(!config.render_options().color);
    }
}
