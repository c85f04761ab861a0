use std::io::{self, Write};
use std::process;

mod cli;
mod config;
mod render;
mod shell;

use clap::Parser;
use cli::{Cli, Commands};
use config::BoardsConfig;
use todo_boards::{BoardSession, BoardStore, JsonFileStore, SystemStamper};

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

/// Load configuration with graceful fallback to defaults
fn load_cli_configuration() -> BoardsConfig {
    match BoardsConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration: {}", e);
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            BoardsConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let mut config = load_cli_configuration();
    if let Some(data_dir) = cli.data_dir.clone() {
        config.data_dir = data_dir;
    }

    let code = match run(cli, &config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };
    process::exit(code);
}

fn run(cli: Cli, config: &BoardsConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&config.data_dir);
    tracing::debug!(path = %store.path().display(), "using board store");

    match cli.command {
        Commands::List => {
            let boards = store.load();
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", render::render(&boards, cli.format)?)?;
        }
        Commands::Shell => {
            let mut session = BoardSession::open(store, SystemStamper);
            if let Some(limit) = config.history_limit {
                session = session.with_history_limit(limit);
            }
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            shell::run(&mut session, stdin, &mut stdout, cli.format)?;
        }
    }
    Ok(())
}

fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::WARN
    };

    // RUST_LOG still wins when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_on_missing_store_succeeds() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::parse_from(["boards", "list"]);
        let config = BoardsConfig {
            data_dir: dir.path().join("nothing-here"),
            history_limit: None,
        };
        run(cli, &config).unwrap();
        assert!(!config.data_dir.exists());
    }
}
