use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "boards")]
#[command(version)]
#[command(about = "Organize to-dos on boards, with undo and redo")]
#[command(long_about = "
boards keeps ordered to-do lists on ordered boards, stored as one JSON file.

Configuration is read from boards.toml (current directory or a parent) and
BOARDS_* environment variables; --data-dir overrides both.

Example usage:
  boards list                    # Show all boards
  boards --format json list      # Dump the stored boards as JSON
  boards shell                   # Edit interactively, with undo/redo
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding boards.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the stored boards
    List,
    /// Start an interactive editing session on stdin
    #[command(long_about = "
Start an interactive session. One command per line:

  board add <title>              board rename <id> <title>     board rm <id>
  item add <board-id> <text>     item edit <id> <text>         item rm <id>
  drag board <id> <target|->     drag item <id> <target|->
  undo   redo   list   help   quit

Undo history lasts until the session ends.")]
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "boards",
            "--data-dir",
            "/tmp/b",
            "list",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/b")));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["boards"]).is_err());
    }
}
