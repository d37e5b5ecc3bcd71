//! Command-line surface of the `tasks` binary

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tasks")]
#[command(about = "Interactive task list grouped by project")]
#[command(version)]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, env = "TASK_LIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read commands from a file instead of standard input
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Do not print the prompt before each command
    #[arg(long)]
    pub no_prompt: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_session_flags() {
        let cli = Cli::parse_from(["tasks", "--script", "todo.txt", "--no-prompt"]);
        assert_eq!(cli.script, Some(PathBuf::from("todo.txt")));
        assert!(cli.no_prompt);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_completion() {
        let cli = Cli::parse_from(["tasks", "completion", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completion { shell: Shell::Bash })
        ));
    }
}
