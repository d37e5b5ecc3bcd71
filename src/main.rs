//! Task List - Interactive command-line task manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use task_list::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASK_LIST_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("task_list=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Completion { shell }) => {
            generate(*shell, &mut Cli::command(), "tasks", &mut std::io::stdout());
            Ok(())
        }
        None => cli::run(&cli),
    }
}
