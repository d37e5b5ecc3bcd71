//! CLI command implementations

pub mod definition;
pub mod repl;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};

use crate::config::Config;
use crate::task::TaskManager;

/// Run one session: commands from `--script` or stdin, output to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let prompt = (!cli.no_prompt).then_some(config.prompt.as_str());

    let mut manager = TaskManager::new();
    let stdout = io::stdout().lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            tracing::info!("Replaying commands from {}", path.display());
            repl::run_session(&mut manager, BufReader::new(file), stdout, prompt)
        }
        None => repl::run_session(&mut manager, io::stdin().lock(), stdout, prompt),
    }
}
