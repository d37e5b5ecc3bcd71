//! xtask - Development tasks for task-list

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for task-list")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
    }
}

fn generate_cli_docs() {
    let mut markdown = clap_markdown::help_markdown::<task_list::cli::Cli>();

    // The interactive commands are not clap subcommands, so append them by hand.
    markdown.push_str("\n## Interactive commands\n\n```\n");
    for line in task_list::task::help_lines() {
        markdown.push_str(&line);
        markdown.push('\n');
    }
    markdown.push_str("```\n");

    let docs_dir = Path::new("docs/cli");
    fs::create_dir_all(docs_dir).expect("Failed to create docs/cli directory");

    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}
