//! reword - git editor hook for stacked PRs
//!
//! CLI binary used as `GIT_SEQUENCE_EDITOR` / `GIT_EDITOR` while updating a
//! stack of commits.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "reword")]
#[command(about = "Stamp commit-id trailers and PR numbers into git editor buffers")]
#[command(version)]
struct Cli {
    /// Editor buffer to rewrite (a rebase todo list or a commit message)
    #[arg(value_name = "FILENAME")]
    files: Vec<PathBuf>,

    /// PR number to add to commit messages (-1 for none)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pr_number: i64,

    /// Commit hash to stop rewording at (commit included)
    #[arg(long, default_value = "")]
    until_commit_hash: String,
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("{}", Cli::command().render_usage());
    process::exit(1);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let [path] = cli.files.as_slice() else {
        usage_error("expected exactly one filename; PR number and commit hash are optional");
    };

    cli::run_reword(path, cli.pr_number, &cli.until_commit_hash)?;

    Ok(())
}
