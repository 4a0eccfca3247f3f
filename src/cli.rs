use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI. Running with no arguments scaffolds the current directory.
///
/// Scaffold flags and subcommands are mutually exclusive: `list` never reads
/// `--chdir` or `--dry-run`, so passing them alongside it is rejected.
#[derive(Parser, Debug)]
#[command(
    name = "setup-project",
    version,
    about = "Create the Unity Assets folder tree with .gitkeep markers",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Directory that holds (or will hold) the `Assets` folder.
    #[arg(short = 'C', long = "chdir")]
    pub chdir: Option<PathBuf>,
    /// Report what would be created without writing anything.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the directories of the layout without creating them.
    List,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
