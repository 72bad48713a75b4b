use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Play through the puzzles interactively.
    Play(PlayArgs),
    /// List every puzzle in the catalog.
    List,
    /// Show one puzzle.
    Show(ShowArgs),
    /// Check an answer against a puzzle without starting a session.
    Check(CheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PlayArgs {
    /// Puzzle id to start from (defaults to config, then the first puzzle)
    #[arg(long)]
    pub start: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Puzzle id
    pub id: u32,

    /// Include the hint
    #[arg(long)]
    pub hint: bool,

    /// Include the reference answer
    #[arg(long)]
    pub explanation: bool,
}

#[derive(Clone, Debug, Args)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["query", "file"])))]
pub struct CheckArgs {
    /// Puzzle id
    pub id: u32,

    /// SQL to check
    #[arg(long)]
    pub query: Option<String>,

    /// Read the SQL to check from a file
    #[arg(long)]
    pub file: Option<String>,
}
