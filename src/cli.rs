use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::rating::RatingRange;

/// Shared application context for global flags
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
    pub verbose: u8,    // global -v count
}

#[derive(Parser)]
#[command(name = "upsolve")]
#[command(about = "Find unsolved Codeforces problems from contests you already took part in")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress spinners and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be fetched without touching the network
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn context(&self) -> AppContext {
        AppContext {
            quiet: self.quiet,
            no_color: self.no_color,
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List unsolved problems, narrowing by tags and rating
    Find(FindArgs),

    /// Show the rarest-first tag ranking of your unsolved problems
    Tags(TagsArgs),

    /// Save API responses for offline use with --snapshot-dir
    Snapshot(SnapshotArgs),

    /// Initialize an upsolve.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain numbered lines
    Text,
    /// Bordered table
    Table,
    /// Single JSON document on stdout
    Json,
}

#[derive(Debug, Parser)]
pub struct FindArgs {
    /// Codeforces handle (prompted for when missing from args and config)
    pub handle: Option<String>,

    /// Tag display indices to keep, e.g. "0,3 5" (empty string: no tag filter)
    #[arg(long, value_name = "LIST")]
    pub tags: Option<String>,

    /// Inclusive rating range, "MIN-MAX" or a single rating
    #[arg(long, value_name = "RANGE", conflicts_with = "no_rating")]
    pub rating: Option<RatingRange>,

    /// Skip the rating filter without asking
    #[arg(long)]
    pub no_rating: bool,

    /// Never prompt; missing choices mean "no filter"
    #[arg(long)]
    pub no_prompt: bool,

    /// Output format (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read saved API responses from this directory
    #[arg(long, value_name = "DIR")]
    pub snapshot_dir: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct TagsArgs {
    /// Codeforces handle (defaults to the configured one)
    pub handle: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read saved API responses from this directory
    #[arg(long, value_name = "DIR")]
    pub snapshot_dir: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct SnapshotArgs {
    /// Codeforces handle whose submissions are saved
    pub handle: String,

    /// Target directory
    #[arg(short, long, default_value = "snapshot")]
    pub out: PathBuf,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,

    /// Write the script into this directory instead of stdout
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}
