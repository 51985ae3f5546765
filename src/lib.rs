//! **upsolve** - Find unsolved Codeforces problems from contests you already entered
//!
//! Reconciles a user's submission history against the contest and problem catalogs,
//! linking parallel Div. 1 / Div. 2 editions so a problem solved in one division
//! counts as solved in its sibling.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Reconciliation core - pure computations over materialized collections
pub mod core {
    /// Wire records: submissions, contests, problems
    pub mod model;
    pub use model::{Contest, ContestCatalog, ContestId, Problem, Submission};

    /// Pluggable edition-number extraction for sibling detection
    pub mod edition;
    pub use edition::{ContestNumberExtractor, RoundNumberExtractor};

    /// Participated-id and solved-key sets in one pass
    pub mod reconcile;
    pub use reconcile::{Participation, SolvedKey, reconcile};

    /// Unsolved candidate selection
    pub mod select;
    pub use select::select_unsolved;

    /// Rarest-first tag ranking and OR tag selection
    pub mod tags;
    pub use tags::{RankedTag, TagRanking, TagSelection};

    /// Inclusive rating-range filter
    pub mod rating;
    pub use rating::{RatingRange, filter_by_rating};

    /// Collection provider trait and its errors
    pub mod source;
    pub use source::{CatalogSource, SourceError};

    /// Core error taxonomy
    pub mod error;
    pub use error::{SelectionError, UpsolveError};

    /// Composed fetch → reconcile → rank → choose pipeline
    pub mod pipeline;
    pub use pipeline::{UnsolvedReport, resolve_unsolved};
}

/// Infrastructure - API access, snapshots, configuration, prompts, logging
pub mod infra {
    /// Configuration management with TOML support and env overrides
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Blocking Codeforces API client
    pub mod api;
    pub use api::CodeforcesClient;

    /// Offline source from saved API responses
    pub mod snapshot;
    pub use snapshot::SnapshotSource;

    /// Line-based interactive prompts
    pub mod prompt;
    pub use prompt::Prompter;

    /// tracing-subscriber setup
    pub mod logging;
}

/// Command handlers and terminal rendering
pub mod cli_ext {
    pub mod find_cmd;
    pub mod render;
    pub mod session;
    pub mod snapshot_cmd;
    pub mod tags_cmd;
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use core::{CatalogSource, Problem, RatingRange, TagRanking, filter_by_rating, resolve_unsolved};
pub use infra::{Config, load_config};
