//! Shared setup for commands that read the three collections.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::cli::AppContext;
use crate::core::model::{ContestCatalog, Problem, Submission};
use crate::core::source::{CatalogSource, SourceError};
use crate::infra::api::CodeforcesClient;
use crate::infra::config::Config;
use crate::infra::snapshot::SnapshotSource;

/// Where a command will read its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin
{
    Remote { base_url: String },
    Snapshot { dir: PathBuf },
}

impl Origin
{
    /// `--snapshot-dir` beats the configured `snapshot_dir`, which beats the API.
    pub fn resolve(
        config: &Config,
        snapshot_override: Option<PathBuf>,
    ) -> Result<Self>
    {
        let dir = match snapshot_override
        {
            Some(dir) => Some(dir),
            None => config.snapshot_path()?,
        };

        Ok(match dir
        {
            Some(dir) => Origin::Snapshot { dir },
            None => Origin::Remote {
                base_url: config
                    .api
                    .base_url
                    .clone(),
            },
        })
    }

    pub fn describe(&self) -> String
    {
        match self
        {
            Origin::Remote { base_url } => format!("Codeforces API at {base_url}"),
            Origin::Snapshot { dir } => format!("snapshot directory {}", dir.display()),
        }
    }

    pub fn open(
        &self,
        config: &Config,
    ) -> Result<Box<dyn CatalogSource>>
    {
        info!(origin = %self.describe(), "opening source");
        let source: Box<dyn CatalogSource> = match self
        {
            Origin::Remote { base_url } => Box::new(
                CodeforcesClient::new(base_url, config.api.timeout())
                    .context("Failed to build HTTP client")?,
            ),
            Origin::Snapshot { dir } => Box::new(SnapshotSource::new(dir.clone())),
        };
        Ok(source)
    }
}

/// Handle from the command line, then config.
pub fn configured_handle(
    arg: Option<String>,
    config: &Config,
) -> Option<String>
{
    arg.or_else(|| {
        config
            .handle
            .clone()
    })
    .map(|h| {
        h.trim()
            .to_string()
    })
    .filter(|h| !h.is_empty())
}

pub fn spinner(ctx: &AppContext) -> ProgressBar
{
    if ctx.quiet
    {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Decorates a source with spinner messages per fetch.
pub struct Spinning<'a>
{
    inner: &'a dyn CatalogSource,
    bar: &'a ProgressBar,
}

impl<'a> Spinning<'a>
{
    pub fn new(
        inner: &'a dyn CatalogSource,
        bar: &'a ProgressBar,
    ) -> Self
    {
        Self { inner, bar }
    }
}

impl CatalogSource for Spinning<'_>
{
    fn submissions(
        &self,
        handle: &str,
    ) -> Result<Vec<Submission>, SourceError>
    {
        self.bar
            .set_message(format!("Fetching submissions of {handle}"));
        self.inner
            .submissions(handle)
    }

    fn contests(&self) -> Result<ContestCatalog, SourceError>
    {
        self.bar
            .set_message("Fetching contest list");
        self.inner
            .contests()
    }

    fn problems(&self) -> Result<Vec<Problem>, SourceError>
    {
        self.bar
            .set_message("Fetching problem set");
        self.inner
            .problems()
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn snapshot_flag_overrides_config()
    {
        let config = Config { snapshot_dir: Some("/from/config".into()), ..Config::default() };

        let origin = Origin::resolve(&config, Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(origin, Origin::Snapshot { dir: PathBuf::from("/from/flag") });

        let origin = Origin::resolve(&config, None).unwrap();
        assert_eq!(origin, Origin::Snapshot { dir: PathBuf::from("/from/config") });

        let origin = Origin::resolve(&Config::default(), None).unwrap();
        assert!(matches!(origin, Origin::Remote { .. }));
    }

    #[test]
    fn handle_falls_back_to_config()
    {
        let config = Config { handle: Some("Petr".into()), ..Config::default() };

        assert_eq!(configured_handle(Some("tourist".into()), &config).as_deref(), Some("tourist"));
        assert_eq!(configured_handle(None, &config).as_deref(), Some("Petr"));
        assert_eq!(configured_handle(Some("  ".into()), &Config::default()), None);
    }
}
