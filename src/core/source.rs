//! Where the three input collections come from.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::model::{ContestCatalog, Problem, Submission};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a collection provider. Never retried by the core.
#[derive(Debug, Error)]
pub enum SourceError
{
    #[error("request to {method} failed")]
    Http
    {
        method: String,
        #[source]
        source: BoxError,
    },

    #[error("{method} returned HTTP {status}: {body}")]
    Status
    {
        method: String,
        status: u16,
        body: String,
    },

    #[error("{method} failed: {comment}")]
    Api
    {
        method: String,
        comment: String,
    },

    #[error("cannot decode {method} response")]
    Decode
    {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read {}", path.display())]
    Io
    {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid handle {handle:?}: only letters, digits, '_', '-' and '.' are allowed")]
    InvalidHandle
    {
        handle: String,
    },
}

/// Provider of submissions, contests and problems.
pub trait CatalogSource
{
    fn submissions(
        &self,
        handle: &str,
    ) -> Result<Vec<Submission>, SourceError>;

    fn contests(&self) -> Result<ContestCatalog, SourceError>;

    fn problems(&self) -> Result<Vec<Problem>, SourceError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S
{
    fn submissions(
        &self,
        handle: &str,
    ) -> Result<Vec<Submission>, SourceError>
    {
        (**self).submissions(handle)
    }

    fn contests(&self) -> Result<ContestCatalog, SourceError>
    {
        (**self).contests()
    }

    fn problems(&self) -> Result<Vec<Problem>, SourceError>
    {
        (**self).problems()
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S>
{
    fn submissions(
        &self,
        handle: &str,
    ) -> Result<Vec<Submission>, SourceError>
    {
        (**self).submissions(handle)
    }

    fn contests(&self) -> Result<ContestCatalog, SourceError>
    {
        (**self).contests()
    }

    fn problems(&self) -> Result<Vec<Problem>, SourceError>
    {
        (**self).problems()
    }
}
