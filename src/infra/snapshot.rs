//! Offline source backed by saved API responses.
//!
//! Layout of a snapshot directory:
//!
//! ```text
//! contests.json                 body of contest.list
//! problems.json                 body of problemset.problems
//! submissions-<handle>.json     body of user.status?handle=<handle>
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::model::{Contest, ContestCatalog, Problem, Submission};
use crate::core::source::{CatalogSource, SourceError};
use crate::infra::api::{
    CodeforcesClient, METHOD_CONTEST_LIST, METHOD_PROBLEMSET, METHOD_USER_STATUS, ProblemsetResult,
    decode_response,
};

pub const CONTESTS_FILE: &str = "contests.json";
pub const PROBLEMS_FILE: &str = "problems.json";

/// File name of a handle's submissions.
///
/// # Errors
///
/// `SourceError::InvalidHandle` unless the handle is made of Codeforces
/// handle characters, which keeps the file inside the snapshot directory.
pub fn submissions_file(handle: &str) -> Result<String, SourceError>
{
    let valid = !handle.is_empty()
        && handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !handle.contains("..");
    if !valid
    {
        return Err(SourceError::InvalidHandle { handle: handle.to_string() });
    }
    Ok(format!("submissions-{handle}.json"))
}

#[derive(Debug, Clone)]
pub struct SnapshotSource
{
    dir: PathBuf,
}

impl SnapshotSource
{
    pub fn new(dir: impl Into<PathBuf>) -> Self
    {
        Self { dir: dir.into() }
    }

    fn read(
        &self,
        file: &str,
    ) -> Result<Vec<u8>, SourceError>
    {
        let path = self
            .dir
            .join(file);
        debug!(path = %path.display(), "reading snapshot file");
        fs::read(&path).map_err(|source| SourceError::Io { path, source })
    }
}

impl CatalogSource for SnapshotSource
{
    fn submissions(
        &self,
        handle: &str,
    ) -> Result<Vec<Submission>, SourceError>
    {
        let body = self.read(&submissions_file(handle)?)?;
        decode_response(METHOD_USER_STATUS, &body)
    }

    fn contests(&self) -> Result<ContestCatalog, SourceError>
    {
        let body = self.read(CONTESTS_FILE)?;
        let contests: Vec<Contest> = decode_response(METHOD_CONTEST_LIST, &body)?;
        Ok(contests
            .into_iter()
            .collect())
    }

    fn problems(&self) -> Result<Vec<Problem>, SourceError>
    {
        let body = self.read(PROBLEMS_FILE)?;
        let set: ProblemsetResult = decode_response(METHOD_PROBLEMSET, &body)?;
        Ok(set.problems)
    }
}

/// Download the three responses into `dir`, creating it if needed.
///
/// Bodies are validated before being written so a FAILED answer never
/// lands in a snapshot.
pub fn save_snapshot(
    client: &CodeforcesClient,
    handle: &str,
    dir: &Path,
) -> Result<Vec<PathBuf>>
{
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let plan: [(&str, Vec<(&str, &str)>, String); 3] = [
        (METHOD_USER_STATUS, vec![("handle", handle)], submissions_file(handle)?),
        (METHOD_CONTEST_LIST, vec![("gym", "false")], CONTESTS_FILE.to_string()),
        (METHOD_PROBLEMSET, Vec::new(), PROBLEMS_FILE.to_string()),
    ];

    let mut written = Vec::with_capacity(plan.len());
    for (method, query, file) in plan
    {
        let body = client.fetch_raw(method, &query)?;
        let path = dir.join(file);
        write_validated(method, &body, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// Write `body` to `path` only if it decodes as a successful `method` envelope.
pub fn write_validated(
    method: &str,
    body: &[u8],
    path: &Path,
) -> Result<()>
{
    decode_response::<serde_json::Value>(method, body)?;
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))
}
