//! Blocking client for the public Codeforces API.
//!
//! Every method answers with `{"status": "OK"|"FAILED", "comment"?, "result"?}`;
//! [`decode_response`] unwraps that envelope for both the HTTP client and the
//! on-disk snapshots.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::core::model::{Contest, ContestCatalog, Problem, Submission};
use crate::core::source::{CatalogSource, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://codeforces.com/api";

pub const METHOD_USER_STATUS: &str = "user.status";
pub const METHOD_CONTEST_LIST: &str = "contest.list";
pub const METHOD_PROBLEMSET: &str = "problemset.problems";

#[derive(Deserialize)]
struct Envelope<T>
{
    status: String,
    #[serde(default)]
    comment: Option<String>,
    result: Option<T>,
}

/// `problemset.problems` wraps the list next to per-problem statistics.
#[derive(Deserialize)]
pub struct ProblemsetResult
{
    pub problems: Vec<Problem>,
}

/// Unwrap an API envelope into its `result`.
///
/// # Errors
///
/// `SourceError::Decode` for malformed JSON, `SourceError::Api` when the
/// service reports `FAILED` or omits the result.
pub fn decode_response<T: DeserializeOwned>(
    method: &str,
    body: &[u8],
) -> Result<T, SourceError>
{
    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|source| SourceError::Decode { method: method.to_string(), source })?;

    if envelope.status != "OK"
    {
        return Err(SourceError::Api {
            method: method.to_string(),
            comment: envelope
                .comment
                .unwrap_or(envelope.status),
        });
    }

    envelope
        .result
        .ok_or_else(|| SourceError::Api {
            method: method.to_string(),
            comment: "response has no result".to_string(),
        })
}

pub struct CodeforcesClient
{
    http: Client,
    base_url: String,
}

impl CodeforcesClient
{
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialized.
    pub fn new(
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, SourceError>
    {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SourceError::Http { method: "client".to_string(), source: e.into() })?;

        Ok(Self {
            http,
            base_url: base_url
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Raw response body of `method`. Used directly by `upsolve snapshot`.
    #[instrument(skip(self))]
    pub fn fetch_raw(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<u8>, SourceError>
    {
        let url = format!("{}/{}", self.base_url, method);
        let http_err = |e: reqwest::Error| SourceError::Http { method: method.to_string(), source: e.into() };

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .map_err(http_err)?;

        let status = res.status();
        // The API reports FAILED bodies with 400; let the envelope speak for those
        if !status.is_success() && status != reqwest::StatusCode::BAD_REQUEST
        {
            let body = res
                .text()
                .unwrap_or_default();
            return Err(SourceError::Status { method: method.to_string(), status: status.as_u16(), body });
        }

        let bytes = res
            .bytes()
            .map_err(http_err)?;
        debug!(bytes = bytes.len(), "received response");
        Ok(bytes.to_vec())
    }

    fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SourceError>
    {
        let body = self.fetch_raw(method, query)?;
        decode_response(method, &body)
    }
}

impl CatalogSource for CodeforcesClient
{
    fn submissions(
        &self,
        handle: &str,
    ) -> Result<Vec<Submission>, SourceError>
    {
        self.call(METHOD_USER_STATUS, &[("handle", handle)])
    }

    fn contests(&self) -> Result<ContestCatalog, SourceError>
    {
        let contests: Vec<Contest> = self.call(METHOD_CONTEST_LIST, &[("gym", "false")])?;
        Ok(contests
            .into_iter()
            .collect())
    }

    fn problems(&self) -> Result<Vec<Problem>, SourceError>
    {
        let set: ProblemsetResult = self.call(METHOD_PROBLEMSET, &[])?;
        Ok(set.problems)
    }
}
