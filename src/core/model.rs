//! Wire-level records for submissions, contests and problems.
//!
//! Field names follow the Codeforces API (camelCase). Every field that the
//! service may omit is an `Option`; absence is never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Numeric contest identifier as issued by the judge.
pub type ContestId = u32;

/// Verdict string the judge uses for accepted submissions.
pub const VERDICT_OK: &str = "OK";

/// One entry of a user's submission history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission
{
    #[serde(default)]
    pub contest_id: Option<ContestId>,
    pub problem: SubmittedProblem,
    /// Missing while the submission is still being judged.
    #[serde(default)]
    pub verdict: Option<String>,
}

impl Submission
{
    pub fn is_accepted(&self) -> bool
    {
        self.verdict
            .as_deref()
            == Some(VERDICT_OK)
    }
}

/// The problem reference embedded in a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedProblem
{
    pub name: String,
    #[serde(default)]
    pub index: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest
{
    pub id: ContestId,
    pub name: String,
    #[serde(default)]
    pub start_time_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem
{
    #[serde(default)]
    pub contest_id: Option<ContestId>,
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem
{
    pub fn has_tag(
        &self,
        tag: &str,
    ) -> bool
    {
        self.tags
            .iter()
            .any(|t| t == tag)
    }
}

/// Contest lookup by id. Later duplicates replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ContestCatalog
{
    by_id: HashMap<ContestId, Contest>,
}

impl ContestCatalog
{
    pub fn get(
        &self,
        id: ContestId,
    ) -> Option<&Contest>
    {
        self.by_id
            .get(&id)
    }

    pub fn contains(
        &self,
        id: ContestId,
    ) -> bool
    {
        self.by_id
            .contains_key(&id)
    }

    pub fn len(&self) -> usize
    {
        self.by_id
            .len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.by_id
            .is_empty()
    }
}

impl FromIterator<Contest> for ContestCatalog
{
    fn from_iter<I: IntoIterator<Item = Contest>>(iter: I) -> Self
    {
        let by_id = iter
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        Self { by_id }
    }
}
