//! Participation and solved-set reconciliation across sibling divisions.
//!
//! One pass over the submission history yields both the contests the user
//! took part in and the problems they solved. A contest counts as a sibling
//! of its numeric neighbour (`id - 1` or `id + 1`) when both names carry the
//! same edition number; accepted problems are then marked solved under the
//! sibling id as well, keyed by problem name.

use std::collections::HashSet;

use tracing::debug;

use crate::core::edition::ContestNumberExtractor;
use crate::core::model::{ContestCatalog, ContestId, Submission};

/// `contestId‖problemName`: survives the id change between divisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolvedKey
{
    pub contest_id: ContestId,
    pub problem_name: String,
}

impl SolvedKey
{
    pub fn new(
        contest_id: ContestId,
        problem_name: impl Into<String>,
    ) -> Self
    {
        Self { contest_id, problem_name: problem_name.into() }
    }
}

/// Derived snapshot of what the user attempted and solved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participation
{
    pub participated: HashSet<ContestId>,
    pub solved: HashSet<SolvedKey>,
}

impl Participation
{
    pub fn has_participated(
        &self,
        contest_id: ContestId,
    ) -> bool
    {
        self.participated
            .contains(&contest_id)
    }

    pub fn is_solved(
        &self,
        contest_id: ContestId,
        problem_name: &str,
    ) -> bool
    {
        self.solved
            .contains(&SolvedKey::new(contest_id, problem_name))
    }
}

/// Catalog neighbours of `id` that share its edition number.
///
/// Returns nothing when `id` itself is missing from the catalog or its name
/// yields no edition number.
pub fn siblings_of<X>(
    id: ContestId,
    catalog: &ContestCatalog,
    extractor: &X,
) -> Vec<ContestId>
where
    X: ContestNumberExtractor + ?Sized,
{
    let Some(contest) = catalog.get(id)
    else
    {
        return Vec::new();
    };
    let Some(own) = extractor.edition_number(&contest.name)
    else
    {
        return Vec::new();
    };

    [id.checked_sub(1), id.checked_add(1)]
        .into_iter()
        .flatten()
        .filter(|n| {
            catalog
                .get(*n)
                .and_then(|c| extractor.edition_number(&c.name))
                == Some(own)
        })
        .collect()
}

/// Build the participated-id set and the solved-key set in one pass.
pub fn reconcile<X>(
    submissions: &[Submission],
    catalog: &ContestCatalog,
    extractor: &X,
) -> Participation
where
    X: ContestNumberExtractor + ?Sized,
{
    let mut out = Participation::default();

    for submission in submissions
    {
        // Unattributed submissions neither participate nor solve
        let Some(cid) = submission.contest_id
        else
        {
            continue;
        };

        let accepted = submission.is_accepted();
        let name = &submission
            .problem
            .name;

        if accepted
        {
            out.solved
                .insert(SolvedKey::new(cid, name.as_str()));
        }

        if !catalog.contains(cid)
        {
            continue;
        }

        out.participated
            .insert(cid);

        for sibling in siblings_of(cid, catalog, extractor)
        {
            out.participated
                .insert(sibling);
            if accepted
            {
                out.solved
                    .insert(SolvedKey::new(sibling, name.as_str()));
            }
        }
    }

    debug!(
        submissions = submissions.len(),
        participated = out
            .participated
            .len(),
        solved = out
            .solved
            .len(),
        "reconciled submission history"
    );

    out
}
