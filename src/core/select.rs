//! Candidate selection: catalog problems from participated, unsolved contests.

use crate::core::model::Problem;
use crate::core::reconcile::Participation;

/// Whether `problem` is still open for the user.
///
/// Problems without a contest id are always candidates.
pub fn is_candidate(
    problem: &Problem,
    participation: &Participation,
) -> bool
{
    match problem.contest_id
    {
        None => true,
        Some(cid) =>
        {
            participation.has_participated(cid) && !participation.is_solved(cid, &problem.name)
        }
    }
}

/// Select candidates and return them in reverse catalog order.
pub fn select_unsolved(
    catalog: &[Problem],
    participation: &Participation,
) -> Vec<Problem>
{
    catalog
        .iter()
        .rev()
        .filter(|p| is_candidate(p, participation))
        .cloned()
        .collect()
}
