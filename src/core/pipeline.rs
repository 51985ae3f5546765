//! The composed reconciliation pipeline.
//!
//! submissions + contests → participation; problems + participation →
//! candidates; candidates → tag ranking → caller's tag choice → filtered list.
//! Rating filtering stays a separate step (see [`crate::core::rating`]).

use tracing::{info, instrument};

use crate::core::edition::ContestNumberExtractor;
use crate::core::error::UpsolveError;
use crate::core::model::{ContestCatalog, Problem, Submission};
use crate::core::reconcile::{Participation, reconcile};
use crate::core::select::select_unsolved;
use crate::core::source::CatalogSource;
use crate::core::tags::{TagRanking, TagSelection};

/// Materialized inputs of one run.
#[derive(Debug, Clone, Default)]
pub struct Inputs
{
    pub submissions: Vec<Submission>,
    pub contests: ContestCatalog,
    pub problems: Vec<Problem>,
}

impl Inputs
{
    /// Fetch all three collections. The first failure aborts the run.
    #[instrument(skip(source))]
    pub fn fetch<S: CatalogSource + ?Sized>(
        source: &S,
        handle: &str,
    ) -> Result<Self, UpsolveError>
    {
        let submissions = source.submissions(handle)?;
        let contests = source.contests()?;
        let problems = source.problems()?;

        info!(
            submissions = submissions.len(),
            contests = contests.len(),
            problems = problems.len(),
            "fetched inputs"
        );

        Ok(Self { submissions, contests, problems })
    }
}

/// Candidates before any user filter, plus their tag ranking.
#[derive(Debug, Clone, Default)]
pub struct Candidates
{
    pub participation: Participation,
    pub problems: Vec<Problem>,
    pub ranking: TagRanking,
}

impl Candidates
{
    pub fn compute<X>(
        inputs: &Inputs,
        extractor: &X,
    ) -> Self
    where
        X: ContestNumberExtractor + ?Sized,
    {
        let participation = reconcile(&inputs.submissions, &inputs.contests, extractor);
        let problems = select_unsolved(&inputs.problems, &participation);
        let ranking = TagRanking::from_problems(&problems);

        info!(candidates = problems.len(), tags = ranking.len(), "selected unsolved candidates");

        Self { participation, problems, ranking }
    }

    /// Ask `choose` for display indices once and apply them.
    ///
    /// # Errors
    ///
    /// Propagates the callback's error, or a selection error when an index
    /// is out of range.
    pub fn narrow<F>(
        self,
        choose: F,
    ) -> Result<(TagSelection, Vec<Problem>), UpsolveError>
    where
        F: FnOnce(&TagRanking) -> Result<Vec<usize>, UpsolveError>,
    {
        let indices = choose(&self.ranking)?;
        let selection = self
            .ranking
            .select(&indices)?;
        let problems = selection.apply(self.problems);
        Ok((selection, problems))
    }
}

/// Outcome of [`resolve_unsolved`]; the catalog is kept for rendering.
#[derive(Debug, Clone)]
pub struct UnsolvedReport
{
    pub contests: ContestCatalog,
    pub ranking: TagRanking,
    pub selection: TagSelection,
    pub problems: Vec<Problem>,
}

/// Fetch, reconcile, rank and apply the caller's tag choice.
#[instrument(skip(source, extractor, tag_choice))]
pub fn resolve_unsolved<S, X, F>(
    source: &S,
    handle: &str,
    extractor: &X,
    tag_choice: F,
) -> Result<UnsolvedReport, UpsolveError>
where
    S: CatalogSource + ?Sized,
    X: ContestNumberExtractor + ?Sized,
    F: FnOnce(&TagRanking) -> Result<Vec<usize>, UpsolveError>,
{
    let inputs = Inputs::fetch(source, handle)?;
    let candidates = Candidates::compute(&inputs, extractor);
    let ranking = candidates
        .ranking
        .clone();
    let (selection, problems) = candidates.narrow(tag_choice)?;

    Ok(UnsolvedReport { contests: inputs.contests, ranking, selection, problems })
}
