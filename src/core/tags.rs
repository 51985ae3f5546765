//! Tag frequency ranking and display-index based tag selection.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use tracing::debug;

use crate::core::error::SelectionError;
use crate::core::model::Problem;

/// One row of the rarest-first ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTag
{
    /// Zero-based display index, the handle users type to pick a tag
    pub index: usize,
    pub tag: String,
    pub count: usize,
}

/// Tags of a candidate list ordered by ascending count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagRanking
{
    tags: Vec<RankedTag>,
}

impl TagRanking
{
    /// Count tags once per problem and order them rarest first.
    ///
    /// Equal counts keep the order in which tags were first seen.
    pub fn from_problems(problems: &[Problem]) -> Self
    {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for problem in problems
        {
            for tag in problem
                .tags
                .iter()
                .unique()
            {
                *counts
                    .entry(tag.as_str())
                    .or_default() += 1;
            }
        }

        // Stable sort keeps first-seen order among ties
        counts.sort_by(|_, a, _, b| a.cmp(b));

        let tags = counts
            .into_iter()
            .enumerate()
            .map(|(index, (tag, count))| RankedTag { index, tag: tag.to_string(), count })
            .collect();

        Self { tags }
    }

    pub fn tags(&self) -> &[RankedTag]
    {
        &self.tags
    }

    pub fn len(&self) -> usize
    {
        self.tags
            .len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.tags
            .is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&RankedTag>
    {
        self.tags
            .get(index)
    }

    /// Resolve display indices into a selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::IndexOutOfRange`] for the first index that
    /// does not name a ranked tag.
    pub fn select(
        &self,
        indices: &[usize],
    ) -> Result<TagSelection, SelectionError>
    {
        let tags = indices
            .iter()
            .map(|&index| {
                self.get(index)
                    .map(|t| t.tag.clone())
                    .ok_or(SelectionError::IndexOutOfRange { index, len: self.len() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TagSelection { tags })
    }
}

/// Chosen tags, applied as an OR filter. Empty means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection
{
    tags: Vec<String>,
}

impl TagSelection
{
    pub fn is_empty(&self) -> bool
    {
        self.tags
            .is_empty()
    }

    pub fn tags(&self) -> &[String]
    {
        &self.tags
    }

    pub fn matches(
        &self,
        problem: &Problem,
    ) -> bool
    {
        self.is_empty()
            || self
                .tags
                .iter()
                .any(|t| problem.has_tag(t))
    }

    /// Keep problems carrying at least one chosen tag, order preserved.
    pub fn apply(
        &self,
        problems: Vec<Problem>,
    ) -> Vec<Problem>
    {
        if self.is_empty()
        {
            return problems;
        }

        let before = problems.len();
        let kept: Vec<Problem> = problems
            .into_iter()
            .filter(|p| self.matches(p))
            .collect();

        debug!(tags = ?self.tags, before, after = kept.len(), "applied tag filter");
        kept
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn tagged(
        name: &str,
        tags: &[&str],
    ) -> Problem
    {
        Problem {
            contest_id: Some(1),
            index: "A".to_string(),
            name: name.to_string(),
            rating: None,
            tags: tags
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }

    #[test]
    fn ranks_rarest_first_with_first_seen_ties()
    {
        let problems = vec![
            tagged("a", &["dp"]),
            tagged("b", &["dp", "greedy"]),
            tagged("c", &["greedy"]),
            tagged("d", &["math", "dp"]),
        ];

        let ranking = TagRanking::from_problems(&problems);
        let rows: Vec<_> = ranking
            .tags()
            .iter()
            .map(|t| (t.index, t.tag.as_str(), t.count))
            .collect();

        assert_eq!(rows, [(0, "math", 1), (1, "greedy", 2), (2, "dp", 3)]);
    }

    #[test]
    fn equal_counts_follow_first_appearance()
    {
        let problems = vec![tagged("a", &["dp"]), tagged("b", &["dp", "greedy"]), tagged("c", &["greedy"])];

        let ranking = TagRanking::from_problems(&problems);

        assert_eq!(ranking.get(0).map(|t| (t.tag.as_str(), t.count)), Some(("dp", 2)));
        assert_eq!(ranking.get(1).map(|t| (t.tag.as_str(), t.count)), Some(("greedy", 2)));
    }

    #[test]
    fn duplicate_tags_on_one_problem_count_once()
    {
        let ranking = TagRanking::from_problems(&[tagged("a", &["dp", "dp"])]);
        assert_eq!(ranking.get(0).map(|t| t.count), Some(1));
    }

    #[test]
    fn selection_is_an_or_filter()
    {
        let problems = vec![tagged("a", &["dp"]), tagged("b", &["graphs"]), tagged("c", &["math"])];
        let ranking = TagRanking::from_problems(&problems);

        let selection = ranking.select(&[0, 2]).unwrap();
        let names: Vec<_> = selection
            .apply(problems)
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn empty_selection_is_identity()
    {
        let problems = vec![tagged("a", &[]), tagged("b", &["dp"])];
        let ranking = TagRanking::from_problems(&problems);

        let out = ranking
            .select(&[])
            .unwrap()
            .apply(problems.clone());

        assert_eq!(out, problems);
    }

    #[test]
    fn out_of_range_index_is_rejected()
    {
        let ranking = TagRanking::from_problems(&[tagged("a", &["dp"])]);

        let err = ranking.select(&[0, 1]).unwrap_err();

        assert_eq!(err, SelectionError::IndexOutOfRange { index: 1, len: 1 });
    }
}
