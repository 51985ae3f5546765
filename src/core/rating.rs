//! Inclusive rating-range filter.
//!
//! Accepts "MIN-MAX" or a single "N" (meaning N-N) on the command line.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::core::error::SelectionError;
use crate::core::model::Problem;

/// Inclusive bounds with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingRange
{
    min: u32,
    max: u32,
}

impl RatingRange
{
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidRange`] when `min > max`.
    pub fn new(
        min: u32,
        max: u32,
    ) -> Result<Self, SelectionError>
    {
        if min > max
        {
            return Err(SelectionError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Unrated problems never match.
    pub fn contains(
        &self,
        problem: &Problem,
    ) -> bool
    {
        problem
            .rating
            .is_some_and(|r| (self.min..=self.max).contains(&r))
    }
}

impl fmt::Display for RatingRange
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for RatingRange
{
    type Err = SelectionError;

    fn from_str(input: &str) -> Result<Self, Self::Err>
    {
        let s = input.trim();
        let malformed = |reason: &str| SelectionError::MalformedRange {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| malformed(&format!("invalid rating {:?}", part.trim())))
        };

        match s.split_once('-')
        {
            Some((lo, hi)) => Self::new(parse(lo)?, parse(hi)?),
            None if s.is_empty() => Err(malformed("empty range")),
            None =>
            {
                let n = parse(s)?;
                Self::new(n, n)
            }
        }
    }
}

/// Keep problems rated within `range`, order preserved.
pub fn filter_by_rating(
    problems: Vec<Problem>,
    range: RatingRange,
) -> Vec<Problem>
{
    let before = problems.len();
    let kept: Vec<Problem> = problems
        .into_iter()
        .filter(|p| range.contains(p))
        .collect();

    debug!(%range, before, after = kept.len(), "applied rating filter");
    kept
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn rated(rating: Option<u32>) -> Problem
    {
        Problem {
            contest_id: Some(1),
            index: "A".to_string(),
            name: format!("{rating:?}"),
            rating,
            tags: Vec::new(),
        }
    }

    #[test]
    fn bounds_are_inclusive_and_unrated_is_dropped()
    {
        let problems = vec![rated(Some(799)), rated(Some(800)), rated(None), rated(Some(1200)), rated(Some(1201))];

        let out = filter_by_rating(problems, RatingRange::new(800, 1200).unwrap());
        let ratings: Vec<_> = out
            .iter()
            .map(|p| p.rating)
            .collect();

        assert_eq!(ratings, [Some(800), Some(1200)]);
    }

    #[test]
    fn parses_ranges()
    {
        assert_eq!("800-1600".parse::<RatingRange>(), RatingRange::new(800, 1600));
        assert_eq!(" 1400 ".parse::<RatingRange>(), RatingRange::new(1400, 1400));
        assert_eq!(
            "1600-800".parse::<RatingRange>(),
            Err(SelectionError::InvalidRange { min: 1600, max: 800 })
        );
        assert!(matches!("abc".parse::<RatingRange>(), Err(SelectionError::MalformedRange { .. })));
        assert!(matches!("".parse::<RatingRange>(), Err(SelectionError::MalformedRange { .. })));
    }
}
