//! Edition numbers parsed from contest display names.
//!
//! Two adjacent contest ids whose names carry the same edition number are
//! treated as parallel divisions of one round.

use regex::Regex;

/// Maps a contest display name to a comparable edition number.
pub trait ContestNumberExtractor
{
    fn edition_number(
        &self,
        contest_name: &str,
    ) -> Option<u64>;
}

impl<F> ContestNumberExtractor for F
where
    F: Fn(&str) -> Option<u64>,
{
    fn edition_number(
        &self,
        contest_name: &str,
    ) -> Option<u64>
    {
        self(contest_name)
    }
}

/// Prefers the number after "Round" ("Codeforces Round #889 (Div. 2)"),
/// falling back to the first run of digits in the name.
#[derive(Debug, Clone)]
pub struct RoundNumberExtractor
{
    round: Regex,
    digits: Regex,
}

impl RoundNumberExtractor
{
    pub fn new() -> Self
    {
        Self {
            round: Regex::new(r"(?i)\bround\s*#?\s*(\d+)").expect("static regex"),
            digits: Regex::new(r"\d+").expect("static regex"),
        }
    }
}

impl Default for RoundNumberExtractor
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl ContestNumberExtractor for RoundNumberExtractor
{
    fn edition_number(
        &self,
        contest_name: &str,
    ) -> Option<u64>
    {
        let digits = match self
            .round
            .captures(contest_name)
        {
            Some(caps) => caps.get(1)?,
            None => self
                .digits
                .find(contest_name)?,
        };

        digits
            .as_str()
            .parse()
            .ok()
    }
}
