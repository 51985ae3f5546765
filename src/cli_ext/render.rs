//! Output of problem lists and tag rankings as text, tables or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use owo_colors::OwoColorize;
use reqwest::Url;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;
use crate::core::model::{ContestCatalog, Problem};
use crate::core::tags::TagRanking;

/// Builds `{base}/contest/{id}/problem/{index}` links.
#[derive(Debug, Clone)]
pub struct Links
{
    base: Url,
}

impl Links
{
    pub fn new(web_base_url: &str) -> Result<Self>
    {
        let base = Url::parse(web_base_url)
            .with_context(|| format!("Invalid web_base_url {web_base_url:?}"))?;
        if base.cannot_be_a_base()
        {
            anyhow::bail!("web_base_url {web_base_url:?} cannot hold a path");
        }
        Ok(Self { base })
    }

    pub fn problem_url(
        &self,
        problem: &Problem,
    ) -> Option<String>
    {
        let cid = problem
            .contest_id?
            .to_string();
        let mut url = self
            .base
            .clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["contest", cid.as_str(), "problem", problem.index.as_str()]);
        Some(url.into())
    }
}

/// One problem as emitted by `--format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemRow
{
    pub contest_name: Option<String>,
    pub contest_id: Option<u32>,
    pub contest_start: Option<String>,
    pub problem_name: String,
    pub problem_id: String,
    pub rating: Option<u32>,
    pub tags: Vec<String>,
    pub url: Option<String>,
}

impl ProblemRow
{
    pub fn new(
        problem: &Problem,
        contests: &ContestCatalog,
        links: &Links,
    ) -> Self
    {
        let contest = problem
            .contest_id
            .and_then(|id| contests.get(id));

        Self {
            contest_name: contest.map(|c| c.name.clone()),
            contest_id: problem.contest_id,
            contest_start: contest
                .and_then(|c| c.start_time_seconds)
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
                .map(|d| {
                    d.format("%Y-%m-%d")
                        .to_string()
                }),
            problem_name: problem
                .name
                .clone(),
            problem_id: problem
                .index
                .clone(),
            rating: problem.rating,
            tags: problem
                .tags
                .clone(),
            url: links.problem_url(problem),
        }
    }
}

/// Table cells; missing values render empty.
#[derive(Tabled)]
struct TableRow
{
    #[tabled(rename = "contest name")]
    contest_name: String,
    #[tabled(rename = "contest id")]
    contest_id: String,
    #[tabled(rename = "problem name")]
    problem_name: String,
    #[tabled(rename = "problem id")]
    problem_id: String,
    #[tabled(rename = "problem rating")]
    rating: String,
    url: String,
}

impl From<&ProblemRow> for TableRow
{
    fn from(row: &ProblemRow) -> Self
    {
        fn cell<T: ToString>(v: Option<T>) -> String
        {
            v.map(|x| x.to_string())
                .unwrap_or_default()
        }

        Self {
            contest_name: cell(row.contest_name.as_deref()),
            contest_id: cell(row.contest_id),
            problem_name: row
                .problem_name
                .clone(),
            problem_id: row
                .problem_id
                .clone(),
            rating: cell(row.rating),
            url: cell(row.url.as_deref()),
        }
    }
}

/// Rating band colors used by the judge's rank ladder.
fn paint_rating(
    rating: u32,
    color: bool,
) -> String
{
    let text = rating.to_string();
    if !color
    {
        return text;
    }
    match rating
    {
        0..1200 => text
            .bright_black()
            .to_string(),
        1200..1400 => text
            .green()
            .to_string(),
        1400..1600 => text
            .cyan()
            .to_string(),
        1600..1900 => text
            .blue()
            .to_string(),
        1900..2100 => text
            .magenta()
            .to_string(),
        2100..2400 => text
            .yellow()
            .to_string(),
        _ => text
            .red()
            .to_string(),
    }
}

pub fn render_problems<W: Write>(
    out: &mut W,
    rows: &[ProblemRow],
    format: OutputFormat,
    color: bool,
) -> Result<()>
{
    match format
    {
        OutputFormat::Json =>
        {
            serde_json::to_writer_pretty(&mut *out, rows).context("Failed to encode JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Table =>
        {
            let table = Table::new(rows.iter().map(TableRow::from))
                .with(Style::modern())
                .to_string();
            writeln!(out, "{table}")?;
        }
        OutputFormat::Text =>
        {
            for row in rows
            {
                let id = format!(
                    "{}{}",
                    row.contest_id
                        .map(|c| c.to_string())
                        .unwrap_or_default(),
                    row.problem_id
                );
                let id = if color { id.cyan().to_string() } else { id };
                let rating = row
                    .rating
                    .map(|r| paint_rating(r, color))
                    .unwrap_or_else(|| "-".to_string());

                writeln!(
                    out,
                    "{id}\t{}\t{rating}\t[{}]\t{}",
                    row.problem_name,
                    row.tags
                        .iter()
                        .join(", "),
                    row.url
                        .as_deref()
                        .unwrap_or("")
                )?;
            }
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct TagRow
{
    #[tabled(rename = "#")]
    index: usize,
    tag: String,
    count: usize,
}

pub fn render_ranking<W: Write>(
    out: &mut W,
    ranking: &TagRanking,
    format: OutputFormat,
    color: bool,
) -> Result<()>
{
    match format
    {
        OutputFormat::Json =>
        {
            serde_json::to_writer_pretty(&mut *out, ranking).context("Failed to encode JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Table =>
        {
            let rows = ranking
                .tags()
                .iter()
                .map(|t| TagRow { index: t.index, tag: t.tag.clone(), count: t.count });
            writeln!(out, "{}", Table::new(rows).with(Style::modern()))?;
        }
        OutputFormat::Text =>
        {
            for t in ranking.tags()
            {
                if color
                {
                    writeln!(out, "{}. {}: {}", t.index.yellow(), t.tag, t.count.bold())?;
                }
                else
                {
                    writeln!(out, "{}. {}: {}", t.index, t.tag, t.count)?;
                }
            }
        }
    }
    Ok(())
}
