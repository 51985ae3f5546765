//! `upsolve find`: the interactive upsolving session.
//!
//! Prompts (handle, rating range, tag choice) go to stderr so stdout only
//! carries the rendered result.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

use crate::cli::{AppContext, FindArgs, OutputFormat};
use crate::cli_ext::render::{Links, ProblemRow, render_problems, render_ranking};
use crate::cli_ext::session::{Origin, Spinning, configured_handle, spinner};
use crate::core::edition::RoundNumberExtractor;
use crate::core::error::UpsolveError;
use crate::core::pipeline::resolve_unsolved;
use crate::core::rating::{RatingRange, filter_by_rating};
use crate::core::tags::TagRanking;
use crate::infra::config::{Config, load_config};
use crate::infra::prompt::{Prompter, parse_numbers};

/// Highest rating accepted at the prompt.
pub const MAX_RATING: u32 = 9999;

pub fn run(
    args: FindArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = load_config()?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    let mut stdout = io::stdout().lock();

    run_with(args, ctx, &config, &mut prompter, &mut stdout)
}

/// Same as [`run`] with explicit config and streams.
pub fn run_with<R, W, O>(
    args: FindArgs,
    ctx: &AppContext,
    config: &Config,
    prompter: &mut Prompter<R, W>,
    out: &mut O,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    let interactive = !args.no_prompt;
    let color = !ctx.no_color;

    // Reject a malformed --tags list before any network traffic
    let preset_tags = args
        .tags
        .as_deref()
        .map(parse_numbers)
        .transpose()
        .context("Invalid --tags list")?;

    let handle = match configured_handle(args.handle.clone(), config)
    {
        Some(h) if args.handle.is_some() || !interactive => h,
        _ if interactive => prompter.ask_text("Codeforces handle", config.handle.as_deref())?,
        _ => anyhow::bail!("No handle given. Pass HANDLE or set `handle` in upsolve.toml"),
    };

    let rating = match args.rating
    {
        Some(range) => Some(range),
        None if args.no_rating || !interactive => None,
        None => ask_rating(prompter)?,
    };

    let origin = Origin::resolve(config, args.snapshot_dir.clone())?;
    let format = args
        .format
        .unwrap_or(config.display.format);

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            let banner = "DRY RUN: Would look up:";
            if color
            {
                writeln!(out, "{}", banner.yellow())?;
            }
            else
            {
                writeln!(out, "{banner}")?;
            }
            writeln!(out, "  Handle: {handle}")?;
            writeln!(out, "  Source: {}", origin.describe())?;
            writeln!(out, "  Tags: {:?}", preset_tags.as_deref().unwrap_or_default())?;
            match rating
            {
                Some(r) => writeln!(out, "  Rating: {r}")?,
                None => writeln!(out, "  Rating: any")?,
            }
            writeln!(out, "  Format: {format:?}")?;
        }
        return Ok(());
    }

    let links = Links::new(&config.display.web_base_url)?;
    let source = origin.open(config)?;
    let bar = spinner(ctx);
    let spinning = Spinning::new(source.as_ref(), &bar);

    let report = resolve_unsolved(&spinning, &handle, &RoundNumberExtractor::new(), |ranking| {
        bar.finish_and_clear();
        choose_tags(ranking, preset_tags, interactive, prompter, color)
    });
    bar.finish_and_clear();
    let report = report.with_context(|| format!("Failed to find unsolved problems for {handle}"))?;

    let mut problems = report.problems;
    if let Some(range) = rating
    {
        problems = filter_by_rating(problems, range);
    }

    info!(handle = %handle, problems = problems.len(), "rendering result");

    let rows: Vec<ProblemRow> = problems
        .iter()
        .map(|p| ProblemRow::new(p, &report.contests, &links))
        .collect();
    render_problems(out, &rows, format, color && format != OutputFormat::Json)?;

    if !ctx.quiet
    {
        writeln!(prompter.output(), "{} unsolved problem(s) for {handle}", rows.len())?;
    }
    Ok(())
}

fn ask_rating<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<RatingRange>>
{
    if !prompter.confirm("Filter by rating", false)?
    {
        return Ok(None);
    }

    let min = prompter.ask_u32("Minimum rating", 0..=MAX_RATING)?;
    let max = prompter.ask_u32("Maximum rating", min..=MAX_RATING)?;
    Ok(Some(RatingRange::new(min, max)?))
}

fn abort(err: anyhow::Error) -> UpsolveError
{
    UpsolveError::ChoiceAborted(err.into())
}

/// Preset indices win; otherwise show the ranking and ask until the
/// answer names only ranked tags.
fn choose_tags<R: BufRead, W: Write>(
    ranking: &TagRanking,
    preset: Option<Vec<usize>>,
    interactive: bool,
    prompter: &mut Prompter<R, W>,
    color: bool,
) -> Result<Vec<usize>, UpsolveError>
{
    if let Some(indices) = preset
    {
        return Ok(indices);
    }
    if !interactive || ranking.is_empty()
    {
        return Ok(Vec::new());
    }

    render_ranking(prompter.output(), ranking, OutputFormat::Text, color).map_err(abort)?;

    loop
    {
        let indices = prompter
            .ask_numbers("Enter tag ids (space or comma separated):")
            .map_err(abort)?;

        match ranking.select(&indices)
        {
            Ok(_) => return Ok(indices),
            Err(e) => writeln!(prompter.output(), "{e}").map_err(|e| abort(e.into()))?,
        }
    }
}

#[cfg(test)]
mod tests
{
    use std::io::Cursor;

    use super::*;

    fn args(handle: Option<&str>) -> FindArgs
    {
        FindArgs {
            handle: handle.map(str::to_string),
            tags: None,
            rating: None,
            no_rating: false,
            no_prompt: false,
            format: Some(OutputFormat::Json),
            snapshot_dir: None,
        }
    }

    fn dry() -> AppContext
    {
        AppContext { dry_run: true, no_color: true, ..AppContext::default() }
    }

    #[test]
    fn dry_run_prompts_for_handle_and_rating()
    {
        let mut prompter = Prompter::new(Cursor::new(b"\ny\n800\n1200\n".to_vec()), Vec::new());
        let config = Config { handle: Some("Benq".into()), ..Config::default() };
        let mut out = Vec::new();

        run_with(args(None), &dry(), &config, &mut prompter, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Handle: Benq"));
        assert!(text.contains("Rating: 800-1200"));
    }

    #[test]
    fn no_prompt_needs_a_handle()
    {
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());
        let mut a = args(None);
        a.no_prompt = true;

        let err = run_with(a, &dry(), &Config::default(), &mut prompter, &mut Vec::new()).unwrap_err();

        assert!(err.to_string().contains("No handle given"));
    }

    #[test]
    fn malformed_tags_fail_early()
    {
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());
        let mut a = args(Some("tourist"));
        a.tags = Some("1,x".into());

        assert!(run_with(a, &dry(), &Config::default(), &mut prompter, &mut Vec::new()).is_err());
    }

    #[test]
    fn tag_prompt_retries_out_of_range()
    {
        let ranking = TagRanking::from_problems(&[crate::core::model::Problem {
            contest_id: None,
            index: "A".into(),
            name: "x".into(),
            rating: None,
            tags: vec!["dp".into()],
        }]);
        let mut prompter = Prompter::new(Cursor::new(b"4\n0\n".to_vec()), Vec::new());

        let chosen = choose_tags(&ranking, None, true, &mut prompter, false).unwrap();

        assert_eq!(chosen, vec![0]);
        let shown = String::from_utf8(prompter.output().clone()).unwrap();
        assert!(shown.contains("0. dp: 1"));
        assert!(shown.contains("out of range"));
    }

    #[test]
    fn closed_input_keeps_the_cause()
    {
        let ranking = TagRanking::from_problems(&[crate::core::model::Problem {
            contest_id: None,
            index: "A".into(),
            name: "x".into(),
            rating: None,
            tags: vec!["dp".into()],
        }]);
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());

        let err = choose_tags(&ranking, None, true, &mut prompter, false).unwrap_err();

        assert!(matches!(err, UpsolveError::ChoiceAborted(_)));
        assert!(std::error::Error::source(&err).is_some());
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert!(chain.starts_with("tag choice aborted: "), "{chain}");
        assert!(chain.contains("input closed"), "{chain}");
    }
}
