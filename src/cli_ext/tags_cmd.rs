//! `upsolve tags`: print the rarest-first tag ranking without filtering.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::{AppContext, OutputFormat, TagsArgs};
use crate::cli_ext::render::render_ranking;
use crate::cli_ext::session::{Origin, Spinning, configured_handle, spinner};
use crate::core::edition::RoundNumberExtractor;
use crate::core::pipeline::{Candidates, Inputs};
use crate::infra::config::{Config, load_config};

pub fn run(
    args: TagsArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = load_config()?;
    run_with(args, ctx, &config, &mut io::stdout().lock())
}

pub fn run_with<O: Write>(
    args: TagsArgs,
    ctx: &AppContext,
    config: &Config,
    out: &mut O,
) -> Result<()>
{
    let handle = configured_handle(args.handle, config)
        .context("No handle given. Pass HANDLE or set `handle` in upsolve.toml")?;
    let origin = Origin::resolve(config, args.snapshot_dir)?;

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            writeln!(out, "DRY RUN: Would rank tags for {handle} from {}", origin.describe())?;
        }
        return Ok(());
    }

    let source = origin.open(config)?;
    let bar = spinner(ctx);
    let inputs = Inputs::fetch(&Spinning::new(source.as_ref(), &bar), &handle);
    bar.finish_and_clear();
    let inputs = inputs.with_context(|| format!("Failed to fetch data for {handle}"))?;

    let candidates = Candidates::compute(&inputs, &RoundNumberExtractor::new());
    let color = !ctx.no_color && args.format != OutputFormat::Json;

    render_ranking(out, &candidates.ranking, args.format, color)
}
