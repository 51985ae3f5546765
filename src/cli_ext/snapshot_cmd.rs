//! `upsolve snapshot`: save API responses for offline runs.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::cli::{AppContext, SnapshotArgs};
use crate::cli_ext::session::spinner;
use crate::infra::api::CodeforcesClient;
use crate::infra::config::load_config;
use crate::infra::snapshot::save_snapshot;

pub fn run(
    args: SnapshotArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config = load_config()?;

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            println!("{}", "DRY RUN: Would download:".yellow());
            println!("  Handle: {}", args.handle);
            println!("  From: {}", config.api.base_url);
            println!("  Into: {}", args.out.display());
        }
        return Ok(());
    }

    let client = CodeforcesClient::new(&config.api.base_url, config.api.timeout())
        .context("Failed to build HTTP client")?;

    let bar = spinner(ctx);
    bar.set_message(format!("Downloading snapshot for {}", args.handle));
    let written = save_snapshot(&client, &args.handle, &args.out);
    bar.finish_and_clear();
    let written = written?;

    if !ctx.quiet
    {
        for path in &written
        {
            println!("{} {}", "wrote".green(), path.display());
        }
    }
    Ok(())
}
