//! `upsolve completions`: shell scripts for the `upsolve` binary.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{Generator, Shell, generate};

use crate::cli::{AppContext, Cli, CompletionsArgs};

const BIN_NAME: &str = "upsolve";

/// The completion script for `shell`.
pub fn script(shell: Shell) -> Vec<u8> {
    let mut buf = Vec::new();
    generate(shell, &mut Cli::command(), BIN_NAME, &mut buf);
    buf
}

/// Where the script for `shell` lands inside `dir` (`upsolve.bash`, `_upsolve`, ...).
pub fn script_path(shell: Shell, dir: &Path) -> PathBuf {
    dir.join(shell.file_name(BIN_NAME))
}

pub fn run(args: CompletionsArgs, ctx: &AppContext) -> Result<()> {
    let body = script(args.shell);

    let Some(dir) = args.out_dir else {
        io::stdout().lock().write_all(&body)?;
        return Ok(());
    };

    let path = script_path(args.shell, &dir);
    if ctx.dry_run {
        if !ctx.quiet {
            println!("Would write {} bytes to {}", body.len(), path.display());
        }
        return Ok(());
    }

    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, &body).with_context(|| format!("Failed to write {}", path.display()))?;

    if !ctx.quiet {
        eprintln!("Wrote completion to {}", path.display());
    }
    Ok(())
}
