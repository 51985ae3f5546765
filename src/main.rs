use anyhow::Result;
use clap::Parser;
use upsolve::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build a context once, pass everywhere
    let ctx = cli.context();
    upsolve::infra::logging::init(&ctx);

    match cli.command {
        Commands::Find(args) => upsolve::cli_ext::find_cmd::run(args, &ctx),
        Commands::Tags(args) => upsolve::cli_ext::tags_cmd::run(args, &ctx),
        Commands::Snapshot(args) => upsolve::cli_ext::snapshot_cmd::run(args, &ctx),
        Commands::Init(args) => upsolve::infra::config::init(args, &ctx),
        Commands::Completions(args) => upsolve::completion::run(args, &ctx),
    }
}
