//! Tracing subscriber setup. Logs go to stderr so stdout stays parseable.

use tracing_subscriber::EnvFilter;

use crate::cli::AppContext;

/// Default directive for a `-v` count when `RUST_LOG` is unset.
pub fn default_level(verbose: u8) -> &'static str
{
    match verbose
    {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(ctx: &AppContext)
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(ctx.verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!ctx.no_color)
        .with_target(false)
        .try_init();
}
