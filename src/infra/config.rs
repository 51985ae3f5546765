use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs, OutputFormat};
use crate::infra::api::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Default Codeforces handle
    pub handle: Option<String>,

    /// Read saved API responses from this directory instead of the network
    pub snapshot_dir: Option<String>,

    /// Remote API settings
    pub api: ApiConfig,

    /// Output settings
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig
{
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig
{
    /// Prefix for problem links
    pub web_base_url: String,
    pub format: OutputFormat,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            handle: None,
            snapshot_dir: None,
            api: ApiConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for ApiConfig
{
    fn default() -> Self
    {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: 30 }
    }
}

impl Default for DisplayConfig
{
    fn default() -> Self
    {
        Self { web_base_url: "https://codeforces.com".to_string(), format: OutputFormat::Table }
    }
}

impl ApiConfig
{
    pub fn timeout(&self) -> Duration
    {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config
{
    /// `snapshot_dir` with `~` and `$VARS` expanded.
    pub fn snapshot_path(&self) -> Result<Option<PathBuf>>
    {
        self.snapshot_dir
            .as_deref()
            .map(|raw| {
                shellexpand::full(raw)
                    .map(|s| PathBuf::from(s.as_ref()))
                    .with_context(|| format!("Failed to expand snapshot_dir {raw:?}"))
            })
            .transpose()
    }
}

pub fn load_config() -> Result<Config>
{
    load_config_from(Path::new("."))
}

pub fn load_config_from(dir: &Path) -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["upsolve.toml", "upsolve.yaml", "upsolve.json", ".upsolve.toml"];

    for name in &config_paths
    {
        let path = dir.join(name);
        if path.exists()
        {
            builder = builder.add_source(config::File::from(path));
            break;
        }
    }

    // Add environment variables with UPSOLVE_ prefix, nested keys split on "__"
    builder = builder.add_source(
        config::Environment::with_prefix("UPSOLVE")
            .prefix_separator("_")
            .separator("__"),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("upsolve.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            println!("Would write {}:\n{}", config_path.display(), toml_string);
        }
        return Ok(());
    }

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults()
    {
        let tmp = assert_fs::TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("upsolve.toml"), "handle = \"jiangly\"\n[api]\ntimeout_secs = 5\n")
            .unwrap();

        let cfg = load_config_from(tmp.path()).unwrap();

        assert_eq!(cfg.handle.as_deref(), Some("jiangly"));
        assert_eq!(cfg.api.timeout(), Duration::from_secs(5));
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.display.format, OutputFormat::Table);
    }

    #[test]
    fn default_config_round_trips_through_toml()
    {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn snapshot_dir_is_expanded()
    {
        let cfg = Config { snapshot_dir: Some("/tmp/cf".into()), ..Config::default() };
        assert_eq!(cfg.snapshot_path().unwrap(), Some(PathBuf::from("/tmp/cf")));
        assert_eq!(Config::default().snapshot_path().unwrap(), None);
    }
}
