use adauth::domain::registry::ExtensionBundle;
use adauth::features::activedirectory::ActiveDirectoryExtensions;
use adauth::kernel::config::load_settings;
use adauth::kernel::system::{HostOs, HostSystem};
use adauth_logger::{LevelFilter, Logger};
use anyhow::{Context, anyhow};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

/// Shows which authentication extensions the plugin would register on startup.
#[derive(Debug, Parser)]
#[command(name = "adauth", version, about)]
struct Cli {
    /// Settings file (toml, json, yaml or ini).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides a setting, e.g. `--set ldap.windows.auth=true`. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, String)>,

    /// Operating system classification to evaluate against.
    #[arg(long, value_enum, default_value_t = OsArg::Host)]
    os: OsArg,

    /// Print the bundle as JSON.
    #[arg(long)]
    json: bool,

    /// Console log level.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OsArg {
    /// The OS this binary runs on.
    Host,
    Windows,
    Other,
}

impl HostOs for OsArg {
    fn is_windows(&self) -> bool {
        match self {
            Self::Host => HostSystem.is_windows(),
            Self::Windows => true,
            Self::Other => false,
        }
    }
}

fn parse_override(raw: &str) -> anyhow::Result<(String, String)> {
    let (key, value) =
        raw.split_once('=').ok_or_else(|| anyhow!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("setting key cannot be empty in '{raw}'");
    }
    Ok((key.to_owned(), value.to_owned()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(cli.log_level).init()?;

    let settings = load_settings(cli.config.as_deref(), &cli.overrides)
        .context("Critical: settings are malformed")?;

    let bundle = ActiveDirectoryExtensions::with_system(settings, cli.os).provide()?;

    let mut out = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &bundle)?;
        writeln!(out)?;
    } else {
        render(&mut out, &bundle)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, bundle: &ExtensionBundle) -> io::Result<()> {
    writeln!(out, "extension set: {} ({} extensions)", bundle.set, bundle.len())?;
    for descriptor in bundle.iter() {
        writeln!(out, "  {:<9} {descriptor}", descriptor.kind())?;
    }
    Ok(())
}
