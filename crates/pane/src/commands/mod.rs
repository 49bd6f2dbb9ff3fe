//! CLI command dispatch and execution

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use property_pane_core::config::{resolve_config, Config, ConfigOverrides, ListSourceKind};
use property_pane_core::home::get_home_dir;
use property_pane_core::logging;
use std::path::PathBuf;

mod env;
mod lists;
mod pane;
mod render;

/// pane - host-side tooling for configurable web parts
#[derive(Parser, Debug)]
#[command(
    name = "pane",
    version,
    about = "Resolve host environments, load list options and render web parts",
    long_about = "Host-side tooling for configurable web parts: environment detection, \
                  lazy option loading and property pane inspection"
)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Default)]
pub struct GlobalArgs {
    /// Absolute URL of the site whose lists are loaded
    #[arg(long, global = true)]
    site_url: Option<String>,

    /// Explicit config file (must exist)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Option source for the list dropdown
    #[arg(long, global = true, value_enum)]
    source: Option<SourceArg>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceArg {
    Rest,
    Static,
}

impl From<SourceArg> for ListSourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Rest => ListSourceKind::Rest,
            SourceArg::Static => ListSourceKind::Static,
        }
    }
}

impl GlobalArgs {
    /// Overrides carried by the global flags
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            site_url: self.site_url.clone(),
            list_source: self.source.map(ListSourceKind::from),
            config_path: self.config.clone(),
            ..Default::default()
        }
    }

    /// Resolve configuration for the current directory.
    fn resolve(&self, overrides: ConfigOverrides) -> Result<Config> {
        let home_dir = get_home_dir()?;
        let current_dir = std::env::current_dir().context("Cannot read current directory")?;
        resolve_config(&overrides, &current_dir, &home_dir).context("Failed to resolve config")
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the environment message for a host
    Env(env::EnvArgs),

    /// Load list options once and print them
    Lists(lists::ListsArgs),

    /// Open the property pane and print its configuration
    Pane(pane::PaneArgs),

    /// Render the web part view model
    Render(render::RenderArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        if self.global.verbose {
            logging::init_with_level(tracing::Level::DEBUG);
        } else {
            logging::init();
        }

        match self.command {
            Commands::Env(args) => env::execute(&self.global, args),
            Commands::Lists(args) => lists::execute(&self.global, args).await,
            Commands::Pane(args) => pane::execute(&self.global, args).await,
            Commands::Render(args) => render::execute(&self.global, args).await,
        }
    }
}
