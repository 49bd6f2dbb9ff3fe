//! Pane command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::GlobalArgs;
use crate::util::activation::Activation;

/// Open the property pane and print its configuration
#[derive(Args, Debug)]
pub struct PaneArgs {
    /// JSON file with the web part properties
    #[arg(long, value_name = "FILE")]
    properties: Option<PathBuf>,

    /// Print the pane as soon as it opens, before list options load
    #[arg(long)]
    no_wait: bool,
}

/// Execute the pane command
pub async fn execute(global: &GlobalArgs, args: PaneArgs) -> Result<()> {
    let config = global.resolve(global.overrides())?;
    let mut activation = Activation::start(&config, args.properties.as_deref()).await?;

    let mut pane = activation.open_property_pane()?;
    if !args.no_wait {
        pane = activation.settle_property_pane().await?;
    }
    println!("{}", serde_json::to_string_pretty(&pane)?);

    activation.finish().await
}
