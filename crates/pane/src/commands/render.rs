//! Render command implementation

use anyhow::Result;
use clap::Args;
use property_pane_host::webpart::Theme;
use std::path::PathBuf;

use super::GlobalArgs;
use crate::util::activation::Activation;

/// Render the web part view model
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file with the web part properties
    #[arg(long, value_name = "FILE")]
    properties: Option<PathBuf>,

    /// Render with an inverted (dark) theme
    #[arg(long)]
    dark: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the render command
pub async fn execute(global: &GlobalArgs, args: RenderArgs) -> Result<()> {
    let config = global.resolve(global.overrides())?;
    let mut activation = Activation::start(&config, args.properties.as_deref()).await?;

    if args.dark {
        activation.apply_theme(Theme { is_inverted: true });
    }
    let view = activation.render()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else if let Some(fields) = view.as_object() {
        let manifest = activation.manifest()?;
        println!("{} {} ({})", manifest.alias, manifest.version, manifest.id);
        println!("{}", manifest.description);
        println!();

        let width = fields.keys().map(String::len).max().unwrap_or(0);
        for (name, value) in fields {
            let shown = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            println!("{name:<width$}  {shown}");
        }
    }

    activation.finish().await
}
