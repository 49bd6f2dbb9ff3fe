//! Lists command implementation

use anyhow::{Context, Result};
use clap::Args;
use property_pane_host::options::{source_from_config, OptionsCache};
use serde_json::json;

use super::GlobalArgs;

/// Load the list options once through the configured source
#[derive(Args, Debug)]
pub struct ListsArgs {
    /// Include hidden lists (REST source only)
    #[arg(long)]
    include_hidden: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the lists command
///
/// A failed load is not an error: it prints that no options are available,
/// matching what the dropdown would show.
pub async fn execute(global: &GlobalArgs, args: ListsArgs) -> Result<()> {
    let mut config = global.resolve(global.overrides())?;
    if args.include_hidden {
        config.lists.include_hidden = Some(true);
    }

    let source = source_from_config(&config).context("Invalid list source configuration")?;
    let cache = OptionsCache::new(source);
    cache.load().await;

    let options = cache.snapshot();
    if args.json {
        let output = json!({
            "source": cache.source_name(),
            "ready": cache.is_ready(),
            "options": options,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !cache.is_ready() {
        println!("No options available");
        return Ok(());
    }

    if options.is_empty() {
        println!("No lists found");
        return Ok(());
    }

    let key_width = options.iter().map(|o| o.key.len()).max().unwrap_or(0);
    for option in &options {
        println!("{:<key_width$}  {}", option.key, option.label);
    }

    Ok(())
}
