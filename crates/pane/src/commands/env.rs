//! Env command implementation

use anyhow::Result;
use clap::Args;
use property_pane_core::context::resolve;
use serde_json::json;

use super::GlobalArgs;

/// Resolve the environment message for a host
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Hosted inside a container application; `--embedded false` forces the portal
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    embedded: Option<bool>,

    /// Host name as reported by the container (Teams, TeamsModern, Outlook, Office)
    #[arg(long, value_name = "NAME")]
    host: Option<String>,

    /// Served from a local dev server
    #[arg(long)]
    local: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the env command
pub fn execute(global: &GlobalArgs, args: EnvArgs) -> Result<()> {
    let mut overrides = global.overrides();
    overrides.embedded = args.embedded;
    overrides.host_name = args.host;
    overrides.local_dev = args.local.then_some(true);

    let config = global.resolve(overrides)?;
    let host = config.host.host_context();
    let message = resolve(&host);

    if args.json {
        let output = json!({
            "hostContext": host,
            "environmentMessage": message.key(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{message}");
    }

    Ok(())
}
