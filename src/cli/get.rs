//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{render_scalar, SelectionArgs};

#[derive(Args)]
pub struct GetArgs {
    /// Dotted key path, e.g. `serverUrl.config`
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run(args: GetArgs) -> Result<()> {
    let context = args.selection.bootstrap()?;
    let Some(value) = context.merged.get(&args.key) else {
        anyhow::bail!("No configuration value at `{}`", args.key);
    };
    println!("{}", render_scalar(value)?);
    Ok(())
}
