//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::{render, OutputFormat, SelectionArgs};
use crate::documents::{config_set, load_documents, Agency, App};
use crate::resolver::{select_environment, ProcessEnv};

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Merge without checking overrides against the base documents or the schema
    #[arg(long)]
    pub no_validate: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let value = if args.no_validate {
        let settings = args.selection.settings()?;
        let agency: Agency = settings
            .agency
            .as_deref()
            .context("no agency configured: pass --agency or set OPEN_AIRPORT_AGENCY")?
            .parse()?;
        let app: App = settings.app.parse()?;
        let environment = select_environment(args.selection.selection()?, &ProcessEnv)?;
        let overlays = load_documents(&settings.overlays)?;
        config_set(agency, app).merge_with_overlays(environment, &overlays)?.to_value()
    } else {
        args.selection.bootstrap()?.merged.to_value()
    };

    let rendered = render(&value, args.format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
