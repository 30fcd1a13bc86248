//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::SelectionArgs;
use crate::documents::{config_set, load_documents, Agency, App};
use crate::domain::{Environment, EnvironmentSelection};
use crate::resolver::{select_environment, ProcessEnv};
use crate::schema::AirportConfig;

#[derive(Args)]
pub struct CheckArgs {
    // `--env` limits the check to one environment; otherwise all are checked.
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Check every registered agency instead of the selected one
    #[arg(long)]
    pub all: bool,

    /// Treat keys still holding a placeholder value as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let settings = args.selection.settings()?;
    let app: App = settings.app.parse()?;

    let agencies = if args.all {
        Agency::ALL.to_vec()
    } else {
        let key = settings
            .agency
            .as_deref()
            .context("no agency configured: pass --agency, --all, or set OPEN_AIRPORT_AGENCY")?;
        vec![key.parse::<Agency>()?]
    };

    let environments = match args.selection.selection()? {
        None => Environment::ALL.to_vec(),
        Some(EnvironmentSelection::Explicit(env)) => vec![env],
        Some(EnvironmentSelection::Current) => {
            vec![select_environment(Some(EnvironmentSelection::Current), &ProcessEnv)?]
        }
    };

    let overlays = load_documents(&settings.overlays)?;
    let mut failures = 0usize;

    for agency in agencies {
        let set = config_set(agency, app);

        let issues = set.conformance(&overlays);
        if !issues.is_empty() {
            println!("{}/{}: {} conformance issue(s)", agency, app, issues.len());
            for issue in &issues {
                println!("  {}", issue);
            }
            failures += issues.len();
            continue;
        }

        for env in &environments {
            let composed = set
                .merge_with_overlays(*env, &overlays)
                .and_then(|merged| merged.to_typed::<AirportConfig>().map(|_| merged));
            let merged = match composed {
                Ok(merged) => merged,
                Err(e) => {
                    println!("{}/{}/{}: {}", agency, app, env, e);
                    failures += 1;
                    continue;
                }
            };

            let placeholders = merged.placeholders();
            if placeholders.is_empty() {
                println!("{}/{}/{}: ok", agency, app, env);
                continue;
            }

            println!("{}/{}/{}: {} placeholder(s)", agency, app, env, placeholders.len());
            for path in &placeholders {
                println!("  {}", path);
            }
            if args.strict {
                failures += placeholders.len();
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("Configuration check failed with {} problem(s)", failures);
    }
    Ok(())
}
