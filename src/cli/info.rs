//! Summary command implementation

use anyhow::Result;
use clap::Args;

use super::utils::SelectionArgs;

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run(args: SummaryArgs) -> Result<()> {
    let context = args.selection.bootstrap()?;
    let config = &context.config;

    println!("Agency: {} ({})", config.agency.name, config.agency.short_name);
    println!("App: {} [{}]", config.app.title, context.app);
    println!("Environment: {}", context.environment);
    println!("Airport: {} {}", config.airport.code, config.airport.name);
    println!("Timezone: {}", config.agency.timezone);

    println!("Endpoints:");
    println!("  config: {}", config.server_url.config);
    println!("  mds: {}", config.server_url.mds);
    println!("  audit: {}", config.server_url.audit);

    println!("Auth:");
    println!("  domain: {}", config.auth.domain);
    println!("  client id: {}", config.auth.client_id);
    println!("  audience: {}", config.auth.audience);

    if config.provider.active_providers.is_empty() {
        println!("Active providers: none");
    } else {
        println!("Active providers: {}", config.provider.active_providers.join(", "));
    }

    let enabled: Vec<&str> = config
        .features
        .iter()
        .filter(|(_, on)| **on)
        .map(|(name, _)| name.as_str())
        .collect();
    println!("Features enabled: {}", if enabled.is_empty() { "none".to_string() } else { enabled.join(", ") });

    let placeholders = context.merged.placeholders();
    if !placeholders.is_empty() {
        println!("Placeholders:");
        for path in placeholders {
            println!("  {}", path);
        }
    }

    Ok(())
}
