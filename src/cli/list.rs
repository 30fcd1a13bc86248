//! List command implementation

use anyhow::Result;

use crate::documents::{Agency, App};
use crate::domain::Environment;

pub fn run() -> Result<()> {
    println!("Agencies:");
    for agency in Agency::ALL {
        println!("  {}", agency);
    }
    println!("Apps:");
    for app in App::ALL {
        println!("  {}", app);
    }
    println!("Environments:");
    for env in Environment::ALL {
        println!("  {}", env);
    }
    Ok(())
}
