//! open-airport-config: inspect and validate composed console configuration

use anyhow::Result;

fn main() -> Result<()> {
    open_airport_config::cli::run()
}
