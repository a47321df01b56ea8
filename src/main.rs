// src/main.rs
use color_eyre::eyre;

use ef_scrape::cli;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let params = cli::parse().map_err(|e| eyre::eyre!("{e}"))?;
    cli::run(params).map_err(|e| eyre::eyre!("scrape failed: {e}"))
}
