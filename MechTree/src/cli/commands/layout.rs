//! CLI commands for the link-graph utilities

use std::time::Instant;

use crate::cli::progress::{GEAR, LOOKING_GLASS, print_done, print_step};
use crate::config::Config;
use crate::pipeline::{export_categories, export_offset_tree};

pub fn categories(config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 1, LOOKING_GLASS, "Generating node categories...");
    let path = export_categories(config)?;
    println!("  {}", path.display());

    print_done("Node categories generated!", started.elapsed());
    Ok(())
}

pub fn offset(config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 1, GEAR, "Applying tree offsets...");
    let path = export_offset_tree(config)?;
    println!("  {}", path.display());

    print_done("Tree offsets applied!", started.elapsed());
    Ok(())
}
