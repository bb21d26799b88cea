//! CLI commands for the component and aggregate exports

use std::time::Instant;

use crate::cli::progress::{DISK, LINK, print_done, print_step};
use crate::config::Config;
use crate::pipeline::{SkillData, export_components, export_skill_tree};

/// Default run: component export, then aggregate export
pub fn all(config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();
    let data = SkillData::load(config)?;

    print_step(1, 2, DISK, "Exporting Component Skill Tree Data...");
    export_components(&data, config)?;

    print_step(2, 2, LINK, "Exporting Aggregate Skill Tree Data...");
    export_skill_tree(&data, config)?;

    print_done("Data export complete!", started.elapsed());
    Ok(())
}

pub fn components(config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();
    let data = SkillData::load(config)?;

    print_step(1, 1, DISK, "Exporting Component Skill Tree Data...");
    let written = export_components(&data, config)?;
    for path in &written {
        println!("  {}", path.display());
    }

    print_done("Component export complete!", started.elapsed());
    Ok(())
}

pub fn tree(config: &Config) -> anyhow::Result<()> {
    let started = Instant::now();
    let data = SkillData::load(config)?;

    print_step(1, 1, LINK, "Exporting Aggregate Skill Tree Data...");
    let path = export_skill_tree(&data, config)?;
    println!("  {}", path.display());

    print_done("Skill tree export complete!", started.elapsed());
    Ok(())
}
