//! Component export: one JSON file per extractor

use super::{
    DISCRIMINATORS_FILE, EFFECTS_FILE, Extracted, LOCALIZATIONS_FILE, LOCATIONS_FILE, SkillData,
    VALUES_FILE, VARIANTS_FILE, write_json,
};
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;

/// Run every extractor and write each result to the output directory.
///
/// Returns the written paths in write order.
///
/// # Errors
/// Returns an error if extraction fails or a file cannot be written.
pub fn export_components(data: &SkillData, config: &Config) -> Result<Vec<PathBuf>> {
    tracing::info!("Exporting component skill tree data");
    let extracted = Extracted::run(data)?;

    let paths: Vec<PathBuf> = [
        EFFECTS_FILE,
        VALUES_FILE,
        VARIANTS_FILE,
        LOCATIONS_FILE,
        DISCRIMINATORS_FILE,
        LOCALIZATIONS_FILE,
    ]
    .iter()
    .map(|file| config.output_path(file))
    .collect();

    write_json(&paths[0], &extracted.effects)?;
    write_json(&paths[1], &extracted.values)?;
    write_json(&paths[2], &extracted.variants)?;
    write_json(&paths[3], &extracted.locations)?;
    write_json(&paths[4], &extracted.discriminators)?;
    write_json(&paths[5], &extracted.localizations)?;

    Ok(paths)
}
