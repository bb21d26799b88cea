use clap::Subcommand;

use crate::config::Config;

pub mod export;
pub mod layout;

#[derive(Subcommand)]
pub enum Commands {
    /// Write one JSON file per extractor (effects, values, variants, locations, discriminators, localizations)
    Components,

    /// Join the extracted data with NodeLinks.json and NodeCategories.json into SkillTree.json
    Tree,

    /// Generate NodeCategories.json from NodeLinks.json and the category roots
    Categories,

    /// Re-center each category of SkillTree.json into SkillTreeFinal.json
    Offset,
}

impl Commands {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match self {
            Commands::Components => export::components(config),
            Commands::Tree => export::tree(config),
            Commands::Categories => layout::categories(config),
            Commands::Offset => layout::offset(config),
        }
    }
}
