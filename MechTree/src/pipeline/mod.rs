//! Export passes
//!
//! [`SkillData`] loads the three game documents once; the passes below turn
//! them (plus the external link and category files) into JSON on disk:
//!
//! - [`export_components`] - one file per extractor
//! - [`export_skill_tree`] - the joined skill tree
//! - [`export_categories`] - category membership from the link graph
//! - [`export_offset_tree`] - the skill tree with each category re-centered

pub mod aggregate;
pub mod categories;
pub mod components;
mod graph;
pub mod offset;
mod output;

pub use aggregate::{CategoryIndex, CategoryTree, SkillTree, TreeNode, build_skill_tree, export_skill_tree};
pub use categories::{export_categories, generate_categories};
pub use components::export_components;
pub use offset::{CENTER_COLUMN, apply_offsets, category_offsets, export_offset_tree};
pub use output::write_json;

use crate::config::Config;
use crate::error::Result;
use crate::extract::{self, EffectValues, NodeDiscriminators, NodeEffects, NodeLocalizations, NodeLocations, NodeVariants};
use crate::formats::{self, DefinitionDocument, DisplayDocument, Workbook};

/// Skill node definitions, relative to the source directory
pub const DEFINITION_FILE: &str = "MechSkillTreeNodes.xml";
/// Skill node layout, relative to the source directory
pub const DISPLAY_FILE: &str = "MechSkillTreeNodesDisplay.xml";
/// Locale spreadsheet, relative to the source directory
pub const LOCALE_FILE: &str = "TheRealLoc.xml";

/// Link graph, relative to the output directory
pub const LINKS_FILE: &str = "NodeLinks.json";
/// Category membership, relative to the output directory
pub const CATEGORIES_FILE: &str = "NodeCategories.json";

pub const EFFECTS_FILE: &str = "ExtractedNodeEffects.json";
pub const VALUES_FILE: &str = "ExtractedEffectValues.json";
pub const VARIANTS_FILE: &str = "ExtractedNodeVariants.json";
pub const LOCATIONS_FILE: &str = "ExtractedNodeLocations.json";
pub const DISCRIMINATORS_FILE: &str = "ExtractedNodeDiscriminators.json";
pub const LOCALIZATIONS_FILE: &str = "ExtractedNodeLocalizations.json";
pub const SKILL_TREE_FILE: &str = "SkillTree.json";
pub const SKILL_TREE_FINAL_FILE: &str = "SkillTreeFinal.json";

/// The three game documents, parsed
#[derive(Debug, Clone, Default)]
pub struct SkillData {
    pub definition: DefinitionDocument,
    pub display: DisplayDocument,
    pub locale: Workbook,
}

impl SkillData {
    /// Load all source documents from the configured source directory
    ///
    /// # Errors
    /// Returns an error if any document is missing or malformed.
    pub fn load(config: &Config) -> Result<Self> {
        tracing::info!("Loading skill tree sources from {}", config.paths.src.display());
        Ok(Self {
            definition: formats::read_definition(config.source_path(DEFINITION_FILE))?,
            display: formats::read_display(config.source_path(DISPLAY_FILE))?,
            locale: formats::read_workbook(config.source_path(LOCALE_FILE))?,
        })
    }
}

/// Output of all six extractors
#[derive(Debug, Clone)]
pub struct Extracted {
    pub effects: NodeEffects,
    pub values: EffectValues,
    pub variants: NodeVariants,
    pub locations: NodeLocations,
    pub discriminators: NodeDiscriminators,
    pub localizations: NodeLocalizations,
}

impl Extracted {
    /// Run every extractor over the loaded documents
    ///
    /// # Errors
    /// Returns an error if an effect value is not a number or the locale
    /// data is inconsistent.
    pub fn run(data: &SkillData) -> Result<Self> {
        Ok(Self {
            effects: extract::map_node_effects(&data.definition),
            values: extract::map_effect_values(&data.definition)?,
            variants: extract::map_node_variants(&data.definition),
            locations: extract::map_node_locations(&data.display),
            discriminators: extract::map_node_discriminators(&data.definition)?,
            localizations: extract::map_node_localizations(&data.locale)?,
        })
    }
}
