//! # MechTree
//!
//! Extracts the MechWarrior Online skill tree from the game's XML data and
//! writes it as JSON for the web skill planner.
//!
//! ## Inputs
//!
//! - **`MechSkillTreeNodes.xml`** - base nodes, their variants and effects
//! - **`MechSkillTreeNodesDisplay.xml`** - hex grid position of every variant
//! - **`TheRealLoc.xml`** - locale spreadsheet (XML Spreadsheet 2003)
//! - **`NodeLinks.json`** / **`NodeCategories.json`** - link graph and
//!   category membership, maintained outside the game data
//!
//! ## Quick Start
//!
//! ```no_run
//! use mechtree::prelude::*;
//!
//! let config = Config::discover(None)?;
//! let data = SkillData::load(&config)?;
//!
//! // One JSON file per extractor
//! export_components(&data, &config)?;
//!
//! // The joined skill tree
//! export_skill_tree(&data, &config)?;
//! # Ok::<(), mechtree::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mechtree` command-line binary

pub mod config;
pub mod error;
pub mod extract;
pub mod formats;
pub mod pipeline;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::formats::{DefinitionDocument, DisplayDocument, NodeRef, Workbook};

    pub use crate::extract::{
        EffectValue, Localization, Location, Resolved, Variant,
        map_effect_values, map_node_discriminators, map_node_effects,
        map_node_localizations, map_node_locations, map_node_variants,
    };

    pub use crate::pipeline::{
        Extracted, SkillData, SkillTree,
        export_categories, export_components, export_offset_tree, export_skill_tree,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
