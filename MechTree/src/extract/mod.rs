//! Skill tree extractors
//!
//! Each extractor is a pure function over the parsed source documents that
//! returns an insertion-ordered map, ready to be written as JSON. None of them
//! depends on another's output.

pub mod dimension;
pub mod discriminators;
pub mod effects;
pub mod localization;
pub mod locations;
pub mod values;
pub mod variants;

pub use dimension::{Resolved, SENTINEL, resolve, resolve_effects};
pub use discriminators::{Discriminators, NodeDiscriminators, map_node_discriminators};
pub use effects::{NodeEffects, map_node_effects};
pub use localization::{Localization, NodeLocalizations, map_node_localizations};
pub use locations::{Location, NodeLocations, map_node_locations};
pub use values::{EffectValue, EffectValues, map_effect_values};
pub use variants::{NodeVariants, Variant, map_node_variants};
