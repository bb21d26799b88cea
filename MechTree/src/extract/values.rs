//! Effect value tables (`ExtractedEffectValues.json`)

use super::dimension::{Resolved, resolve_effects};
use crate::error::Result;
use crate::formats::definition::DefinitionDocument;
use indexmap::IndexMap;
use serde::Serialize;

/// Effect name -> value
pub type EffectValues = IndexMap<String, EffectValue>;

/// Value of one effect as written to JSON.
///
/// A flat effect is a bare number; a discriminated one is
/// `{"factions": {faction: number | {class: number | {tonnage: number}}}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EffectValue {
    Flat(f64),
    Discriminated { factions: IndexMap<String, Resolved> },
}

impl From<Resolved> for EffectValue {
    fn from(resolved: Resolved) -> Self {
        match resolved {
            Resolved::Scalar(value) => EffectValue::Flat(value),
            Resolved::Nested(factions) => EffectValue::Discriminated { factions },
        }
    }
}

/// Map effect names to their values
///
/// # Errors
/// Returns an error if a value that is used is not a number.
pub fn map_effect_values(doc: &DefinitionDocument) -> Result<EffectValues> {
    Ok(resolve_effects(doc)?
        .into_iter()
        .map(|(name, resolved)| (name, EffectValue::from(resolved)))
        .collect())
}
