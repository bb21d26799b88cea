//! Discriminator descent shared by the value and discriminator extractors
//!
//! An effect (and each faction and weight class below it) whose raw value is
//! the literal `0.0` has no value of its own: the value is looked up one level
//! deeper, keyed by the child's name. The comparison is textual, so `0`, `.0`
//! and `-0.0` are ordinary values. Tonnage is the last level and is always a
//! number.

use crate::error::Result;
use crate::formats::definition::{DefinitionDocument, Dimension};
use indexmap::IndexMap;
use serde::Serialize;

/// Raw value meaning "defer to the child dimension"
pub const SENTINEL: &str = "0.0";

/// Faction, weight class, tonnage
pub const DISCRIMINATOR_LEVELS: usize = 3;

/// An effect value after descent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    Scalar(f64),
    Nested(IndexMap<String, Resolved>),
}

impl Resolved {
    /// Which discriminator levels are in play: `[faction, class, tonnage]`.
    ///
    /// A level counts as soon as one element at the level above deferred to
    /// it, even if that element had no children.
    pub fn levels(&self) -> [bool; DISCRIMINATOR_LEVELS] {
        let mut levels = [false; DISCRIMINATOR_LEVELS];
        self.mark(0, &mut levels);
        levels
    }

    fn mark(&self, depth: usize, levels: &mut [bool; DISCRIMINATOR_LEVELS]) {
        if let Resolved::Nested(table) = self {
            if let Some(level) = levels.get_mut(depth) {
                *level = true;
            }
            for child in table.values() {
                child.mark(depth + 1, levels);
            }
        }
    }
}

/// Resolve one `<Effect>` element
///
/// # Errors
/// Returns an error if a value that is used is not a number.
pub fn resolve(effect: &Dimension) -> Result<Resolved> {
    resolve_at(effect, 0)
}

fn resolve_at(dim: &Dimension, depth: usize) -> Result<Resolved> {
    if depth < DISCRIMINATOR_LEVELS && dim.value == SENTINEL {
        let mut table = IndexMap::with_capacity(dim.children.len());
        for child in &dim.children {
            table.insert(child.name.clone(), resolve_at(child, depth + 1)?);
        }
        Ok(Resolved::Nested(table))
    } else {
        Ok(Resolved::Scalar(dim.number()?))
    }
}

/// Resolve every effect of every node, keyed by effect name.
///
/// A repeated effect name replaces the earlier value but keeps its position.
///
/// # Errors
/// Returns an error if a value that is used is not a number.
pub fn resolve_effects(doc: &DefinitionDocument) -> Result<IndexMap<String, Resolved>> {
    let mut resolved = IndexMap::new();
    for effect in doc.nodes.iter().flat_map(|node| &node.effects) {
        if resolved
            .insert(effect.name.clone(), resolve(effect)?)
            .is_some()
        {
            tracing::debug!("Effect '{}' defined more than once", effect.name);
        }
    }
    Ok(resolved)
}
