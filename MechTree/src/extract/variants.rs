//! Variant numbering (`ExtractedNodeVariants.json`)
//!
//! Base node ids are document positions. Variant ids are a single counter
//! running across all base nodes, in `names` order within each node.

use crate::formats::definition::DefinitionDocument;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Variant name -> ids
pub type NodeVariants = IndexMap<String, Variant>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Global variant id
    pub id: u32,
    /// Owning base node id
    pub base: usize,
}

/// Number every variant of every base node
pub fn map_node_variants(doc: &DefinitionDocument) -> NodeVariants {
    let mut variants = NodeVariants::new();
    let mut next_id = 0u32;

    for (base, node) in doc.nodes.iter().enumerate() {
        for name in node.variant_names() {
            let variant = Variant { id: next_id, base };
            if variants.insert(name.to_string(), variant).is_some() {
                tracing::warn!("Variant name '{}' is defined more than once", name);
            }
            next_id += 1;
        }
    }

    variants
}
