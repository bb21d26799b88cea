//! Base node effect lists (`ExtractedNodeEffects.json`)

use crate::formats::definition::DefinitionDocument;
use indexmap::IndexMap;

/// Base node id -> effect names, in document order
pub type NodeEffects = IndexMap<usize, Vec<String>>;

/// Map base node ids (document position) to their effect names
pub fn map_node_effects(doc: &DefinitionDocument) -> NodeEffects {
    doc.nodes
        .iter()
        .enumerate()
        .map(|(base, node)| {
            let effects = node.effects.iter().map(|e| e.name.clone()).collect();
            (base, effects)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::definition::parse_definition;

    #[test]
    fn test_effects_keep_order_and_duplicates() {
        let doc = parse_definition(
            r#"<Root>
                <Node names="A"><Effect name="X" value="1"/><Effect name="Y" value="1"/><Effect name="X" value="2"/></Node>
                <Node names="B"/>
            </Root>"#,
        )
        .unwrap();

        let effects = map_node_effects(&doc);
        assert_eq!(effects[&0], vec!["X", "Y", "X"]);
        assert!(effects[&1].is_empty());

        // Integer keys become JSON object keys
        assert_eq!(
            serde_json::to_string(&effects).unwrap(),
            r#"{"0":["X","Y","X"],"1":[]}"#
        );
    }
}
