//! Variant grid positions (`ExtractedNodeLocations.json`)

use crate::formats::display::DisplayDocument;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Variant name -> position
pub type NodeLocations = IndexMap<String, Location>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub col: i32,
    pub row: i32,
}

/// Map variant names to their hex grid position
pub fn map_node_locations(doc: &DisplayDocument) -> NodeLocations {
    doc.nodes
        .iter()
        .map(|node| {
            let location = Location {
                col: node.column,
                row: node.row,
            };
            (node.name.clone(), location)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::display::parse_display;

    #[test]
    fn test_locations_by_name() {
        let doc = parse_display(
            r#"<Root><Node name="Foo" column="4" row="1"/><Node name="Bar" column="5" row="2"/></Root>"#,
        )
        .unwrap();

        let locations = map_node_locations(&doc);
        assert_eq!(locations["Bar"], Location { col: 5, row: 2 });
        assert_eq!(
            serde_json::to_string(&locations["Foo"]).unwrap(),
            r#"{"col":4,"row":1}"#
        );
    }
}
