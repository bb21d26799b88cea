//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Skill node layout reader (`MechSkillTreeNodesDisplay.xml`)

use super::{read_source, required_attribute};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// A `<Node>` position on the hex grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayNode {
    /// Variant name
    pub name: String,
    pub column: i32,
    pub row: i32,
}

/// Parsed display document, nodes in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayDocument {
    pub nodes: Vec<DisplayNode>,
}

/// Read a display document from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_display<P: AsRef<Path>>(path: P) -> Result<DisplayDocument> {
    let content = read_source(path.as_ref())?;
    parse_display(&content)
}

/// Parse a display document from an XML string
///
/// # Errors
/// Returns an error if the XML is malformed or a `<Node>` has a missing or
/// non-integer attribute.
pub fn parse_display(content: &str) -> Result<DisplayDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut doc = DisplayDocument::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                if e.name().as_ref() == b"Node" {
                    doc.nodes.push(display_node(&e)?);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!("Parsed {} display nodes", doc.nodes.len());
    Ok(doc)
}

fn display_node(e: &BytesStart<'_>) -> Result<DisplayNode> {
    let name = required_attribute(e, "Node", "name")?;
    let column = integer(e, &name, "column")?;
    let row = integer(e, &name, "row")?;
    Ok(DisplayNode { name, column, row })
}

fn integer(e: &BytesStart<'_>, name: &str, attribute: &'static str) -> Result<i32> {
    let value = required_attribute(e, "Node", attribute)?;
    value.trim().parse().map_err(|_| Error::InvalidInteger {
        element: "Node",
        name: name.to_string(),
        attribute,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_nodes() {
        let xml = r#"<MechSkillTreeNodesDisplay>
            <Node name="Foo" column="3" row="0"/>
            <Node name="Bar" column="-2" row="11"></Node>
        </MechSkillTreeNodesDisplay>"#;

        let doc = parse_display(xml).unwrap();
        assert_eq!(
            doc.nodes,
            vec![
                DisplayNode { name: "Foo".to_string(), column: 3, row: 0 },
                DisplayNode { name: "Bar".to_string(), column: -2, row: 11 },
            ]
        );
    }

    #[test]
    fn test_non_integer_column() {
        let err = parse_display(r#"<Node name="Foo" column="1.5" row="0"/>"#).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInteger { attribute: "column", .. }
        ));
    }
}
