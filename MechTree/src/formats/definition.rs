//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Skill node definition reader (`MechSkillTreeNodes.xml`)
//!
//! ```xml
//! <Node names="WeaponRange1,WeaponRange2">
//!   <Effect name="Range" value="0.0">
//!     <Faction name="InnerSphere" value="0.0">
//!       <WeightClass name="Light" value="1.5"/>
//!     </Faction>
//!   </Effect>
//! </Node>
//! ```

use super::{read_source, required_attribute};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Element names below `<Node>`, outermost first
pub const LEVELS: [&str; 4] = ["Effect", "Faction", "WeightClass", "Tonnage"];

/// Parsed definition document, nodes in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefinitionDocument {
    pub nodes: Vec<BaseNodeDef>,
}

/// A `<Node>` element before variant expansion
#[derive(Debug, Clone, PartialEq)]
pub struct BaseNodeDef {
    /// Raw comma-separated `names` attribute
    pub names: String,
    /// `<Effect>` children in document order
    pub effects: Vec<Dimension>,
}

impl BaseNodeDef {
    /// Variant names in the order they are listed
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.names.split(',')
    }
}

/// One level of an effect's value table.
///
/// The same shape is used for `<Effect>`, `<Faction>`, `<WeightClass>` and
/// `<Tonnage>`: a name, the raw `value` attribute, and the next level down.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
    pub children: Vec<Dimension>,
}

impl Dimension {
    /// Parse the raw value as a number
    pub fn number(&self) -> Result<f64> {
        self.value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidNumber {
                name: self.name.clone(),
                value: self.value.clone(),
            })
    }
}

/// Read a definition document from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_definition<P: AsRef<Path>>(path: P) -> Result<DefinitionDocument> {
    let content = read_source(path.as_ref())?;
    parse_definition(&content)
}

/// Parse a definition document from an XML string
///
/// # Errors
/// Returns an error if the XML is malformed or a required attribute is missing.
pub fn parse_definition(content: &str) -> Result<DefinitionDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut builder = Builder::default();
    let mut buf = Vec::new();
    // Depth of an unexpected subtree inside a <Node> being skipped
    let mut skipping = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if skipping > 0 {
                    skipping += 1;
                } else if builder.open(&e)? == Opened::Skipped {
                    skipping = 1;
                }
            }
            Ok(Event::Empty(e)) => {
                if skipping == 0 && builder.open(&e)? == Opened::Accepted {
                    builder.close(e.name().as_ref());
                }
            }
            Ok(Event::End(e)) => {
                if skipping > 0 {
                    skipping -= 1;
                } else {
                    builder.close(e.name().as_ref());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!("Parsed {} skill node definitions", builder.doc.nodes.len());
    Ok(builder.doc)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opened {
    Accepted,
    /// Outside any `<Node>`: wrappers are looked through
    Transparent,
    Skipped,
}

#[derive(Default)]
struct Builder {
    doc: DefinitionDocument,
    current: Option<BaseNodeDef>,
    stack: Vec<Dimension>,
}

impl Builder {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<Opened> {
        let qname = e.name();
        let name = qname.as_ref();

        if self.current.is_none() {
            if name == b"Node" {
                self.current = Some(BaseNodeDef {
                    names: required_attribute(e, "Node", "names")?,
                    effects: Vec::new(),
                });
                return Ok(Opened::Accepted);
            }
            return Ok(Opened::Transparent);
        }

        let depth = self.stack.len();
        match LEVELS.get(depth) {
            Some(&element) if element.as_bytes() == name => {
                self.stack.push(Dimension {
                    name: required_attribute(e, element, "name")?,
                    value: required_attribute(e, element, "value")?,
                    children: Vec::new(),
                });
                Ok(Opened::Accepted)
            }
            _ => {
                tracing::debug!(
                    "Skipping <{}> at depth {}",
                    String::from_utf8_lossy(name),
                    depth
                );
                Ok(Opened::Skipped)
            }
        }
    }

    fn close(&mut self, name: &[u8]) {
        if let Some(done) = self.stack.pop() {
            if let Some(parent) = self.stack.last_mut() {
                parent.children.push(done);
            } else if let Some(node) = self.current.as_mut() {
                node.effects.push(done);
            }
        } else if name == b"Node"
            && let Some(node) = self.current.take()
        {
            self.doc.nodes.push(node);
        }
    }
}
