//! Localized node names and descriptions (`ExtractedNodeLocalizations.json`)
//!
//! Locale labels look like `EMechTreeNode_WeaponRange1` (name) and
//! `EMechTreeNode_WeaponRange1_desc` (description); a few labels are
//! lower-cased (`emechtreenode_torsoyaw`), so keys are upper-cased.

use crate::error::{Error, Result};
use crate::formats::spreadsheet::{CellRef, Workbook};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label prefix for skill node strings
pub const NODE_PREFIX: &str = "EMechTreeNode_";

/// Lower-cased spelling used by some labels
pub const NODE_PREFIX_LOWER: &str = "emechtreenode_";

/// Label suffix marking a description string
pub const DESC_SUFFIX: &str = "_desc";

/// Upper-cased variant name -> strings
pub type NodeLocalizations = IndexMap<String, Localization>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Collect localized names, then attach descriptions.
///
/// # Errors
/// Returns an error if a label row has no translation cell, or if a
/// description has no name entry to attach to.
pub fn map_node_localizations(workbook: &Workbook) -> Result<NodeLocalizations> {
    let mut localizations = NodeLocalizations::new();

    for prefix in [NODE_PREFIX, NODE_PREFIX_LOWER] {
        for (at, label) in workbook.text_cells() {
            let Some(key) = label.strip_prefix(prefix) else {
                continue;
            };
            if is_description(key) {
                continue;
            }
            let name = translation(workbook, at, label)?;
            localizations.insert(key.to_uppercase(), Localization { name, desc: None });
        }
    }

    for (at, label) in workbook.text_cells() {
        let Some(rest) = label.strip_prefix(NODE_PREFIX) else {
            continue;
        };
        if !rest.contains(DESC_SUFFIX) {
            continue;
        }
        let key = strip_suffix_len(rest).to_uppercase();
        let desc = translation(workbook, at, label)?;
        match localizations.get_mut(&key) {
            Some(entry) => entry.desc = Some(desc),
            None => return Err(Error::OrphanDescription { key }),
        }
    }

    tracing::debug!("Extracted {} node localizations", localizations.len());
    Ok(localizations)
}

fn is_description(key: &str) -> bool {
    key.len() >= DESC_SUFFIX.len()
        && key.is_char_boundary(key.len() - DESC_SUFFIX.len())
        && key[key.len() - DESC_SUFFIX.len()..].eq_ignore_ascii_case(DESC_SUFFIX)
}

/// Drop as many trailing characters as the description suffix has
fn strip_suffix_len(rest: &str) -> &str {
    let cut = rest
        .char_indices()
        .rev()
        .nth(DESC_SUFFIX.len() - 1)
        .map_or(0, |(i, _)| i);
    &rest[..cut]
}

fn translation(workbook: &Workbook, at: CellRef, label: &str) -> Result<String> {
    workbook
        .translation_for(at)
        .map(str::to_string)
        .ok_or_else(|| Error::MissingTranslationCell {
            label: label.to_string(),
            row: at.row,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::spreadsheet::parse_workbook;

    fn workbook(rows: &[(&str, &str)]) -> Workbook {
        let body: String = rows
            .iter()
            .map(|(label, value)| {
                format!(
                    "<Row><Cell><Data ss:Type=\"String\">{label}</Data></Cell>\
                     <Cell><Data ss:Type=\"String\">{value}</Data></Cell></Row>"
                )
            })
            .collect();
        let xml = format!(
            "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\" \
             xmlns:ss=\"urn:schemas-microsoft-com:office:spreadsheet\">\
             <Worksheet><Table>{body}</Table></Worksheet></Workbook>"
        );
        parse_workbook(&xml).unwrap()
    }

    #[test]
    fn test_name_and_description() {
        let wb = workbook(&[
            ("EMechTreeNode_FOO", "Foo Name"),
            ("EMechTreeNode_FOO_desc", "Foo does things"),
        ]);

        let loc = map_node_localizations(&wb).unwrap();
        assert_eq!(loc.len(), 1);
        assert_eq!(
            loc["FOO"],
            Localization {
                name: "Foo Name".to_string(),
                desc: Some("Foo does things".to_string()),
            }
        );
    }

    #[test]
    fn test_lower_case_labels_are_upper_cased() {
        let wb = workbook(&[
            ("emechtreenode_torsoyaw", "Torso Yaw"),
            ("EMechTreeNode_Armor1", "Armor 1"),
            ("EMechTreeNode_TorsoYaw_desc", "Turn faster"),
        ]);

        let loc = map_node_localizations(&wb).unwrap();
        // Canonical-prefix labels first, then the lower-cased ones
        let keys: Vec<_> = loc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ARMOR1", "TORSOYAW"]);
        assert_eq!(loc["TORSOYAW"].desc.as_deref(), Some("Turn faster"));
        assert_eq!(loc["ARMOR1"].desc, None);
    }

    #[test]
    fn test_orphan_description_fails() {
        let wb = workbook(&[("EMechTreeNode_GHOST_desc", "Nobody home")]);
        let err = map_node_localizations(&wb).unwrap_err();
        assert!(matches!(err, Error::OrphanDescription { key } if key == "GHOST"));
    }

    #[test]
    fn test_unrelated_labels_ignored() {
        let wb = workbook(&[("EWeapon_PPC", "PPC"), ("Node_FOO", "nope")]);
        assert!(map_node_localizations(&wb).unwrap().is_empty());
    }

    #[test]
    fn test_missing_translation_cell() {
        let xml = "<Workbook xmlns=\"urn:schemas-microsoft-com:office:spreadsheet\"><Table>\
                   <Row><Cell><Data>EMechTreeNode_FOO</Data></Cell></Row></Table></Workbook>";
        let wb = parse_workbook(xml).unwrap();
        assert!(matches!(
            map_node_localizations(&wb),
            Err(Error::MissingTranslationCell { row: 0, .. })
        ));
    }

    #[test]
    fn test_strip_suffix_len() {
        assert_eq!(strip_suffix_len("FOO_desc"), "FOO");
        assert_eq!(strip_suffix_len("Ünïcode_desc"), "Ünïcode");
        assert!(is_description("FOO_DESC"));
        assert!(!is_description("FOO"));
    }
}
