//! Effect discriminator flags (`ExtractedNodeDiscriminators.json`)

use super::dimension::resolve_effects;
use crate::error::Result;
use crate::formats::definition::DefinitionDocument;
use indexmap::IndexMap;
use serde::Serialize;

/// Effect name -> flags
pub type NodeDiscriminators = IndexMap<String, Discriminators>;

/// Which dimensions an effect's value varies along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Discriminators {
    pub faction: bool,
    pub class: bool,
    pub tonnage: bool,
}

impl From<[bool; 3]> for Discriminators {
    fn from([faction, class, tonnage]: [bool; 3]) -> Self {
        Self {
            faction,
            class,
            tonnage,
        }
    }
}

/// Map effect names to discriminator flags.
///
/// Derived from the same descent as [`super::map_effect_values`], so a flag is
/// set exactly when the value table nests at that level.
///
/// # Errors
/// Returns an error if a value that is used is not a number.
pub fn map_node_discriminators(doc: &DefinitionDocument) -> Result<NodeDiscriminators> {
    Ok(resolve_effects(doc)?
        .into_iter()
        .map(|(name, resolved)| (name, Discriminators::from(resolved.levels())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::definition::parse_definition;

    #[test]
    fn test_flags_per_level() {
        let doc = parse_definition(
            r#"<Root><Node names="A">
                <Effect name="Plain" value="-0.0"/>
                <Effect name="Faction" value="0.0"><Faction name="Clan" value="1.0"/></Effect>
                <Effect name="Class" value="0.0">
                    <Faction name="Clan" value="1.0"/>
                    <Faction name="InnerSphere" value="0.0"><WeightClass name="Light" value="2.0"/></Faction>
                </Effect>
                <Effect name="Tonnage" value="0.0"><Faction name="Clan" value="0.0">
                    <WeightClass name="Heavy" value="0.0"><Tonnage name="75" value="4.0"/></WeightClass>
                </Faction></Effect>
            </Node></Root>"#,
        )
        .unwrap();

        let flags = map_node_discriminators(&doc).unwrap();
        assert_eq!(flags["Plain"], Discriminators::default());
        assert_eq!(flags["Faction"], Discriminators::from([true, false, false]));
        assert_eq!(flags["Class"], Discriminators::from([true, true, false]));
        assert_eq!(flags["Tonnage"], Discriminators::from([true, true, true]));

        let json = serde_json::to_string(&flags["Class"]).unwrap();
        assert_eq!(json, r#"{"faction":true,"class":true,"tonnage":false}"#);
    }
}
