//! `cards.json` record format.
//!
//! ```json
//! [
//!   {
//!     "name": "Orc",
//!     "description": "Bad stuff: lose a level.",
//!     "category": "dungeon",
//!     "style": "ClassicCardStyle",
//!     "script": "scripts/monsters/orc.lua",
//!     "front_texture": "textures/cache/1_orc.png",
//!     "properties": { "Level": 4, "Undead": false }
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Category, PropertyStore};
use crate::styles::StyleRegistry;

/// One card as stored in `cards.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: Category,

    /// Registered style name. May name a style this build does not know.
    #[serde(default)]
    pub style: String,

    /// Pack-relative script path, empty for none.
    #[serde(default)]
    pub script: String,

    /// Pack-relative path of the rendered front.
    #[serde(default)]
    pub front_texture: String,

    #[serde(default)]
    pub properties: PropertyStore,
}

impl CardRecord {
    /// Snapshot a card with the texture path it was saved under.
    #[must_use]
    pub fn from_card(card: &Card, front_texture: impl Into<String>) -> Self {
        Self {
            name: card.title().to_string(),
            description: card.description().to_string(),
            category: card.category(),
            style: card.style().name().unwrap_or_default().to_string(),
            script: card.script_path().to_string(),
            front_texture: front_texture.into(),
            properties: card.properties.clone(),
        }
    }

    /// Build a card, resolving the style name through the registry.
    #[must_use]
    pub fn into_card(self, registry: &StyleRegistry) -> Card {
        let mut card = Card::titled(self.name)
            .with_description(self.description)
            .with_category(self.category)
            .with_style(registry.style_ref(&self.style))
            .with_script(self.script);
        card.properties = self.properties;
        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PropertyValue;
    use crate::styles::StyleRef;

    #[test]
    fn test_minimal_record_defaults() {
        let record: CardRecord = serde_json::from_str(r#"{"name": "Orc"}"#).unwrap();
        assert_eq!(record.category, Category::Dungeon);
        assert!(record.script.is_empty());
        assert!(record.properties.is_empty());
    }

    #[test]
    fn test_into_card_resolves_style() {
        let registry = StyleRegistry::builtin();
        let record: CardRecord = serde_json::from_str(
            r#"{"name": "Sword", "description": "+2", "category": "treasure",
                "style": "MinimalCardStyle", "script": "scripts/sword.lua",
                "front_texture": "textures/cache/1_sword.png",
                "properties": {"Bonus": 2, "TwoHanded": false}}"#,
        )
        .unwrap();

        let card = record.into_card(&registry);

        assert_eq!(card.title(), "Sword");
        assert_eq!(card.category(), Category::Treasure);
        assert_eq!(card.style().name(), Some("MinimalCardStyle"));
        assert!(!card.style().is_unresolved());
        assert_eq!(card.script_path(), "scripts/sword.lua");
        assert_eq!(card.properties.get("Bonus"), Some(&PropertyValue::Integer(2)));
    }

    #[test]
    fn test_unknown_style_is_marked() {
        let registry = StyleRegistry::builtin();
        let record: CardRecord = serde_json::from_str(r#"{"name": "X", "style": "OldStyle"}"#).unwrap();
        let card = record.into_card(&registry);
        assert_eq!(card.style(), &StyleRef::Unresolved("OldStyle".into()));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = serde_json::from_str::<CardRecord>(r#"{"name": "X", "category": "loot"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_card_field_names() {
        let card = Card::titled("Orc").with_property("Level", 4i64);
        let record = CardRecord::from_card(&card, "textures/cache/1_orc.png");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Orc");
        assert_eq!(json["category"], "dungeon");
        assert_eq!(json["style"], "");
        assert_eq!(json["front_texture"], "textures/cache/1_orc.png");
        assert_eq!(json["properties"]["Level"], 4);
    }
}
