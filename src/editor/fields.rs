//! Editable field values for one or more selected cards.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Category};

/// Shown in a text field when the selected cards disagree on its value.
/// Committing a field that still holds it leaves each card's value alone.
pub const MULTI_VALUE_INDICATOR: &str = "<Different values>";

/// Field values presented to the user for the current selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditFields {
    pub title: String,
    pub description: String,

    /// Pack-relative script path.
    pub script: String,

    /// `None` when the selected cards have different categories.
    pub category: Option<Category>,

    /// `None` when the selected cards have different styles, or no style yet.
    pub style: Option<String>,

    /// Property name and raw text, in first-seen order across the selection.
    pub properties: Vec<(String, String)>,
}

impl EditFields {
    /// Collect fields from the selected cards.
    ///
    /// A field shows the shared value when every card agrees, otherwise
    /// [`MULTI_VALUE_INDICATOR`]. A property missing from some cards shows
    /// the indicator as well.
    #[must_use]
    pub fn from_cards(cards: &[&Card]) -> Self {
        let Some((first, rest)) = cards.split_first() else {
            return Self::default();
        };

        let mut fields = Self {
            title: first.title().to_string(),
            description: first.description().to_string(),
            script: first.script_path().to_string(),
            category: Some(first.category()),
            style: first.style().name().map(str::to_string),
            properties: first
                .properties
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_raw_text()))
                .collect(),
        };

        let mut index: FxHashMap<String, usize> = fields
            .properties
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (name.clone(), i))
            .collect();

        for card in rest {
            merge_text(&mut fields.title, card.title());
            merge_text(&mut fields.description, card.description());
            merge_text(&mut fields.script, card.script_path());
            if fields.category != Some(card.category()) {
                fields.category = None;
            }
            if fields.style.as_deref() != card.style().name() {
                fields.style = None;
            }

            for (name, value) in card.properties.iter() {
                let raw = value.to_raw_text();
                match index.get(name) {
                    Some(&i) => merge_text(&mut fields.properties[i].1, &raw),
                    None => {
                        index.insert(name.to_string(), fields.properties.len());
                        fields.properties.push((name.to_string(), MULTI_VALUE_INDICATOR.to_string()));
                    }
                }
            }
        }

        // Names some selected card does not carry.
        for (name, raw) in &mut fields.properties {
            if cards.iter().any(|c| !c.properties.contains(name)) {
                *raw = MULTI_VALUE_INDICATOR.to_string();
            }
        }

        fields
    }

    /// The raw text shown for a property, if the selection has it.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, raw)| raw.as_str())
    }

    /// Replace the raw text of a property field.
    pub fn set_property(&mut self, name: &str, raw: impl Into<String>) {
        let raw = raw.into();
        match self.properties.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = raw,
            None => self.properties.push((name.to_string(), raw)),
        }
    }
}

/// True when a field holds a real value to commit.
#[must_use]
pub fn is_committable(text: &str) -> bool {
    text != MULTI_VALUE_INDICATOR
}

fn merge_text(shown: &mut String, other: &str) {
    if shown != other {
        *shown = MULTI_VALUE_INDICATOR.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_card_fields() {
        let card = Card::titled("Orc")
            .with_description("Grr")
            .with_category(Category::Treasure)
            .with_script("scripts/orc.lua")
            .with_property("Level", 4i64)
            .with_property("Undead", false);

        let fields = EditFields::from_cards(&[&card]);

        assert_eq!(fields.title, "Orc");
        assert_eq!(fields.description, "Grr");
        assert_eq!(fields.script, "scripts/orc.lua");
        assert_eq!(fields.category, Some(Category::Treasure));
        assert_eq!(fields.style, None);
        assert_eq!(fields.property("Level"), Some("4"));
        assert_eq!(fields.property("Undead"), Some("false"));
    }

    #[test]
    fn test_multi_card_fields_merge() {
        let a = Card::titled("Orc").with_description("Same").with_property("Level", 4i64);
        let b = Card::titled("Troll")
            .with_description("Same")
            .with_category(Category::Treasure)
            .with_property("Level", 4i64)
            .with_property("Regen", true);

        let fields = EditFields::from_cards(&[&a, &b]);

        assert_eq!(fields.title, MULTI_VALUE_INDICATOR);
        assert_eq!(fields.description, "Same");
        assert_eq!(fields.script, "");
        assert_eq!(fields.category, None);
        assert_eq!(fields.property("Level"), Some("4"));
        assert_eq!(fields.property("Regen"), Some(MULTI_VALUE_INDICATOR));
        assert_eq!(fields.properties.len(), 2);
    }

    #[test]
    fn test_property_missing_from_later_card() {
        let a = Card::titled("a").with_property("Level", 1i64);
        let b = Card::titled("a");
        let fields = EditFields::from_cards(&[&a, &b]);
        assert_eq!(fields.property("Level"), Some(MULTI_VALUE_INDICATOR));
    }

    #[test]
    fn test_set_property_field() {
        let mut fields = EditFields::default();
        fields.set_property("Level", "3");
        fields.set_property("Level", "5");
        assert_eq!(fields.properties, vec![("Level".to_string(), "5".to_string())]);
        assert!(is_committable("5"));
        assert!(!is_committable(MULTI_VALUE_INDICATOR));
    }
}
