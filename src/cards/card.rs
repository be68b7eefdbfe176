//! Card records: editable text, category, style, script and properties,
//! plus the memoized front image.
//!
//! The rendered image depends on title, description, category and style
//! only. Setting any of those through the setters drops the cached image;
//! script and property changes leave it in place.

use serde::{Deserialize, Serialize};

use super::properties::{PropertyStore, PropertyValue};
use crate::render::Bitmap;
use crate::styles::StyleRef;

/// Title given to freshly added cards.
pub const NEW_CARD_TITLE: &str = "New card";

/// Description given to freshly added cards.
pub const NEW_CARD_DESCRIPTION: &str = "This is a description";

/// Card category. Selects the back art and the default front template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Door cards: monsters, curses, classes.
    #[default]
    Dungeon,
    /// Loot: items, one-shots, level-ups.
    Treasure,
}

impl Category {
    /// Every category, in back-texture order.
    pub const ALL: [Category; 2] = [Category::Dungeon, Category::Treasure];

    /// Name used in `cards.json` and texture file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Dungeon => "dungeon",
            Category::Treasure => "treasure",
        }
    }

    /// Parse a persisted name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A card in a cardpack.
#[derive(Clone, Debug)]
pub struct Card {
    title: String,
    description: String,
    category: Category,
    style: StyleRef,
    script_path: String,

    /// Script-declared properties. Editing these never touches the image.
    pub properties: PropertyStore,

    rendered: Option<Bitmap>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Card {
    /// Cards compare by data; the cached image is derived state.
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.category == other.category
            && self.style == other.style
            && self.script_path == other.script_path
            && self.properties == other.properties
    }
}

impl Eq for Card {}

impl Card {
    /// A new card with placeholder text, dungeon category and no style.
    #[must_use]
    pub fn new() -> Self {
        Self::titled(NEW_CARD_TITLE)
    }

    /// A new card with the given title and placeholder description.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: NEW_CARD_DESCRIPTION.to_string(),
            category: Category::default(),
            style: StyleRef::Unset,
            script_path: String::new(),
            properties: PropertyStore::new(),
            rendered: None,
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Set the category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.set_category(category);
        self
    }

    /// Set the style (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: StyleRef) -> Self {
        self.set_style(style);
        self
    }

    /// Set the script path (builder pattern).
    #[must_use]
    pub fn with_script(mut self, script_path: impl Into<String>) -> Self {
        self.set_script_path(script_path);
        self
    }

    /// Add a property (builder pattern).
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name, value);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn style(&self) -> &StyleRef {
        &self.style
    }

    /// Pack-relative script path, empty when the card has no script.
    #[must_use]
    pub fn script_path(&self) -> &str {
        &self.script_path
    }

    #[must_use]
    pub fn has_script(&self) -> bool {
        !self.script_path.is_empty()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if title != self.title {
            self.title = title;
            self.invalidate_image();
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        if description != self.description {
            self.description = description;
            self.invalidate_image();
        }
    }

    pub fn set_category(&mut self, category: Category) {
        if category != self.category {
            self.category = category;
            self.invalidate_image();
        }
    }

    pub fn set_style(&mut self, style: StyleRef) {
        if style != self.style {
            self.style = style;
            self.invalidate_image();
        }
    }

    /// Change the script. Properties are reconciled by the scanner, not here.
    pub fn set_script_path(&mut self, script_path: impl Into<String>) {
        self.script_path = script_path.into();
    }

    /// Store raw editor text as a typed property value.
    pub fn set_property(&mut self, name: &str, raw: &str) {
        self.properties.set_raw(name, raw);
    }

    /// The memoized front image, if rendered since the last invalidation.
    #[must_use]
    pub fn rendered_image(&self) -> Option<&Bitmap> {
        self.rendered.as_ref()
    }

    /// Drop the memoized front image.
    pub fn invalidate_image(&mut self) {
        self.rendered = None;
    }

    pub(crate) fn take_image(&mut self) -> Option<Bitmap> {
        self.rendered.take()
    }

    pub(crate) fn cache_image(&mut self, image: Bitmap) -> &Bitmap {
        self.rendered.insert(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Rgba;

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new();
        assert_eq!(card.title(), "New card");
        assert_eq!(card.description(), "This is a description");
        assert_eq!(card.category(), Category::Dungeon);
        assert_eq!(card.style(), &StyleRef::Unset);
        assert!(!card.has_script());
        assert!(card.properties.is_empty());
        assert!(card.rendered_image().is_none());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Dungeon.as_str(), "dungeon");
        assert_eq!(Category::parse("Treasure"), Some(Category::Treasure));
        assert_eq!(Category::parse("loot"), None);
        assert_eq!(serde_json::to_string(&Category::Treasure).unwrap(), "\"treasure\"");
    }

    #[test]
    fn test_text_changes_invalidate() {
        let mut card = Card::new();
        card.cache_image(Bitmap::new(1, 1, Rgba::WHITE));

        card.set_title("New card");
        assert!(card.rendered_image().is_some(), "same title keeps the cache");

        card.set_title("Orc");
        assert!(card.rendered_image().is_none());

        card.cache_image(Bitmap::new(1, 1, Rgba::WHITE));
        card.set_category(Category::Treasure);
        assert!(card.rendered_image().is_none());

        card.cache_image(Bitmap::new(1, 1, Rgba::WHITE));
        card.set_description("Lose a level");
        assert!(card.rendered_image().is_none());
    }

    #[test]
    fn test_script_and_properties_keep_cache() {
        let mut card = Card::new();
        card.cache_image(Bitmap::new(1, 1, Rgba::WHITE));

        card.set_script_path("scripts/orc.lua");
        card.set_property("Level", "4");

        assert!(card.rendered_image().is_some());
        assert_eq!(card.properties.get("Level"), Some(&PropertyValue::Integer(4)));
    }

    #[test]
    fn test_equality_ignores_cache() {
        let mut a = Card::titled("Sword").with_property("Bonus", 2i64);
        let b = Card::titled("Sword").with_property("Bonus", 2i64);
        a.cache_image(Bitmap::new(1, 1, Rgba::BLACK));
        assert_eq!(a, b);
    }
}
