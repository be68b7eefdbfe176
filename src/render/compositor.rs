//! Compositor: runs a card's style over its data and keeps the card's
//! image cache coherent.
//!
//! ## Style fallback
//!
//! - Unset style: the card is bound to the registry default before rendering.
//! - Unresolved style: rendered with the registry default; the card keeps
//!   its unresolved marker so the persisted name survives a save.

use std::sync::Arc;

use super::Bitmap;
use crate::cards::{Card, Cardpack, Category};
use crate::core::RenderConfig;
use crate::styles::{CardFace, CardStyle, ClassicCardStyle, StyleRef, StyleRegistry};

/// Renders cards with the styles of a registry.
#[derive(Clone, Debug)]
pub struct Compositor<'r> {
    registry: &'r StyleRegistry,
    config: RenderConfig,
}

impl<'r> Compositor<'r> {
    #[must_use]
    pub fn new(registry: &'r StyleRegistry, config: RenderConfig) -> Self {
        Self { registry, config }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &'r StyleRegistry {
        self.registry
    }

    fn default_style(&self) -> Arc<dyn CardStyle> {
        self.registry
            .default_style()
            .unwrap_or_else(|| Arc::new(ClassicCardStyle))
    }

    /// Give a card with no style the registry default.
    pub fn bind_style(&self, card: &mut Card) {
        if matches!(card.style(), StyleRef::Unset) {
            card.set_style(StyleRef::Registered(self.default_style()));
        }
    }

    /// The style that draws this card.
    #[must_use]
    pub fn style_for(&self, card: &Card) -> Arc<dyn CardStyle> {
        match card.style().style() {
            Some(style) => Arc::clone(style),
            None => self.default_style(),
        }
    }

    /// The card's front image, rendering it if the cache is empty.
    pub fn render<'c>(&self, card: &'c mut Card) -> &'c Bitmap {
        self.bind_style(card);
        if let Some(image) = card.take_image() {
            return card.cache_image(image);
        }

        let style = self.style_for(card);
        let face = CardFace::new(card.title(), card.description(), card.category());
        let image = style.render_front(&face, &self.config);
        tracing::debug!(title = card.title(), style = style.name(), "rendered card front");
        card.cache_image(image)
    }

    /// Drop the cache and render again.
    pub fn rerender<'c>(&self, card: &'c mut Card) -> &'c Bitmap {
        card.invalidate_image();
        self.render(card)
    }

    /// Render the generic back for a category with the given style.
    #[must_use]
    pub fn render_back(&self, category: Category, style: &dyn CardStyle) -> Bitmap {
        tracing::debug!(%category, style = style.name(), "rendered card back");
        style.render_back(category, &self.config)
    }

    /// The style used for a pack's back textures: the first card's, or the
    /// registry default for an empty pack.
    #[must_use]
    pub fn back_style(&self, pack: &Cardpack) -> Arc<dyn CardStyle> {
        match pack.first() {
            Some(card) => self.style_for(card),
            None => self.default_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::MinimalCardStyle;

    fn small() -> RenderConfig {
        RenderConfig::default().with_size(120, 160).with_margin(4)
    }

    #[test]
    fn test_render_binds_default_style() {
        let registry = StyleRegistry::builtin();
        let compositor = Compositor::new(&registry, small());
        let mut card = Card::new();

        compositor.render(&mut card);

        assert_eq!(card.style().name(), Some("ClassicCardStyle"));
        assert!(card.rendered_image().is_some());
    }

    #[test]
    fn test_render_is_memoized() {
        let registry = StyleRegistry::builtin();
        let compositor = Compositor::new(&registry, small());
        let mut card = Card::titled("Orc");

        let first = compositor.render(&mut card).clone();
        card.set_property("Level", "3");
        let second = compositor.render(&mut card).clone();

        assert_eq!(first, second);
    }

    #[test]
    fn test_title_change_rerenders() {
        let registry = StyleRegistry::builtin();
        let compositor = Compositor::new(&registry, small());
        let mut card = Card::titled("Potion");

        let before = compositor.render(&mut card).clone();
        card.set_title("Sword");
        let after = compositor.render(&mut card).clone();

        assert_ne!(before, after);
    }

    #[test]
    fn test_unresolved_style_renders_with_default_and_keeps_marker() {
        let registry = StyleRegistry::builtin();
        let compositor = Compositor::new(&registry, small());
        let mut card = Card::titled("Ghost").with_style(StyleRef::Unresolved("GoneStyle".into()));

        let image = compositor.render(&mut card).clone();

        assert_eq!(card.style(), &StyleRef::Unresolved("GoneStyle".into()));
        let expected = ClassicCardStyle.render_front(
            &CardFace::new("Ghost", card.description(), card.category()),
            compositor.config(),
        );
        assert_eq!(image, expected);
    }

    #[test]
    fn test_back_style_uses_first_card() {
        let registry = StyleRegistry::builtin();
        let compositor = Compositor::new(&registry, small());
        let pack: Cardpack = vec![
            Card::titled("a").with_style(StyleRef::Registered(Arc::new(MinimalCardStyle))),
            Card::titled("b").with_style(StyleRef::Registered(Arc::new(ClassicCardStyle))),
        ]
        .into();

        assert_eq!(compositor.back_style(&pack).name(), "MinimalCardStyle");
        assert_eq!(compositor.back_style(&Cardpack::new()).name(), "ClassicCardStyle");
    }

    #[test]
    fn test_empty_registry_falls_back() {
        let registry = StyleRegistry::new();
        let compositor = Compositor::new(&registry, small());
        let mut card = Card::new();
        let image = compositor.render(&mut card);
        assert_eq!(image.width(), 120);
    }
}
