//! Style registry for name lookup.
//!
//! The `StyleRegistry` holds every card style available to the editor, in
//! registration order. Cards persist a style by its stable name and get it
//! back through `resolve`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{CardStyle, ClassicCardStyle, MinimalCardStyle, ParchmentCardStyle, StyleRef};

/// Constructor for a registered style.
pub type StyleConstructor = fn() -> Arc<dyn CardStyle>;

/// Every style shipped with the editor. The first entry is the default.
pub const BUILTIN_STYLES: &[StyleConstructor] = &[classic, parchment, minimal];

fn classic() -> Arc<dyn CardStyle> {
    Arc::new(ClassicCardStyle)
}

fn parchment() -> Arc<dyn CardStyle> {
    Arc::new(ParchmentCardStyle)
}

fn minimal() -> Arc<dyn CardStyle> {
    Arc::new(MinimalCardStyle)
}

/// Registry of card styles.
///
/// ## Example
///
/// ```
/// use cardpack::styles::{StyleRegistry, StyleRef};
///
/// let registry = StyleRegistry::builtin();
///
/// let style = registry.resolve("ClassicCardStyle").unwrap();
/// assert_eq!(style.name(), "ClassicCardStyle");
///
/// assert!(matches!(registry.style_ref("NoSuchStyle"), StyleRef::Unresolved(_)));
/// ```
#[derive(Clone, Default)]
pub struct StyleRegistry {
    styles: Vec<Arc<dyn CardStyle>>,
    by_name: FxHashMap<&'static str, usize>,
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.styles.iter().map(|s| s.name())).finish()
    }
}

impl StyleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated from `BUILTIN_STYLES`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_constructors(BUILTIN_STYLES)
    }

    /// Registry populated from a fixed list of constructors, in order.
    #[must_use]
    pub fn from_constructors(constructors: &[StyleConstructor]) -> Self {
        let mut registry = Self::new();
        for ctor in constructors {
            registry.register(ctor());
        }
        registry
    }

    /// Register a style.
    ///
    /// Panics if a style with the same name already exists.
    pub fn register(&mut self, style: Arc<dyn CardStyle>) {
        let name = style.name();
        if self.by_name.contains_key(name) {
            panic!("Style {name:?} already registered");
        }
        self.by_name.insert(name, self.styles.len());
        self.styles.push(style);
    }

    /// Look a style up by its stable name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn CardStyle>> {
        self.by_name.get(name).map(|&i| Arc::clone(&self.styles[i]))
    }

    /// Turn a persisted name into a card style reference.
    ///
    /// Unknown names become `StyleRef::Unresolved`, keeping the name.
    #[must_use]
    pub fn style_ref(&self, name: &str) -> StyleRef {
        match self.resolve(name) {
            Some(style) => StyleRef::Registered(style),
            None => {
                tracing::warn!(style = name, "style not registered, card keeps an unresolved marker");
                StyleRef::Unresolved(name.to_string())
            }
        }
    }

    /// The first registered style.
    #[must_use]
    pub fn default_style(&self) -> Option<Arc<dyn CardStyle>> {
        self.styles.first().cloned()
    }

    /// Iterate over `(name, style)` in registration order.
    pub fn variants(&self) -> impl Iterator<Item = (&'static str, &Arc<dyn CardStyle>)> {
        self.styles.iter().map(|s| (s.name(), s))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.styles.iter().map(|s| s.name())
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of registered styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::core::RenderConfig;
    use crate::render::Bitmap;
    use crate::styles::CardFace;

    struct StampStyle;

    impl CardStyle for StampStyle {
        fn name(&self) -> &'static str {
            "StampStyle"
        }

        fn render_front(&self, _face: &CardFace<'_>, config: &RenderConfig) -> Bitmap {
            Bitmap::new(config.width, config.height, crate::render::Rgba::BLACK)
        }

        fn render_back(&self, _category: Category, config: &RenderConfig) -> Bitmap {
            Bitmap::new(config.width, config.height, crate::render::Rgba::WHITE)
        }
    }

    #[test]
    fn test_builtin_order() {
        let registry = StyleRegistry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec!["ClassicCardStyle", "ParchmentCardStyle", "MinimalCardStyle"]
        );
        assert_eq!(registry.default_style().unwrap().name(), "ClassicCardStyle");
    }

    #[test]
    fn test_resolve() {
        let registry = StyleRegistry::builtin();
        assert!(registry.resolve("MinimalCardStyle").is_some());
        assert!(registry.resolve("minimalcardstyle").is_none());
        assert!(registry.contains("ParchmentCardStyle"));
    }

    #[test]
    fn test_style_ref_unresolved() {
        let registry = StyleRegistry::builtin();
        assert_eq!(
            registry.style_ref("RetiredStyle"),
            StyleRef::Unresolved("RetiredStyle".into())
        );
        assert_eq!(registry.style_ref("ClassicCardStyle").name(), Some("ClassicCardStyle"));
    }

    #[test]
    fn test_register_custom() {
        let mut registry = StyleRegistry::builtin();
        registry.register(Arc::new(StampStyle));

        assert_eq!(registry.len(), 4);
        let (name, _) = registry.variants().last().unwrap();
        assert_eq!(name, "StampStyle");
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut registry = StyleRegistry::builtin();
        registry.register(Arc::new(ClassicCardStyle));
    }

    #[test]
    fn test_empty_registry() {
        let registry = StyleRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.default_style().is_none());
    }
}
