//! Card styles: pluggable strategies that turn card text into pixels.
//!
//! ## Key Types
//!
//! - `CardStyle`: renders a card front and the generic back for a category
//! - `StyleRegistry`: the enumerable set of styles, looked up by stable name
//! - `StyleRef`: a card's reference to its style (set, unset or unresolved)
//! - `CardFace`: the text data a style lays out
//!
//! Styles are stateless. Every built-in variant is listed in
//! `registry::BUILTIN_STYLES`; further variants are added with
//! `StyleRegistry::register`.

pub mod classic;
pub mod minimal;
pub mod parchment;
pub mod registry;

use std::fmt;
use std::sync::Arc;

pub use classic::ClassicCardStyle;
pub use minimal::MinimalCardStyle;
pub use parchment::ParchmentCardStyle;
pub use registry::{StyleConstructor, StyleRegistry, BUILTIN_STYLES};

use crate::cards::Category;
use crate::core::{ArtRng, RenderConfig};
use crate::render::{layout, Bitmap, Rgba};

/// A card rendering strategy.
pub trait CardStyle: Send + Sync {
    /// Stable name, written to `cards.json` and used for lookup.
    fn name(&self) -> &'static str;

    /// Render the front of a card.
    fn render_front(&self, face: &CardFace<'_>, config: &RenderConfig) -> Bitmap;

    /// Render the shared back art for a category.
    fn render_back(&self, category: Category, config: &RenderConfig) -> Bitmap;
}

/// Category-derived front template: banner label and base colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontTemplate {
    pub label: &'static str,
    pub frame: Rgba,
    pub accent: Rgba,
}

impl FrontTemplate {
    /// Default template for a category.
    #[must_use]
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Dungeon => Self {
                label: "DOOR",
                frame: Rgba::rgb(92, 54, 32),
                accent: Rgba::rgb(170, 40, 30),
            },
            Category::Treasure => Self {
                label: "TREASURE",
                frame: Rgba::rgb(120, 96, 20),
                accent: Rgba::rgb(214, 170, 40),
            },
        }
    }
}

/// Text data a style composes into a front image.
#[derive(Clone, Copy, Debug)]
pub struct CardFace<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: Category,
    pub template: FrontTemplate,
}

impl<'a> CardFace<'a> {
    #[must_use]
    pub fn new(title: &'a str, description: &'a str, category: Category) -> Self {
        Self {
            title,
            description,
            category,
            template: FrontTemplate::for_category(category),
        }
    }
}

/// A card's style reference.
#[derive(Clone, Default)]
pub enum StyleRef {
    /// No style chosen yet. Rendering binds the registry default.
    #[default]
    Unset,
    /// A registered style.
    Registered(Arc<dyn CardStyle>),
    /// A persisted name that matched no registered style.
    Unresolved(String),
}

impl StyleRef {
    /// The style name, if any. Unresolved references report the persisted name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            StyleRef::Unset => None,
            StyleRef::Registered(style) => Some(style.name()),
            StyleRef::Unresolved(name) => Some(name),
        }
    }

    /// The concrete style, if registered.
    #[must_use]
    pub fn style(&self) -> Option<&Arc<dyn CardStyle>> {
        match self {
            StyleRef::Registered(style) => Some(style),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, StyleRef::Unresolved(_))
    }
}

impl fmt::Debug for StyleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleRef::Unset => f.write_str("Unset"),
            StyleRef::Registered(style) => write!(f, "Registered({})", style.name()),
            StyleRef::Unresolved(name) => write!(f, "Unresolved({name:?})"),
        }
    }
}

impl PartialEq for StyleRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleRef::Unset, StyleRef::Unset) => true,
            (StyleRef::Registered(a), StyleRef::Registered(b)) => a.name() == b.name(),
            (StyleRef::Unresolved(a), StyleRef::Unresolved(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for StyleRef {}

/// Colours a style uses for the shared front layout.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FacePaint {
    pub frame: Rgba,
    pub banner: Rgba,
    pub banner_text: Rgba,
    pub title: Rgba,
    pub body: Rgba,
}

/// Shared front layout: framed card, category banner, title, wrapped body.
///
/// Returns the y coordinate just below the body text.
pub(crate) fn draw_face(bmp: &mut Bitmap, face: &CardFace<'_>, config: &RenderConfig, paint: FacePaint) -> i64 {
    let inset = i64::from(config.margin + config.border);
    let content_w = config.content_width();

    bmp.stroke_rect(0, 0, config.width, config.height, config.border, paint.frame);

    let banner_h = layout::block_height(1, 1) + 4;
    bmp.fill_rect(inset, inset, content_w, banner_h, paint.banner);
    bmp.draw_text(inset + 2, inset + 3, face.template.label, 1, paint.banner_text);

    let mut y = inset + i64::from(banner_h) + i64::from(config.margin);
    let title_lines = layout::wrap(face.title, layout::chars_per_line(content_w, config.title_scale));
    for line in &title_lines {
        bmp.draw_text(inset, y, line, config.title_scale, paint.title);
        y += i64::from(layout::block_height(1, config.title_scale));
    }

    y += i64::from(config.margin);
    bmp.fill_rect(inset, y, content_w, 1, paint.frame);
    y += i64::from(config.margin);

    let body_lines = layout::wrap(face.description, layout::chars_per_line(content_w, config.body_scale));
    for line in &body_lines {
        if y + i64::from(layout::block_height(1, config.body_scale)) > i64::from(config.height) - inset {
            break;
        }
        bmp.draw_text(inset, y, line, config.body_scale, paint.body);
        y += i64::from(layout::block_height(1, config.body_scale));
    }
    y
}

/// Scatter single-pixel speckles of `colour` over the image.
pub(crate) fn speckle(bmp: &mut Bitmap, rng: &mut ArtRng, colour: Rgba, probability: f64) {
    for y in 0..bmp.height() {
        for x in 0..bmp.width() {
            if rng.gen_bool(probability) {
                bmp.put(i64::from(x), i64::from(y), colour);
            }
        }
    }
}

/// Seeded art stream for one category's back.
pub(crate) fn back_rng(config: &RenderConfig, category: Category) -> ArtRng {
    ArtRng::new(config.back_seed).for_context(category.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_per_category() {
        assert_eq!(FrontTemplate::for_category(Category::Dungeon).label, "DOOR");
        assert_eq!(FrontTemplate::for_category(Category::Treasure).label, "TREASURE");
    }

    #[test]
    fn test_style_ref_names() {
        let unset = StyleRef::Unset;
        let registered = StyleRef::Registered(Arc::new(ClassicCardStyle));
        let missing = StyleRef::Unresolved("GoneStyle".into());

        assert_eq!(unset.name(), None);
        assert_eq!(registered.name(), Some(classic::NAME));
        assert_eq!(missing.name(), Some("GoneStyle"));
        assert!(missing.is_unresolved());
        assert!(registered.style().is_some());
    }

    #[test]
    fn test_style_ref_equality_by_name() {
        let a = StyleRef::Registered(Arc::new(ClassicCardStyle));
        let b = StyleRef::Registered(Arc::new(ClassicCardStyle));
        let c = StyleRef::Registered(Arc::new(MinimalCardStyle));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(StyleRef::Unresolved(classic::NAME.into()), a);
    }
}
