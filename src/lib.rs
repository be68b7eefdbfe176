//! # cardpack
//!
//! The core of a card-game content editor: card rendering, script property
//! introspection and cardpack persistence.
//!
//! ## Design Principles
//!
//! 1. **Explicit Styles**: Card styles are listed in a registry built at
//!    startup and looked up by stable name. No type discovery.
//!
//! 2. **Typed Properties**: Script-declared properties hold an integer,
//!    boolean or string. Editor text is coerced in that order.
//!
//! 3. **Explicit Session**: Load, save and script scanning take a
//!    `CardpackSession` naming the pack directory. There is no global path.
//!
//! ## Architecture
//!
//! - **Render Cache**: Each card memoizes its front image. Changing title,
//!   description, category or style drops it; properties and script do not.
//!
//! - **Rebuilt Texture Cache**: Every save rewrites `textures/cache/` in
//!   full. Card backs are rendered once and never overwritten.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, RNG, cardpack session
//! - `cards`: Cards, categories, typed properties, the cardpack
//! - `render`: Bitmaps, the built-in font, text layout, the compositor
//! - `styles`: The `CardStyle` trait, built-in styles and the registry
//! - `scripts`: Property directive scanning and the script catalog
//! - `store`: `cards.json` records, load and save
//! - `editor`: Selection, field editing and bulk import

pub mod cards;
pub mod core;
pub mod editor;
pub mod render;
pub mod scripts;
pub mod store;
pub mod styles;

// Re-export commonly used types
pub use crate::core::{ArtRng, CardpackSession, EditorConfig, Error, RenderConfig, Result};

pub use crate::cards::{Card, Cardpack, Category, PropertyStore, PropertyValue};

pub use crate::render::{Bitmap, Compositor, Rgba};

pub use crate::styles::{CardFace, CardStyle, StyleRef, StyleRegistry};

pub use crate::scripts::{scan_properties, DeclaredProperties};

pub use crate::store::{load_cardpack, save_cardpack, SaveOptions, SavePhase, SaveProgress, SaveSummary};

pub use crate::editor::{EditFields, PackEditor, MULTI_VALUE_INDICATOR};
