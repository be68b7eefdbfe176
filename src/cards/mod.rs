//! Card data: cards, their properties, and the cardpack collection.
//!
//! ## Key Types
//!
//! - `Card`: title, description, category, style, script and properties
//! - `Category`: dungeon or treasure
//! - `PropertyValue`: typed scalar (integer, boolean or string)
//! - `PropertyStore`: insertion-ordered property map
//! - `Cardpack`: ordered card sequence

pub mod card;
pub mod import;
pub mod pack;
pub mod properties;

pub use card::{Card, Category, NEW_CARD_DESCRIPTION, NEW_CARD_TITLE};
pub use import::{parse_import_text, ImportLine};
pub use pack::Cardpack;
pub use properties::{PropertyStore, PropertyValue};
