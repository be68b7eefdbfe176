//! Behavior scripts: property directive scanning and the script catalog.

pub mod catalog;
pub mod scanner;

pub use catalog::list_scripts;
pub use scanner::{
    reconcile, refresh_card_properties, scan_properties, DeclaredProperties, EDITOR_PROPERTIES_SENTINEL,
    PROPERTY_PREFIX,
};
