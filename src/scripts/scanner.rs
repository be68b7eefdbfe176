//! Script property scanner.
//!
//! A behavior script declares its editable properties in a leading comment
//! block:
//!
//! ```lua
//! -- #EDITOR_PROPERTIES
//! -- #PROPERTY Level
//! -- #PROPERTY Treasures
//! local monster = {}
//! ```
//!
//! Lines are compared with surrounding whitespace stripped. The first
//! non-empty line must be exactly the sentinel, otherwise the script
//! declares nothing. Each following `-- #PROPERTY <name>` line appends one
//! name; the first line that is not a property directive ends the block.

use smallvec::SmallVec;

use crate::cards::{Card, PropertyStore};
use crate::core::{CardpackSession, Error};

/// First line of a property block.
pub const EDITOR_PROPERTIES_SENTINEL: &str = "-- #EDITOR_PROPERTIES";

/// Prefix of a property directive.
pub const PROPERTY_PREFIX: &str = "-- #PROPERTY";

/// Declared property names in file order. Duplicates are kept.
pub type DeclaredProperties = SmallVec<[String; 4]>;

/// Extract declared property names from script source.
///
/// ```
/// use cardpack::scripts::scan_properties;
///
/// let src = "-- #EDITOR_PROPERTIES\n-- #PROPERTY Foo\n-- #PROPERTY Bar\nlocal x=1";
/// assert_eq!(scan_properties(src).as_slice(), ["Foo", "Bar"]);
/// assert!(scan_properties("local x = 1").is_empty());
/// ```
#[must_use]
pub fn scan_properties(source: &str) -> DeclaredProperties {
    let mut names = DeclaredProperties::new();
    let mut lines = source.lines().map(str::trim).skip_while(|l| l.is_empty());

    if lines.next() != Some(EDITOR_PROPERTIES_SENTINEL) {
        return names;
    }

    for line in lines {
        match line.strip_prefix(PROPERTY_PREFIX) {
            Some(rest) => names.push(rest.trim_start().to_string()),
            None => break,
        }
    }
    names
}

/// Add every declared name missing from the store, with an empty string.
///
/// Existing entries keep their value and type; names no longer declared are
/// not removed. Returns how many entries were added.
pub fn reconcile(store: &mut PropertyStore, declared: &[String]) -> usize {
    declared.iter().filter(|name| store.declare(name)).count()
}

/// Scan a card's script and reconcile its property store.
///
/// Returns the declared names; an empty result means the card has no
/// editable properties. A card without a script declares nothing, and so
/// does one whose script cannot be read (logged as a warning).
pub fn refresh_card_properties(session: &CardpackSession, card: &mut Card) -> DeclaredProperties {
    if !card.has_script() {
        return DeclaredProperties::new();
    }

    let path = session.resolve(card.script_path());
    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(
                script = card.script_path(),
                error = %Error::io(&path, e),
                "script unreadable, no editable properties"
            );
            return DeclaredProperties::new();
        }
    };
    let declared = scan_properties(&source);
    let added = reconcile(&mut card.properties, &declared);

    tracing::debug!(
        script = card.script_path(),
        declared = declared.len(),
        added,
        "scanned script properties"
    );
    declared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PropertyValue;

    #[test]
    fn test_scan_basic() {
        let src = "-- #EDITOR_PROPERTIES\n-- #PROPERTY Foo\n-- #PROPERTY Bar\nlocal x=1";
        assert_eq!(scan_properties(src).as_slice(), ["Foo", "Bar"]);
    }

    #[test]
    fn test_scan_without_sentinel() {
        assert!(scan_properties("").is_empty());
        assert!(scan_properties("-- #PROPERTY Foo").is_empty());
        assert!(scan_properties("local x = 1\n-- #EDITOR_PROPERTIES\n-- #PROPERTY Foo").is_empty());
        assert!(scan_properties("-- #EDITOR_PROPERTIES extra\n-- #PROPERTY Foo").is_empty());
    }

    #[test]
    fn test_scan_leading_blank_lines_and_spaces() {
        let src = "\n   \n  -- #EDITOR_PROPERTIES  \r\n   -- #PROPERTY    Level  \r\n";
        assert_eq!(scan_properties(src).as_slice(), ["Level"]);
    }

    #[test]
    fn test_scan_stops_at_first_non_directive() {
        let src = "-- #EDITOR_PROPERTIES\n-- #PROPERTY A\n\n-- #PROPERTY B\n";
        assert_eq!(scan_properties(src).as_slice(), ["A"]);

        let src = "-- #EDITOR_PROPERTIES\n-- #PROPERTY A\n-- a comment\n-- #PROPERTY B\n";
        assert_eq!(scan_properties(src).as_slice(), ["A"]);
    }

    #[test]
    fn test_scan_keeps_duplicates() {
        let src = "-- #EDITOR_PROPERTIES\n-- #PROPERTY A\n-- #PROPERTY A\n";
        assert_eq!(scan_properties(src).as_slice(), ["A", "A"]);
    }

    #[test]
    fn test_reconcile_preserves_values() {
        let mut store = PropertyStore::new();
        store.insert("Level", 3i64);
        store.insert("Retired", true);

        let declared: DeclaredProperties = ["Level", "Bonus", "Bonus"].iter().map(|s| s.to_string()).collect();
        let added = reconcile(&mut store, &declared);

        assert_eq!(added, 1);
        assert_eq!(store.get("Level"), Some(&PropertyValue::Integer(3)));
        assert_eq!(store.get("Bonus"), Some(&PropertyValue::String(String::new())));
        assert_eq!(store.get("Retired"), Some(&PropertyValue::Boolean(true)));
        let names: Vec<_> = store.names().collect();
        assert_eq!(names, vec!["Level", "Retired", "Bonus"]);
    }
}
