//! Typed property coercion tests.

use cardpack::{Card, PropertyStore, PropertyValue};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_integers_coerce_to_integer(n in any::<i64>()) {
        prop_assert_eq!(PropertyValue::coerce(&n.to_string()), PropertyValue::Integer(n));
    }

    #[test]
    fn test_bool_text_coerces_case_insensitively(b in any::<bool>(), upper in any::<bool>()) {
        let text = if upper { b.to_string().to_uppercase() } else { b.to_string() };
        prop_assert_eq!(PropertyValue::coerce(&text), PropertyValue::Boolean(b));
    }

    /// Anything that is neither an integer nor a boolean stays text.
    #[test]
    fn test_other_text_stays_string(s in "[a-zA-Z ]{0,12}[.,!?]?") {
        prop_assume!(!s.eq_ignore_ascii_case("true") && !s.eq_ignore_ascii_case("false"));
        prop_assert_eq!(PropertyValue::coerce(&s), PropertyValue::String(s.clone()));
    }

    /// Editor text shown for a value coerces back to the same value.
    #[test]
    fn test_raw_text_is_stable(n in any::<i64>(), b in any::<bool>()) {
        for value in [PropertyValue::Integer(n), PropertyValue::Boolean(b)] {
            prop_assert_eq!(PropertyValue::coerce(&value.to_raw_text()), value);
        }
    }

    /// The last raw text set decides the type.
    #[test]
    fn test_set_raw_last_write_wins(values in prop::collection::vec("-?[0-9]{1,6}|true|false|[a-z]{1,6}", 1..6)) {
        let mut store = PropertyStore::new();
        for raw in &values {
            store.set_raw("n", raw);
        }
        let last = values.last().unwrap();
        prop_assert_eq!(store.get("n"), Some(&PropertyValue::coerce(last)));
        prop_assert_eq!(store.len(), 1);
    }
}

#[test]
fn test_set_property_examples() {
    let mut card = Card::titled("Orc");

    card.set_property("n", "42");
    assert_eq!(card.properties.get("n"), Some(&PropertyValue::Integer(42)));

    card.set_property("n", "true");
    assert_eq!(card.properties.get("n"), Some(&PropertyValue::Boolean(true)));

    card.set_property("n", "hi");
    assert_eq!(card.properties.get("n"), Some(&PropertyValue::String("hi".into())));

    card.set_property("n", "3");
    assert_eq!(card.properties.get("n"), Some(&PropertyValue::Integer(3)));
}

#[test]
fn test_integer_overflow_is_text() {
    let raw = "99999999999999999999";
    assert_eq!(PropertyValue::coerce(raw), PropertyValue::String(raw.into()));
}
