//! Loading a cardpack directory.

use std::path::Path;

use super::record::CardRecord;
use crate::cards::Cardpack;
use crate::core::{CardpackSession, Error, Result};
use crate::styles::StyleRegistry;

/// Load `<root>/cards.json` and open a session on `root`.
///
/// Fails with `Error::NotACardpack` when `cards.json` is missing. Style
/// names are resolved through `registry`; unknown names load as unresolved
/// markers. The session's script catalog is populated from
/// `<root>/scripts/`.
pub fn load_cardpack(root: impl AsRef<Path>, registry: &StyleRegistry) -> Result<(Cardpack, CardpackSession)> {
    let root = root.as_ref();
    let session = CardpackSession::new(root);
    let cards_json = session.cards_json();
    if !cards_json.is_file() {
        return Err(Error::NotACardpack(root.to_path_buf()));
    }

    let text = std::fs::read_to_string(&cards_json).map_err(|e| Error::io(&cards_json, e))?;
    let records: Vec<CardRecord> = serde_json::from_str(&text).map_err(|e| Error::json(&cards_json, e))?;

    let pack: Cardpack = records.into_iter().map(|r| r.into_card(registry)).collect();

    let mut session = session;
    session.refresh_scripts();

    let unresolved = pack.iter().filter(|c| c.style().is_unresolved()).count();
    tracing::info!(
        root = %root.display(),
        cards = pack.len(),
        scripts = session.scripts.len(),
        unresolved_styles = unresolved,
        "loaded cardpack"
    );
    Ok((pack, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Category, PropertyValue};

    #[test]
    fn test_missing_cards_json() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_cardpack(dir.path(), &StyleRegistry::builtin()).unwrap_err();
        assert!(matches!(err, Error::NotACardpack(_)));
    }

    #[test]
    fn test_malformed_cards_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cards.json"), "{ not json").unwrap();
        let err = load_cardpack(dir.path(), &StyleRegistry::builtin()).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }

    #[test]
    fn test_load_records_and_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("scripts")).unwrap();
        std::fs::write(root.join("scripts/orc.lua"), "").unwrap();
        std::fs::write(
            root.join("cards.json"),
            r#"[
                {"name": "Orc", "description": "Grr", "category": "dungeon",
                 "style": "ClassicCardStyle", "script": "scripts/orc.lua",
                 "front_texture": "textures/cache/1_orc.png",
                 "properties": {"Level": 4}},
                {"name": "Lamp", "category": "treasure", "style": "Vanished"}
            ]"#,
        )
        .unwrap();

        let (pack, session) = load_cardpack(root, &StyleRegistry::builtin()).unwrap();

        assert_eq!(pack.len(), 2);
        assert_eq!(pack.get(0).unwrap().properties.get("Level"), Some(&PropertyValue::Integer(4)));
        assert_eq!(pack.get(1).unwrap().category(), Category::Treasure);
        assert!(pack.get(1).unwrap().style().is_unresolved());
        assert_eq!(session.scripts, vec!["scripts/orc.lua"]);
        assert_eq!(session.root(), root);
    }
}
