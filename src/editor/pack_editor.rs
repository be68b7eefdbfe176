//! The editing session over one cardpack.

use std::ops::Range;
use std::path::Path;

use super::fields::{is_committable, EditFields};
use crate::cards::Cardpack;
use crate::core::{CardpackSession, EditorConfig, Error, Result};
use crate::render::{Bitmap, Compositor};
use crate::scripts::refresh_card_properties;
use crate::store::{load_cardpack, save_cardpack, SaveOptions, SaveProgress, SaveSummary};
use crate::styles::StyleRegistry;

/// A cardpack open for editing, with the current card selection.
///
/// # Example
///
/// ```
/// use cardpack::editor::PackEditor;
/// use cardpack::styles::StyleRegistry;
/// use cardpack::EditorConfig;
///
/// let registry = StyleRegistry::builtin();
/// let mut editor = PackEditor::create("my-pack", &registry, &EditorConfig::default());
///
/// let new = editor.import_from_text("Potion (3)\nSword");
/// assert_eq!(new, 0..4);
///
/// let mut fields = editor.set_editing_selection(&[3]).unwrap();
/// fields.description = "A sharp blade.".into();
/// editor.commit_edits_from_fields(&fields).unwrap();
/// assert_eq!(editor.pack().get(3).unwrap().description(), "A sharp blade.");
/// ```
pub struct PackEditor<'r> {
    pack: Cardpack,
    session: CardpackSession,
    compositor: Compositor<'r>,
    options: SaveOptions,
    selection: Vec<usize>,
}

impl<'r> PackEditor<'r> {
    /// Start an empty pack at `root`. Nothing is written until `save`.
    #[must_use]
    pub fn create(root: impl AsRef<Path>, registry: &'r StyleRegistry, config: &EditorConfig) -> Self {
        Self::with_pack(Cardpack::new(), CardpackSession::open(root.as_ref()), registry, config)
    }

    /// Load the pack at `root`.
    pub fn open(root: impl AsRef<Path>, registry: &'r StyleRegistry, config: &EditorConfig) -> Result<Self> {
        let (pack, session) = load_cardpack(root, registry)?;
        Ok(Self::with_pack(pack, session, registry, config))
    }

    /// Wrap an already loaded pack.
    #[must_use]
    pub fn with_pack(
        pack: Cardpack,
        session: CardpackSession,
        registry: &'r StyleRegistry,
        config: &EditorConfig,
    ) -> Self {
        Self {
            pack,
            session,
            compositor: Compositor::new(registry, config.render.clone()),
            options: SaveOptions {
                pretty_json: config.pretty_json,
            },
            selection: Vec::new(),
        }
    }

    #[must_use]
    pub fn pack(&self) -> &Cardpack {
        &self.pack
    }

    pub fn pack_mut(&mut self) -> &mut Cardpack {
        &mut self.pack
    }

    #[must_use]
    pub fn session(&self) -> &CardpackSession {
        &self.session
    }

    /// Script paths offered for the script field.
    #[must_use]
    pub fn scripts(&self) -> &[String] {
        &self.session.scripts
    }

    /// Indices of the cards being edited.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Append a placeholder card and return its index.
    pub fn add_card(&mut self) -> usize {
        self.pack.add_card()
    }

    /// Remove cards by index. Clears the selection, since indices shift.
    pub fn delete_cards(&mut self, indices: &[usize]) -> usize {
        self.selection.clear();
        self.pack.delete_cards(indices)
    }

    /// Bulk-create cards from pasted text. Returns the new indices.
    pub fn import_from_text(&mut self, text: &str) -> Range<usize> {
        self.pack.import_from_text(text)
    }

    /// Select cards for editing and return their field values.
    ///
    /// Each selected card with a script is rescanned first, so newly
    /// declared properties show up. A script that cannot be read declares
    /// nothing; the card stays selectable.
    pub fn set_editing_selection(&mut self, indices: &[usize]) -> Result<EditFields> {
        if indices.is_empty() {
            return Err(Error::EmptySelection);
        }
        self.check_indices(indices)?;

        for &i in indices {
            if let Some(card) = self.pack.get_mut(i) {
                refresh_card_properties(&self.session, card);
            }
        }

        self.selection = indices.to_vec();
        let cards: Vec<_> = indices.iter().filter_map(|&i| self.pack.get(i)).collect();
        Ok(EditFields::from_cards(&cards))
    }

    /// Apply field values to every selected card.
    ///
    /// Fields still holding the multi-value indicator are skipped, as are
    /// `None` category and style. A changed script is rescanned before
    /// properties are applied. Property text goes through typed coercion and
    /// only reaches cards that already carry that property. Once the
    /// selection is valid, every selected card receives the edit.
    pub fn commit_edits_from_fields(&mut self, fields: &EditFields) -> Result<()> {
        if self.selection.is_empty() {
            return Err(Error::EmptySelection);
        }
        self.check_indices(&self.selection)?;

        let registry = self.compositor.registry();
        for &i in &self.selection {
            let Some(card) = self.pack.get_mut(i) else {
                continue;
            };

            if is_committable(&fields.title) {
                card.set_title(fields.title.as_str());
            }
            if is_committable(&fields.description) {
                card.set_description(fields.description.as_str());
            }
            if let Some(category) = fields.category {
                card.set_category(category);
            }
            if let Some(style) = &fields.style {
                if card.style().name() != Some(style.as_str()) {
                    card.set_style(registry.style_ref(style));
                }
            }
            if is_committable(&fields.script) && fields.script != card.script_path() {
                card.set_script_path(fields.script.as_str());
                refresh_card_properties(&self.session, card);
            }

            for (name, raw) in &fields.properties {
                if is_committable(raw) && card.properties.contains(name) {
                    card.set_property(name, raw);
                }
            }
        }

        tracing::debug!(cards = self.selection.len(), "committed edit fields");
        Ok(())
    }

    /// The front image of a card, rendered if needed.
    pub fn preview(&mut self, index: usize) -> Result<&Bitmap> {
        let len = self.pack.len();
        let card = self.pack.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(self.compositor.render(card))
    }

    /// Write the pack and its textures.
    pub fn save(&mut self, progress: &mut dyn SaveProgress) -> Result<SaveSummary> {
        save_cardpack(&self.session, &mut self.pack, &self.compositor, self.options, progress)
    }

    fn check_indices(&self, indices: &[usize]) -> Result<()> {
        let len = self.pack.len();
        match indices.iter().find(|&&i| i >= len) {
            Some(&index) => Err(Error::IndexOutOfRange { index, len }),
            None => Ok(()),
        }
    }
}
