//! Cardpack session context.
//!
//! A `CardpackSession` names the cardpack directory the editor is working on
//! and the scripts available inside it. Load, save and script scanning all
//! take the session explicitly instead of reading a shared path.

use std::path::{Path, PathBuf};

use super::config::{CARDS_JSON, TEXTURES_DIR, TEXTURE_CACHE_DIR};
use crate::scripts::catalog;

/// The cardpack directory being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardpackSession {
    root: PathBuf,

    /// Script paths relative to `root`, forward-slash separated, sorted.
    pub scripts: Vec<String>,
}

impl CardpackSession {
    /// Start a session on a directory without listing its scripts.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scripts: Vec::new(),
        }
    }

    /// Start a session and populate the script catalog.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let mut session = Self::new(root);
        session.refresh_scripts();
        session
    }

    /// The cardpack root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Re-list `scripts/**/*.lua` under the root.
    pub fn refresh_scripts(&mut self) {
        self.scripts = catalog::list_scripts(&self.root);
    }

    /// Resolve a pack-relative, forward-slash path to a filesystem path.
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Path of `cards.json`.
    #[must_use]
    pub fn cards_json(&self) -> PathBuf {
        self.root.join(CARDS_JSON)
    }

    /// Path of the `textures/` directory.
    #[must_use]
    pub fn textures_dir(&self) -> PathBuf {
        self.resolve(TEXTURES_DIR)
    }

    /// Path of the front texture cache directory.
    #[must_use]
    pub fn texture_cache_dir(&self) -> PathBuf {
        self.resolve(TEXTURE_CACHE_DIR)
    }
}
