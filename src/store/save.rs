//! Saving a cardpack directory.
//!
//! Save order:
//!
//! 1. Create `textures/cache/` and delete every file and symlink directly
//!    inside it.
//! 2. Render the first card, so its style is concrete.
//! 3. Render each missing `textures/<category>-back.png` with that style.
//!    Existing backs are never overwritten.
//! 4. Write `textures/cache/<n>_<stem>.png` for each card, n from 1.
//! 5. Write `cards.json`.
//!
//! Nothing is rolled back on failure: files written before an error stay.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use smallvec::SmallVec;

use super::naming::{back_texture_path, cache_texture_path, texture_file_name};
use super::progress::{SavePhase, SaveProgress};
use super::record::CardRecord;
use crate::cards::{Cardpack, Category};
use crate::core::{CardpackSession, Error, Result};
use crate::render::{Bitmap, Compositor};

/// Persistence options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveOptions {
    /// Pretty-print `cards.json`.
    pub pretty_json: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

/// What a save wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveSummary {
    /// Back textures rendered because they were missing.
    pub backs_rendered: SmallVec<[Category; 2]>,
    /// Pack-relative front texture paths, in pack order.
    pub front_textures: Vec<String>,
    /// Files removed from the texture cache before writing.
    pub cache_files_removed: usize,
}

/// Save a pack into the session's directory.
pub fn save_cardpack(
    session: &CardpackSession,
    pack: &mut Cardpack,
    compositor: &Compositor<'_>,
    options: SaveOptions,
    progress: &mut dyn SaveProgress,
) -> Result<SaveSummary> {
    let cache_dir = session.texture_cache_dir();
    std::fs::create_dir_all(&cache_dir).map_err(|e| Error::io(&cache_dir, e))?;
    let cache_files_removed = clear_directory_files(&cache_dir)?;

    if let Some(first) = pack.get_mut(0) {
        compositor.render(first);
    }

    let back_style = compositor.back_style(pack);
    let mut backs_rendered = SmallVec::new();
    for category in Category::ALL {
        let path = session.resolve(&back_texture_path(category));
        if path.exists() {
            continue;
        }
        let image = compositor.render_back(category, back_style.as_ref());
        write_png(&image, &path)?;
        backs_rendered.push(category);
    }

    progress.begin(SavePhase::Textures, pack.len());
    let mut front_textures = Vec::with_capacity(pack.len());
    for (i, card) in pack.iter_mut().enumerate() {
        let file_name = texture_file_name(i + 1, card.title());
        let image = compositor.render(card);
        write_png(image, &cache_dir.join(&file_name))?;
        front_textures.push(cache_texture_path(&file_name));
        progress.step(SavePhase::Textures, i + 1);
    }

    progress.begin(SavePhase::Records, pack.len());
    let mut records = Vec::with_capacity(pack.len());
    for (i, (card, texture)) in pack.iter().zip(&front_textures).enumerate() {
        records.push(CardRecord::from_card(card, texture.as_str()));
        progress.step(SavePhase::Records, i + 1);
    }

    let cards_json = session.cards_json();
    let bytes = if options.pretty_json {
        serde_json::to_vec_pretty(&records)
    } else {
        serde_json::to_vec(&records)
    }
    .map_err(|e| Error::json(&cards_json, e))?;
    std::fs::write(&cards_json, bytes).map_err(|e| Error::io(&cards_json, e))?;

    tracing::info!(
        root = %session.root().display(),
        cards = pack.len(),
        backs = backs_rendered.len(),
        removed = cache_files_removed,
        "saved cardpack"
    );

    Ok(SaveSummary {
        backs_rendered,
        front_textures,
        cache_files_removed,
    })
}

/// Delete every non-directory entry directly inside `dir`, symlinks
/// included. Subdirectories are left alone.
fn clear_directory_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if !file_type.is_dir() {
            std::fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
            removed += 1;
        }
    }
    Ok(removed)
}

fn write_png(image: &Bitmap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    image
        .write_png(BufWriter::new(file))
        .map_err(|e| Error::png(path, e))?;
    tracing::debug!(path = %path.display(), "wrote texture");
    Ok(())
}
