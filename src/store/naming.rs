//! Texture file naming.

use crate::cards::Category;
use crate::core::config::{TEXTURES_DIR, TEXTURE_CACHE_DIR};

/// Characters rejected in file names on at least one supported platform.
const INVALID_FILE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Lowercased title with spaces as underscores and invalid characters removed.
///
/// ```
/// use cardpack::store::sanitize_stem;
///
/// assert_eq!(sanitize_stem("Fire: Dragon?"), "fire_dragon");
/// ```
#[must_use]
pub fn sanitize_stem(title: &str) -> String {
    title
        .replace(' ', "_")
        .chars()
        .filter(|c| !c.is_control() && !INVALID_FILE_NAME_CHARS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Cache file name for the card with 1-based sequence number `id`.
#[must_use]
pub fn texture_file_name(id: usize, title: &str) -> String {
    format!("{id}_{}.png", sanitize_stem(title))
}

/// Pack-relative cache path recorded in `front_texture`.
#[must_use]
pub fn cache_texture_path(file_name: &str) -> String {
    format!("{TEXTURE_CACHE_DIR}/{file_name}")
}

/// Pack-relative path of a category's back texture.
#[must_use]
pub fn back_texture_path(category: Category) -> String {
    format!("{TEXTURES_DIR}/{}-back.png", category.as_str())
}
