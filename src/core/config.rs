//! Editor configuration types.
//!
//! - `RenderConfig`: card face geometry and text scales
//! - `EditorConfig`: rendering plus persistence options
//!
//! The cardpack directory layout itself is fixed; its names live here as
//! constants so load and save agree on them.

use serde::{Deserialize, Serialize};

/// Card records file at the cardpack root.
pub const CARDS_JSON: &str = "cards.json";

/// Directory holding behavior scripts, relative to the cardpack root.
pub const SCRIPTS_DIR: &str = "scripts";

/// Script file extension (without the dot).
pub const SCRIPT_EXTENSION: &str = "lua";

/// Texture directory, relative to the cardpack root.
pub const TEXTURES_DIR: &str = "textures";

/// Rendered front texture cache, relative to the cardpack root.
pub const TEXTURE_CACHE_DIR: &str = "textures/cache";

/// Card face rendering parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Card width in pixels.
    pub width: u32,

    /// Card height in pixels.
    pub height: u32,

    /// Inner margin between the card edge and its content.
    pub margin: u32,

    /// Frame border thickness.
    pub border: u32,

    /// Integer scale of the 5x7 font for titles.
    pub title_scale: u32,

    /// Integer scale of the 5x7 font for descriptions.
    pub body_scale: u32,

    /// Seed for the card back speckle texture.
    /// Same seed produces identical backs.
    pub back_seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 250,
            height: 350,
            margin: 12,
            border: 4,
            title_scale: 2,
            body_scale: 1,
            back_seed: 42,
        }
    }
}

impl RenderConfig {
    /// Set the card size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the inner margin.
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set title and body font scales.
    #[must_use]
    pub fn with_text_scales(mut self, title: u32, body: u32) -> Self {
        self.title_scale = title.max(1);
        self.body_scale = body.max(1);
        self
    }

    /// Set the back art seed.
    #[must_use]
    pub fn with_back_seed(mut self, seed: u64) -> Self {
        self.back_seed = seed;
        self
    }

    /// Width available to text inside margin and border.
    #[must_use]
    pub fn content_width(&self) -> u32 {
        self.width.saturating_sub(2 * (self.margin + self.border))
    }
}

/// Top-level editor configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Card rendering parameters.
    pub render: RenderConfig,

    /// Write `cards.json` pretty-printed.
    pub pretty_json: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            pretty_json: true,
        }
    }
}

impl EditorConfig {
    /// Replace the render configuration.
    #[must_use]
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// Write `cards.json` on a single line.
    #[must_use]
    pub fn compact_json(mut self) -> Self {
        self.pretty_json = false;
        self
    }
}
