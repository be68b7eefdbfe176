//! Cardpack persistence.
//!
//! ## Directory layout
//!
//! ```text
//! <root>/
//!   cards.json
//!   scripts/**/*.lua
//!   textures/dungeon-back.png
//!   textures/treasure-back.png
//!   textures/cache/<n>_<stem>.png
//! ```
//!
//! The texture cache is rebuilt in full on every save. Back textures are
//! rendered once and then left alone.

pub mod load;
pub mod naming;
pub mod progress;
pub mod record;
pub mod save;

pub use load::load_cardpack;
pub use naming::{back_texture_path, cache_texture_path, sanitize_stem, texture_file_name};
pub use progress::{LogProgress, NoProgress, ProgressEvent, RecordedProgress, SaveProgress, SavePhase};
pub use record::CardRecord;
pub use save::{save_cardpack, SaveOptions, SaveSummary};
