//! Core editor types: errors, configuration, RNG and the cardpack session.
//!
//! Everything here is independent of how cards are drawn or stored; the
//! other modules build on these.

pub mod config;
pub mod error;
pub mod rng;
pub mod session;

pub use config::{EditorConfig, RenderConfig};
pub use error::{Error, Result};
pub use rng::ArtRng;
pub use session::CardpackSession;
