//! Card rasterization.
//!
//! - `bitmap`: RGBA buffer, drawing primitives, PNG encoding
//! - `font`: built-in 5x7 glyphs
//! - `layout`: word wrapping
//! - `compositor`: style invocation and image cache coherence

pub mod bitmap;
pub mod compositor;
pub mod font;
pub mod layout;

pub use bitmap::{Bitmap, Rgba};
pub use compositor::Compositor;
