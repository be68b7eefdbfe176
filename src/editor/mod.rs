//! Operations offered to an editing front end.
//!
//! A `PackEditor` owns one cardpack and the current selection. Front ends
//! drive it through:
//!
//! - `add_card`, `delete_cards`, `import_from_text`
//! - `set_editing_selection`, which returns `EditFields` for display
//! - `commit_edits_from_fields`, which writes the edited fields back
//! - `save`

pub mod fields;
pub mod pack_editor;

pub use fields::{EditFields, MULTI_VALUE_INDICATOR};
pub use pack_editor::PackEditor;
