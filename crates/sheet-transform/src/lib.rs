//! Field mapping from Foundry VTT dnd5e actor exports to Udonarium characters.
//!
//! [`transform`] walks a [`sheet_model::SourceDocument`] and builds the full
//! [`sheet_model::DestinationTree`]: fixed sections in sheet order, resource
//! nodes for hit points, spell slots per level, and the chat palette.

pub mod chat_palette;
pub mod lineage;
pub mod spells;
pub mod tables;
mod transform;

pub use chat_palette::{TEMPLATE_LINES, chat_palette_text};
pub use lineage::{ClassEntry, Lineage};
pub use spells::{level_label, slot_text, spells_section};
pub use transform::{
    REFERENCE_SYSTEM_ID, REFERENCE_SYSTEM_MAJOR, strip_alignment_suffix, transform,
    version_warnings,
};
