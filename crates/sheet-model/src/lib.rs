//! Data model for converting Foundry VTT actors into Udonarium characters.
//!
//! - [`SourceDocument`]: lenient read-only view over the JSON export
//! - [`DestinationTree`]: ordered `<data>` node tree plus chat palette
//! - [`SheetError`]: structural failures that abort a conversion

pub mod error;
pub mod source;
pub mod tree;

pub use error::{Result, SheetError};
pub use source::{Object, Section, SourceDocument, SourceItem, SourceStats};
pub use tree::{
    CHARACTER_ELEMENT, ChatPalette, DICEBOT_DND5E, DestinationTree, LabeledNode, RESOURCE_TYPE,
};
