//! Udonarium character output.
//!
//! Serializes a [`sheet_model::DestinationTree`] into the `<character>` XML
//! document Udonarium imports, and writes it to disk.

mod character_xml;
mod common;

pub use character_xml::{
    CHAT_PALETTE_ELEMENT, DATA_ELEMENT, to_xml_string, write_character_xml,
};
pub use common::{ensure_output_dir, ensure_parent_dir, write_xml_file};
