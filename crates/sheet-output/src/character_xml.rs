//! Udonarium character XML generation.

use std::io::Write;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use sheet_model::{CHARACTER_ELEMENT, ChatPalette, DestinationTree, LabeledNode, RESOURCE_TYPE};

/// Element used for every sheet node.
pub const DATA_ELEMENT: &str = "data";

/// Element holding the chat palette text.
pub const CHAT_PALETTE_ELEMENT: &str = "chat-palette";

/// Serialize `tree` as an indented UTF-8 XML document.
pub fn to_xml_string(tree: &DestinationTree) -> Result<String> {
    let bytes = write_character_xml(Vec::new(), tree)?;
    String::from_utf8(bytes).context("character xml is not UTF-8")
}

/// Write `tree` to `writer` and hand the writer back.
pub fn write_character_xml<W: Write>(writer: W, tree: &DestinationTree) -> Result<W> {
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new(CHARACTER_ELEMENT)))?;
    write_node(&mut xml, &tree.character)?;
    write_chat_palette(&mut xml, &tree.chat_palette)?;
    xml.write_event(Event::End(BytesEnd::new(CHARACTER_ELEMENT)))?;

    let mut writer = xml.into_inner();
    writer.write_all(b"\n")?;
    Ok(writer)
}

/// Write one `<data>` element and its subtree.
///
/// Nodes without text or children are written self-closing.
fn write_node<W: Write>(xml: &mut Writer<W>, node: &LabeledNode) -> Result<()> {
    let mut start = BytesStart::new(DATA_ELEMENT);
    start.push_attribute(("name", node.name.as_str()));
    if let Some(current) = node.current_value.as_deref() {
        start.push_attribute(("currentValue", current));
        start.push_attribute(("type", RESOURCE_TYPE));
    }

    let text = node.text();
    if text.is_empty() && node.children.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if !text.is_empty() {
        xml.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(xml, child)?;
    }
    xml.write_event(Event::End(BytesEnd::new(DATA_ELEMENT)))?;
    Ok(())
}

fn write_chat_palette<W: Write>(xml: &mut Writer<W>, palette: &ChatPalette) -> Result<()> {
    let mut start = BytesStart::new(CHAT_PALETTE_ELEMENT);
    start.push_attribute(("dicebot", palette.dicebot.as_str()));
    xml.write_event(Event::Start(start))?;
    xml.write_event(Event::Text(BytesText::new(&palette.text)))?;
    xml.write_event(Event::End(BytesEnd::new(CHAT_PALETTE_ELEMENT)))?;
    Ok(())
}
