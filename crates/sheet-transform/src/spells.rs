//! Spell slot sections (`初級呪文`, `LV1` .. `LV9`).

use std::ops::RangeInclusive;

use sheet_model::{LabeledNode, Result, Section};

use crate::tables::{CANTRIPS, SECTION_SPELLS, SPELL_DUMMY, SPELL_SLOT};

/// Spell levels with a section on the sheet; level 0 holds cantrips.
pub const SPELL_LEVELS: RangeInclusive<u8> = 0..=9;

/// Slot text for cantrips, which have no slots.
pub const CANTRIP_SLOTS: &str = "0/0";

pub fn level_label(level: u8) -> String {
    if level == 0 {
        CANTRIPS.to_string()
    } else {
        format!("LV{level}")
    }
}

/// `"{value}/{max}"` for one `spellN` entry, `None` when the entry is absent or empty.
///
/// A zero maximum means the export did not declare one; the current value
/// stands in for it.
pub fn slot_text(slot: &Section<'_>) -> Option<String> {
    if slot.is_empty() {
        return None;
    }
    let value = slot.number("value");
    let max = if slot.is_zero("max") {
        value.clone()
    } else {
        slot.number("max")
    };
    Some(format!("{value}/{max}"))
}

/// Build the `呪文` section from `system.spells`.
pub fn spells_section(spells: &Section<'_>) -> Result<LabeledNode> {
    let mut section = LabeledNode::empty(SECTION_SPELLS);
    for level in SPELL_LEVELS {
        let mut level_node = LabeledNode::empty(level_label(level));
        if level == 0 {
            level_node.push(LabeledNode::value(SPELL_SLOT, CANTRIP_SLOTS));
        } else {
            let slot = spells.section(&format!("spell{level}"))?;
            if let Some(text) = slot_text(&slot) {
                level_node.push(LabeledNode::value(SPELL_SLOT, text));
            }
            level_node.push(LabeledNode::empty(SPELL_DUMMY));
        }
        section.push(level_node);
    }
    Ok(section)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use sheet_model::SourceDocument;

    use super::*;

    fn spells_of(spells: Value) -> LabeledNode {
        let source = SourceDocument::from_value(json!({ "system": { "spells": spells } })).unwrap();
        let spells = source.system().section("spells").unwrap();
        spells_section(&spells).unwrap()
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(0), "初級呪文");
        assert_eq!(level_label(1), "LV1");
        assert_eq!(level_label(9), "LV9");
    }

    #[test]
    fn test_ten_sections_in_order() {
        let section = spells_of(json!({}));
        assert_eq!(
            section.child_names(),
            vec!["初級呪文", "LV1", "LV2", "LV3", "LV4", "LV5", "LV6", "LV7", "LV8", "LV9"]
        );
    }

    #[test]
    fn test_cantrips_have_fixed_slots_only() {
        let section = spells_of(json!({ "spell0": { "value": 4, "max": 4 } }));
        let cantrips = section.child("初級呪文").unwrap();
        assert_eq!(cantrips.child_names(), vec!["スロット"]);
        assert_eq!(cantrips.children[0].text(), "0/0");
    }

    #[test]
    fn test_declared_max_is_used() {
        let section = spells_of(json!({ "spell1": { "value": 1, "max": 4 } }));
        let level = section.child("LV1").unwrap();
        assert_eq!(level.child_names(), vec!["スロット", "dummy"]);
        assert_eq!(level.children[0].text(), "1/4");
    }

    #[test]
    fn test_zero_max_falls_back_to_value() {
        let section = spells_of(json!({ "spell3": { "value": 2, "max": 0 } }));
        assert_eq!(section.find(&["LV3", "スロット"]).unwrap().text(), "2/2");
    }

    #[test]
    fn test_missing_max_falls_back_to_value() {
        let section = spells_of(json!({ "spell2": { "value": 3 } }));
        assert_eq!(section.find(&["LV2", "スロット"]).unwrap().text(), "3/3");
    }

    #[test]
    fn test_absent_level_has_only_dummy() {
        let section = spells_of(json!({ "spell1": { "value": 1, "max": 1 } }));
        let level = section.child("LV5").unwrap();
        assert_eq!(level.child_names(), vec!["dummy"]);
        assert_eq!(level.children[0].text(), "");
    }

    #[test]
    fn test_empty_level_entry_has_only_dummy() {
        let section = spells_of(json!({ "spell4": {} }));
        assert_eq!(section.child("LV4").unwrap().child_names(), vec!["dummy"]);
    }

    #[test]
    fn test_scalar_level_entry_is_structural_failure() {
        let source =
            SourceDocument::from_value(json!({ "system": { "spells": { "spell2": 3 } } })).unwrap();
        let spells = source.system().section("spells").unwrap();
        assert!(spells_section(&spells).is_err());
    }
}
