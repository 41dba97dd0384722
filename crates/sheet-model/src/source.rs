//! Read-only view over a Foundry VTT actor export.
//!
//! Lookups are lenient: an absent key, or a scalar of the wrong type, reads as
//! `""` or `0`, and numbers keep their JSON text (`14.5` stays `14.5`).
//! Containers are strict: a key that must hold an object or array but holds
//! something else is a [`SheetError::Structure`].

use std::io::Read;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, SheetError};

/// JSON object as parsed by `serde_json`.
pub type Object = Map<String, Value>;

/// A parsed actor export whose root is an object holding a `system` object.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    root: Object,
}

impl SourceDocument {
    /// Validate the minimal document shape and wrap it.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(SheetError::structure("$", "a JSON object"));
        };
        match root.get("system") {
            Some(Value::Object(_)) => Ok(Self { root }),
            Some(_) => Err(SheetError::structure("system", "an object")),
            None => Err(SheetError::structure("system", "an object, found nothing")),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Character name, `""` when absent.
    pub fn name(&self) -> &str {
        text_of(self.root.get("name"))
    }

    /// The `system` object.
    pub fn system(&self) -> Section<'_> {
        Section {
            path: "system".to_string(),
            map: self.root.get("system").and_then(Value::as_object),
        }
    }

    /// Items in source order. An absent or `null` `items` key yields no items.
    pub fn items(&self) -> Result<Vec<SourceItem<'_>>> {
        let Some(value) = self.root.get("items").filter(|value| !value.is_null()) else {
            return Ok(Vec::new());
        };
        let Value::Array(entries) = value else {
            return Err(SheetError::structure("items", "an array"));
        };
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Object(map) => Ok(SourceItem { index, map }),
                _ => Err(SheetError::structure(format!("items[{index}]"), "an object")),
            })
            .collect()
    }

    /// Platform version stamps, when the export carries a readable `_stats`.
    pub fn stats(&self) -> Option<SourceStats> {
        let value = self.root.get("_stats")?;
        SourceStats::deserialize(value).ok()
    }
}

/// An object somewhere in the document, or the absence of one.
///
/// An absent section answers every lookup with its default.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    path: String,
    map: Option<&'a Object>,
}

impl<'a> Section<'a> {
    /// Dotted path of this section from the document root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// True when the section is absent or has no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_none_or(Map::is_empty)
    }

    /// Nested object at `key`.
    pub fn section(&self, key: &str) -> Result<Section<'a>> {
        let path = format!("{}.{key}", self.path);
        match self.map.and_then(|map| map.get(key)) {
            None | Some(Value::Null) => Ok(Section { path, map: None }),
            Some(Value::Object(map)) => Ok(Section {
                path,
                map: Some(map),
            }),
            Some(_) => Err(SheetError::structure(path, "an object")),
        }
    }

    /// String at `key`, `""` when absent or not a string.
    pub fn text(&self, key: &str) -> &'a str {
        text_of(self.map.and_then(|map| map.get(key)))
    }

    /// Integer at `key`, `0` when absent or not a number. Fractions truncate.
    pub fn integer(&self, key: &str) -> i64 {
        integer_of(self.map.and_then(|map| map.get(key)))
    }

    /// JSON text of the number at `key`, `"0"` when absent or not a number.
    pub fn number(&self, key: &str) -> String {
        match self.map.and_then(|map| map.get(key)) {
            Some(Value::Number(number)) => number.to_string(),
            _ => "0".to_string(),
        }
    }

    /// True when `key` is absent, not a number, or numerically zero.
    pub fn is_zero(&self, key: &str) -> bool {
        self.map
            .and_then(|map| map.get(key))
            .and_then(Value::as_f64)
            .is_none_or(|number| number == 0.0)
    }
}

/// One entry of the `items` array.
#[derive(Debug, Clone, Copy)]
pub struct SourceItem<'a> {
    index: usize,
    map: &'a Object,
}

impl<'a> SourceItem<'a> {
    /// The item's `type` tag (`race`, `class`, `weapon`, ...).
    pub fn kind(&self) -> &'a str {
        text_of(self.map.get("type"))
    }

    pub fn name(&self) -> &'a str {
        text_of(self.map.get("name"))
    }

    /// The item's own `system` object.
    pub fn system(&self) -> Result<Section<'a>> {
        let path = format!("items[{}].system", self.index);
        match self.map.get("system") {
            None | Some(Value::Null) => Ok(Section { path, map: None }),
            Some(Value::Object(map)) => Ok(Section {
                path,
                map: Some(map),
            }),
            Some(_) => Err(SheetError::structure(path, "an object")),
        }
    }
}

/// Version stamps Foundry writes under `_stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceStats {
    pub core_version: Option<String>,
    pub system_id: Option<String>,
    pub system_version: Option<String>,
}

fn text_of(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or("")
}

fn integer_of(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> SourceDocument {
        SourceDocument::from_value(value).expect("valid document")
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = SourceDocument::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, SheetError::Structure { ref path, .. } if path == "$"));
    }

    #[test]
    fn test_rejects_missing_system() {
        let err = SourceDocument::from_value(json!({ "name": "Aria" })).unwrap_err();
        assert!(matches!(err, SheetError::Structure { ref path, .. } if path == "system"));
    }

    #[test]
    fn test_rejects_scalar_system() {
        let err = SourceDocument::from_value(json!({ "system": "dnd5e" })).unwrap_err();
        assert!(matches!(err, SheetError::Structure { ref path, .. } if path == "system"));
    }

    #[test]
    fn test_from_reader_reports_parse_errors() {
        let err = SourceDocument::from_reader("{\"system\": ".as_bytes()).unwrap_err();
        assert!(matches!(err, SheetError::Json(_)));
    }

    #[test]
    fn test_missing_fields_read_as_defaults() {
        let source = doc(json!({ "system": {} }));
        assert_eq!(source.name(), "");
        let hp = source
            .system()
            .section("attributes")
            .and_then(|attributes| attributes.section("hp"))
            .unwrap();
        assert!(hp.is_empty());
        assert_eq!(hp.path(), "system.attributes.hp");
        assert_eq!(hp.integer("value"), 0);
        assert_eq!(hp.number("value"), "0");
        assert!(hp.is_zero("max"));
        assert_eq!(hp.text("formula"), "");
    }

    #[test]
    fn test_mistyped_scalars_read_as_defaults() {
        let source = doc(json!({
            "name": 42,
            "system": { "traits": { "size": null }, "attributes": { "hp": { "value": "12" } } }
        }));
        assert_eq!(source.name(), "");
        let system = source.system();
        assert_eq!(system.section("traits").unwrap().text("size"), "");
        let hp = system
            .section("attributes")
            .and_then(|attributes| attributes.section("hp"))
            .unwrap();
        assert_eq!(hp.integer("value"), 0);
    }

    #[test]
    fn test_numbers_keep_json_text() {
        let source = doc(json!({
            "system": { "abilities": { "str": { "value": 14.5, "bonus": 2, "save": "3", "min": 0.0 } } }
        }));
        let strength = source
            .system()
            .section("abilities")
            .and_then(|abilities| abilities.section("str"))
            .unwrap();
        assert_eq!(strength.number("value"), "14.5");
        assert_eq!(strength.number("bonus"), "2");
        assert_eq!(strength.number("save"), "0");
        assert!(!strength.is_zero("value"));
        assert!(strength.is_zero("min"));
        assert!(strength.is_zero("save"));
    }

    #[test]
    fn test_integer_truncates_fractions() {
        let source = doc(json!({ "system": { "levels": 3.7, "xp": -2.5 } }));
        let system = source.system();
        assert_eq!(system.integer("levels"), 3);
        assert_eq!(system.integer("xp"), -2);
    }

    #[test]
    fn test_section_rejects_scalar() {
        let source = doc(json!({ "system": { "spells": 3 } }));
        let err = source.system().section("spells").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed source document at `system.spells`: expected an object"
        );
    }

    #[test]
    fn test_null_section_reads_as_absent() {
        let source = doc(json!({ "system": { "spells": null } }));
        let spells = source.system().section("spells").unwrap();
        assert!(spells.is_empty());
        assert_eq!(spells.integer("value"), 0);
    }

    #[test]
    fn test_items_absent_is_empty() {
        let source = doc(json!({ "system": {} }));
        assert!(source.items().unwrap().is_empty());

        let source = doc(json!({ "system": {}, "items": null }));
        assert!(source.items().unwrap().is_empty());
    }

    #[test]
    fn test_items_must_be_array_of_objects() {
        let source = doc(json!({ "system": {}, "items": {} }));
        assert!(source.items().is_err());

        let source = doc(json!({ "system": {}, "items": [{ "name": "Rope" }, "torch"] }));
        let err = source.items().unwrap_err();
        assert!(matches!(err, SheetError::Structure { ref path, .. } if path == "items[1]"));
    }

    #[test]
    fn test_item_accessors() {
        let source = doc(json!({
            "system": {},
            "items": [{ "type": "class", "name": "Wizard", "system": { "levels": 3, "hitDice": "d6" } }]
        }));
        let items = source.items().unwrap();
        let wizard = items[0];
        assert_eq!(wizard.kind(), "class");
        assert_eq!(wizard.name(), "Wizard");
        let system = wizard.system().unwrap();
        assert_eq!(system.path(), "items[0].system");
        assert_eq!(system.integer("levels"), 3);
        assert_eq!(system.text("hitDice"), "d6");
    }

    #[test]
    fn test_stats_are_read_when_present() {
        let source = doc(json!({
            "system": {},
            "_stats": { "coreVersion": "11.315", "systemId": "dnd5e", "systemVersion": "3.3.1" }
        }));
        let stats = source.stats().unwrap();
        assert_eq!(stats.core_version.as_deref(), Some("11.315"));
        assert_eq!(stats.system_id.as_deref(), Some("dnd5e"));
        assert_eq!(stats.system_version.as_deref(), Some("3.3.1"));

        assert!(doc(json!({ "system": {} })).stats().is_none());
    }
}
