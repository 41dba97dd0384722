use std::path::PathBuf;

use sheet_model::DestinationTree;
use sheet_transform::tables::{
    CLASS, HIT_DICE, LEVEL, NAME, RACE, SECTION_ACTION, SECTION_BASIC, SECTION_COMMON,
    SECTION_DETAIL,
};

/// What one conversion produced, for the summary table.
#[derive(Debug)]
pub struct ConvertResult {
    pub character: String,
    pub race: String,
    pub classes: String,
    pub level: String,
    pub hit_dice: String,
    pub output_path: PathBuf,
    pub bytes: usize,
    pub written: bool,
}

impl ConvertResult {
    pub fn new(tree: &DestinationTree, output_path: PathBuf, bytes: usize, written: bool) -> Self {
        let text = |path: &[&str]| tree.text_at(path).unwrap_or_default().to_string();
        Self {
            character: text(&[SECTION_COMMON, NAME]),
            race: text(&[SECTION_DETAIL, SECTION_BASIC, RACE]),
            classes: text(&[SECTION_DETAIL, SECTION_BASIC, CLASS]),
            level: text(&[SECTION_DETAIL, SECTION_BASIC, LEVEL]),
            hit_dice: text(&[SECTION_DETAIL, SECTION_ACTION, HIT_DICE]),
            output_path,
            bytes,
            written,
        }
    }
}
