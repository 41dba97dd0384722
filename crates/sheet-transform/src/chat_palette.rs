//! Chat palette text.
//!
//! `{...}` references are resolved by Udonarium against the sheet's own node
//! names when a line is used, so they stay literal here.

use sheet_model::SourceItem;

use crate::lineage::Lineage;

/// Fixed roll shortcuts heading every palette.
pub const TEMPLATE_LINES: [&str; 33] = [
    "1d20+{イニシアチブ}",
    "▼AC:{AC}",
    "移動速度：{移動速度}",
    "■能力値判定=====================================",
    "1d20+({【筋力】}-10)/2R ▼【筋力】能力値判定",
    "1d20+({【敏捷力】}-10)/2R ▼【敏捷力】能力値判定",
    "1d20+({【耐久力】}-10)/2R ▼【耐久力】能力値判定",
    "1d20+({【知力】}-10)/2R ▼【知力】能力値判定",
    "1d20+({【判断力】}-10)/2R ▼【判断力】能力値判定",
    "1d20+({【魅力】}-10)/2R ▼【魅力】能力値判定",
    "■技能============================================",
    "1d20+{〈威圧〉} ▼〈威圧〉能力値判定",
    "1d20+{〈医術〉} ▼〈医術〉能力値判定",
    "1d20+{〈運動〉} ▼〈運動〉能力値判定",
    "1d20+{〈隠密〉} ▼〈隠密〉能力値判定",
    "1d20+{〈軽業〉} ▼〈軽業〉能力値判定",
    "1d20+{〈看破〉} ▼〈看破〉能力値判定",
    "1d20+{〈芸能〉} ▼〈芸能〉能力値判定",
    "1d20+{〈自然〉} ▼〈自然〉能力値判定",
    "1d20+{〈宗教〉} ▼〈宗教〉能力値判定",
    "1d20+{〈生存〉} ▼〈生存〉能力値判定",
    "1d20+{〈説得〉} ▼〈説得〉能力値判定",
    "1d20+{〈捜査〉} ▼〈捜査〉能力値判定",
    "1d20+{〈知覚〉} ▼〈知覚〉能力値判定",
    "1d20+{〈手先の早業〉} ▼〈手先の早業〉能力値判定",
    "1d20+{〈動物使い〉} ▼〈動物使い〉能力値判定",
    "1d20+{〈ペテン〉} ▼〈ペテン〉能力値判定",
    "1d20+{〈魔法学〉} ▼〈魔法学〉能力値判定",
    "1d20+{〈歴史〉} ▼〈歴史〉能力値判定",
    "■呪文============================================",
    "{呪文セーブ} ",
    "1d20+{呪文攻撃ロール} ▼呪文攻撃ロール",
    "■その他============================================",
];

/// Template followed by the race line, the class line and one line per named
/// item, trimmed at both ends.
pub fn chat_palette_text(lineage: &Lineage<'_>, items: &[SourceItem<'_>]) -> String {
    let mut lines: Vec<String> = TEMPLATE_LINES.iter().map(|line| (*line).to_string()).collect();
    if !lineage.race.is_empty() {
        lines.push(lineage.race.to_string());
    }
    if !lineage.classes.is_empty() {
        lines.push(lineage.class_names());
    }
    lines.extend(
        items
            .iter()
            .map(SourceItem::name)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
    );

    lines.join("\n").trim().to_string()
}
