//! Fixed label tables for the Udonarium dnd5e sheet.
//!
//! Every table is an ordered array: destination sibling order follows
//! declaration order.

/// Foundry ability key to ability label.
pub const ABILITIES: [(&str, &str); 6] = [
    ("str", "【筋力】"),
    ("dex", "【敏捷力】"),
    ("con", "【耐久力】"),
    ("int", "【知力】"),
    ("wis", "【判断力】"),
    ("cha", "【魅力】"),
];

/// Foundry skill key to skill label. Values are not carried over.
pub const SKILLS: [(&str, &str); 18] = [
    ("acr", "〈軽業〉"),
    ("ani", "〈動物使い〉"),
    ("arc", "〈魔法学〉"),
    ("ath", "〈運動〉"),
    ("dec", "〈ペテン〉"),
    ("his", "〈歴史〉"),
    ("ins", "〈看破〉"),
    ("itm", "〈威圧〉"),
    ("inv", "〈捜査〉"),
    ("med", "〈医術〉"),
    ("nat", "〈自然〉"),
    ("prc", "〈知覚〉"),
    ("prf", "〈芸能〉"),
    ("per", "〈説得〉"),
    ("rel", "〈宗教〉"),
    ("slt", "〈手先の早業〉"),
    ("ste", "〈隠密〉"),
    ("sur", "〈生存〉"),
];

/// `system.details` key to personality label.
pub const TRAITS: [(&str, &str); 4] = [
    ("ideal", "尊ぶもの"),
    ("trait", "人格的特徴"),
    ("bond", "関わり深いもの"),
    ("flaw", "弱味"),
];

/// Personality nodes with no Foundry counterpart, emitted empty after [`TRAITS`].
pub const TRAIT_PLACEHOLDERS: [&str; 4] = ["背景", "その他設定など", "その他の習熟と言語", "特徴・特性"];

/// Locale suffix stripped from alignment text ("秩序属性・善" -> "秩序・善").
pub const ALIGNMENT_SUFFIX: &str = "属性";

pub const SECTION_IMAGE: &str = "image";
pub const SECTION_COMMON: &str = "common";
pub const SECTION_DETAIL: &str = "detail";
pub const SECTION_BASIC: &str = "基本";
pub const SECTION_ABILITIES: &str = "能力値";
pub const SECTION_ACTION: &str = "行動データ";
pub const SECTION_SKILLS: &str = "技能";
pub const SECTION_SAVES: &str = "セーヴィングスロー";
pub const SECTION_TRAITS: &str = "特徴等";
pub const SECTION_SPELLS: &str = "呪文";

pub const IMAGE_IDENTIFIER: &str = "imageIdentifier";
pub const NAME: &str = "name";
pub const SIZE: &str = "size";

pub const RACE: &str = "種族";
pub const CLASS: &str = "クラス";
pub const LEVEL: &str = "レベル";
pub const ALIGNMENT: &str = "属性";
pub const PLAYER: &str = "プレイヤー";

pub const ARMOR_CLASS: &str = "AC";
pub const HIT_POINTS: &str = "ヒット・ポイント";
pub const TEMPORARY_HIT_POINTS: &str = "一時HP";
pub const HIT_DICE: &str = "ヒット・ダイス";
pub const INSPIRATION: &str = "インスピレーション";
pub const PROFICIENCY_BONUS: &str = "習熟ボーナス";
pub const SPELL_ATTACK: &str = "呪文攻撃ロール";
pub const SPELL_SAVE: &str = "呪文セーブ";
pub const ACTION_SIZE: &str = "サイズ";
pub const SPEED: &str = "移動速度";
pub const INITIATIVE: &str = "イニシアチブ";
pub const INITIATIVE_MODIFIER: &str = "イニシアチブ修正";
pub const CONDITIONS: &str = "状態異常";

pub const CANTRIPS: &str = "初級呪文";
pub const SPELL_SLOT: &str = "スロット";
pub const SPELL_DUMMY: &str = "dummy";

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_tables_have_unique_labels() {
        let abilities: BTreeSet<_> = ABILITIES.iter().map(|(_, label)| label).collect();
        assert_eq!(abilities.len(), ABILITIES.len());
        let skills: BTreeSet<_> = SKILLS.iter().map(|(_, label)| label).collect();
        assert_eq!(skills.len(), SKILLS.len());
        let skill_codes: BTreeSet<_> = SKILLS.iter().map(|(code, _)| code).collect();
        assert_eq!(skill_codes.len(), SKILLS.len());
    }

    #[test]
    fn test_ability_order_is_sheet_order() {
        let codes: Vec<_> = ABILITIES.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes, ["str", "dex", "con", "int", "wis", "cha"]);
    }
}
