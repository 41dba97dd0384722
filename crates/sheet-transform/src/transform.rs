//! Foundry VTT actor to Udonarium character transform.

use sheet_model::{
    CHARACTER_ELEMENT, ChatPalette, DICEBOT_DND5E, DestinationTree, LabeledNode, Result, Section,
    SourceDocument, SourceStats,
};
use tracing::{debug, debug_span, warn};

use crate::chat_palette::chat_palette_text;
use crate::lineage::Lineage;
use crate::spells::spells_section;
use crate::tables::{
    ABILITIES, ACTION_SIZE, ALIGNMENT, ALIGNMENT_SUFFIX, ARMOR_CLASS, CLASS, CONDITIONS, HIT_DICE,
    HIT_POINTS, IMAGE_IDENTIFIER, INITIATIVE, INITIATIVE_MODIFIER, INSPIRATION, LEVEL, NAME,
    PLAYER, PROFICIENCY_BONUS, RACE, SECTION_ABILITIES, SECTION_ACTION, SECTION_BASIC,
    SECTION_COMMON, SECTION_DETAIL, SECTION_IMAGE, SECTION_SAVES, SECTION_SKILLS, SECTION_TRAITS,
    SIZE, SKILLS, SPEED, SPELL_ATTACK, SPELL_SAVE, TEMPORARY_HIT_POINTS, TRAIT_PLACEHOLDERS, TRAITS,
};

/// Game system the field mapping was written against.
pub const REFERENCE_SYSTEM_ID: &str = "dnd5e";

/// Major version of the dnd5e system the field mapping was written against (3.3.1).
pub const REFERENCE_SYSTEM_MAJOR: &str = "3";

/// Convert an actor export into a Udonarium character tree.
///
/// Missing fields are filled with `""` or `0`. Fails only when a container the
/// mapping descends into has the wrong shape.
pub fn transform(source: &SourceDocument) -> Result<DestinationTree> {
    let span = debug_span!("transform", character = %source.name());
    let _guard = span.enter();

    if let Some(stats) = source.stats() {
        debug!(
            core_version = stats.core_version.as_deref().unwrap_or("-"),
            system_id = stats.system_id.as_deref().unwrap_or("-"),
            system_version = stats.system_version.as_deref().unwrap_or("-"),
            "source versions"
        );
        for message in version_warnings(&stats) {
            warn!("{message}");
        }
    }

    let system = source.system();
    let traits = system.section("traits")?;
    let details = system.section("details")?;
    let items = source.items()?;
    let lineage = Lineage::from_items(&items)?;
    let size = traits.text("size");
    debug!(
        item_count = items.len(),
        class_count = lineage.classes.len(),
        "collected items"
    );

    let detail = LabeledNode::section(
        SECTION_DETAIL,
        vec![
            basic_section(&lineage, &details),
            abilities_section(&system.section("abilities")?)?,
            action_section(&system, size, &lineage)?,
            skills_section(),
            saving_throws_section(),
            traits_section(&details),
            spells_section(&system.section("spells")?)?,
        ],
    );
    let character = LabeledNode::section(
        CHARACTER_ELEMENT,
        vec![
            LabeledNode::section(SECTION_IMAGE, vec![LabeledNode::empty(IMAGE_IDENTIFIER)]),
            LabeledNode::section(
                SECTION_COMMON,
                vec![
                    LabeledNode::value(NAME, source.name()),
                    LabeledNode::value(SIZE, size),
                ],
            ),
            detail,
        ],
    );
    let chat_palette = ChatPalette {
        dicebot: DICEBOT_DND5E.to_string(),
        text: chat_palette_text(&lineage, &items),
    };
    debug!(
        palette_lines = chat_palette.text.lines().count(),
        "character tree built"
    );

    Ok(DestinationTree {
        character,
        chat_palette,
    })
}

/// Mismatches between the export's `_stats` and the reference system.
///
/// Only reported; conversion proceeds with default filling either way.
pub fn version_warnings(stats: &SourceStats) -> Vec<String> {
    let mut warnings = Vec::new();
    if let Some(system_id) = stats.system_id.as_deref() {
        if system_id != REFERENCE_SYSTEM_ID {
            warnings.push(format!(
                "export is from game system `{system_id}`, fields are mapped for `{REFERENCE_SYSTEM_ID}`"
            ));
        }
    }
    if let Some(version) = stats.system_version.as_deref() {
        let major = version.split('.').next().unwrap_or_default();
        if major != REFERENCE_SYSTEM_MAJOR {
            warnings.push(format!(
                "system version {version} differs from {REFERENCE_SYSTEM_ID} {REFERENCE_SYSTEM_MAJOR}.x, \
                 some fields may fall back to defaults"
            ));
        }
    }
    warnings
}

/// Alignment text without the locale suffix, every occurrence removed.
pub fn strip_alignment_suffix(alignment: &str) -> String {
    alignment.replace(ALIGNMENT_SUFFIX, "")
}

fn basic_section(lineage: &Lineage<'_>, details: &Section<'_>) -> LabeledNode {
    LabeledNode::section(
        SECTION_BASIC,
        vec![
            LabeledNode::value(RACE, lineage.race),
            LabeledNode::value(CLASS, lineage.class_names()),
            LabeledNode::value(LEVEL, lineage.total_level().to_string()),
            LabeledNode::value(ALIGNMENT, strip_alignment_suffix(details.text("alignment"))),
            LabeledNode::value(PLAYER, ""),
        ],
    )
}

fn abilities_section(abilities: &Section<'_>) -> Result<LabeledNode> {
    let mut section = LabeledNode::empty(SECTION_ABILITIES);
    for (code, label) in ABILITIES {
        let score = abilities.section(code)?.number("value");
        section.push(LabeledNode::value(label, score));
    }
    Ok(section)
}

fn action_section(system: &Section<'_>, size: &str, lineage: &Lineage<'_>) -> Result<LabeledNode> {
    let hp = system.section("attributes")?.section("hp")?;
    Ok(LabeledNode::section(
        SECTION_ACTION,
        vec![
            LabeledNode::value(ARMOR_CLASS, ""),
            LabeledNode::resource(HIT_POINTS, hp.number("value"), hp.number("max")),
            LabeledNode::resource(TEMPORARY_HIT_POINTS, 0, 0),
            LabeledNode::value(HIT_DICE, lineage.hit_dice()),
            LabeledNode::resource(INSPIRATION, 0, 1),
            LabeledNode::value(PROFICIENCY_BONUS, ""),
            LabeledNode::value(SPELL_ATTACK, ""),
            LabeledNode::value(SPELL_SAVE, ""),
            LabeledNode::value(ACTION_SIZE, size),
            LabeledNode::value(SPEED, ""),
            LabeledNode::value(INITIATIVE, ""),
            LabeledNode::value(INITIATIVE_MODIFIER, ""),
            LabeledNode::value(CONDITIONS, ""),
        ],
    ))
}

fn skills_section() -> LabeledNode {
    LabeledNode::section(
        SECTION_SKILLS,
        SKILLS
            .iter()
            .map(|(_, label)| LabeledNode::value(*label, ""))
            .collect(),
    )
}

fn saving_throws_section() -> LabeledNode {
    LabeledNode::section(
        SECTION_SAVES,
        ABILITIES
            .iter()
            .map(|(_, label)| LabeledNode::value(*label, ""))
            .collect(),
    )
}

fn traits_section(details: &Section<'_>) -> LabeledNode {
    let mut section = LabeledNode::empty(SECTION_TRAITS);
    for (key, label) in TRAITS {
        section.push(LabeledNode::value(label, details.text(key)));
    }
    for label in TRAIT_PLACEHOLDERS {
        section.push(LabeledNode::value(label, ""));
    }
    section
}
