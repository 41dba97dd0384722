//! Race and class aggregation over the actor's embedded items.

use sheet_model::{Result, SourceItem};

/// Item `type` tag marking the character's race.
pub const RACE_ITEM: &str = "race";

/// Item `type` tag marking a class the character has levels in.
pub const CLASS_ITEM: &str = "class";

/// One class item's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEntry<'a> {
    pub name: &'a str,
    pub levels: i64,
    pub hit_die: &'a str,
}

impl ClassEntry<'_> {
    /// `"{levels}{hit_die}"`, or `None` when either side is unusable.
    pub fn hit_dice(&self) -> Option<String> {
        (self.levels > 0 && !self.hit_die.is_empty())
            .then(|| format!("{}{}", self.levels, self.hit_die))
    }
}

/// Race and classes collected from `items`, classes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lineage<'a> {
    /// Name of the first race item, `""` when there is none.
    pub race: &'a str,
    pub classes: Vec<ClassEntry<'a>>,
}

impl<'a> Lineage<'a> {
    pub fn from_items(items: &[SourceItem<'a>]) -> Result<Self> {
        let race = items
            .iter()
            .find(|item| item.kind() == RACE_ITEM)
            .map(SourceItem::name)
            .unwrap_or("");

        let mut classes = Vec::new();
        for item in items.iter().filter(|item| item.kind() == CLASS_ITEM) {
            let system = item.system()?;
            classes.push(ClassEntry {
                name: item.name(),
                levels: system.integer("levels"),
                hit_die: system.text("hitDice"),
            });
        }
        Ok(Self { race, classes })
    }

    /// Class names joined with `", "` ("Wizard, Fighter").
    pub fn class_names(&self) -> String {
        self.classes
            .iter()
            .map(|class| class.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Sum of class levels, saturating at the `i64` bounds.
    pub fn total_level(&self) -> i64 {
        self.classes
            .iter()
            .fold(0i64, |total, class| total.saturating_add(class.levels))
    }

    /// Hit dice per class ("3d6, 2d10"); classes without levels or a die are dropped.
    pub fn hit_dice(&self) -> String {
        self.classes
            .iter()
            .filter_map(ClassEntry::hit_dice)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &'static str, levels: i64, hit_die: &'static str) -> ClassEntry<'static> {
        ClassEntry {
            name,
            levels,
            hit_die,
        }
    }

    #[test]
    fn test_hit_dice_requires_levels_and_die() {
        assert_eq!(entry("Wizard", 3, "d6").hit_dice().as_deref(), Some("3d6"));
        assert_eq!(entry("Wizard", 0, "d6").hit_dice(), None);
        assert_eq!(entry("Wizard", 3, "").hit_dice(), None);
        assert_eq!(entry("Wizard", -1, "d6").hit_dice(), None);
    }

    #[test]
    fn test_multiclass_aggregation() {
        let lineage = Lineage {
            race: "Elf",
            classes: vec![entry("Wizard", 3, "d6"), entry("Fighter", 2, "d10")],
        };
        assert_eq!(lineage.class_names(), "Wizard, Fighter");
        assert_eq!(lineage.total_level(), 5);
        assert_eq!(lineage.hit_dice(), "3d6, 2d10");
    }

    #[test]
    fn test_dropped_entries_leave_no_separator() {
        let lineage = Lineage {
            race: "",
            classes: vec![
                entry("Rogue", 0, "d8"),
                entry("Cleric", 4, "d8"),
                entry("Monk", 1, ""),
            ],
        };
        assert_eq!(lineage.hit_dice(), "4d8");
        assert_eq!(lineage.total_level(), 5);
    }

    #[test]
    fn test_total_level_saturates() {
        let lineage = Lineage {
            race: "",
            classes: vec![entry("Wizard", i64::MAX, "d6"), entry("Fighter", 1, "d10")],
        };
        assert_eq!(lineage.total_level(), i64::MAX);

        let lineage = Lineage {
            race: "",
            classes: vec![entry("Wizard", i64::MIN, "d6"), entry("Fighter", -1, "d10")],
        };
        assert_eq!(lineage.total_level(), i64::MIN);
    }

    #[test]
    fn test_no_classes() {
        let lineage = Lineage::default();
        assert_eq!(lineage.class_names(), "");
        assert_eq!(lineage.total_level(), 0);
        assert_eq!(lineage.hit_dice(), "");
    }
}
