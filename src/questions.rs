//! Question bank keyed by zone name.

use crate::dice::RandomSource;
use crate::zones::Zone;

pub static QUESTION_BANK: &[(&str, &[&str])] = &[
    (
        "Salt Citadel",
        &[
            "Define salt and give an example.",
            "Write the formula for common salt.",
            "Use of washing soda?",
            "Use of sodium bicarbonate?",
        ],
    ),
    (
        "Acid Arena",
        &[
            "What is a monobasic acid?",
            "Which acid is found in vinegar?",
            "Reaction: HCl + Zn → ?",
        ],
    ),
    (
        "Base Bay",
        &[
            "What is an Arrhenius base?",
            "Why is NH4OH not a strong base?",
            "Drawbacks of Arrhenius theory?",
        ],
    ),
    (
        "pH Pit",
        &[
            "pH of blood?",
            "Color of methyl orange in base?",
            "Role of pH in digestion?",
        ],
    ),
    (
        "Reaction Ridge",
        &[
            "Define neutralization reaction.",
            "HCl + NaOH → ?",
            "Precipitation reaction?",
        ],
    ),
];

pub fn questions_for(zone_name: &str) -> Option<&'static [&'static str]> {
    QUESTION_BANK
        .iter()
        .find(|(name, _)| *name == zone_name)
        .map(|(_, qs)| *qs)
}

/// Draw one of the zone's questions uniformly at random.
/// Returns `None` when the zone has no (or an empty) bank entry.
pub fn draw_question<S: RandomSource + ?Sized>(zone: &Zone, rng: &mut S) -> Option<&'static str> {
    let list = questions_for(zone.name).filter(|qs| !qs.is_empty())?;
    Some(list[rng.next_index(list.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::seeded_rng;
    use crate::zones::{ZONES, zone_named};

    #[test]
    fn every_zone_has_questions() {
        for zone in ZONES.iter() {
            let qs = questions_for(zone.name).unwrap_or_default();
            assert!(!qs.is_empty(), "no questions for {}", zone.name);
        }
    }

    #[test]
    fn draws_come_from_the_zone_list() {
        let mut rng = seeded_rng(3);
        let acid = zone_named("Acid Arena").unwrap();
        let list = questions_for(acid.name).unwrap();
        for _ in 0..50 {
            let q = draw_question(acid, &mut rng).unwrap();
            assert!(list.contains(&q));
        }
    }

    #[test]
    fn unknown_zone_draws_nothing() {
        let ghost = Zone { name: "Ghost Gulch", color: "gray", tiles: &[] };
        assert!(draw_question(&ghost, &mut seeded_rng(1)).is_none());
    }
}
