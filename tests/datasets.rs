// Invariants of the static zone table and question bank.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use ph_battleboard::{BOARD_TILES, QUESTION_BANK, ZONES, questions_for, resolve_zone};

#[test]
fn zones_partition_the_board() {
    let mut seen = HashSet::new();
    for zone in ZONES.iter() {
        assert!(!zone.tiles.is_empty(), "zone '{}' has no tiles", zone.name);
        for &t in zone.tiles {
            assert!((1..=BOARD_TILES).contains(&t), "tile {} of '{}' is off the board", t, zone.name);
            assert!(seen.insert(t), "tile {} claimed twice (again by '{}')", t, zone.name);
        }
    }
    assert_eq!(seen.len(), BOARD_TILES as usize, "some tiles belong to no zone");
}

#[test]
fn zones_are_contiguous_and_in_board_order() {
    let mut next = 1u8;
    for zone in ZONES.iter() {
        for &t in zone.tiles {
            assert_eq!(t, next, "zone '{}' breaks tile order", zone.name);
            next += 1;
        }
    }
}

#[test]
fn zone_names_and_colours_are_unique() {
    let names: HashSet<_> = ZONES.iter().map(|z| z.name).collect();
    let colours: HashSet<_> = ZONES.iter().map(|z| z.color).collect();
    assert_eq!(names.len(), ZONES.len());
    assert_eq!(colours.len(), ZONES.len());
}

#[test]
fn question_bank_matches_zone_table() {
    assert_eq!(QUESTION_BANK.len(), ZONES.len());
    for (name, questions) in QUESTION_BANK {
        assert!(ZONES.iter().any(|z| z.name == *name), "questions for unknown zone '{}'", name);
        assert!(!questions.is_empty(), "no questions for '{}'", name);
        for q in questions.iter() {
            assert!(!q.trim().is_empty(), "blank question in '{}'", name);
        }
    }
    assert_eq!(questions_for("Salt Citadel").map(|q| q.len()), Some(4));
    assert_eq!(questions_for("Acid Arena").map(|q| q.len()), Some(3));
}

#[test]
fn every_tile_has_a_question_set() {
    for tile in 1..=BOARD_TILES {
        let zone = resolve_zone(tile).unwrap();
        assert!(questions_for(zone.name).is_some(), "tile {} in '{}' has no questions", tile, zone.name);
    }
}
