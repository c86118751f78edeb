//! Zone table: the 30-tile board split into five themed, coloured zones.
//!
//! Zones are plain static data. Every tile in `1..=BOARD_TILES` belongs to
//! exactly one zone; this is checked by the tests below and by
//! `tests/datasets.rs`, not at runtime.

/// Number of tiles on the board. Tiles are numbered `1..=BOARD_TILES`.
pub const BOARD_TILES: u8 = 30;

/// Tile every player starts on.
pub const START_TILE: u8 = 1;

/// Background class used for a tile that no zone claims.
pub const UNZONED_TILE_CLASS: &str = "bg-gray-200";

/// A named, coloured group of board tiles with its own question set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zone {
    pub name: &'static str,
    pub color: &'static str,
    pub tiles: &'static [u8],
}

impl Zone {
    pub fn contains(&self, tile: u8) -> bool {
        self.tiles.contains(&tile)
    }

    /// CSS background class for this zone's tiles (e.g. `bg-red-200`).
    pub fn tile_class(&self) -> String {
        format!("bg-{}-200", self.color)
    }
}

pub static ZONES: [Zone; 5] = [
    Zone { name: "Salt Citadel", color: "white", tiles: &[1, 2, 3, 4, 5, 6] },
    Zone { name: "Acid Arena", color: "red", tiles: &[7, 8, 9, 10, 11, 12] },
    Zone { name: "Base Bay", color: "blue", tiles: &[13, 14, 15, 16, 17, 18] },
    Zone { name: "pH Pit", color: "green", tiles: &[19, 20, 21, 22, 23, 24] },
    Zone { name: "Reaction Ridge", color: "yellow", tiles: &[25, 26, 27, 28, 29, 30] },
];

/// Find the zone covering `tile` (first match in table order).
pub fn resolve_zone(tile: u8) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.contains(tile))
}

pub fn zone_named(name: &str) -> Option<&'static Zone> {
    ZONES.iter().find(|z| z.name == name)
}

/// Background class for a board cell, falling back to grey outside every zone.
pub fn tile_class_for(tile: u8) -> String {
    resolve_zone(tile)
        .map(Zone::tile_class)
        .unwrap_or_else(|| UNZONED_TILE_CLASS.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tile_resolves_to_exactly_one_zone() {
        for tile in 1..=BOARD_TILES {
            let owners = ZONES.iter().filter(|z| z.contains(tile)).count();
            assert_eq!(owners, 1, "tile {} owned by {} zones", tile, owners);
            assert!(resolve_zone(tile).is_some());
        }
    }

    #[test]
    fn tiles_outside_board_have_no_zone() {
        assert!(resolve_zone(0).is_none());
        assert!(resolve_zone(BOARD_TILES + 1).is_none());
        assert_eq!(tile_class_for(0), UNZONED_TILE_CLASS);
    }

    #[test]
    fn resolve_zone_is_stable() {
        for tile in 1..=BOARD_TILES {
            assert_eq!(resolve_zone(tile), resolve_zone(tile));
        }
    }

    #[test]
    fn zone_boundaries() {
        assert_eq!(resolve_zone(6).map(|z| z.name), Some("Salt Citadel"));
        assert_eq!(resolve_zone(7).map(|z| z.name), Some("Acid Arena"));
        assert_eq!(resolve_zone(18).map(|z| z.name), Some("Base Bay"));
        assert_eq!(resolve_zone(19).map(|z| z.name), Some("pH Pit"));
        assert_eq!(resolve_zone(30).map(|z| z.name), Some("Reaction Ridge"));
    }

    #[test]
    fn tile_classes_follow_zone_colour() {
        assert_eq!(tile_class_for(1), "bg-white-200");
        assert_eq!(tile_class_for(12), "bg-red-200");
        assert_eq!(zone_named("pH Pit").map(|z| z.tile_class()), Some("bg-green-200".to_string()));
    }
}
