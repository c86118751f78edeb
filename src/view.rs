//! Render-ready snapshot of a session.
//!
//! The DOM layer and the scriptable `Battleboard` handle both render from a
//! `SessionView`, never from the session internals.

use serde::Serialize;

use crate::session::{GameSession, PLAYER_ICONS, Phase};
use crate::zones::{BOARD_TILES, resolve_zone, tile_class_for};

#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub label: String,
    pub icon: &'static str,
    pub position: u8,
    pub score: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct TileView {
    pub number: u8,
    pub zone: Option<&'static str>,
    pub class: String,
    /// Icons of the players standing here, in player order.
    pub occupants: Vec<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub turn_label: String,
    pub turn_icon: &'static str,
    /// Last roll, 0 before the first turn.
    pub dice: u8,
    pub players: Vec<PlayerView>,
    pub question: Option<&'static str>,
    pub muted: bool,
    pub mute_label: &'static str,
    pub tiles: Vec<TileView>,
}

pub fn mute_label(muted: bool) -> &'static str {
    if muted { "🔇 Mute" } else { "🔊 Sound" }
}

impl SessionView {
    pub fn of<R, A>(session: &GameSession<R, A>) -> Self {
        let labels = session.labels();
        let players: Vec<PlayerView> = session
            .players()
            .iter()
            .zip(labels.iter())
            .zip(PLAYER_ICONS.iter())
            .map(|((p, label), icon)| PlayerView {
                label: label.clone(),
                icon: *icon,
                position: p.position,
                score: p.score,
            })
            .collect();

        let tiles = (1..=BOARD_TILES)
            .map(|number| TileView {
                number,
                zone: resolve_zone(number).map(|z| z.name),
                class: tile_class_for(number),
                occupants: players
                    .iter()
                    .filter(|p| p.position == number)
                    .map(|p| p.icon)
                    .collect(),
            })
            .collect();

        let active = session.active_player();
        Self {
            phase: session.phase(),
            turn_label: labels[active].clone(),
            turn_icon: PLAYER_ICONS[active],
            dice: session.last_dice().unwrap_or(0),
            players,
            question: session.current_question(),
            muted: session.sound_muted(),
            mute_label: mute_label(session.sound_muted()),
            tiles,
        }
    }

    pub fn turn_line(&self) -> String {
        format!("🎲 Turn: {} {}", self.turn_label, self.turn_icon)
    }

    pub fn dice_line(&self) -> String {
        format!("Dice Roll: {}", self.dice)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl PlayerView {
    pub fn status_line(&self) -> String {
        format!("{} {} - Tile: {} | Score: {}", self.label, self.icon, self.position, self.score)
    }
}
