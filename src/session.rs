//! Game session controller.
//!
//! `GameSession` owns every piece of mutable game state and is only changed
//! through `initialize`, `take_turn` and `toggle_mute`. Randomness and audio
//! are injected so a session can be driven deterministically.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::audio::AudioSink;
use crate::dice::{RandomSource, roll_die};
use crate::error::SessionError;
use crate::questions::draw_question;
use crate::zones::{BOARD_TILES, START_TILE, resolve_zone};

pub const PLAYER_COUNT: usize = 3;

/// Marker shown next to each player's name and on the board.
pub const PLAYER_ICONS: [&str; PLAYER_COUNT] = ["🧪", "⚗️", "🔬"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NameEntry,
    Playing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub name: String,
    pub position: u8,
    /// Turns taken so far; the game's only score.
    pub score: u32,
}

impl PlayerState {
    fn new(name: String) -> Self {
        Self { name, position: START_TILE, score: 0 }
    }

    /// Display label; an empty name falls back to "Player N" (1-based).
    pub fn label(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("Player {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub player: usize,
    pub dice: u8,
    pub from: u8,
    pub to: u8,
    /// False when the roll overshot the last tile and was discarded.
    pub moved: bool,
    pub zone: Option<&'static str>,
    pub question: Option<&'static str>,
}

pub struct GameSession<R, A> {
    players: [PlayerState; PLAYER_COUNT],
    active_player: usize,
    last_dice: Option<u8>,
    current_question: Option<&'static str>,
    phase: Phase,
    sound_muted: bool,
    rng: R,
    audio: A,
}

impl<R: RandomSource, A: AudioSink> GameSession<R, A> {
    /// Fresh session in the name-entry phase.
    pub fn new(rng: R, audio: A) -> Self {
        Self {
            players: std::array::from_fn(|_| PlayerState::new(String::new())),
            active_player: 0,
            last_dice: None,
            current_question: None,
            phase: Phase::NameEntry,
            sound_muted: false,
            rng,
            audio,
        }
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.sound_muted = muted;
        self
    }

    /// Leave the name-entry phase with the given player names (empty is fine).
    pub fn initialize<N: Into<String>>(&mut self, names: [N; PLAYER_COUNT]) -> Result<(), SessionError> {
        if self.phase == Phase::Playing {
            return Err(SessionError::AlreadyStarted);
        }
        self.players = names.map(|n| PlayerState::new(n.into()));
        self.active_player = 0;
        self.last_dice = None;
        self.current_question = None;
        self.phase = Phase::Playing;
        if !self.sound_muted {
            self.audio.set_music_playing(true);
        }
        info!(players = ?self.labels(), "session started");
        Ok(())
    }

    /// Roll for the active player, move (unless overshooting), draw a question
    /// for the landing zone and pass the turn on.
    pub fn take_turn(&mut self) -> Result<TurnOutcome, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::NotStarted);
        }
        if !self.sound_muted {
            self.audio.play_effect();
        }

        let idx = self.active_player;
        let dice = roll_die(&mut self.rng);
        let from = self.players[idx].position;
        let candidate = from + dice;
        let moved = candidate <= BOARD_TILES;
        if moved {
            self.players[idx].position = candidate;
        } else {
            debug!(player = idx, from, dice, "roll overshoots last tile; staying put");
        }
        self.players[idx].score += 1;

        let to = self.players[idx].position;
        let zone = resolve_zone(to);
        self.current_question = match zone {
            Some(z) => draw_question(z, &mut self.rng),
            None => {
                warn!(tile = to, "tile belongs to no zone; clearing question");
                None
            }
        };

        self.active_player = (idx + 1) % PLAYER_COUNT;
        self.last_dice = Some(dice);
        debug!(player = idx, dice, from, to, zone = zone.map(|z| z.name), "turn taken");

        Ok(TurnOutcome {
            player: idx,
            dice,
            from,
            to,
            moved,
            zone: zone.map(|z| z.name),
            question: self.current_question,
        })
    }

    /// Flip the mute flag and, once playing, start/pause background music to
    /// match. Returns the new muted state.
    pub fn toggle_mute(&mut self) -> bool {
        self.sound_muted = !self.sound_muted;
        if self.phase == Phase::Playing {
            self.audio.set_music_playing(!self.sound_muted);
        }
        self.sound_muted
    }
}

impl<R, A> GameSession<R, A> {
    pub fn players(&self) -> &[PlayerState; PLAYER_COUNT] {
        &self.players
    }

    pub fn active_player(&self) -> usize {
        self.active_player
    }

    pub fn last_dice(&self) -> Option<u8> {
        self.last_dice
    }

    pub fn current_question(&self) -> Option<&'static str> {
        self.current_question
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn names_entered(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn sound_muted(&self) -> bool {
        self.sound_muted
    }

    pub fn labels(&self) -> [String; PLAYER_COUNT] {
        std::array::from_fn(|i| self.players[i].label(i))
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
