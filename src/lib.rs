//! PH Battleboard core crate.
//!
//! Three players race along a 30-tile board split into five chemistry zones
//! (salts, acids, bases, pH, reactions). Every roll lands the active player in
//! a zone and draws one of that zone's quiz questions.
//!
//! The game rules live in [`session`], [`zones`] and [`questions`] and are
//! plain Rust, testable on the host. [`board`] mounts the browser UI and
//! [`handle`] exposes a scriptable session to JavaScript.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod board;
pub mod config;
pub mod dice;
pub mod error;
pub mod handle;
pub mod logging;
pub mod questions;
pub mod session;
pub mod view;
pub mod zones;

pub use audio::{AudioSink, SilentAudio};
pub use config::WebConfig;
pub use dice::{DIE_FACES, RandomSource, entropy_rng, roll_die, seeded_rng};
pub use error::SessionError;
pub use handle::Battleboard;
pub use questions::{QUESTION_BANK, draw_question, questions_for};
pub use session::{GameSession, PLAYER_COUNT, PLAYER_ICONS, Phase, PlayerState, TurnOutcome};
pub use view::{PlayerView, SessionView, TileView};
pub use zones::{BOARD_TILES, START_TILE, ZONES, Zone, resolve_zone, zone_named};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init_console_logging();
}

/// Mount the game with the default configuration.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    board::start_board(WebConfig::default())
}

/// Mount the game with a JSON [`WebConfig`]; missing keys keep their defaults.
#[wasm_bindgen]
pub fn start_game_with_config(config_json: &str) -> Result<(), JsValue> {
    let cfg = WebConfig::from_json(config_json).map_err(board::to_js)?;
    board::start_board(cfg)
}
