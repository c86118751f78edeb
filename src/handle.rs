//! Scriptable session handle for hosts that draw the board themselves.

use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

use crate::audio::SilentAudio;
use crate::board::to_js;
use crate::dice::{entropy_rng, seeded_rng};
use crate::session::GameSession;
use crate::view::SessionView;

#[wasm_bindgen]
pub struct Battleboard {
    session: GameSession<StdRng, SilentAudio>,
}

#[wasm_bindgen]
impl Battleboard {
    /// New session in the name-entry phase. A seed makes the dice reproducible.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<Battleboard, JsValue> {
        let rng = match seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng().map_err(to_js)?,
        };
        Ok(Battleboard { session: GameSession::new(rng, SilentAudio) })
    }

    pub fn initialize_session(&mut self, first: String, second: String, third: String) -> Result<(), JsValue> {
        self.session.initialize([first, second, third]).map_err(to_js)
    }

    /// Take a turn and return its outcome as JSON.
    pub fn take_turn(&mut self) -> Result<String, JsValue> {
        let outcome = self.session.take_turn().map_err(to_js)?;
        serde_json::to_string(&outcome).map_err(to_js)
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.session.toggle_mute()
    }

    pub fn active_player(&self) -> usize {
        self.session.active_player()
    }

    /// Full render snapshot (players, question, 30 tiles) as JSON.
    pub fn state_json(&self) -> Result<String, JsValue> {
        SessionView::of(&self.session).to_json().map_err(to_js)
    }
}
