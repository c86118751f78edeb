// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement, window};

wasm_bindgen_test_configure!(run_in_browser);

fn doc() -> web_sys::Document {
    window().unwrap().document().unwrap()
}

fn click(id: &str) {
    doc().get_element_by_id(id).unwrap().dyn_into::<HtmlElement>().unwrap().click();
}

fn text(id: &str) -> String {
    doc().get_element_by_id(id).unwrap().text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn name_entry_then_roll() {
    ph_battleboard::start_game_with_config(r#"{"root_id": "pb-test", "start_muted": true}"#).unwrap();
    assert!(doc().get_element_by_id("pb-roll").is_none());

    let first: HtmlInputElement = doc().get_element_by_id("pb-name-0").unwrap().dyn_into().unwrap();
    assert_eq!(first.placeholder(), "Player 1");
    first.set_value("Ada");
    click("pb-start");

    assert_eq!(text("pb-turn"), "🎲 Turn: Ada 🧪");
    assert_eq!(text("pb-dice"), "Dice Roll: 0");
    assert_eq!(text("pb-mute"), "🔇 Mute");

    click("pb-roll");
    assert!(text("pb-turn").contains("Player 2"));
    assert_ne!(text("pb-dice"), "Dice Roll: 0");
    assert!(text("pb-question").starts_with("Question:"));
    assert_eq!(doc().get_element_by_id("pb-grid").unwrap().child_element_count(), 30);

    click("pb-mute");
    assert_eq!(text("pb-mute"), "🔊 Sound");
}
