//! Browser front end: name entry form, board grid and controls.
//!
//! The session lives in a thread-local slot and is only touched from DOM event
//! callbacks, which the browser delivers one at a time. Every callback applies
//! one transition and then re-renders the playing screen from a `SessionView`.

use std::cell::RefCell;

use rand::rngs::StdRng;
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAudioElement, HtmlInputElement, window};

use crate::audio::AudioSink;
use crate::config::WebConfig;
use crate::dice::entropy_rng;
use crate::session::{GameSession, PLAYER_COUNT};
use crate::view::SessionView;

type WebSession = GameSession<StdRng, HtmlAudio>;

thread_local! {
    static SESSION: RefCell<Option<WebSession>> = const { RefCell::new(None) };
}

// --- Audio -------------------------------------------------------------------

/// Dice effect plus looping background track backed by `<audio>` elements.
/// Rejected `play()` promises (autoplay policy, missing file) are swallowed.
pub struct HtmlAudio {
    dice: HtmlAudioElement,
    music: HtmlAudioElement,
    swallow: Closure<dyn FnMut(JsValue)>,
}

impl HtmlAudio {
    pub fn new(cfg: &WebConfig) -> Result<Self, JsValue> {
        let dice = HtmlAudioElement::new_with_src(&cfg.dice_sound)?;
        dice.set_preload("auto");
        let music = HtmlAudioElement::new_with_src(&cfg.music_sound)?;
        music.set_loop(true);
        music.set_preload("auto");
        let swallow = Closure::wrap(Box::new(|_err: JsValue| {}) as Box<dyn FnMut(JsValue)>);
        Ok(Self { dice, music, swallow })
    }

    fn start(&self, clip: &HtmlAudioElement) {
        if let Ok(promise) = clip.play() {
            let _ = promise.catch(&self.swallow);
        }
    }
}

impl AudioSink for HtmlAudio {
    fn play_effect(&mut self) {
        self.dice.set_current_time(0.0);
        self.start(&self.dice);
    }

    fn set_music_playing(&mut self, playing: bool) {
        if playing {
            self.start(&self.music);
        } else {
            let _ = self.music.pause();
        }
    }
}

// --- Entry -------------------------------------------------------------------

pub fn start_board(cfg: WebConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let rng = entropy_rng().map_err(to_js)?;
    let audio = HtmlAudio::new(&cfg)?;
    let session = GameSession::new(rng, audio).with_muted(cfg.start_muted);
    SESSION.with(|cell| cell.replace(Some(session)));

    let root = mount_root(&doc, &cfg.root_id)?;
    render_name_entry(&doc, &root)
}

fn mount_root(doc: &Document, id: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let root = doc.create_element("div")?;
    root.set_id(id);
    body.append_child(&root)?;
    Ok(root)
}

// --- Name entry --------------------------------------------------------------

fn render_name_entry(doc: &Document, root: &Element) -> Result<(), JsValue> {
    root.set_inner_html("");
    root.set_class_name("p-4 space-y-2");
    root.append_child(&*text_el(doc, "h2", "Enter Player Names")?)?;

    let mut inputs: Vec<HtmlInputElement> = Vec::with_capacity(PLAYER_COUNT);
    for i in 0..PLAYER_COUNT {
        let input: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
        input.set_id(&format!("pb-name-{}", i));
        input.set_placeholder(&format!("Player {}", i + 1));
        root.append_child(&input)?;
        inputs.push(input);
    }

    let start = text_el(doc, "button", "Start Game")?;
    start.set_id("pb-start");
    root.append_child(&start)?;

    let doc_start = doc.clone();
    let root_start = root.clone();
    on_click(&start, move || {
        let names: [String; PLAYER_COUNT] = std::array::from_fn(|i| inputs[i].value());
        let started = SESSION.with(|cell| match cell.borrow_mut().as_mut() {
            Some(session) => session.initialize(names).map_err(|e| e.to_string()),
            None => Err("no session".to_string()),
        });
        match started {
            Ok(()) => {
                if let Err(e) = render_playing(&doc_start, &root_start) {
                    error!(error = ?e, "failed to render board");
                }
            }
            Err(e) => warn!(error = %e, "start ignored"),
        }
    })
}

// --- Playing screen ----------------------------------------------------------

fn render_playing(doc: &Document, root: &Element) -> Result<(), JsValue> {
    root.set_inner_html("");
    root.set_class_name("p-4");

    let header = doc.create_element("div")?;
    header.append_child(&*text_el(doc, "h1", "PH Battleboard")?)?;
    let mute = text_el(doc, "button", "")?;
    mute.set_id("pb-mute");
    header.append_child(&mute)?;
    root.append_child(&header)?;

    for id in ["pb-turn", "pb-dice"] {
        let p = doc.create_element("p")?;
        p.set_id(id);
        root.append_child(&p)?;
    }
    let players = doc.create_element("div")?;
    players.set_id("pb-players");
    root.append_child(&players)?;

    let roll = text_el(doc, "button", "Roll Dice")?;
    roll.set_id("pb-roll");
    root.append_child(&roll)?;

    let question = doc.create_element("div")?;
    question.set_id("pb-question");
    question.set_class_name("bg-muted p-4");
    root.append_child(&question)?;

    let grid = doc.create_element("div")?;
    grid.set_id("pb-grid");
    grid.set_class_name("grid grid-cols-6 gap-1");
    root.append_child(&grid)?;

    let doc_roll = doc.clone();
    on_click(&roll, move || {
        SESSION.with(|cell| {
            if let Some(session) = cell.borrow_mut().as_mut() {
                if let Err(e) = session.take_turn() {
                    warn!(error = %e, "roll ignored");
                }
            }
        });
        refresh_logged(&doc_roll);
    })?;

    let doc_mute = doc.clone();
    on_click(&mute, move || {
        SESSION.with(|cell| {
            if let Some(session) = cell.borrow_mut().as_mut() {
                session.toggle_mute();
            }
        });
        refresh_logged(&doc_mute);
    })?;

    refresh(doc)
}

fn refresh_logged(doc: &Document) {
    if let Err(e) = refresh(doc) {
        error!(error = ?e, "failed to refresh board");
    }
}

/// Re-render every dynamic part of the playing screen.
fn refresh(doc: &Document) -> Result<(), JsValue> {
    let view = SESSION.with(|cell| cell.borrow().as_ref().map(SessionView::of));
    let Some(view) = view else {
        return Ok(());
    };

    set_text(doc, "pb-mute", view.mute_label);
    set_text(doc, "pb-turn", &view.turn_line());
    set_text(doc, "pb-dice", &view.dice_line());

    if let Some(players) = doc.get_element_by_id("pb-players") {
        players.set_inner_html("");
        for p in &view.players {
            players.append_child(&*text_el(doc, "p", &p.status_line())?)?;
        }
    }

    if let Some(card) = doc.get_element_by_id("pb-question") {
        card.set_inner_html("");
        match view.question {
            Some(q) => {
                card.remove_attribute("style")?;
                let p = doc.create_element("p")?;
                p.append_child(&*text_el(doc, "strong", "Question:")?)?;
                p.append_child(&*text_el(doc, "span", &format!(" {}", q))?)?;
                card.append_child(&p)?;
            }
            None => card.set_attribute("style", "display:none")?,
        }
    }

    if let Some(grid) = doc.get_element_by_id("pb-grid") {
        grid.set_inner_html("");
        for tile in &view.tiles {
            let cell = doc.create_element("div")?;
            cell.set_class_name(&format!(
                "h-16 flex flex-col items-center justify-center border text-sm {}",
                tile.class
            ));
            cell.append_child(&*text_el(doc, "div", &tile.number.to_string())?)?;
            cell.append_child(&*text_el(doc, "div", &tile.occupants.join(" "))?)?;
            grid.append_child(&cell)?;
        }
    }
    Ok(())
}

// --- DOM helpers -------------------------------------------------------------

fn text_el(doc: &Document, tag: &str, text: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_text_content(Some(text));
    Ok(el)
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn on_click(target: &Element, mut handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| handler()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
