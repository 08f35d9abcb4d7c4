use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use dondrs::{
    AssetError, AudioError, AudioPlayer, Folder, Game, GameOptions, ImageLoader, Key, Modal,
    Phase, SlotImage, SlotView, View,
};
use futures::channel::oneshot;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise, spawn_local};
use web_sys::{HtmlAudioElement, HtmlImageElement};

#[wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
}

#[wasm_bindgen]
pub struct WasmGame {
    game: Rc<Game>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(asset_root: Option<String>) -> Self {
        Self {
            game: Rc::new(Game::new(options(asset_root))),
        }
    }

    pub fn folders(&self) -> u32 {
        u32::from(self.game.options.folders)
    }

    /// Starts a game and resolves to `true` once the board images are ready.
    ///
    /// Resolves to `false` if the folder was rejected or the game was reset
    /// while images were loading.
    pub fn choose_folder(&self, folder: u8) -> js_sys::Promise {
        let ticket = Folder::new(folder).and_then(|folder| self.game.choose_folder(folder));
        let game = Rc::clone(&self.game);

        future_to_promise(async move {
            let ready = match ticket {
                Some(ticket) => game.load_images(ticket, &BrowserImages).await,
                None => false,
            };
            Ok(JsValue::from_bool(ready))
        })
    }

    pub fn select_case(&self, index: u32) -> bool {
        self.game.select_case(index as usize)
    }

    /// Explains why selecting `index` would be ignored, if it would be.
    pub fn selection_hint(&self, index: u32) -> Option<String> {
        self.game
            .state()
            .select_case(index as usize)
            .err()
            .map(|err| err.to_string())
    }

    pub fn no_deal(&self) -> bool {
        self.game.no_deal(&BrowserAudio)
    }

    pub fn deal(&self) -> bool {
        self.game.deal(&BrowserAudio)
    }

    pub fn advance_round(&self) -> bool {
        self.game.advance_round()
    }

    pub fn reset(&self) {
        self.game.reset();
    }

    /// Feeds a `keydown` event's `key` and `code`.
    ///
    /// Returns `true` when the key was used, so the caller can
    /// `preventDefault()`.
    pub fn handle_key(&self, key: &str, code: &str) -> bool {
        self.game
            .handle_key(Key::from_dom(key, code), &BrowserAudio)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot::new(&self.game);
        to_js_value(&snapshot)
    }
}

fn options(asset_root: Option<String>) -> GameOptions {
    match asset_root {
        Some(root) => GameOptions::default().with_asset_root(root),
        None => GameOptions::default(),
    }
}

struct BrowserImages;

impl ImageLoader for BrowserImages {
    fn load(&self, url: &str) -> impl Future<Output = Result<(), AssetError>> {
        let url = url.to_owned();
        async move {
            let image = HtmlImageElement::new().map_err(|_| AssetError::LoadFailed)?;
            let (sender, receiver) = oneshot::channel::<bool>();
            let sender = Rc::new(RefCell::new(Some(sender)));

            let on_load = settle(Rc::clone(&sender), true);
            let on_error = settle(sender, false);
            image.set_onload(Some(on_load.as_ref().unchecked_ref()));
            image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            image.set_src(&url);

            let loaded = receiver.await.unwrap_or(false);
            image.set_onload(None);
            image.set_onerror(None);

            if loaded {
                Ok(())
            } else {
                Err(AssetError::NotFound)
            }
        }
    }
}

fn settle(
    sender: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
    loaded: bool,
) -> Closure<dyn FnMut()> {
    Closure::new(move || {
        if let Some(sender) = sender.borrow_mut().take() {
            let _ = sender.send(loaded);
        }
    })
}

struct BrowserAudio;

impl AudioPlayer for BrowserAudio {
    fn play(&self, path: &str) -> Result<(), AudioError> {
        let audio = HtmlAudioElement::new_with_src(path).map_err(|_| AudioError::Unavailable)?;
        let playing = audio.play().map_err(|_| AudioError::PlaybackFailed)?;
        spawn_local(async move {
            if JsFuture::from(playing).await.is_err() {
                log::debug!("audio playback was blocked");
            }
        });
        Ok(())
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    folder: Option<u8>,
    round: u8,
    cases_left: u8,
    eliminated: Vec<u32>,
    average: String,
    reduced_average: String,
    average_value: f64,
    reduced_average_value: f64,
    slots: Vec<JsSlot>,
    board_ready: bool,
    modal: Option<&'static str>,
    overlay: Option<String>,
}

impl Snapshot {
    fn new(game: &Game) -> Self {
        let state = game.state();
        let view = View::new(&state, game.images());
        let slots = view
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| JsSlot::new(index as u32, *slot, view.images.get(index)))
            .collect();

        Self {
            phase: phase_to_str(view.phase),
            folder: state.folder.map(Folder::get),
            round: view.round,
            cases_left: view.cases_left,
            eliminated: state.eliminated.iter().map(|&index| index as u32).collect(),
            average: view.average.clone(),
            reduced_average: view.reduced_average.clone(),
            average_value: view.stats.average,
            reduced_average_value: view.stats.reduced_average,
            slots,
            board_ready: game.is_board_ready(),
            modal: view.modal.map(modal_to_str),
            overlay: view.overlay.map(|overlay| overlay.path(&game.options)),
        }
    }
}

#[derive(Serialize)]
struct JsSlot {
    index: u32,
    face: &'static str,
    image: Option<String>,
    source: &'static str,
}

impl JsSlot {
    fn new(index: u32, slot: SlotView, image: Option<&SlotImage>) -> Self {
        let source = match image {
            Some(SlotImage::Primary(_)) => "primary",
            Some(SlotImage::Placeholder(_)) => "placeholder",
            Some(SlotImage::Missing) => "missing",
            None => "pending",
        };

        Self {
            index,
            face: slot_to_str(slot),
            image: image.and_then(SlotImage::url).map(str::to_owned),
            source,
        }
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::SelectingStart => "SelectingStart",
        Phase::Playing => "Playing",
        Phase::DealDecision => "DealDecision",
        Phase::RoundComplete => "RoundComplete",
        Phase::GameOver => "GameOver",
    }
}

fn slot_to_str(slot: SlotView) -> &'static str {
    match slot {
        SlotView::FaceDown => "FaceDown",
        SlotView::FaceUp => "FaceUp",
        SlotView::Eliminated => "Eliminated",
    }
}

fn modal_to_str(modal: Modal) -> &'static str {
    match modal {
        Modal::FolderSelect => "FolderSelect",
        Modal::DealPrompt => "DealPrompt",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
