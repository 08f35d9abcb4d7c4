//! Game engine and state management.

use core::fmt::Display;
use core::num::NonZeroU8;
use core::sync::atomic::{AtomicU32, Ordering};

use log::{debug, info};

use crate::assets::{AudioPlayer, BoardImages, Cue, play_cue};
use crate::input::{Action, Key, action_for_key};
use crate::options::GameOptions;
use crate::sync::Mutex;

mod loading;
mod round;
mod selection;
pub mod state;

pub use loading::LoadTicket;
pub use state::{GameState, Phase};

/// Number of cases on the board.
pub const BOARD_SIZE: usize = 10;

/// Cases to eliminate in each round.
pub const CASES_PER_ROUND: [u8; 4] = [3, 2, 2, 1];

/// Last round number; advancing beyond it stays on it.
pub const MAX_ROUND: u8 = CASES_PER_ROUND.len() as u8;

/// Identifier of an image asset set, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Folder(NonZeroU8);

impl Folder {
    /// Creates a folder id. Returns `None` for 0.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        match NonZeroU8::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Returns the folder number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A game controller that owns the current state and applies player input.
///
/// Rejected input never changes anything: the controller logs the reason at
/// debug level and reports `false`. Methods take `&self` so the same game
/// can serve input handlers and image-load completion.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: Mutex<GameState>,
    /// Bumped on every new game and reset; stale image loads compare against it.
    generation: AtomicU32,
    /// Board images, once every slot has settled.
    images: Mutex<Option<BoardImages>>,
}

impl Game {
    /// Creates a game waiting at the folder selection screen.
    ///
    /// # Example
    ///
    /// ```
    /// use dondrs::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default());
    /// assert_eq!(game.phase(), Phase::SelectingStart);
    /// ```
    #[must_use]
    pub const fn new(options: GameOptions) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::new()),
            generation: AtomicU32::new(0),
            images: Mutex::new(None),
        }
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    fn transition<E: Display>(
        &self,
        what: &str,
        step: impl FnOnce(&GameState) -> Result<GameState, E>,
    ) -> bool {
        let mut state = self.state.lock();
        match step(&state) {
            Ok(next) => {
                let from = state.phase;
                let (to, round, left) = (next.phase, next.round, next.cases_left);
                *state = next;
                drop(state);
                debug!("{what}: {from:?} -> {to:?}, round {round}, {left} left");
                true
            }
            Err(err) => {
                drop(state);
                debug!("{what} ignored: {err}");
                false
            }
        }
    }

    /// Starts a game with the given folder.
    ///
    /// Returns a ticket for loading the board images, or `None` if the folder
    /// was rejected.
    pub fn choose_folder(&self, folder: Folder) -> Option<LoadTicket> {
        let offered = self.options.folders;
        let mut state = self.state.lock();
        let started = state.choose_folder(folder, offered);
        match started {
            Ok(next) => {
                *state = next;
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                drop(state);
                *self.images.lock() = None;
                info!("new game with folder {}", folder.get());
                Some(LoadTicket::new(generation, folder))
            }
            Err(err) => {
                drop(state);
                debug!("choose folder ignored: {err}");
                None
            }
        }
    }

    /// Eliminates a case. Returns whether the selection was accepted.
    pub fn select_case(&self, index: usize) -> bool {
        self.transition("select case", |state| state.select_case(index))
    }

    /// Refuses the deal and plays the no-deal cue.
    pub fn no_deal<A: AudioPlayer + ?Sized>(&self, audio: &A) -> bool {
        let accepted = self.transition("no deal", GameState::no_deal);
        if accepted {
            play_cue(audio, &self.options, Cue::NoDeal);
        }
        accepted
    }

    /// Takes the deal and plays the deal cue.
    pub fn deal<A: AudioPlayer + ?Sized>(&self, audio: &A) -> bool {
        let accepted = self.transition("deal", GameState::deal);
        if accepted {
            play_cue(audio, &self.options, Cue::Deal);
            info!("deal taken in round {}", self.state.lock().round);
        }
        accepted
    }

    /// Moves to the next round.
    pub fn advance_round(&self) -> bool {
        self.transition("advance round", GameState::advance_round)
    }

    /// Returns to the folder selection screen with a fresh state.
    ///
    /// Image loads still in flight are invalidated and their results will be
    /// discarded.
    pub fn reset(&self) {
        let previous = self.state.replace(GameState::new());
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.images.lock() = None;
        info!("game reset from {:?}", previous.phase);
    }

    /// Applies an action. Returns whether it changed the game.
    pub fn apply<A: AudioPlayer + ?Sized>(&self, action: Action, audio: &A) -> bool {
        match action {
            Action::ChooseFolder(folder) => self.choose_folder(folder).is_some(),
            Action::SelectCase(index) => self.select_case(index),
            Action::NoDeal => self.no_deal(audio),
            Action::Deal => self.deal(audio),
            Action::Advance => self.advance_round(),
            Action::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Handles a key press using the configured bindings.
    ///
    /// Choosing a folder by key is not supported; starting a game goes
    /// through [`Game::choose_folder`] so the caller gets the load ticket.
    pub fn handle_key<A: AudioPlayer + ?Sized>(&self, key: Key, audio: &A) -> bool {
        action_for_key(self.phase(), key, &self.options.keys)
            .is_some_and(|action| self.apply(action, audio))
    }
}
