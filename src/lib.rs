//! A deal-or-no-deal scoreboard game engine with optional `no_std` support.
//!
//! The crate provides a pure [`GameState`] value whose transition functions
//! return new states, and a [`Game`] controller that stores the current state,
//! turns input into transitions, tracks board image loading, and exposes a
//! [`View`] for rendering.
//!
//! # Example
//!
//! ```
//! use dondrs::{Folder, Game, GameOptions, Phase};
//!
//! let game = Game::new(GameOptions::default());
//! let folder = Folder::new(1).unwrap();
//! game.choose_folder(folder);
//! assert_eq!(game.state().phase, Phase::Playing);
//! assert_eq!(game.state().cases_left, 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod assets;
pub mod error;
pub mod game;
pub mod input;
pub mod options;
pub mod stats;
pub mod view;
mod sync;

// Re-export main types
pub use assets::{
    AudioPlayer, BoardImages, Cue, ImageLoader, SlotImage, load_board, play_cue,
    resolve_slot,
};
pub use error::{AdvanceError, AssetError, AudioError, DecisionError, FolderError, SelectError};
pub use game::{BOARD_SIZE, CASES_PER_ROUND, Folder, Game, GameState, LoadTicket, MAX_ROUND, Phase};
pub use input::{Action, Key, KeyBindings, action_for_key};
pub use options::GameOptions;
pub use stats::{PRIZE_VALUES, REDUCED_AVERAGE_FACTOR, Stats, format_currency};
pub use view::{Modal, Overlay, SlotView, View};
