//! Error types for game operations.
//!
//! The [`Game`](crate::Game) controller treats every transition error as a
//! silent no-op; the pure transitions on [`GameState`](crate::GameState)
//! return them so a front-end can explain why an input was ignored.

use thiserror::Error;

/// Errors that can occur when choosing the asset folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FolderError {
    /// A game is already in progress.
    #[error("invalid game state for choosing a folder")]
    InvalidState,
    /// The folder is not one of the offered asset sets.
    #[error("folder is not offered")]
    UnknownFolder,
}

/// Errors that can occur when selecting a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Cases can only be selected while playing.
    #[error("invalid game state for selecting a case")]
    InvalidState,
    /// Case index is outside the board.
    #[error("case index is outside the board")]
    OutOfRange,
    /// Case was already eliminated.
    #[error("case already eliminated")]
    AlreadyEliminated,
    /// No selections remain this round.
    #[error("no cases left to select this round")]
    NoCasesLeft,
}

/// Errors that can occur when answering the banker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// No deal is on the table.
    #[error("invalid game state for a deal decision")]
    InvalidState,
}

/// Errors that can occur when advancing to the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdvanceError {
    /// The current round has not been completed.
    #[error("invalid game state for advancing the round")]
    InvalidState,
}

/// Errors reported by an [`ImageLoader`](crate::ImageLoader).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The resource does not exist.
    #[error("image not found")]
    NotFound,
    /// The resource exists but could not be decoded or fetched.
    #[error("image failed to load")]
    LoadFailed,
}

/// Errors reported by an [`AudioPlayer`](crate::AudioPlayer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AudioError {
    /// No audio output is available.
    #[error("audio output unavailable")]
    Unavailable,
    /// The sound could not be played.
    #[error("audio playback failed")]
    PlaybackFailed,
}
