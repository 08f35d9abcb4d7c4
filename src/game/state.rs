//! Game state types.

use alloc::vec::Vec;

use crate::stats::Stats;

use super::{BOARD_SIZE, Folder};

/// Step of the overall game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to pick an asset folder.
    SelectingStart,
    /// Waiting for case selections.
    Playing,
    /// The round's selections are done and the banker awaits an answer.
    DealDecision,
    /// The player refused the deal; waiting to advance.
    RoundComplete,
    /// The player took the deal.
    GameOver,
}

/// The whole state of one game.
///
/// Transitions never mutate a state in place: each one borrows the current
/// value and returns the next, or an error that leaves the caller's value as
/// it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Asset folder, set when the game starts.
    pub folder: Option<Folder>,
    /// Current round, starting at 1.
    pub round: u8,
    /// Selections still required this round.
    pub cases_left: u8,
    /// Eliminated case indices, in elimination order.
    pub eliminated: Vec<usize>,
    /// Current phase.
    pub phase: Phase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates the state shown before a folder is chosen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            folder: None,
            round: 1,
            cases_left: 0,
            eliminated: Vec::new(),
            phase: Phase::SelectingStart,
        }
    }

    /// Returns whether the case at `index` has been eliminated.
    #[must_use]
    pub fn is_eliminated(&self, index: usize) -> bool {
        self.eliminated.contains(&index)
    }

    /// Returns the number of cases not yet eliminated.
    #[must_use]
    pub fn unselected(&self) -> usize {
        BOARD_SIZE.saturating_sub(self.eliminated.len())
    }

    /// Computes statistics over the remaining prize values.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::compute(&self.eliminated)
    }
}
