//! What a renderer needs to draw the current game.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::assets::SlotImage;
use crate::game::{BOARD_SIZE, Game, GameState, Phase};
use crate::options::GameOptions;
use crate::stats::Stats;

/// How a board slot is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotView {
    /// Images have not settled yet.
    FaceDown,
    /// Still in play, image showing.
    FaceUp,
    /// Removed from play.
    Eliminated,
}

/// Modal dialog over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    /// Asset folder picker.
    FolderSelect,
    /// Deal / no deal prompt.
    DealPrompt,
}

/// Full-screen image between rounds or at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// Shown after refusing a deal.
    RoundOver,
    /// Shown after taking a deal.
    Deal,
}

impl Overlay {
    /// Returns the overlay's image file name.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::RoundOver => "round-over.png",
            Self::Deal => "deal.png",
        }
    }

    /// Returns the overlay image path under the asset root.
    #[must_use]
    pub fn path(self, options: &GameOptions) -> String {
        format!("{}/{}", options.asset_root, self.file_name())
    }
}

/// Snapshot of everything on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Current phase.
    pub phase: Phase,
    /// Round number.
    pub round: u8,
    /// Selections left this round.
    pub cases_left: u8,
    /// Statistics over the remaining values.
    pub stats: Stats,
    /// `stats.average` as currency.
    pub average: String,
    /// `stats.reduced_average` as currency.
    pub reduced_average: String,
    /// Each slot's face, in board order.
    pub slots: [SlotView; BOARD_SIZE],
    /// Settled images, empty until the board is ready.
    pub images: Vec<SlotImage>,
    /// Active modal dialog.
    pub modal: Option<Modal>,
    /// Active overlay.
    pub overlay: Option<Overlay>,
}

impl View {
    /// Builds a view from a state and its settled images.
    #[must_use]
    pub fn new(state: &GameState, images: Option<Vec<SlotImage>>) -> Self {
        let board_ready = images.is_some();
        let slots = core::array::from_fn(|index| {
            if state.is_eliminated(index) {
                SlotView::Eliminated
            } else if board_ready {
                SlotView::FaceUp
            } else {
                SlotView::FaceDown
            }
        });

        let (modal, overlay) = match state.phase {
            Phase::SelectingStart => (Some(Modal::FolderSelect), None),
            Phase::Playing => (None, None),
            Phase::DealDecision => (Some(Modal::DealPrompt), None),
            Phase::RoundComplete => (None, Some(Overlay::RoundOver)),
            Phase::GameOver => (None, Some(Overlay::Deal)),
        };

        let stats = state.stats();

        Self {
            phase: state.phase,
            round: state.round,
            cases_left: state.cases_left,
            average: stats.average_display(),
            reduced_average: stats.reduced_average_display(),
            stats,
            slots,
            images: images.unwrap_or_default(),
            modal,
            overlay,
        }
    }
}

impl Game {
    /// Returns a snapshot for rendering.
    pub fn view(&self) -> View {
        View::new(&self.state(), self.images())
    }
}
