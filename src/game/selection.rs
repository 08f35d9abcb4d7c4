use crate::error::{FolderError, SelectError};

use super::{BOARD_SIZE, CASES_PER_ROUND, Folder, GameState, Phase};

impl GameState {
    /// Starts a game with the given asset folder.
    ///
    /// `offered` is the number of folders the start screen shows.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is already running or the folder is not
    /// offered.
    pub fn choose_folder(&self, folder: Folder, offered: u8) -> Result<Self, FolderError> {
        if self.phase != Phase::SelectingStart {
            return Err(FolderError::InvalidState);
        }

        if folder.get() > offered {
            return Err(FolderError::UnknownFolder);
        }

        Ok(Self {
            folder: Some(folder),
            round: 1,
            cases_left: CASES_PER_ROUND[0],
            eliminated: alloc::vec::Vec::with_capacity(BOARD_SIZE),
            phase: Phase::Playing,
        })
    }

    /// Eliminates the case at `index`.
    ///
    /// When the round's last selection is made the state moves to
    /// [`Phase::DealDecision`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase, the index is
    /// off the board, the case is already eliminated, or no selections remain.
    pub fn select_case(&self, index: usize) -> Result<Self, SelectError> {
        if self.phase != Phase::Playing {
            return Err(SelectError::InvalidState);
        }

        if index >= BOARD_SIZE {
            return Err(SelectError::OutOfRange);
        }

        if self.is_eliminated(index) {
            return Err(SelectError::AlreadyEliminated);
        }

        if self.cases_left == 0 {
            return Err(SelectError::NoCasesLeft);
        }

        let mut next = self.clone();
        next.eliminated.push(index);
        next.cases_left -= 1;

        if next.cases_left == 0 {
            next.phase = Phase::DealDecision;
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameState {
        let folder = Folder::new(1).unwrap();
        GameState::new().choose_folder(folder, 3).unwrap()
    }

    #[test]
    fn choose_folder_starts_round_one() {
        let state = playing();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.round, 1);
        assert_eq!(state.cases_left, 3);
        assert!(state.eliminated.is_empty());
        assert_eq!(state.folder.map(Folder::get), Some(1));
    }

    #[test]
    fn choose_folder_rejects_unknown_and_repeat() {
        let folder = Folder::new(4).unwrap();
        assert_eq!(
            GameState::new().choose_folder(folder, 3),
            Err(FolderError::UnknownFolder)
        );

        let again = Folder::new(2).unwrap();
        assert_eq!(
            playing().choose_folder(again, 3),
            Err(FolderError::InvalidState)
        );
    }

    #[test]
    fn select_rejections() {
        assert_eq!(
            GameState::new().select_case(0),
            Err(SelectError::InvalidState)
        );

        let state = playing().select_case(4).unwrap();
        assert_eq!(state.select_case(4), Err(SelectError::AlreadyEliminated));
        assert_eq!(state.select_case(10), Err(SelectError::OutOfRange));

        let mut drained = state;
        drained.cases_left = 0;
        assert_eq!(drained.select_case(5), Err(SelectError::NoCasesLeft));
    }

    #[test]
    fn last_selection_opens_decision() {
        let state = playing()
            .select_case(0)
            .and_then(|s| s.select_case(1))
            .unwrap();
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.cases_left, 1);

        let state = state.select_case(2).unwrap();
        assert_eq!(state.phase, Phase::DealDecision);
        assert_eq!(state.cases_left, 0);
        assert_eq!(state.eliminated, vec![0, 1, 2]);
    }
}
