use crate::error::{AdvanceError, DecisionError};

use super::{CASES_PER_ROUND, GameState, MAX_ROUND, Phase};

impl GameState {
    fn ensure_decision(&self) -> Result<(), DecisionError> {
        if self.phase == Phase::DealDecision {
            Ok(())
        } else {
            Err(DecisionError::InvalidState)
        }
    }

    /// Refuses the banker's offer and completes the round.
    ///
    /// # Errors
    ///
    /// Returns an error if no deal decision is pending.
    pub fn no_deal(&self) -> Result<Self, DecisionError> {
        self.ensure_decision()?;

        Ok(Self {
            phase: Phase::RoundComplete,
            ..self.clone()
        })
    }

    /// Takes the banker's offer and ends the game.
    ///
    /// # Errors
    ///
    /// Returns an error if no deal decision is pending.
    pub fn deal(&self) -> Result<Self, DecisionError> {
        self.ensure_decision()?;

        Ok(Self {
            phase: Phase::GameOver,
            ..self.clone()
        })
    }

    /// Moves to the next round.
    ///
    /// The round number stops at [`MAX_ROUND`]; further advances replay the
    /// last round's quota. The quota never exceeds the cases still on the
    /// board, and an empty board goes straight back to the deal decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round is not complete.
    pub fn advance_round(&self) -> Result<Self, AdvanceError> {
        if self.phase != Phase::RoundComplete {
            return Err(AdvanceError::InvalidState);
        }

        let round = self.round.saturating_add(1).min(MAX_ROUND);
        let quota = CASES_PER_ROUND[usize::from(round) - 1];
        let cases_left = quota.min(u8::try_from(self.unselected()).unwrap_or(u8::MAX));
        let phase = if cases_left == 0 {
            Phase::DealDecision
        } else {
            Phase::Playing
        };

        Ok(Self {
            round,
            cases_left,
            phase,
            ..self.clone()
        })
    }

    /// Returns a fresh state, whatever the current phase.
    #[must_use]
    pub const fn reset(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Folder;

    fn at_decision() -> GameState {
        let folder = Folder::new(2).unwrap();
        let mut state = GameState::new().choose_folder(folder, 3).unwrap();
        for index in 0..3 {
            state = state.select_case(index).unwrap();
        }
        state
    }

    #[test]
    fn decisions_require_pending_offer() {
        assert_eq!(GameState::new().deal(), Err(DecisionError::InvalidState));
        assert_eq!(GameState::new().no_deal(), Err(DecisionError::InvalidState));
        assert_eq!(
            at_decision().advance_round(),
            Err(AdvanceError::InvalidState)
        );
    }

    #[test]
    fn deal_ends_game_and_keeps_board() {
        let before = at_decision();
        let after = before.deal().unwrap();
        assert_eq!(after.phase, Phase::GameOver);
        assert_eq!(after.eliminated, before.eliminated);
        assert_eq!(after.round, 1);
    }

    #[test]
    fn advance_uses_schedule() {
        let state = at_decision().no_deal().unwrap();
        assert_eq!(state.phase, Phase::RoundComplete);

        let state = state.advance_round().unwrap();
        assert_eq!(state.round, 2);
        assert_eq!(state.cases_left, 2);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn advance_on_empty_board_returns_to_decision() {
        let folder = Folder::new(1).unwrap();
        let state = GameState {
            folder: Some(folder),
            round: 4,
            cases_left: 0,
            eliminated: (0..10).collect(),
            phase: Phase::RoundComplete,
        };

        let next = state.advance_round().unwrap();
        assert_eq!(next.round, 4);
        assert_eq!(next.cases_left, 0);
        assert_eq!(next.phase, Phase::DealDecision);
    }

    #[test]
    fn reset_returns_initial_state() {
        assert_eq!(at_decision().reset(), GameState::new());
    }
}
