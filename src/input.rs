//! Mapping raw keyboard and pointer input to game actions.

use crate::game::{Folder, Phase};

/// Something the player asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pick the asset folder and start a game.
    ChooseFolder(Folder),
    /// Eliminate the case at this board index.
    SelectCase(usize),
    /// Refuse the banker's offer.
    NoDeal,
    /// Take the banker's offer.
    Deal,
    /// Continue to the next round.
    Advance,
    /// Abandon the current game.
    Reset,
}

/// A key press, reduced to what the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The space bar.
    Space,
    /// Anything else.
    Other,
}

impl Key {
    /// Builds a key from a browser-style `key` / `code` pair.
    ///
    /// # Example
    ///
    /// ```
    /// use dondrs::Key;
    ///
    /// assert_eq!(Key::from_dom(" ", "Space"), Key::Space);
    /// assert_eq!(Key::from_dom("D", "KeyD"), Key::Char('D'));
    /// assert_eq!(Key::from_dom("Enter", "Enter"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_dom(key: &str, code: &str) -> Self {
        if code == "Space" {
            return Self::Space;
        }

        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(' '), None) => Self::Space,
            (Some(ch), None) => Self::Char(ch),
            _ => Self::Other,
        }
    }

    const fn matches(self, other: Self) -> bool {
        match (self, other) {
            (Self::Char(a), Self::Char(b)) => a.eq_ignore_ascii_case(&b),
            (Self::Space, Self::Space) => true,
            _ => false,
        }
    }
}

/// Keys bound to the keyboard-driven actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Resets the game from any phase.
    pub reset: Key,
    /// Takes the deal.
    pub deal: Key,
    /// Refuses the deal.
    pub no_deal: Key,
    /// Advances past a completed round.
    pub advance: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            reset: Key::Char('z'),
            deal: Key::Char('d'),
            no_deal: Key::Space,
            advance: Key::Space,
        }
    }
}

/// Returns the action a key press triggers in the given phase.
///
/// Letters compare case-insensitively. Keys with no meaning in the phase
/// map to `None`.
///
/// # Example
///
/// ```
/// use dondrs::{Action, Key, KeyBindings, Phase, action_for_key};
///
/// let keys = KeyBindings::default();
/// assert_eq!(action_for_key(Phase::DealDecision, Key::Space, &keys), Some(Action::NoDeal));
/// assert_eq!(action_for_key(Phase::Playing, Key::Char('Z'), &keys), Some(Action::Reset));
/// assert_eq!(action_for_key(Phase::Playing, Key::Space, &keys), None);
/// ```
#[must_use]
pub fn action_for_key(phase: Phase, key: Key, keys: &KeyBindings) -> Option<Action> {
    if key.matches(keys.reset) {
        return Some(Action::Reset);
    }

    match phase {
        Phase::DealDecision if key.matches(keys.no_deal) => Some(Action::NoDeal),
        Phase::DealDecision if key.matches(keys.deal) => Some(Action::Deal),
        Phase::RoundComplete if key.matches(keys.advance) => Some(Action::Advance),
        Phase::SelectingStart
        | Phase::Playing
        | Phase::DealDecision
        | Phase::RoundComplete
        | Phase::GameOver => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_keys_only_work_at_decision() {
        let keys = KeyBindings::default();
        assert_eq!(
            action_for_key(Phase::DealDecision, Key::Char('D'), &keys),
            Some(Action::Deal)
        );
        assert_eq!(action_for_key(Phase::Playing, Key::Char('d'), &keys), None);
        assert_eq!(action_for_key(Phase::GameOver, Key::Space, &keys), None);
    }

    #[test]
    fn space_advances_completed_round() {
        let keys = KeyBindings::default();
        assert_eq!(
            action_for_key(Phase::RoundComplete, Key::Space, &keys),
            Some(Action::Advance)
        );
        assert_eq!(
            action_for_key(Phase::RoundComplete, Key::Char('d'), &keys),
            None
        );
    }

    #[test]
    fn reset_works_everywhere() {
        let keys = KeyBindings::default();
        for phase in [
            Phase::SelectingStart,
            Phase::Playing,
            Phase::DealDecision,
            Phase::RoundComplete,
            Phase::GameOver,
        ] {
            assert_eq!(
                action_for_key(phase, Key::Char('z'), &keys),
                Some(Action::Reset)
            );
        }
    }

    #[test]
    fn bare_space_key_is_space() {
        assert_eq!(Key::from_dom(" ", ""), Key::Space);
        assert_eq!(Key::from_dom("z", "KeyZ"), Key::Char('z'));
        assert!(Key::Char('Z').matches(Key::Char('z')));
        assert!(!Key::Space.matches(Key::Char(' ')));
    }

    #[test]
    fn custom_bindings_are_respected() {
        let keys = KeyBindings {
            reset: Key::Char('r'),
            deal: Key::Char('y'),
            no_deal: Key::Char('n'),
            advance: Key::Char('n'),
        };
        assert_eq!(action_for_key(Phase::Playing, Key::Char('z'), &keys), None);
        assert_eq!(
            action_for_key(Phase::DealDecision, Key::Char('N'), &keys),
            Some(Action::NoDeal)
        );
        assert_eq!(
            action_for_key(Phase::RoundComplete, Key::Char('n'), &keys),
            Some(Action::Advance)
        );
    }
}
