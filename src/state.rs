//! Game state module.
//!
//! `GameState` says which roll is legal next. It is never stored: a
//! [`Game`](crate::Game) derives it from its recorded frames every time
//! it is asked.

use crate::frame::Frame;
use serde::{Deserialize, Serialize};

/// What kind of roll the game expects next.
///
/// # Examples
///
/// ```rust
/// use tenpin::{Frame, Game, GameState};
///
/// let game = Game::new().roll(1).unwrap().roll(4).unwrap();
/// let state = game.state().unwrap();
///
/// assert_eq!(state, GameState::AwaitingFirstRoll(Frame::new(2).unwrap()));
/// assert_eq!(state.frame().map(Frame::number), Some(2));
/// assert!(!state.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// The next roll opens the given frame.
    AwaitingFirstRoll(Frame),

    /// The next roll is the second roll of the given frame.
    AwaitingSecondRoll(Frame),

    /// The next roll is the bonus roll of frame 10.
    AwaitingFinalBonusRoll(Frame),

    /// All ten frames are finished. No further roll is accepted.
    Complete,
}

impl GameState {
    /// The frame the next roll belongs to, or `None` once complete.
    pub fn frame(self) -> Option<Frame> {
        match self {
            GameState::AwaitingFirstRoll(frame)
            | GameState::AwaitingSecondRoll(frame)
            | GameState::AwaitingFinalBonusRoll(frame) => Some(frame),
            GameState::Complete => None,
        }
    }

    /// Whether the game is over.
    pub fn is_complete(self) -> bool {
        self == GameState::Complete
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::AwaitingFirstRoll(frame) => write!(f, "frame {}, first roll", frame),
            GameState::AwaitingSecondRoll(frame) => write!(f, "frame {}, second roll", frame),
            GameState::AwaitingFinalBonusRoll(frame) => write!(f, "frame {}, bonus roll", frame),
            GameState::Complete => write!(f, "complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_frame() {
        assert_eq!(
            GameState::AwaitingSecondRoll(Frame::first()).frame(),
            Some(Frame::first())
        );
        assert_eq!(GameState::Complete.frame(), None);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(
            GameState::AwaitingFinalBonusRoll(Frame::last()).to_string(),
            "frame 10, bonus roll"
        );
        assert_eq!(GameState::Complete.to_string(), "complete");
    }
}
