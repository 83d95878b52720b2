//! Error types for roll validation and scoring.
//!
//! Every failure the engine can report is a variant of
//! [`BowlingError`]. A failed operation never changes the [`Game`] it was
//! called on.
//!
//! [`Game`]: crate::Game

use crate::frame_score::FrameScore;
use thiserror::Error;

/// Format the last recorded frame for diagnostics.
fn format_last_frame(last: &Option<FrameScore>) -> String {
    match last {
        Some(frame) => format!("{:?}", frame),
        None => String::from("(no frames)"),
    }
}

/// Errors that can occur while recording rolls or assembling a game.
///
/// # Examples
///
/// ```rust
/// use tenpin::{BowlingError, Game};
///
/// let err = Game::new().roll(11).unwrap_err();
/// assert!(matches!(err, BowlingError::OutOfRange { value: 11, .. }));
/// println!("{}", err); // "pins out of range: 11 (expected 0..=10)"
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BowlingError {
    /// A pin count or frame number fell outside its allowed range.
    #[error("{what} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    /// The rolls of a frame break the rack rules.
    ///
    /// Raised when two rolls of an ordinary frame knock down more than ten
    /// pins, or when a bonus roll is attempted in frame 10 without a strike
    /// or spare.
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// A roll was attempted after the tenth frame was finished.
    #[error("Cannot roll on a finished game")]
    GameAlreadyComplete,

    /// The last recorded frame does not have the shape the derived state
    /// expects. Unreachable through [`Game::roll`](crate::Game::roll).
    #[error("Game state mismatch: expected {} but found {}", .expected, format_last_frame(.found))]
    StateMismatch {
        expected: &'static str,
        found: Option<FrameScore>,
    },

    /// The frame list cannot be mapped to any game state.
    /// Unreachable through [`Game::roll`](crate::Game::roll).
    #[error("Unexpected frame count {} with last frame {}", .frames, format_last_frame(.last))]
    CorruptState {
        frames: usize,
        last: Option<FrameScore>,
    },

    /// A list of frames does not describe a game that could have been played.
    #[error("Invalid game: {0}")]
    InvalidGame(String),
}

impl BowlingError {
    pub(crate) fn out_of_range(what: &'static str, value: i32, min: i32, max: i32) -> Self {
        BowlingError::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::RolledPins;

    #[test]
    fn test_out_of_range_display() {
        let err = BowlingError::out_of_range("pins", -1, 0, 10);
        assert_eq!(err.to_string(), "pins out of range: -1 (expected 0..=10)");
    }

    #[test]
    fn test_corrupt_state_display() {
        let err = BowlingError::CorruptState {
            frames: 0,
            last: None,
        };
        assert!(err.to_string().contains("(no frames)"));

        let err = BowlingError::CorruptState {
            frames: 3,
            last: Some(FrameScore::FirstRollOnly(RolledPins::new(4).unwrap())),
        };
        let display = err.to_string();
        assert!(display.contains("frame count 3"));
        assert!(display.contains("FirstRollOnly"));
    }

    #[test]
    fn test_state_mismatch_display() {
        let err = BowlingError::StateMismatch {
            expected: "a first roll",
            found: Some(FrameScore::TwoRolls(
                RolledPins::new(1).unwrap(),
                RolledPins::new(2).unwrap(),
            )),
        };
        let display = err.to_string();
        assert!(display.contains("expected a first roll"));
        assert!(display.contains("TwoRolls"));
    }
}
