//! Scorecard module.
//!
//! A `ScoreCard` is the frame-by-frame breakdown behind
//! [`Game::score`](crate::Game::score): pinfall, bonus and running total
//! per frame, the way a bowling scoresheet shows them.

use crate::frame::Frame;
use crate::frame_score::FrameScore;
use crate::game::Game;
use serde::{Deserialize, Serialize};

/// One frame of a scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameLine {
    /// Which frame this line describes.
    pub frame: Frame,

    /// The rolls recorded in the frame.
    pub marks: FrameScore,

    /// Pins knocked down within the frame.
    pub pinfall: u32,

    /// Bonus pins taken from later rolls so far.
    pub bonus: u32,

    /// Bonus rolls the frame is still waiting for.
    ///
    /// While non-zero, `cumulative` is provisional.
    pub pending_bonus_rolls: u8,

    /// Running total up to and including this frame.
    pub cumulative: u32,
}

impl FrameLine {
    /// Pinfall plus bonus for this frame alone.
    pub fn frame_total(&self) -> u32 {
        self.pinfall + self.bonus
    }
}

/// Frame-by-frame breakdown of a game's score.
///
/// A snapshot: later rolls produce a new card rather than updating this
/// one.
///
/// # Examples
///
/// ```rust
/// use tenpin::{Frame, Game};
///
/// let card = Game::replay([10, 3, 4]).unwrap().scorecard();
///
/// let first = card.line(Frame::first()).unwrap();
/// assert_eq!(first.pinfall, 10);
/// assert_eq!(first.bonus, 7);
/// assert_eq!(first.cumulative, 17);
///
/// assert_eq!(card.total, 24);
/// assert!(card.is_final());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// One line per recorded frame, frame 1 first.
    pub lines: Vec<FrameLine>,

    /// The running total. Always equal to `Game::score`.
    pub total: u32,
}

impl ScoreCard {
    /// Build the scorecard for `game`.
    pub fn new(game: &Game) -> Self {
        let mut lines = Vec::with_capacity(game.frames().len());
        let mut cumulative = 0;

        for (index, marks) in game.frames().iter().enumerate() {
            let Some(frame) = Frame::from_index(index) else {
                break;
            };
            let credit = game.bonus_credit(index, marks);
            let pinfall = marks.score();
            cumulative += pinfall + credit.earned;

            lines.push(FrameLine {
                frame,
                marks: *marks,
                pinfall,
                bonus: credit.earned,
                pending_bonus_rolls: credit.pending,
                cumulative,
            });
        }

        Self {
            lines,
            total: cumulative,
        }
    }

    /// The line for `frame`, if it has been reached.
    pub fn line(&self, frame: Frame) -> Option<&FrameLine> {
        self.lines.get(frame.index())
    }

    /// Whether no frame is still waiting for bonus rolls.
    pub fn is_final(&self) -> bool {
        self.lines.iter().all(|line| line.pending_bonus_rolls == 0)
    }
}

impl std::fmt::Display for ScoreCard {
    /// Two rows: the marks of each frame, then the running totals.
    /// Totals of unfinished frames, or frames still waiting for bonus
    /// rolls, are left blank.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut marks = String::new();
        let mut totals = String::new();
        for line in &self.lines {
            let width = if line.frame.is_final() { 7 } else { 5 };
            marks.push_str(&format!("|{:^width$}", line.marks.to_string(), width = width));
            if line.pending_bonus_rolls == 0 && line.marks.is_complete(line.frame) {
                totals.push_str(&format!("|{:^width$}", line.cumulative, width = width));
            } else {
                totals.push_str(&format!("|{:^width$}", "", width = width));
            }
        }
        writeln!(f, "{}|", marks)?;
        write!(f, "{}|", totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scorecard() {
        let card = Game::new().scorecard();
        assert!(card.lines.is_empty());
        assert_eq!(card.total, 0);
        assert!(card.is_final());
        assert_eq!(card, ScoreCard::default());
    }

    #[test]
    fn test_scorecard_pending_spare() {
        let card = Game::replay([6, 4]).unwrap().scorecard();
        let line = card.line(Frame::first()).unwrap();
        assert_eq!(line.pinfall, 10);
        assert_eq!(line.bonus, 0);
        assert_eq!(line.pending_bonus_rolls, 1);
        assert!(!card.is_final());
    }

    #[test]
    fn test_scorecard_cumulative() {
        let card = Game::replay([1, 4, 4, 5, 6, 4, 5, 5]).unwrap().scorecard();
        let cumulative: Vec<u32> = card.lines.iter().map(|l| l.cumulative).collect();
        assert_eq!(cumulative, vec![5, 14, 29, 39]);
        assert_eq!(card.lines[2].frame_total(), 15);
        assert_eq!(card.total, 39);
    }

    #[test]
    fn test_scorecard_line_out_of_reach() {
        let card = Game::replay([3]).unwrap().scorecard();
        assert!(card.line(Frame::first()).is_some());
        assert!(card.line(Frame::new(2).unwrap()).is_none());
    }

    #[test]
    fn test_scorecard_display() {
        let card = Game::replay([10, 7, 3, 2]).unwrap().scorecard();
        let text = card.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "|  X  | 7 / |  2  |");
        assert_eq!(rows[1], "| 20  | 32  |     |");
    }
}
