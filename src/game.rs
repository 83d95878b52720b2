//! Game module.
//!
//! Provides the `Game` type, the main entry point of the engine. A game
//! is an ordered list of [`FrameScore`]s and nothing else: the current
//! [`GameState`] and the running score are both derived from that list
//! on demand, so they can never disagree with the recorded rolls.
//!
//! Games are values. [`Game::roll`] borrows the game and returns a new
//! one, leaving the original untouched. Keeping an older value is
//! enough to undo a roll, and trying a roll on a copy is enough to ask
//! "what would this score".

use crate::error::BowlingError;
use crate::frame::Frame;
use crate::frame_score::FrameScore;
use crate::pins::RolledPins;
use crate::scorecard::ScoreCard;
use crate::state::GameState;
use crate::FRAMES_PER_GAME;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Bonus credit a frame has collected from the rolls after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct BonusCredit {
    /// Pins from following rolls already made.
    pub earned: u32,
    /// Bonus rolls the frame is still owed.
    pub pending: u8,
}

/// A single game of ten-pin bowling.
///
/// # Examples
///
/// ```rust
/// use tenpin::{Frame, Game, GameState};
///
/// let game = Game::new();
/// assert_eq!(game.state().unwrap(), GameState::AwaitingFirstRoll(Frame::first()));
///
/// let game = game.roll(5).unwrap().roll(5).unwrap().roll(3).unwrap();
/// assert_eq!(game.score(), 16); // 5 + 5 + 3 spare bonus, then 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<FrameScore>", into = "Vec<FrameScore>")]
pub struct Game {
    /// Index 0 is frame 1. At most ten entries; only the last may be unfinished.
    frames: Vec<FrameScore>,
}

impl Game {
    /// Create a game with no rolls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::Game;
    ///
    /// let game = Game::new();
    /// assert_eq!(game.score(), 0);
    /// assert!(game.frames().is_empty());
    /// ```
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Assemble a game from frames recorded elsewhere.
    ///
    /// Every frame is re-validated, and the list as a whole must describe
    /// a game that could have been reached roll by roll.
    ///
    /// # Errors
    ///
    /// * [`BowlingError::InvalidFrame`] if a frame breaks the rack rules.
    /// * [`BowlingError::InvalidGame`] if there are more than ten frames,
    ///   an unfinished frame is followed by another frame, or a frame uses
    ///   a shape reserved for a different position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::{FrameScore, Game, RolledPins};
    ///
    /// let strike = FrameScore::first_roll_only(RolledPins::STRIKE);
    /// let game = Game::from_frames(vec![strike, strike]).unwrap();
    /// assert_eq!(game.score(), 30);
    ///
    /// assert!(Game::from_frames(vec![strike; 11]).is_err());
    /// ```
    pub fn from_frames(frames: Vec<FrameScore>) -> Result<Self, BowlingError> {
        let limit = usize::from(FRAMES_PER_GAME);
        if frames.len() > limit {
            return Err(BowlingError::InvalidGame(format!(
                "a game cannot have more than {} frames, got {}",
                limit,
                frames.len()
            )));
        }

        let last_index = frames.len().saturating_sub(1);
        for (index, score) in frames.iter().enumerate() {
            let frame = Frame::from_index(index).ok_or_else(|| {
                BowlingError::InvalidGame(format!("no frame at position {}", index))
            })?;
            score.validate()?;

            if frame.is_final() && matches!(score, FrameScore::TwoRolls(..)) {
                return Err(BowlingError::InvalidGame(format!(
                    "frame {} must use a final-frame shape, found {:?}",
                    frame, score
                )));
            }
            if !frame.is_final() && score.is_final_shape() {
                return Err(BowlingError::InvalidGame(format!(
                    "frame {} cannot use a final-frame shape, found {:?}",
                    frame, score
                )));
            }
            if index != last_index && !score.is_complete(frame) {
                return Err(BowlingError::InvalidGame(format!(
                    "frame {} is unfinished but later frames were recorded",
                    frame
                )));
            }
        }

        Ok(Self { frames })
    }

    /// Play a sequence of rolls from an empty game.
    ///
    /// Stops at the first rejected roll and returns its error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::{Game, GameState};
    ///
    /// let perfect = Game::replay([10; 12]).unwrap();
    /// assert_eq!(perfect.score(), 300);
    /// assert_eq!(perfect.state().unwrap(), GameState::Complete);
    ///
    /// assert!(Game::replay([7, 4]).is_err());
    /// ```
    pub fn replay<I>(rolls: I) -> Result<Self, BowlingError>
    where
        I: IntoIterator<Item = i32>,
    {
        rolls
            .into_iter()
            .try_fold(Game::new(), |game, pins| game.roll(pins))
    }

    /// The recorded frames, frame 1 first.
    pub fn frames(&self) -> &[FrameScore] {
        &self.frames
    }

    /// Derive which roll is legal next.
    ///
    /// | frames | last frame | state |
    /// |---|---|---|
    /// | 0 | | first roll of frame 1 |
    /// | 1-9 | two rolls | first roll of the next frame |
    /// | 1-9 | strike | first roll of the next frame |
    /// | any | first roll only | second roll of the same frame |
    /// | 10 | final two rolls, 10 or more pins | bonus roll of frame 10 |
    /// | 10 | final two rolls, fewer than 10 pins | complete |
    /// | 10 | final three rolls | complete |
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::CorruptState`] for any other combination.
    /// Games built through [`Game::roll`] or [`Game::from_frames`] never
    /// reach it.
    pub fn state(&self) -> Result<GameState, BowlingError> {
        let Some(last) = self.frames.last() else {
            return Ok(GameState::AwaitingFirstRoll(Frame::first()));
        };
        let corrupt = || BowlingError::CorruptState {
            frames: self.frames.len(),
            last: Some(*last),
        };
        let frame = Frame::from_index(self.frames.len() - 1).ok_or_else(corrupt)?;

        let state = match *last {
            FrameScore::TwoRolls(..) if !frame.is_final() => {
                frame.next().map(GameState::AwaitingFirstRoll)
            }
            FrameScore::FinalFrameTwoRolls(..)
                if frame.is_final() && !last.is_complete(frame) =>
            {
                Some(GameState::AwaitingFinalBonusRoll(frame))
            }
            FrameScore::FirstRollOnly(pins) if pins.is_strike() && !frame.is_final() => {
                frame.next().map(GameState::AwaitingFirstRoll)
            }
            // A strike in frame 10 still needs its second roll.
            FrameScore::FirstRollOnly(_) => Some(GameState::AwaitingSecondRoll(frame)),
            FrameScore::FinalFrameTwoRolls(..) | FrameScore::FinalFrameThreeRolls(..)
                if frame.is_final() =>
            {
                Some(GameState::Complete)
            }
            _ => None,
        };

        state.ok_or_else(|| {
            error!(frames = self.frames.len(), last = ?last, "no game state for recorded frames");
            corrupt()
        })
    }

    /// Whether all ten frames are finished.
    pub fn is_complete(&self) -> bool {
        matches!(self.state(), Ok(GameState::Complete))
    }

    /// Record a roll and return the resulting game.
    ///
    /// `self` is left unchanged whether or not the roll is accepted.
    ///
    /// # Errors
    ///
    /// * [`BowlingError::GameAlreadyComplete`] if the game is over. This
    ///   is checked before the pin count.
    /// * [`BowlingError::OutOfRange`] if `pins` is not in 0..=10.
    /// * [`BowlingError::InvalidFrame`] if the roll knocks down more pins
    ///   than are standing.
    /// * [`BowlingError::StateMismatch`] / [`BowlingError::CorruptState`]
    ///   if the recorded frames are inconsistent. Not reachable through
    ///   the public API.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::{BowlingError, Game};
    ///
    /// let before = Game::new().roll(6).unwrap();
    /// let after = before.roll(3).unwrap();
    ///
    /// assert_eq!(before.score(), 6);
    /// assert_eq!(after.score(), 9);
    ///
    /// assert!(matches!(before.roll(5), Err(BowlingError::InvalidFrame(_))));
    /// ```
    #[instrument(level = "debug", skip(self), fields(frames = self.frames.len()))]
    pub fn roll(&self, pins: i32) -> Result<Game, BowlingError> {
        let state = self.state()?;
        if state.is_complete() {
            debug!("roll rejected, game is complete");
            return Err(BowlingError::GameAlreadyComplete);
        }
        let rolled = RolledPins::new(pins)?;

        let frames = self.record(state, rolled)?;
        let game = Game { frames };
        debug!(%state, score = game.score(), "roll recorded");
        Ok(game)
    }

    /// Apply `pins` to a copy of the frame list according to `state`.
    fn record(&self, state: GameState, pins: RolledPins) -> Result<Vec<FrameScore>, BowlingError> {
        let mut frames = self.frames.clone();
        let updated = match (state, self.frames.last()) {
            (GameState::Complete, _) => return Err(BowlingError::GameAlreadyComplete),
            (GameState::AwaitingFirstRoll(_), _) => {
                frames.push(FrameScore::first_roll_only(pins));
                return Ok(frames);
            }
            (GameState::AwaitingSecondRoll(frame), Some(&FrameScore::FirstRollOnly(first))) => {
                if frame.is_final() {
                    FrameScore::final_two_rolls(first, pins)?
                } else {
                    FrameScore::two_rolls(first, pins)?
                }
            }
            (GameState::AwaitingSecondRoll(_), found) => {
                return Err(self.mismatch("a frame with only its first roll", found))
            }
            (
                GameState::AwaitingFinalBonusRoll(_),
                Some(&FrameScore::FinalFrameTwoRolls(first, second)),
            ) => FrameScore::final_three_rolls(first, second, pins)?,
            (GameState::AwaitingFinalBonusRoll(_), found) => {
                return Err(self.mismatch("a final frame with two rolls", found))
            }
        };

        if let Some(last) = frames.last_mut() {
            *last = updated;
        }
        Ok(frames)
    }

    fn mismatch(&self, expected: &'static str, found: Option<&FrameScore>) -> BowlingError {
        error!(expected, found = ?found, "recorded frame does not match game state");
        BowlingError::StateMismatch {
            expected,
            found: found.copied(),
        }
    }

    /// Running total of everything rolled so far.
    ///
    /// Each frame adds its own pinfall. A strike in frames 1-9 also adds
    /// the next two rolls and a spare the next one, taken from as many
    /// following frames as needed. Bonus rolls not yet made add nothing,
    /// so the total for a game in progress counts only what is known.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::Game;
    ///
    /// // Strike, strike, 3: frame 1 already has 10 + 10 + 3.
    /// let game = Game::replay([10, 10, 3]).unwrap();
    /// assert_eq!(game.score(), 23 + 13 + 3);
    /// ```
    pub fn score(&self) -> u32 {
        self.frames
            .iter()
            .enumerate()
            .map(|(index, frame)| frame.score() + self.bonus_credit(index, frame).earned)
            .sum()
    }

    /// Resolve the bonus of the frame at `index` against the rolls after it.
    pub(crate) fn bonus_credit(&self, index: usize, frame: &FrameScore) -> BonusCredit {
        let eligible = Frame::from_index(index).is_some_and(|f| !f.is_final());
        if !eligible {
            return BonusCredit::default();
        }

        let wanted = frame.bonus_rolls();
        let mut taken = 0;
        let mut earned = 0;
        for pins in self
            .frames
            .iter()
            .skip(index + 1)
            .flat_map(FrameScore::rolled_pins)
            .take(wanted)
        {
            earned += u32::from(pins);
            taken += 1;
        }

        BonusCredit {
            earned,
            pending: u8::try_from(wanted - taken).unwrap_or(u8::MAX),
        }
    }

    /// Per-frame breakdown of the running score.
    ///
    /// See [`ScoreCard`].
    pub fn scorecard(&self) -> ScoreCard {
        ScoreCard::new(self)
    }
}

impl TryFrom<Vec<FrameScore>> for Game {
    type Error = BowlingError;

    fn try_from(frames: Vec<FrameScore>) -> Result<Self, Self::Error> {
        Self::from_frames(frames)
    }
}

impl From<Game> for Vec<FrameScore> {
    fn from(game: Game) -> Self {
        game.frames
    }
}
