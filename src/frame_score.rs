//! Frame score module.
//!
//! A `FrameScore` records the rolls made in one frame. It is a closed set
//! of shapes: a frame that has seen only its first roll, a finished
//! ordinary frame, and the two shapes frame 10 can take once its second
//! roll is in.
//!
//! The variants are public so callers can match on them. A value built
//! directly from a variant is not checked. Use the checked constructors
//! (or [`FrameScore::validate`]) when a frame comes from outside the
//! engine. [`Game`](crate::Game) only ever stores validated frames.

use crate::error::BowlingError;
use crate::frame::Frame;
use crate::pins::RolledPins;
use crate::PINS_PER_RACK;
use serde::{Deserialize, Serialize};

/// Rack total of two rolls, without overflow.
fn rack(first: RolledPins, second: RolledPins) -> u8 {
    first.pins() + second.pins()
}

/// Scoresheet mark for a roll on a fresh rack.
fn mark(pins: RolledPins) -> String {
    match pins.pins() {
        0 => String::from("-"),
        p if p == PINS_PER_RACK => String::from("X"),
        p => p.to_string(),
    }
}

/// Scoresheet mark for a roll at pins left standing after `previous`.
fn follow_up_mark(previous: RolledPins, pins: RolledPins) -> String {
    if rack(previous, pins) == PINS_PER_RACK {
        String::from("/")
    } else {
        mark(pins)
    }
}

/// The rolls recorded in a single frame.
///
/// # Examples
///
/// ```rust
/// use tenpin::{FrameScore, RolledPins};
///
/// let six = RolledPins::new(6).unwrap();
/// let four = RolledPins::new(4).unwrap();
///
/// let spare = FrameScore::two_rolls(six, four).unwrap();
/// assert_eq!(spare.score(), 10);
/// assert!(spare.is_spare());
/// assert_eq!(spare.rolled_pins(), vec![six, four]);
///
/// // Two rolls of an ordinary frame cannot exceed a full rack.
/// assert!(FrameScore::two_rolls(six, six).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameScore {
    /// One roll recorded.
    ///
    /// In frames 1-9 this is either a strike (the frame is finished) or a
    /// frame waiting for its second roll. In frame 10 it always waits for
    /// a second roll.
    FirstRollOnly(RolledPins),

    /// A finished ordinary frame (frames 1-9).
    TwoRolls(RolledPins, RolledPins),

    /// Frame 10 after its second roll.
    ///
    /// Finished when the two rolls left pins standing, otherwise waiting
    /// for the bonus roll.
    FinalFrameTwoRolls(RolledPins, RolledPins),

    /// Frame 10 finished with its bonus roll.
    FinalFrameThreeRolls(RolledPins, RolledPins, RolledPins),
}

impl FrameScore {
    /// Record the first roll of a frame.
    pub fn first_roll_only(pins: RolledPins) -> Self {
        FrameScore::FirstRollOnly(pins)
    }

    /// Build a finished ordinary frame.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidFrame`] when the two rolls knock down
    /// more than ten pins.
    pub fn two_rolls(first: RolledPins, second: RolledPins) -> Result<Self, BowlingError> {
        FrameScore::TwoRolls(first, second).validated()
    }

    /// Build frame 10 after its second roll.
    ///
    /// After a strike the rack is reset, so the second roll may be
    /// anything. Otherwise the two rolls share one rack.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidFrame`] when a non-strike first roll
    /// and the second roll knock down more than ten pins.
    pub fn final_two_rolls(first: RolledPins, second: RolledPins) -> Result<Self, BowlingError> {
        FrameScore::FinalFrameTwoRolls(first, second).validated()
    }

    /// Build frame 10 with its bonus roll.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidFrame`] when the first two rolls are
    /// neither a strike nor a spare, or when the rolls overfill a rack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::{FrameScore, RolledPins};
    ///
    /// let p = |n| RolledPins::new(n).unwrap();
    ///
    /// assert_eq!(FrameScore::final_three_rolls(p(2), p(8), p(6)).unwrap().score(), 16);
    /// assert_eq!(FrameScore::final_three_rolls(p(10), p(10), p(10)).unwrap().score(), 30);
    ///
    /// // No bonus roll without a strike or spare.
    /// assert!(FrameScore::final_three_rolls(p(2), p(7), p(1)).is_err());
    /// // After a strike, the second and third roll share a rack.
    /// assert!(FrameScore::final_three_rolls(p(10), p(6), p(5)).is_err());
    /// ```
    pub fn final_three_rolls(
        first: RolledPins,
        second: RolledPins,
        third: RolledPins,
    ) -> Result<Self, BowlingError> {
        FrameScore::FinalFrameThreeRolls(first, second, third).validated()
    }

    fn validated(self) -> Result<Self, BowlingError> {
        self.validate()?;
        Ok(self)
    }

    /// Check the rack rules of this frame.
    ///
    /// The checked constructors call this already. It is useful for
    /// frames built directly from the enum variants or read from storage.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::InvalidFrame`] describing the broken rule.
    pub fn validate(&self) -> Result<(), BowlingError> {
        match *self {
            FrameScore::FirstRollOnly(_) => Ok(()),
            FrameScore::TwoRolls(first, second) => {
                if rack(first, second) > PINS_PER_RACK {
                    return Err(BowlingError::InvalidFrame(format!(
                        "{} + {} knocks down more than {} pins",
                        first, second, PINS_PER_RACK
                    )));
                }
                Ok(())
            }
            FrameScore::FinalFrameTwoRolls(first, second) => {
                if !first.is_strike() && rack(first, second) > PINS_PER_RACK {
                    return Err(BowlingError::InvalidFrame(format!(
                        "{} + {} knocks down more than {} pins in the final frame",
                        first, second, PINS_PER_RACK
                    )));
                }
                Ok(())
            }
            FrameScore::FinalFrameThreeRolls(first, second, third) => {
                if !first.is_strike() && rack(first, second) != PINS_PER_RACK {
                    return Err(BowlingError::InvalidFrame(format!(
                        "bonus roll after {} + {} requires a strike or spare",
                        first, second
                    )));
                }
                // A strike followed by a non-strike leaves pins for the third roll.
                if first.is_strike()
                    && !second.is_strike()
                    && rack(second, third) > PINS_PER_RACK
                {
                    return Err(BowlingError::InvalidFrame(format!(
                        "{} + {} after a strike knocks down more than {} pins",
                        second, third, PINS_PER_RACK
                    )));
                }
                Ok(())
            }
        }
    }

    /// The rolls of this frame, in the order they were made.
    ///
    /// Bonus lookups walk these across following frames, so a strike
    /// followed by another strike can take its second bonus roll from the
    /// frame after that.
    pub fn rolled_pins(&self) -> Vec<RolledPins> {
        match *self {
            FrameScore::FirstRollOnly(pins) => vec![pins],
            FrameScore::TwoRolls(first, second) | FrameScore::FinalFrameTwoRolls(first, second) => {
                vec![first, second]
            }
            FrameScore::FinalFrameThreeRolls(first, second, third) => vec![first, second, third],
        }
    }

    /// The first roll of the frame.
    pub fn first(&self) -> RolledPins {
        match *self {
            FrameScore::FirstRollOnly(first)
            | FrameScore::TwoRolls(first, _)
            | FrameScore::FinalFrameTwoRolls(first, _)
            | FrameScore::FinalFrameThreeRolls(first, _, _) => first,
        }
    }

    /// Raw pinfall of the frame, without bonus credit from later frames.
    pub fn score(&self) -> u32 {
        self.rolled_pins().into_iter().map(u32::from).sum()
    }

    /// Whether the frame is a strike in frames 1-9.
    pub fn is_strike(&self) -> bool {
        matches!(self, FrameScore::FirstRollOnly(pins) if pins.is_strike())
    }

    /// Whether the frame is a spare in frames 1-9.
    pub fn is_spare(&self) -> bool {
        matches!(self, FrameScore::TwoRolls(first, second) if rack(*first, *second) == PINS_PER_RACK)
    }

    /// How many following rolls this frame earns as bonus when it is one
    /// of frames 1-9: two for a strike, one for a spare.
    pub fn bonus_rolls(&self) -> usize {
        if self.is_strike() {
            2
        } else if self.is_spare() {
            1
        } else {
            0
        }
    }

    /// Whether no further roll belongs to this frame when it is `frame`.
    pub fn is_complete(&self, frame: Frame) -> bool {
        match self {
            FrameScore::FirstRollOnly(pins) => !frame.is_final() && pins.is_strike(),
            FrameScore::TwoRolls(..) => true,
            FrameScore::FinalFrameTwoRolls(..) => self.score() < u32::from(PINS_PER_RACK),
            FrameScore::FinalFrameThreeRolls(..) => true,
        }
    }

    /// Whether this shape may only be recorded for frame 10.
    pub fn is_final_shape(&self) -> bool {
        matches!(
            self,
            FrameScore::FinalFrameTwoRolls(..) | FrameScore::FinalFrameThreeRolls(..)
        )
    }
}

impl std::fmt::Display for FrameScore {
    /// Scoresheet notation: `X` strike, `/` spare, `-` gutter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            FrameScore::FirstRollOnly(pins) => write!(f, "{}", mark(pins)),
            FrameScore::TwoRolls(first, second) => {
                write!(f, "{} {}", mark(first), follow_up_mark(first, second))
            }
            FrameScore::FinalFrameTwoRolls(first, second) => {
                let second_mark = if first.is_strike() {
                    mark(second)
                } else {
                    follow_up_mark(first, second)
                };
                write!(f, "{} {}", mark(first), second_mark)
            }
            FrameScore::FinalFrameThreeRolls(first, second, third) => {
                let (second_mark, third_mark) = if first.is_strike() {
                    let third_mark = if second.is_strike() {
                        mark(third)
                    } else {
                        follow_up_mark(second, third)
                    };
                    (mark(second), third_mark)
                } else {
                    (follow_up_mark(first, second), mark(third))
                };
                write!(f, "{} {} {}", mark(first), second_mark, third_mark)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: i32) -> RolledPins {
        RolledPins::new(n).unwrap()
    }

    #[test]
    fn test_two_rolls_rack_limit() {
        assert!(FrameScore::two_rolls(p(3), p(7)).is_ok());
        assert!(FrameScore::two_rolls(p(0), p(10)).is_ok());
        assert!(matches!(
            FrameScore::two_rolls(p(6), p(5)),
            Err(BowlingError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_final_two_rolls_after_strike() {
        assert!(FrameScore::final_two_rolls(p(10), p(10)).is_ok());
        assert!(FrameScore::final_two_rolls(p(10), p(7)).is_ok());
        assert!(FrameScore::final_two_rolls(p(2), p(8)).is_ok());
        assert!(matches!(
            FrameScore::final_two_rolls(p(5), p(6)),
            Err(BowlingError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_final_three_rolls_requires_mark() {
        assert!(FrameScore::final_three_rolls(p(10), p(3), p(7)).is_ok());
        assert!(FrameScore::final_three_rolls(p(0), p(10), p(10)).is_ok());
        assert!(FrameScore::final_three_rolls(p(4), p(5), p(1)).is_err());
        assert!(FrameScore::final_three_rolls(p(10), p(3), p(8)).is_err());
    }

    #[test]
    fn test_validate_unchecked_variant() {
        assert!(FrameScore::TwoRolls(p(9), p(9)).validate().is_err());
        assert!(FrameScore::FirstRollOnly(p(9)).validate().is_ok());
    }

    #[test]
    fn test_rolled_pins_order() {
        let frame = FrameScore::final_three_rolls(p(10), p(2), p(8)).unwrap();
        assert_eq!(frame.rolled_pins(), vec![p(10), p(2), p(8)]);
        assert_eq!(frame.score(), 20);
        assert_eq!(frame.first(), p(10));
    }

    #[test]
    fn test_bonus_rolls() {
        assert_eq!(FrameScore::first_roll_only(p(10)).bonus_rolls(), 2);
        assert_eq!(FrameScore::first_roll_only(p(9)).bonus_rolls(), 0);
        assert_eq!(FrameScore::two_rolls(p(1), p(9)).unwrap().bonus_rolls(), 1);
        assert_eq!(FrameScore::two_rolls(p(1), p(8)).unwrap().bonus_rolls(), 0);
        assert_eq!(FrameScore::final_two_rolls(p(1), p(9)).unwrap().bonus_rolls(), 0);
    }

    #[test]
    fn test_is_complete() {
        let frame_five = Frame::new(5).unwrap();
        assert!(FrameScore::first_roll_only(p(10)).is_complete(frame_five));
        assert!(!FrameScore::first_roll_only(p(10)).is_complete(Frame::last()));
        assert!(!FrameScore::first_roll_only(p(4)).is_complete(frame_five));
        assert!(FrameScore::final_two_rolls(p(4), p(5)).unwrap().is_complete(Frame::last()));
        assert!(!FrameScore::final_two_rolls(p(4), p(6)).unwrap().is_complete(Frame::last()));
    }

    #[test]
    fn test_display_notation() {
        assert_eq!(FrameScore::first_roll_only(p(10)).to_string(), "X");
        assert_eq!(FrameScore::first_roll_only(p(0)).to_string(), "-");
        assert_eq!(FrameScore::two_rolls(p(5), p(5)).unwrap().to_string(), "5 /");
        assert_eq!(FrameScore::two_rolls(p(3), p(0)).unwrap().to_string(), "3 -");
        assert_eq!(FrameScore::final_two_rolls(p(10), p(10)).unwrap().to_string(), "X X");
        assert_eq!(
            FrameScore::final_three_rolls(p(10), p(10), p(10)).unwrap().to_string(),
            "X X X"
        );
        assert_eq!(
            FrameScore::final_three_rolls(p(10), p(3), p(7)).unwrap().to_string(),
            "X 3 /"
        );
        assert_eq!(
            FrameScore::final_three_rolls(p(2), p(8), p(6)).unwrap().to_string(),
            "2 / 6"
        );
    }

    #[test]
    fn test_frame_score_serde() {
        let frame = FrameScore::two_rolls(p(4), p(6)).unwrap();
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"TwoRolls":[4,6]}"#);
        let back: FrameScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
        assert!(serde_json::from_str::<FrameScore>(r#"{"FirstRollOnly":12}"#).is_err());
    }
}
