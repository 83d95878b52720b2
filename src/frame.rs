//! Frame index module.
//!
//! A game has exactly ten frames, numbered from one. `Frame` is the
//! validated index carried by [`GameState`](crate::GameState) and
//! [`FrameLine`](crate::FrameLine).

use crate::error::BowlingError;
use crate::FRAMES_PER_GAME;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A frame number (1-10).
///
/// # Examples
///
/// ```rust
/// use tenpin::Frame;
///
/// let first = Frame::first();
/// assert_eq!(first.number(), 1);
/// assert_eq!(first.next().map(Frame::number), Some(2));
///
/// assert!(Frame::last().is_final());
/// assert_eq!(Frame::last().next(), None);
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frame(u8);

impl Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = i32::deserialize(deserializer)?;
        Frame::new(number).map_err(serde::de::Error::custom)
    }
}

impl Frame {
    /// Validate a frame number.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::OutOfRange`] when `number` is below 1 or
    /// above 10.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::Frame;
    ///
    /// assert_eq!(Frame::new(4).unwrap().number(), 4);
    /// assert!(Frame::new(0).is_err());
    /// assert!(Frame::new(11).is_err());
    /// ```
    pub fn new(number: i32) -> Result<Self, BowlingError> {
        match u8::try_from(number) {
            Ok(n) if (1..=FRAMES_PER_GAME).contains(&n) => Ok(Self(n)),
            _ => Err(BowlingError::out_of_range(
                "frame",
                number,
                1,
                i32::from(FRAMES_PER_GAME),
            )),
        }
    }

    /// Frame 1.
    pub fn first() -> Self {
        Self(1)
    }

    /// Frame 10.
    pub fn last() -> Self {
        Self(FRAMES_PER_GAME)
    }

    /// The one-based frame number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position of this frame in a game's frame list.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The frame that follows, or `None` after frame 10.
    pub fn next(self) -> Option<Self> {
        (self.0 < FRAMES_PER_GAME).then(|| Self(self.0 + 1))
    }

    /// Whether this is frame 10, the only frame with a bonus roll.
    pub fn is_final(self) -> bool {
        self.0 == FRAMES_PER_GAME
    }

    /// The frame at a zero-based list position, if it is within a game.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index + 1)
            .ok()
            .filter(|n| *n <= FRAMES_PER_GAME)
            .map(Self)
    }
}

impl TryFrom<i32> for Frame {
    type Error = BowlingError;

    fn try_from(number: i32) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_bounds() {
        assert_eq!(Frame::new(1).unwrap(), Frame::first());
        assert_eq!(Frame::new(10).unwrap(), Frame::last());
        assert!(matches!(
            Frame::new(0),
            Err(BowlingError::OutOfRange { what: "frame", value: 0, .. })
        ));
        assert!(Frame::new(11).is_err());
        assert!(Frame::new(-5).is_err());
    }

    #[test]
    fn test_frame_next() {
        let mut frame = Frame::first();
        let mut seen = 1;
        while let Some(next) = frame.next() {
            assert_eq!(next.number(), frame.number() + 1);
            frame = next;
            seen += 1;
        }
        assert_eq!(seen, 10);
        assert!(frame.is_final());
    }

    #[test]
    fn test_frame_index() {
        assert_eq!(Frame::first().index(), 0);
        assert_eq!(Frame::last().index(), 9);
        assert_eq!(Frame::from_index(0), Some(Frame::first()));
        assert_eq!(Frame::from_index(9), Some(Frame::last()));
        assert_eq!(Frame::from_index(10), None);
    }

    #[test]
    fn test_frame_serde() {
        let frame: Frame = serde_json::from_str("3").unwrap();
        assert_eq!(frame.number(), 3);
        assert_eq!(serde_json::to_string(&frame).unwrap(), "3");
        assert!(serde_json::from_str::<Frame>("0").is_err());
    }
}
