//! Rolled pins module.
//!
//! Provides the `RolledPins` type, the validated pin count of a single
//! roll. Every roll entering the engine passes through this type, so no
//! other module needs to re-check the 0..=10 range.

use crate::error::BowlingError;
use crate::PINS_PER_RACK;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The number of pins knocked down by one roll (0-10).
///
/// # Examples
///
/// ```rust
/// use tenpin::RolledPins;
///
/// let pins = RolledPins::new(7).unwrap();
/// assert_eq!(pins.pins(), 7);
/// assert!(!pins.is_strike());
///
/// assert!(RolledPins::new(-1).is_err());
/// assert!(RolledPins::new(11).is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RolledPins(u8);

impl Serialize for RolledPins {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RolledPins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pins = i32::deserialize(deserializer)?;
        RolledPins::new(pins).map_err(serde::de::Error::custom)
    }
}

impl RolledPins {
    /// The pin count of a gutter ball.
    pub const GUTTER: RolledPins = RolledPins(0);

    /// The pin count of a strike.
    pub const STRIKE: RolledPins = RolledPins(PINS_PER_RACK);

    /// Validate a pin count.
    ///
    /// # Errors
    ///
    /// Returns [`BowlingError::OutOfRange`] when `pins` is negative or
    /// greater than ten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tenpin::{BowlingError, RolledPins};
    ///
    /// assert_eq!(RolledPins::new(10).unwrap(), RolledPins::STRIKE);
    /// assert!(matches!(
    ///     RolledPins::new(12),
    ///     Err(BowlingError::OutOfRange { value: 12, .. })
    /// ));
    /// ```
    pub fn new(pins: i32) -> Result<Self, BowlingError> {
        match u8::try_from(pins) {
            Ok(p) if p <= PINS_PER_RACK => Ok(Self(p)),
            _ => Err(BowlingError::out_of_range(
                "pins",
                pins,
                0,
                i32::from(PINS_PER_RACK),
            )),
        }
    }

    /// Number of pins knocked down.
    pub fn pins(self) -> u8 {
        self.0
    }

    /// Whether every pin went down.
    pub fn is_strike(self) -> bool {
        self.0 == PINS_PER_RACK
    }
}

impl TryFrom<i32> for RolledPins {
    type Error = BowlingError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

impl From<RolledPins> for u32 {
    fn from(pins: RolledPins) -> Self {
        u32::from(pins.0)
    }
}

impl std::fmt::Display for RolledPins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
