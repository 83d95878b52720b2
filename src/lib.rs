//! # tenpin - Deterministic Ten-Pin Bowling Scoring Engine
//!
//! An embeddable scoring engine for a single game of ten-pin bowling:
//! - **Validated** rolls (pin counts, rack limits, frame 10 bonus rules)
//! - **Derived** state (the next legal roll is computed, never stored)
//! - **Immutable** games (every roll returns a new `Game`)
//! - **Best-effort** running score with strike and spare lookahead
//!
//! ## Core Concepts
//!
//! ```text
//! roll(pins) → [RolledPins] → [FrameScore] → Game → state() / score()
//! ```
//!
//! 1. **RolledPins** validates a single roll (0-10)
//! 2. **FrameScore** records the rolls of one frame in one of four shapes
//! 3. **Game** keeps the frames and derives `GameState` and the score
//!
//! A strike earns the next two rolls as bonus and a spare the next one.
//! Bonus rolls are looked up across as many following frames as needed,
//! so a run of strikes is credited as soon as each roll is made. Rolls
//! that have not happened yet simply add nothing.
//!
//! ## Example
//!
//! ```rust
//! use tenpin::*;
//!
//! let game = Game::new()
//!     .roll(10)?       // frame 1: strike
//!     .roll(7)?        // frame 2
//!     .roll(3)?;       //          spare
//!
//! assert_eq!(game.score(), 30); // 10 + 7 + 3, then 10 waiting for a bonus
//! assert_eq!(game.state()?, GameState::AwaitingFirstRoll(Frame::new(3)?));
//!
//! // The earlier game is untouched, so a roll can be previewed.
//! let preview = game.roll(9)?;
//! assert_eq!(preview.score(), 48);
//! assert_eq!(game.score(), 30);
//! # Ok::<(), BowlingError>(())
//! ```
//!
//! ## Modules
//!
//! - [`pins`] - Validated pin count of a roll
//! - [`frame`] - Validated frame number
//! - [`frame_score`] - The rolls of one frame
//! - [`state`] - Which roll is legal next
//! - [`game`] - The game aggregate, rolling and scoring
//! - [`scorecard`] - Frame-by-frame score breakdown
//! - [`error`] - Error types
//!
//! ## Logging
//!
//! The engine emits [`tracing`] events at `debug` level for each roll and
//! at `error` level for internal inconsistencies. It never installs a
//! subscriber; that is left to the host application.

pub mod error;
pub mod frame;
pub mod frame_score;
pub mod game;
pub mod pins;
pub mod scorecard;
pub mod state;

/// Pins standing at the start of every rack.
pub const PINS_PER_RACK: u8 = 10;

/// Frames in a game.
pub const FRAMES_PER_GAME: u8 = 10;

// Re-export main types for convenience
pub use error::BowlingError;
pub use frame::Frame;
pub use frame_score::FrameScore;
pub use game::Game;
pub use pins::RolledPins;
pub use scorecard::{FrameLine, ScoreCard};
pub use state::GameState;
