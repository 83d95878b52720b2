//! What-if example: preview rolls without committing them
//!
//! This example demonstrates:
//! - Deriving several continuations from the same game value
//! - Undo by keeping the previous value
//! - Handling rejected rolls

use tenpin::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BowlingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let game = Game::replay([10, 10, 6])?;
    println!("Current: {} after {}", game.score(), game.state()?);

    println!("\nWhat would the next roll score?");
    for pins in 0..=10 {
        match game.roll(pins) {
            Ok(next) => println!("  {:>2} pins -> {:>3}", pins, next.score()),
            Err(err) => println!("  {:>2} pins -> rejected: {}", pins, err),
        }
    }

    // Undo: the earlier value is still there.
    let committed = game.roll(3)?;
    let undone = game.clone();
    println!("\nCommitted 3: {}", committed.score());
    println!("Undone:      {}", undone.score());

    Ok(())
}
