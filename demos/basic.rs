//! Basic example: roll a game frame by frame
//!
//! This example demonstrates:
//! - Creating a game and rolling into it
//! - Inspecting the state to decide what to prompt for next
//! - Reading the running score
//!
//! Run with `RUST_LOG=tenpin=debug` to see every recorded roll.

use tenpin::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BowlingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rolls = [1, 4, 4, 5, 6, 4, 5, 5, 10, 0, 1, 7, 3, 6, 4, 10, 2, 8, 6];

    let mut game = Game::new();
    for pins in rolls {
        let state = game.state()?;
        game = game.roll(pins)?;
        println!("{:<22} rolled {:>2}  score {:>3}", state.to_string(), pins, game.score());
    }

    println!("\nFinal state: {}", game.state()?);
    println!("Final score: {}", game.score());

    Ok(())
}
