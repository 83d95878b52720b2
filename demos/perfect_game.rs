//! Perfect game example: twelve strikes in a row
//!
//! This example demonstrates:
//! - Strike bonuses chaining across following frames
//! - The three-roll final frame

use tenpin::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BowlingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = Game::new();
    let mut strikes = 0;
    while !game.is_complete() {
        game = game.roll(10)?;
        strikes += 1;
        println!("After {:>2} strikes: {:>3}", strikes, game.score());
    }

    println!("\n{}", game.scorecard());
    assert_eq!(game.score(), 300);

    Ok(())
}
