//! Scorecard example: frame-by-frame breakdown
//!
//! This example demonstrates:
//! - Pinfall, bonus and cumulative totals per frame
//! - Frames whose total is still waiting on bonus rolls
//! - Serializing a scorecard for another application

use tenpin::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Game in progress: strike, spare, then one roll of frame 3.
    let game = Game::replay([10, 7, 3, 9])?;
    let card = game.scorecard();

    println!("{}\n", card);

    println!("=== Breakdown ===");
    for line in &card.lines {
        let note = if line.pending_bonus_rolls > 0 {
            format!(" (waiting on {} bonus roll(s))", line.pending_bonus_rolls)
        } else {
            String::new()
        };
        println!(
            "Frame {:>2}: {:<6} pinfall {:>2} + bonus {:>2} = {:>3}{}",
            line.frame,
            line.marks.to_string(),
            line.pinfall,
            line.bonus,
            line.cumulative,
            note
        );
    }

    println!("\nTotal so far: {}", card.total);
    println!("\nJSON: {}", serde_json::to_string_pretty(&card)?);

    Ok(())
}
