//! Plays one game of War between two players and prints the report.

use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{Game, GameError, GameOptions, GameState};

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("shuffling with seed {seed}");

    let mut game = Game::new(GameOptions::default(), seed);
    game.deal()?;

    while game.state() == GameState::Playing {
        let round = game.play_round()?;
        println!("{round}");
    }

    let result = game.result()?;
    println!("{}", result.outcome);

    Ok(())
}
