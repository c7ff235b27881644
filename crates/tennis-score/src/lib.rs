//! Tennis Game Score
//!
//! Turns the raw point counts of a single tennis game into the score a
//! chair umpire would call. This crate is compiled to:
//! - Native (rlib for Rust callers)
//! - WASM (for the browser scoreboard, behind the `wasm` feature)

mod error;
mod player;
mod classify;
mod render;

#[cfg(feature = "wasm")]
mod wasm;

use serde::{Deserialize, Serialize};

pub use error::ScoreError;
pub use player::{Match, Player, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME};
pub use classify::{classify, Category};
pub use render::{leader, point_name, render, POINT_NAMES};

/// Outcome of scoring one snapshot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub category: Category,
    pub score: String,
    /// Name of the player ahead, set only for Won and Advantaged
    pub leader: Option<String>,
}

/// Classify and render a match
pub fn score_match(game: &Match) -> Result<ScoreReport, ScoreError> {
    let category = classify(game);
    let score = render(category, game)?;

    tracing::debug!(
        score1 = game.player1.score,
        score2 = game.player2.score,
        category = %category,
        "scored game"
    );

    let ahead = match category {
        Category::Won | Category::Advantaged => leader(game).map(|p| p.name.clone()),
        Category::Deuced | Category::Tied | Category::Ongoing => None,
    };

    Ok(ScoreReport { category, score, leader: ahead })
}

/// Score a game between `player1` and `player2`
///
/// # Errors
/// `NegativeScore` if either input is below zero, `NoPointName` for a tie
/// above Forty.
pub fn get_score(score1: i64, score2: i64) -> Result<String, ScoreError> {
    let game = Match::from_scores(score1, score2)?;
    Ok(score_match(&game)?.score)
}

/// Score a game with caller-supplied player names
pub fn get_score_named(
    name1: &str,
    score1: i64,
    name2: &str,
    score2: i64,
) -> Result<String, ScoreError> {
    let game = Match::new(Player::new(score1, name1)?, Player::new(score2, name2)?);
    Ok(score_match(&game)?.score)
}
