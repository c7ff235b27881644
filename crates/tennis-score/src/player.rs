//! Validated players and match snapshots
//!
//! Raw integers enter here and leave as well-formed values. Nothing past this
//! module needs to care about negative scores.

use serde::{Deserialize, Serialize};
use crate::error::ScoreError;

/// Name used for the first player when the caller supplies none.
pub const DEFAULT_PLAYER1_NAME: &str = "player1";

/// Name used for the second player when the caller supplies none.
pub const DEFAULT_PLAYER2_NAME: &str = "player2";

/// One contestant within a single game
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub score: u64,
}

impl Player {
    /// Build a player, rejecting negative point counts
    pub fn new(score: i64, name: impl Into<String>) -> Result<Self, ScoreError> {
        let name = name.into();
        match u64::try_from(score) {
            Ok(score) => Ok(Self { name, score }),
            Err(_) => {
                tracing::debug!(player = %name, score, "rejected negative score");
                Err(ScoreError::NegativeScore { player: name, score })
            }
        }
    }
}

/// Ordered pair of players making up one game snapshot
///
/// No cross-player constraint is enforced here; the classifier decides what
/// the pair means.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    pub player1: Player,
    pub player2: Player,
}

#[derive(Deserialize)]
struct RawPlayer {
    name: String,
    score: i64,
}

#[derive(Deserialize)]
struct Snapshot {
    player1: RawPlayer,
    player2: RawPlayer,
}

impl Match {
    pub fn new(player1: Player, player2: Player) -> Self {
        Self { player1, player2 }
    }

    /// Build a match with the default player names
    pub fn from_scores(score1: i64, score2: i64) -> Result<Self, ScoreError> {
        let player1 = Player::new(score1, DEFAULT_PLAYER1_NAME)?;
        let player2 = Player::new(score2, DEFAULT_PLAYER2_NAME)?;
        Ok(Self::new(player1, player2))
    }

    /// Parse a named snapshot
    ///
    /// Expected shape:
    /// `{"player1": {"name": "Ana", "score": 2}, "player2": {"name": "Bo", "score": 1}}`
    ///
    /// Scores go through [`Player::new`], so negative values are rejected the
    /// same way as with [`Match::from_scores`].
    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| ScoreError::InvalidSnapshot(e.to_string()))?;

        let player1 = Player::new(snapshot.player1.score, snapshot.player1.name)?;
        let player2 = Player::new(snapshot.player2.score, snapshot.player2.name)?;
        Ok(Self::new(player1, player2))
    }

    /// Absolute point difference between the two players
    pub fn gap(&self) -> u64 {
        self.player1.score.abs_diff(self.player2.score)
    }
}
