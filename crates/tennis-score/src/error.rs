//! Errors surfaced by score computation

/// Everything that can go wrong between raw input and a rendered score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// A player was given a negative point count.
    NegativeScore { player: String, score: i64 },
    /// A tied score above Forty has no point name to render.
    NoPointName { score: u64 },
    /// A JSON snapshot could not be parsed.
    InvalidSnapshot(String),
}

impl core::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScoreError::NegativeScore { player, score } =>
                write!(f, "score for {} must be non-negative, got {}", player, score),
            ScoreError::NoPointName { score } =>
                write!(f, "no point name for tied score {}", score),
            ScoreError::InvalidSnapshot(reason) =>
                write!(f, "invalid match snapshot: {}", reason),
        }
    }
}

impl std::error::Error for ScoreError {}
