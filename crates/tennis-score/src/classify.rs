//! Score category selection
//!
//! A match is classified by walking an ordered rule table and taking the
//! first predicate that holds. The predicates overlap: Deuced refines Tied
//! and Won refines Advantaged, so the table order is the priority order.

use serde::{Deserialize, Serialize};
use crate::player::Match;

/// Points a player needs before Deuce, Advantage or Win apply.
const FORTY: u64 = 3;

/// Mutually exclusive score categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Level at three or four points.
    Deuced,
    /// Level anywhere else.
    Tied,
    /// Someone is past Forty and two points clear.
    Won,
    /// Someone is past Forty and one point clear.
    Advantaged,
    /// Plain point-for-point scoring.
    Ongoing,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Deuced,
        Category::Tied,
        Category::Won,
        Category::Advantaged,
        Category::Ongoing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Deuced => "Deuced",
            Category::Tied => "Tied",
            Category::Won => "Won",
            Category::Advantaged => "Advantaged",
            Category::Ongoing => "Ongoing",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

type Predicate = fn(&Match) -> bool;

fn is_tied(game: &Match) -> bool {
    game.player1.score == game.player2.score
}

fn is_deuced(game: &Match) -> bool {
    // Tie forces both scores equal, so checking player1 is enough
    is_tied(game) && (FORTY..=FORTY + 1).contains(&game.player1.score)
}

fn is_advantaged(game: &Match) -> bool {
    game.player1.score > FORTY || game.player2.score > FORTY
}

fn is_won(game: &Match) -> bool {
    is_advantaged(game) && game.gap() >= 2
}

/// Ordered rules; anything that matches none of them is `Ongoing`.
const RULES: [(Category, Predicate); 4] = [
    (Category::Deuced, is_deuced),
    (Category::Tied, is_tied),
    (Category::Won, is_won),
    (Category::Advantaged, is_advantaged),
];

/// Select the category for a match
///
/// Total over every pair of non-negative scores.
pub fn classify(game: &Match) -> Category {
    RULES
        .iter()
        .find(|(_, holds)| holds(game))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Ongoing)
}
