//! Score string rendering

use crate::classify::Category;
use crate::error::ScoreError;
use crate::player::{Match, Player};

/// Spoken names for zero through three points
pub const POINT_NAMES: [&str; 4] = ["Love", "Fifteen", "Thirty", "Forty"];

/// Spoken name for a point count, if it has one
pub fn point_name(score: u64) -> Option<&'static str> {
    usize::try_from(score).ok().and_then(|i| POINT_NAMES.get(i).copied())
}

/// The player with the strictly higher score, if any
pub fn leader(game: &Match) -> Option<&Player> {
    match game.player1.score.cmp(&game.player2.score) {
        core::cmp::Ordering::Greater => Some(&game.player1),
        core::cmp::Ordering::Less => Some(&game.player2),
        core::cmp::Ordering::Equal => None,
    }
}

fn named(score: u64) -> Result<&'static str, ScoreError> {
    point_name(score).ok_or(ScoreError::NoPointName { score })
}

/// Render the display string for an already-classified match
///
/// Fails only for a tie above Forty, which has no spoken form.
pub fn render(category: Category, game: &Match) -> Result<String, ScoreError> {
    let rendered = match category {
        Category::Deuced => "Deuce".to_string(),
        Category::Tied => format!("{}-All", named(game.player1.score)?),
        Category::Won => format!("Win for {}", leader_name(game)),
        Category::Advantaged => format!("Advantage {}", leader_name(game)),
        Category::Ongoing => format!(
            "{}-{}",
            named(game.player1.score)?,
            named(game.player2.score)?
        ),
    };
    Ok(rendered)
}

// Won and Advantaged always carry a point gap; player2 is the tie fallback
fn leader_name(game: &Match) -> &str {
    leader(game).unwrap_or(&game.player2).name.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(score1: i64, score2: i64) -> Match {
        Match::from_scores(score1, score2).unwrap()
    }

    #[test]
    fn test_point_names() {
        assert_eq!(point_name(0), Some("Love"));
        assert_eq!(point_name(1), Some("Fifteen"));
        assert_eq!(point_name(2), Some("Thirty"));
        assert_eq!(point_name(3), Some("Forty"));
        assert_eq!(point_name(4), None);
        assert_eq!(point_name(u64::MAX), None);
    }

    #[test]
    fn test_leader() {
        assert_eq!(leader(&game(5, 3)).map(|p| p.name.as_str()), Some("player1"));
        assert_eq!(leader(&game(3, 5)).map(|p| p.name.as_str()), Some("player2"));
        assert!(leader(&game(2, 2)).is_none());
    }

    #[test]
    fn test_render_deuce() {
        assert_eq!(render(Category::Deuced, &game(3, 3)).unwrap(), "Deuce");
    }

    #[test]
    fn test_render_tied() {
        assert_eq!(render(Category::Tied, &game(0, 0)).unwrap(), "Love-All");
        assert_eq!(render(Category::Tied, &game(1, 1)).unwrap(), "Fifteen-All");
        assert_eq!(render(Category::Tied, &game(2, 2)).unwrap(), "Thirty-All");
    }

    #[test]
    fn test_render_tied_above_forty_fails() {
        let err = render(Category::Tied, &game(5, 5)).unwrap_err();
        assert_eq!(err, ScoreError::NoPointName { score: 5 });
    }

    #[test]
    fn test_render_won_names_leader() {
        assert_eq!(render(Category::Won, &game(5, 3)).unwrap(), "Win for player1");
        assert_eq!(render(Category::Won, &game(3, 5)).unwrap(), "Win for player2");
    }

    #[test]
    fn test_render_advantage_names_leader() {
        assert_eq!(render(Category::Advantaged, &game(4, 3)).unwrap(), "Advantage player1");
        assert_eq!(render(Category::Advantaged, &game(5, 6)).unwrap(), "Advantage player2");
    }

    #[test]
    fn test_render_ongoing() {
        assert_eq!(render(Category::Ongoing, &game(0, 1)).unwrap(), "Love-Fifteen");
        assert_eq!(render(Category::Ongoing, &game(3, 2)).unwrap(), "Forty-Thirty");
    }

    #[test]
    fn test_render_uses_custom_names() {
        let game = Match::new(Player::new(4, "Ana").unwrap(), Player::new(2, "Bo").unwrap());
        assert_eq!(render(Category::Won, &game).unwrap(), "Win for Ana");
    }
}
