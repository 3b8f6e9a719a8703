//! Result formatters for terminal display.
//!
//! Pure functions turning a finished game's scores into the standings
//! printed by the game modes.
//!
//! ## Example
//!
//! ```rust
//! use sevens_cli::formatters::{format_standing, rank_players};
//!
//! let standings = rank_players(&[(0, 52), (1, 7)]);
//! assert_eq!(format_standing(&standings[0], "GreedyStrategy-1"), "  1. GreedyStrategy-1 -> 7 pts");
//! ```

use sevens_engine::player::PlayerId;

/// A player's place in the final standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// 1-based
    pub rank: usize,
    pub player_id: PlayerId,
    pub score: u32,
}

/// Sorts scores ascending; equal scores keep their registration order and
/// still receive distinct consecutive ranks.
///
/// # Example
///
/// ```rust
/// use sevens_cli::formatters::rank_players;
///
/// let standings = rank_players(&[(0, 30), (1, 12), (2, 30)]);
/// let order: Vec<u64> = standings.iter().map(|s| s.player_id).collect();
/// assert_eq!(order, vec![1, 0, 2]);
/// assert_eq!(standings[2].rank, 3);
/// ```
pub fn rank_players(scores: &[(PlayerId, u32)]) -> Vec<Standing> {
    let mut sorted = scores.to_vec();
    sorted.sort_by_key(|&(_, score)| score);
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, (player_id, score))| Standing {
            rank: i + 1,
            player_id,
            score,
        })
        .collect()
}

/// Rank of `player_id` in `standings`.
pub fn rank_of(standings: &[Standing], player_id: PlayerId) -> Option<usize> {
    standings
        .iter()
        .find(|s| s.player_id == player_id)
        .map(|s| s.rank)
}

pub fn format_standing(standing: &Standing, label: &str) -> String {
    format!("  {}. {} -> {} pts", standing.rank, label, standing.score)
}

pub fn format_score(label: &str, score: u32) -> String {
    format!("  {} -> {} pts", label, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_registration_order() {
        let standings = rank_players(&[(3, 5), (1, 5), (2, 0)]);
        assert_eq!(
            standings,
            vec![
                Standing { rank: 1, player_id: 2, score: 0 },
                Standing { rank: 2, player_id: 3, score: 5 },
                Standing { rank: 3, player_id: 1, score: 5 },
            ]
        );
        assert_eq!(rank_of(&standings, 1), Some(3));
        assert_eq!(rank_of(&standings, 9), None);
    }

    #[test]
    fn empty_scores_rank_nobody() {
        assert!(rank_players(&[]).is_empty());
    }

    #[test]
    fn score_lines() {
        assert_eq!(format_score("SmartSevens-0", 0), "  SmartSevens-0 -> 0 pts");
    }
}
