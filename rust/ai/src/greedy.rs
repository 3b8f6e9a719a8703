//! Greedy strategy: always proposes the first card in hand.

use sevens_engine::cards::Card;
use sevens_engine::player::{Decision, PlayerId, Strategy};
use sevens_engine::table::TableLayout;

/// Always returns index 0 for a non-empty hand.
#[derive(Debug, Clone, Default)]
pub struct GreedyStrategy {
    player_id: Option<PlayerId>,
}

impl GreedyStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for GreedyStrategy {
    fn initialize(&mut self, player_id: PlayerId) {
        self.player_id = Some(player_id);
    }

    fn select_card(&mut self, hand: &[Card], _table: &TableLayout) -> Decision {
        if hand.is_empty() {
            Decision::Pass
        } else {
            Decision::Play(0)
        }
    }

    fn name(&self) -> &str {
        "GreedyStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevens_engine::cards::{Rank, Suit};
    use sevens_engine::table::generate_initial_layout;

    #[test]
    fn first_card_even_when_illegal() {
        let mut ai = GreedyStrategy::new();
        let hand = [
            Card::new(Suit::Clubs, Rank::Ace),
            Card::new(Suit::Diamonds, Rank::Eight),
        ];
        assert_eq!(
            ai.select_card(&hand, &generate_initial_layout()),
            Decision::Play(0)
        );
        assert_eq!(
            ai.select_card(&[], &generate_initial_layout()),
            Decision::Pass
        );
    }
}
