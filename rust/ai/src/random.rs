//! Random strategy: proposes any card in hand, legal or not.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sevens_engine::cards::Card;
use sevens_engine::deck::time_seed;
use sevens_engine::player::{Decision, PlayerId, Strategy};
use sevens_engine::table::TableLayout;

/// Picks a uniformly random index over the whole hand.
///
/// Legality is left to the engine, so most picks early in a round are
/// absorbed as passes.
///
/// # Example
///
/// ```rust
/// use sevens_ai::random::RandomStrategy;
/// use sevens_engine::cards::{Card, Rank, Suit};
/// use sevens_engine::player::{Decision, Strategy};
/// use sevens_engine::table::generate_initial_layout;
///
/// let mut ai = RandomStrategy::with_seed(Some(3));
/// let hand = [Card::new(Suit::Clubs, Rank::Two), Card::new(Suit::Hearts, Rank::Nine)];
/// match ai.select_card(&hand, &generate_initial_layout()) {
///     Decision::Play(i) => assert!(i < hand.len()),
///     Decision::Pass => unreachable!("non-empty hand"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
    player_id: Option<PlayerId>,
}

impl RandomStrategy {
    /// Time-seeded instance.
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(time_seed)),
            player_id: None,
        }
    }

    pub fn player_id(&self) -> Option<PlayerId> {
        self.player_id
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn initialize(&mut self, player_id: PlayerId) {
        self.player_id = Some(player_id);
    }

    fn select_card(&mut self, hand: &[Card], _table: &TableLayout) -> Decision {
        if hand.is_empty() {
            return Decision::Pass;
        }
        Decision::Play(self.rng.random_range(0..hand.len()))
    }

    fn name(&self) -> &str {
        "RandomStrategy"
    }
}
