//! Heuristic ("Smart") strategy.
//!
//! Only legal cards are considered. Cards that extend a suit already on the
//! table are preferred over Sevens that open a new suit; within the chosen
//! group every card gets an additive score and the best one is played.
//!
//! # Scoring
//!
//! - +10 for being playable at all
//! - half the summed power (Ace = 14) of own same-suit cards the play would
//!   newly unlock
//! - opening a suit: +20 with 8+ cards of it, +5 with 4+, otherwise -40
//! - +4 per own same-suit card one rank above or below
//! - -6 for a Six while the Five is not down, or an Eight while the Nine is not down
//! - -8 when holding at most one card of the suit, else +1 per card held in it
//! - -3 per unplayed neighbour rank the player does not hold
//! - -1 per opponent that has passed at least once this game

use std::collections::BTreeMap;

use sevens_engine::cards::{Card, Rank};
use sevens_engine::player::{Decision, PlayerId, Strategy};
use sevens_engine::table::TableLayout;
use tracing::{debug, trace};

/// Heuristic strategy with per-game memory of played cards and passes.
///
/// # Example
///
/// ```rust
/// use sevens_ai::smart::SmartStrategy;
/// use sevens_engine::cards::{Card, Rank, Suit};
/// use sevens_engine::player::{Decision, Strategy};
/// use sevens_engine::table::generate_initial_layout;
///
/// let mut ai = SmartStrategy::new();
/// let hand = [Card::new(Suit::Clubs, Rank::Two), Card::new(Suit::Diamonds, Rank::Eight)];
/// // the Two of Clubs is not playable, the Eight of Diamonds is
/// assert_eq!(ai.select_card(&hand, &generate_initial_layout()), Decision::Play(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SmartStrategy {
    player_id: Option<PlayerId>,
    /// Bit `card.id()` set for every card reported through `observe_move`
    cards_seen: u64,
    passes: BTreeMap<PlayerId, u32>,
}

impl SmartStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards_seen(&self) -> u64 {
        self.cards_seen
    }

    pub fn passes(&self, player_id: PlayerId) -> u32 {
        self.passes.get(&player_id).copied().unwrap_or(0)
    }

    /// Heuristic value of playing `card` (which must be in `hand`) now.
    pub fn score_card(&self, card: &Card, hand: &[Card], table: &TableLayout) -> i32 {
        let mut score = 10;

        let same_suit = hand.iter().filter(|h| h.suit == card.suit).count() as i32;

        let mut after = *table;
        after.place(*card);
        let unlocked: i32 = hand
            .iter()
            .filter(|h| h.suit == card.suit && h.rank != card.rank)
            .filter(|h| !table.is_playable(h) && after.is_playable(h))
            .map(|h| card_power(h.rank))
            .sum();
        score += unlocked / 2;

        if opens_new_suit(card, table) {
            score += match same_suit {
                n if n >= 8 => 20,
                n if n >= 4 => 5,
                _ => -40,
            };
        }

        let held_neighbors = card
            .rank
            .neighbors()
            .filter(|&r| hand.contains(&Card::new(card.suit, r)))
            .count() as i32;
        score += 4 * held_neighbors;

        let risky_path = (card.rank == Rank::Six && !table.is_played(card.suit, Rank::Five))
            || (card.rank == Rank::Eight && !table.is_played(card.suit, Rank::Nine));
        if risky_path {
            score -= 6;
        }

        if same_suit <= 1 {
            score -= 8;
        } else {
            score += same_suit;
        }

        // neighbours nobody has played and we do not hold sit with opponents
        let handed_out = card
            .rank
            .neighbors()
            .filter(|&r| !table.is_played(card.suit, r))
            .filter(|&r| !hand.contains(&Card::new(card.suit, r)))
            .count() as i32;
        score -= 3 * handed_out;

        let passed_opponents = self
            .passes
            .iter()
            .filter(|&(id, n)| Some(*id) != self.player_id && *n > 0)
            .count() as i32;
        score - passed_opponents
    }
}

impl Strategy for SmartStrategy {
    fn initialize(&mut self, player_id: PlayerId) {
        self.player_id = Some(player_id);
        self.cards_seen = 0;
        self.passes.clear();
    }

    fn select_card(&mut self, hand: &[Card], table: &TableLayout) -> Decision {
        let (safe, risky): (Vec<usize>, Vec<usize>) = (0..hand.len())
            .filter(|&i| table.is_playable(&hand[i]))
            .partition(|&i| !opens_new_suit(&hand[i], table));
        let candidates = if safe.is_empty() { risky } else { safe };

        let mut best: Option<(usize, i32)> = None;
        for idx in candidates {
            let score = self.score_card(&hand[idx], hand, table);
            trace!(card = %hand[idx], score, "candidate scored");
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((idx, score));
            }
        }

        match best {
            Some((idx, score)) => {
                debug!(card = %hand[idx], score, "smart choice");
                Decision::Play(idx)
            }
            None => Decision::Pass,
        }
    }

    fn observe_move(&mut self, _player_id: PlayerId, card: Card) {
        self.cards_seen |= 1u64 << card.id();
    }

    fn observe_pass(&mut self, player_id: PlayerId) {
        *self.passes.entry(player_id).or_insert(0) += 1;
    }

    fn name(&self) -> &str {
        "SmartSevens"
    }
}

/// Ace counts high for power.
fn card_power(rank: Rank) -> i32 {
    match rank {
        Rank::Ace => 14,
        r => i32::from(r.value()),
    }
}

/// A Seven whose suit has nothing next to it on the table yet.
fn opens_new_suit(card: &Card, table: &TableLayout) -> bool {
    card.rank == Rank::Seven && !table.has_played_neighbor(card)
}
