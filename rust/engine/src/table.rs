//! Face-up table layout for one round.

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, all_suits, Card, Rank, Suit};

/// The card already on the table when a round starts.
pub const INITIAL_CARD: Card = Card::new(Suit::Diamonds, Rank::Seven);

/// Records which (suit, rank) pairs have been played face-up.
///
/// Stored as one bitmask per suit, bit `rank` set once the card is down. The
/// layout is `#[repr(C)]` so plugins receive the same view as in-process
/// strategies. Within a round, entries only ever go from unplayed to played.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct TableLayout {
    played: [u16; 4],
}

impl TableLayout {
    /// An empty table with nothing played.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_played(&self, suit: Suit, rank: Rank) -> bool {
        self.played[suit.index()] & (1 << rank.value()) != 0
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.is_played(card.suit, card.rank)
    }

    /// Marks a card as played. Returns `false` if it was already down.
    pub fn place(&mut self, card: Card) -> bool {
        let bit = 1 << card.rank.value();
        let slot = &mut self.played[card.suit.index()];
        let fresh = *slot & bit == 0;
        *slot |= bit;
        fresh
    }

    /// A card is playable when it is a Seven or sits next to a played card of
    /// the same suit.
    pub fn is_playable(&self, card: &Card) -> bool {
        card.rank == Rank::Seven || self.has_played_neighbor(card)
    }

    /// Whether a rank neighbour of `card` in the same suit is already down.
    pub fn has_played_neighbor(&self, card: &Card) -> bool {
        card.rank.neighbors().any(|r| self.is_played(card.suit, r))
    }

    pub fn played_count(&self) -> usize {
        self.played.iter().map(|m| m.count_ones() as usize).sum()
    }

    /// True when every card played in `earlier` is also played here.
    pub fn contains_all(&self, earlier: &TableLayout) -> bool {
        self.played
            .iter()
            .zip(earlier.played.iter())
            .all(|(now, before)| now & before == *before)
    }

    /// Played cards in catalog order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        all_suits().into_iter().flat_map(move |s| {
            all_ranks()
                .into_iter()
                .filter(move |&r| self.is_played(s, r))
                .map(move |r| Card::new(s, r))
        })
    }
}

/// Builds the per-round starting layout: only [`INITIAL_CARD`] is down.
pub fn generate_initial_layout() -> TableLayout {
    let mut table = TableLayout::empty();
    table.place(INITIAL_CARD);
    table
}
