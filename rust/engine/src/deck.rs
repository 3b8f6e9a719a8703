use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{Card, CardCatalog};

/// Shuffled copy of the catalog, owned by the round simulator.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(catalog: &CardCatalog, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep catalog order until shuffle is called explicitly
        Self {
            cards: catalog.cards().to_vec(),
            position: 0,
            rng,
        }
    }

    /// Restores the full deck and shuffles it uniformly.
    pub fn shuffle(&mut self) {
        self.cards.sort_unstable_by_key(Card::id);
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Seed derived from the wall clock, used when no seed is injected.
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0xA1A2_A3A4)
}
