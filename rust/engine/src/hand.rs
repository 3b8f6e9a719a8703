use crate::cards::Card;

/// Cards currently held by one player, in deal order.
///
/// Duplicate-free; only shrinks during a round, through legal plays and the
/// removal of cards already on the table at deal time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            cards: Vec::with_capacity(n),
        }
    }

    /// Adds a dealt card. Returns `false` if the card is already held.
    pub fn give_card(&mut self, card: Card) -> bool {
        if self.cards.contains(&card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Removes and returns the card at `index`, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Drops `card` if held. Returns whether it was present.
    pub fn discard(&mut self, card: &Card) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c != card);
        self.cards.len() != before
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
