use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of distinct cards in the catalog.
pub const CATALOG_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// The discriminant is the suit index used by card ids and the table layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs = 0,
    /// Diamonds suit (♦)
    Diamonds = 1,
    /// Hearts suit (♥)
    Hearts = 2,
    /// Spades suit (♠)
    Spades = 3,
}

impl Suit {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(v: usize) -> Option<Suit> {
        match v {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Represents the rank of a playing card from Ace (1) through King (13).
/// In Sevens the Ace is low: it only connects to the Two.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7, the only rank that may open a suit
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return None,
        };
        Some(rank)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// The rank directly below, `None` for the Ace.
    pub fn lower(self) -> Option<Rank> {
        Rank::from_u8(self.value() - 1)
    }

    /// The rank directly above, `None` for the King.
    pub fn higher(self) -> Option<Rank> {
        Rank::from_u8(self.value() + 1)
    }

    /// Both rank neighbours that exist.
    pub fn neighbors(self) -> impl Iterator<Item = Rank> {
        self.lower().into_iter().chain(self.higher())
    }

    fn as_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            r => char::from(b'0' + r.value()),
        }
    }
}

/// A single playing card. Immutable value type.
///
/// The layout is `#[repr(C)]` so cards can be handed across the plugin boundary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[repr(C)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Stable identifier in `0..52`: `suit * 13 + (rank - 1)`.
    pub fn id(&self) -> u8 {
        self.suit as u8 * 13 + (self.rank.value() - 1)
    }

    pub fn from_id(id: u8) -> Option<Card> {
        let suit = Suit::from_index(usize::from(id / 13))?;
        let rank = Rank::from_u8(id % 13 + 1)?;
        Some(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_char(), self.suit.as_char())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Read-only mapping from card id to card, exactly 52 entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    pub fn get(&self, id: u8) -> Option<Card> {
        self.cards.get(usize::from(id)).copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in id order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Card)> + '_ {
        self.cards.iter().map(|c| (c.id(), *c))
    }
}

/// Builds the 52-card catalog, ordered by id.
pub fn generate_catalog() -> CardCatalog {
    let mut cards = Vec::with_capacity(CATALOG_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            cards.push(Card { suit: s, rank: r });
        }
    }
    CardCatalog { cards }
}
