use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Decision;
use crate::table::TableLayout;

/// Why a turn ended without a card being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassReason {
    /// The strategy returned [`Decision::Pass`]
    Declined,
    /// The proposed index was outside the hand
    OutOfRange(usize),
    /// The proposed card is not adjacent to anything on the table
    Illegal(Card),
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The card was placed on the table
    Played(Card),
    /// No card was placed
    Passed(PassReason),
}

/// Checks a strategy's decision against the hand and the table.
///
/// A card is legal iff it is a Seven or a card of the same suit one rank
/// above or below is already on the table. Every other outcome (pass, index
/// outside the hand, illegal card) is normalised into a [`PassReason`]; none
/// of them is an error.
///
/// # Returns
///
/// `Ok((index, card))` when the card may be played, `Err(reason)` otherwise.
///
/// # Examples
///
/// ```
/// use sevens_engine::cards::{Card, Rank, Suit};
/// use sevens_engine::player::Decision;
/// use sevens_engine::rules::{resolve_decision, PassReason};
/// use sevens_engine::table::generate_initial_layout;
///
/// let table = generate_initial_layout();
/// let hand = [
///     Card::new(Suit::Diamonds, Rank::Eight),
///     Card::new(Suit::Clubs, Rank::Two),
/// ];
///
/// assert_eq!(resolve_decision(&hand, &table, Decision::Play(0)), Ok((0, hand[0])));
/// assert_eq!(
///     resolve_decision(&hand, &table, Decision::Play(1)),
///     Err(PassReason::Illegal(hand[1]))
/// );
/// assert_eq!(
///     resolve_decision(&hand, &table, Decision::Play(2)),
///     Err(PassReason::OutOfRange(2))
/// );
/// assert_eq!(
///     resolve_decision(&hand, &table, Decision::Pass),
///     Err(PassReason::Declined)
/// );
/// ```
pub fn resolve_decision(
    hand: &[Card],
    table: &TableLayout,
    decision: Decision,
) -> Result<(usize, Card), PassReason> {
    match decision {
        Decision::Pass => Err(PassReason::Declined),
        Decision::Play(index) => {
            let card = *hand.get(index).ok_or(PassReason::OutOfRange(index))?;
            if table.is_playable(&card) {
                Ok((index, card))
            } else {
                Err(PassReason::Illegal(card))
            }
        }
    }
}
