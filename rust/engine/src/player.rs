use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::table::TableLayout;

/// Identifier of a registered player.
pub type PlayerId = u64;

/// A strategy's answer to "which card do you want to play?".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Attempt to play the card at this index of the hand
    Play(usize),
    /// Do not play this turn
    Pass,
}

/// Capability set every decision module implements.
///
/// The engine is the only authority on legality: a strategy may propose a card
/// that turns out to be illegal, which is treated like a pass. Strategies keep
/// whatever private state they like for the whole game.
///
/// # Example Implementation
///
/// ```rust
/// use sevens_engine::cards::Card;
/// use sevens_engine::player::{Decision, PlayerId, Strategy};
/// use sevens_engine::table::TableLayout;
///
/// struct FirstLegal;
///
/// impl Strategy for FirstLegal {
///     fn initialize(&mut self, _player_id: PlayerId) {}
///
///     fn select_card(&mut self, hand: &[Card], table: &TableLayout) -> Decision {
///         hand.iter()
///             .position(|c| table.is_playable(c))
///             .map_or(Decision::Pass, Decision::Play)
///     }
///
///     fn name(&self) -> &str {
///         "FirstLegal"
///     }
/// }
/// ```
pub trait Strategy {
    /// Called once, before any round is played for `player_id`.
    fn initialize(&mut self, player_id: PlayerId);

    /// Pick a card from `hand` given the current `table`.
    ///
    /// Neither argument may be modified; the engine re-checks legality.
    fn select_card(&mut self, hand: &[Card], table: &TableLayout) -> Decision;

    /// `card` was just legally played by `player_id`.
    ///
    /// Only the acting player's own strategy is notified.
    fn observe_move(&mut self, _player_id: PlayerId, _card: Card) {}

    /// `player_id` failed to make a legal move this turn.
    fn observe_pass(&mut self, _player_id: PlayerId) {}

    /// Stable, human-readable identifier used for reporting.
    fn name(&self) -> &str;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn initialize(&mut self, player_id: PlayerId) {
        (**self).initialize(player_id)
    }

    fn select_card(&mut self, hand: &[Card], table: &TableLayout) -> Decision {
        (**self).select_card(hand, table)
    }

    fn observe_move(&mut self, player_id: PlayerId, card: Card) {
        (**self).observe_move(player_id, card)
    }

    fn observe_pass(&mut self, player_id: PlayerId) {
        (**self).observe_pass(player_id)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A registered player: its id bound to its strategy.
pub struct Participant {
    pub id: PlayerId,
    pub strategy: Box<dyn Strategy>,
}

impl Participant {
    pub fn new(id: PlayerId, strategy: Box<dyn Strategy>) -> Self {
        Self { id, strategy }
    }

    /// Report label, `<strategy name>-<id>`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.strategy.name(), self.id)
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("id", &self.id)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
