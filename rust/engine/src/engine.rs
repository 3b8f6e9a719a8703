use tracing::{debug, info, trace};

use crate::cards::{generate_catalog, Card, CardCatalog};
use crate::deck::{time_seed, Deck};
use crate::hand::Hand;
use crate::logger::TurnRecord;
use crate::player::{Participant, PlayerId};
use crate::rules::{resolve_decision, TurnOutcome};
use crate::table::{generate_initial_layout, TableLayout};

/// Round simulator: deals a shuffled deck and runs sweeps until one stalls.
///
/// The engine owns the only random source used for dealing. Hands and the
/// table are round-local and rebuilt from scratch every round.
///
/// # Examples
///
/// ```
/// use sevens_engine::cards::Card;
/// use sevens_engine::engine::Engine;
/// use sevens_engine::player::{Decision, Participant, Strategy};
/// use sevens_engine::table::TableLayout;
///
/// struct Passer;
///
/// impl Strategy for Passer {
///     fn initialize(&mut self, _: u64) {}
///     fn select_card(&mut self, _: &[Card], _: &TableLayout) -> Decision {
///         Decision::Pass
///     }
///     fn name(&self) -> &str {
///         "Passer"
///     }
/// }
///
/// let mut engine = Engine::new(Some(12345));
/// let mut players: Vec<Participant> = (0..4)
///     .map(|id| Participant::new(id, Box::new(Passer)))
///     .collect();
///
/// let outcome = engine.play_round(&mut players);
///
/// // nobody plays, so the first sweep stalls and every dealt card is left over
/// assert_eq!(outcome.sweeps, 1);
/// assert_eq!(outcome.total_leftover(), 51);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Card catalog the deck is built from
    catalog: CardCatalog,
    /// Layout every round starts from
    template: TableLayout,
    /// Deck used for dealing
    deck: Deck,
    /// Seed the deck was created with
    seed: u64,
}

/// Everything a finished round produced.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Cards left in each hand, in seat order
    pub leftovers: Vec<(PlayerId, usize)>,
    /// Table as it stood when the round stalled
    pub table: TableLayout,
    /// Number of sweeps, including the final stalling one
    pub sweeps: u32,
    /// Every turn in order
    pub turns: Vec<TurnRecord>,
}

impl RoundOutcome {
    pub fn leftover(&self, id: PlayerId) -> Option<usize> {
        self.leftovers
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, n)| *n)
    }

    pub fn total_leftover(&self) -> usize {
        self.leftovers.iter().map(|(_, n)| n).sum()
    }

    pub fn moves(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| matches!(t.outcome, TurnOutcome::Played(_)))
            .count()
    }
}

impl Engine {
    /// Engine over the standard catalog and starting layout.
    /// `None` seeds the deck from the clock.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_layout(generate_catalog(), generate_initial_layout(), seed)
    }

    pub fn with_layout(catalog: CardCatalog, template: TableLayout, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(time_seed);
        let deck = Deck::new_with_seed(&catalog, seed);
        Self {
            catalog,
            template,
            deck,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn template(&self) -> &TableLayout {
        &self.template
    }

    /// Shuffles a fresh deck and plays one round to a stall.
    pub fn play_round(&mut self, participants: &mut [Participant]) -> RoundOutcome {
        self.deck.shuffle();
        let order: Vec<Card> = std::iter::from_fn(|| self.deck.deal_card()).collect();
        self.play_round_with_order(participants, order)
    }

    /// Plays one round dealing `order` as is: card `i` goes to seat `i % n`.
    ///
    /// `order` must not repeat a card; debug builds panic if it does.
    pub fn play_round_with_order(
        &self,
        participants: &mut [Participant],
        order: Vec<Card>,
    ) -> RoundOutcome {
        let mut table = self.template;
        if participants.is_empty() {
            return RoundOutcome {
                leftovers: Vec::new(),
                table,
                sweeps: 0,
                turns: Vec::new(),
            };
        }

        let n = participants.len();
        let mut hands: Vec<Hand> = (0..n)
            .map(|_| Hand::with_capacity(order.len() / n + 1))
            .collect();
        for (i, card) in order.into_iter().enumerate() {
            let dealt = hands[i % n].give_card(card);
            debug_assert!(dealt, "card {card} dealt twice");
        }
        // pre-placed cards are on the table, not in anyone's hand
        for card in table.cards() {
            for hand in hands.iter_mut() {
                hand.discard(&card);
            }
        }
        let total = held(&hands) + table.played_count();

        info!(players = n, seed = self.seed, "round started");
        let mut turns = Vec::new();
        let mut sweeps = 0u32;
        loop {
            sweeps += 1;
            let mut moved = false;
            for (seat, p) in participants.iter_mut().enumerate() {
                let hand = &mut hands[seat];
                let decision = p.strategy.select_card(hand.cards(), &table);
                let outcome = match resolve_decision(hand.cards(), &table, decision) {
                    Ok((index, card)) => {
                        table.place(card);
                        hand.take(index);
                        p.strategy.observe_move(p.id, card);
                        moved = true;
                        debug!(player = p.id, %card, sweep = sweeps, "card played");
                        TurnOutcome::Played(card)
                    }
                    Err(reason) => {
                        p.strategy.observe_pass(p.id);
                        trace!(player = p.id, ?reason, sweep = sweeps, "turn passed");
                        TurnOutcome::Passed(reason)
                    }
                };
                turns.push(TurnRecord {
                    sweep: sweeps,
                    player_id: p.id,
                    outcome,
                });
                debug_assert_eq!(held(&hands) + table.played_count(), total);
            }
            if !moved {
                break;
            }
        }

        let leftovers: Vec<(PlayerId, usize)> = participants
            .iter()
            .zip(hands.iter())
            .map(|(p, h)| (p.id, h.len()))
            .collect();
        info!(
            sweeps,
            on_table = table.played_count(),
            "round stalled"
        );
        RoundOutcome {
            leftovers,
            table,
            sweeps,
            turns,
        }
    }
}

fn held(hands: &[Hand]) -> usize {
    hands.iter().map(Hand::len).sum()
}
