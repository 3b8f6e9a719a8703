use tracing::{debug, info};

use crate::engine::{Engine, RoundOutcome};
use crate::errors::GameError;
use crate::logger::{RoundLogger, RoundRecord};
use crate::player::{Participant, PlayerId, Strategy};

/// Cumulative score at which the game ends.
pub const SCORE_THRESHOLD: u32 = 50;

/// Cumulative leftover-card penalty per player. Entries only grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<(PlayerId, u32)>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zeroed entry. Returns `false` if the player already has one.
    pub fn insert(&mut self, id: PlayerId) -> bool {
        if self.get(id).is_some() {
            return false;
        }
        self.entries.push((id, 0));
        true
    }

    pub fn get(&self, id: PlayerId) -> Option<u32> {
        self.entries
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, s)| *s)
    }

    /// Adds `points` to an existing entry.
    pub fn add(&mut self, id: PlayerId, points: u32) {
        if let Some((_, score)) = self.entries.iter_mut().find(|(pid, _)| *pid == id) {
            *score = score.saturating_add(points);
        }
    }

    pub fn max(&self) -> u32 {
        self.entries.iter().map(|(_, s)| *s).max().unwrap_or(0)
    }

    pub fn reached(&self, threshold: u32) -> bool {
        self.entries.iter().any(|(_, s)| *s >= threshold)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[(PlayerId, u32)] {
        &self.entries
    }
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Cumulative scores in registration order
    pub scores: Vec<(PlayerId, u32)>,
    /// Number of rounds played
    pub rounds: u32,
}

/// Game orchestrator: owns the registry and the score board and repeats
/// rounds until some player's score reaches the threshold.
///
/// # Examples
///
/// ```
/// use sevens_engine::cards::Card;
/// use sevens_engine::engine::Engine;
/// use sevens_engine::game::Game;
/// use sevens_engine::player::{Decision, Strategy};
/// use sevens_engine::table::TableLayout;
///
/// struct FirstCard;
///
/// impl Strategy for FirstCard {
///     fn initialize(&mut self, _: u64) {}
///     fn select_card(&mut self, hand: &[Card], _: &TableLayout) -> Decision {
///         if hand.is_empty() { Decision::Pass } else { Decision::Play(0) }
///     }
///     fn name(&self) -> &str {
///         "FirstCard"
///     }
/// }
///
/// let mut game = Game::new(Engine::new(Some(7)));
/// for id in 0..4 {
///     game.register(id, Box::new(FirstCard)).unwrap();
/// }
/// let outcome = game.run().unwrap();
/// assert!(outcome.scores.iter().any(|(_, s)| *s >= 50));
/// ```
#[derive(Debug)]
pub struct Game {
    engine: Engine,
    participants: Vec<Participant>,
    scores: ScoreBoard,
    threshold: u32,
    rounds: u32,
    round_limit: Option<u32>,
    logger: Option<RoundLogger>,
}

impl Game {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            participants: Vec::new(),
            scores: ScoreBoard::new(),
            threshold: SCORE_THRESHOLD,
            rounds: 0,
            round_limit: None,
            logger: None,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Gives up after `limit` rounds without anyone reaching the threshold.
    ///
    /// Players that always find a legal card empty their hands every round,
    /// so such a game would otherwise never end.
    pub fn with_round_limit(mut self, limit: u32) -> Self {
        self.round_limit = Some(limit);
        self
    }

    /// Writes a [`RoundRecord`] for every round played.
    pub fn with_logger(mut self, logger: RoundLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Binds `strategy` to `id`, initialises it and opens a zero score entry.
    ///
    /// Seats follow registration order. Registration closes once a round
    /// has been played.
    pub fn register(&mut self, id: PlayerId, mut strategy: Box<dyn Strategy>) -> Result<(), GameError> {
        if self.rounds > 0 {
            return Err(GameError::RegistrationClosed);
        }
        if !self.scores.insert(id) {
            return Err(GameError::DuplicatePlayer(id));
        }
        strategy.initialize(id);
        debug!(player = id, strategy = strategy.name(), "player registered");
        self.participants.push(Participant::new(id, strategy));
        Ok(())
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Plays one round and merges its leftovers into the score board.
    pub fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        if self.participants.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let outcome = self.engine.play_round(&mut self.participants);
        self.rounds += 1;
        for &(id, left) in &outcome.leftovers {
            self.scores.add(id, u32::try_from(left).unwrap_or(u32::MAX));
        }
        info!(
            round = self.rounds,
            leader_score = self.scores.max(),
            "round scored"
        );

        if let Some(logger) = self.logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: self.engine.seed(),
                round: self.rounds,
                sweeps: outcome.sweeps,
                table: outcome.table.cards().collect(),
                leftovers: outcome.leftovers.clone(),
                scores: self.scores.entries().to_vec(),
                turns: outcome.turns.clone(),
                ts: None,
            };
            logger.write(&record)?;
        }
        Ok(outcome)
    }

    /// Plays rounds until a score reaches the threshold.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            self.play_round()?;
            if self.scores.reached(self.threshold) {
                break;
            }
            if self.round_limit.is_some_and(|limit| self.rounds >= limit) {
                return Err(GameError::RoundLimit(self.rounds));
            }
        }
        info!(rounds = self.rounds, "game finished");
        Ok(GameOutcome {
            scores: self.scores.entries().to_vec(),
            rounds: self.rounds,
        })
    }
}
