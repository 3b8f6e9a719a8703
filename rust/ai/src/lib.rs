//! # sevens-ai: Strategies for the Sevens Engine
//!
//! Reference strategies, a factory to build them by name, and the machinery
//! for strategies that live in separately compiled shared libraries.
//!
//! ## Core Components
//!
//! - [`random`] - Proposes any card in hand at random
//! - [`greedy`] - Always proposes the first card in hand
//! - [`smart`] - Legal-only heuristic with per-game memory
//! - [`plugin`] - C ABI and the [`export_strategy!`] macro for strategy modules
//! - [`loader`] - Opens a module and wraps its strategy as a [`loader::PluginStrategy`]
//! - [`create_strategy`] - Factory function for the built-in strategies
//!
//! ## Quick Start
//!
//! ```rust
//! use sevens_ai::{create_strategy, StrategyKind};
//! use sevens_engine::engine::Engine;
//! use sevens_engine::game::Game;
//!
//! let mut game = Game::new(Engine::new(Some(42))).with_round_limit(100);
//! for (id, kind) in ["random", "greedy", "smart"].into_iter().enumerate() {
//!     let kind: StrategyKind = kind.parse().unwrap();
//!     game.register(id as u64, create_strategy(kind, Some(id as u64))).unwrap();
//! }
//! let outcome = game.run().unwrap();
//! assert!(outcome.scores.iter().any(|(_, s)| *s >= 50));
//! ```

use std::fmt;
use std::str::FromStr;

pub use sevens_engine::player::Strategy;

pub mod greedy;
pub mod loader;
pub mod plugin;
pub mod random;
pub mod smart;

/// Built-in strategy kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Random,
    Greedy,
    Smart,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::Random, Self::Greedy, Self::Smart];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Greedy => "greedy",
            Self::Smart => "smart",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a strategy name is not one of the built-in kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown strategy kind: {0} (expected random, greedy or smart)")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "greedy" => Ok(Self::Greedy),
            "smart" => Ok(Self::Smart),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Factory function to create built-in strategies.
///
/// `seed` only affects [`StrategyKind::Random`]; `None` seeds from the clock.
///
/// # Example
///
/// ```rust
/// use sevens_ai::{create_strategy, StrategyKind};
///
/// let ai = create_strategy(StrategyKind::Smart, None);
/// assert_eq!(ai.name(), "SmartSevens");
/// ```
pub fn create_strategy(kind: StrategyKind, seed: Option<u64>) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Random => Box::new(random::RandomStrategy::with_seed(seed)),
        StrategyKind::Greedy => Box::new(greedy::GreedyStrategy::new()),
        StrategyKind::Smart => Box::new(smart::SmartStrategy::new()),
    }
}
