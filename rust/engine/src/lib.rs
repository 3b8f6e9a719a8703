//! # sevens-engine: Sevens Card Game Engine Core
//!
//! Simulates the card-elimination game Sevens among pluggable strategies and
//! accumulates leftover-card penalties over repeated rounds until a score
//! threshold is crossed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the 52-card catalog
//! - [`table`] - Face-up table layout and the initial 7♦ placement
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Cards held by one player
//! - [`player`] - Player ids, decisions and the [`player::Strategy`] contract
//! - [`rules`] - Legality check for a proposed card
//! - [`engine`] - Round simulator (deal, sweep, stall)
//! - [`game`] - Multi-round orchestration and the score board
//! - [`logger`] - Turn and round records, JSONL round logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use sevens_engine::cards::{Card, Rank, Suit};
//! use sevens_engine::table::generate_initial_layout;
//!
//! let table = generate_initial_layout();
//!
//! // only sevens and cards next to the 7♦ can be played at the start
//! assert!(table.is_playable(&Card::new(Suit::Hearts, Rank::Seven)));
//! assert!(table.is_playable(&Card::new(Suit::Diamonds, Rank::Six)));
//! assert!(!table.is_playable(&Card::new(Suit::Clubs, Rank::Six)));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Rounds are reproducible when the engine is seeded:
//!
//! ```rust
//! use sevens_engine::engine::Engine;
//!
//! let a = Engine::new(Some(42));
//! let b = Engine::new(Some(42));
//! assert_eq!(a.seed(), b.seed());
//! // a and b will deal identical rounds to identical strategies
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod table;
