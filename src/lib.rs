//! # war-sim
//!
//! Monte Carlo simulation of the two-player card game War.
//!
//! ## Rules
//!
//! A deck of `N` uniquely ranked cards is shuffled and split evenly. Each
//! turn both players reveal their front card; the higher rank takes both,
//! and they go (in random order) to the back of the winner's hand. A player
//! with no cards left loses. Games that run past a turn threshold are
//! classified as too long and left out of duration statistics.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Cards, FIFO hands, deck building and dealing
//! - `rules`: The per-game state machine and observation hooks
//! - `sim`: Batch runs and aggregate statistics

pub mod cards;
pub mod core;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{ConfigError, DealError, GameRng, PlayerId, PlayerMap, SimConfig};

pub use crate::cards::{Card, Deal, DeckBuilder, Hand};

pub use crate::rules::{
    EndState, GameEngine, GamePhase, GameResult, NoopObserver, TracingObserver, TurnLog,
    TurnObserver, TurnOutcome,
};

pub use crate::sim::{BatchRunner, BatchSummary};
