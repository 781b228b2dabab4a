//! Core types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{SimConfig, DEFAULT_CARD_COUNT, DEFAULT_GAMES, DEFAULT_TURN_THRESHOLD};
pub use error::{ConfigError, DealError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
