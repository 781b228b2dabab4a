//! Simulation configuration.
//!
//! `SimConfig` carries every knob of a batch run: deck size, the turn
//! threshold that classifies a game as too long, how many games to play,
//! the master seed, and whether per-turn tracing is on.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default number of distinct ranks in the deck.
pub const DEFAULT_CARD_COUNT: u32 = 52;

/// Default turn count after which a game is classified as too long.
pub const DEFAULT_TURN_THRESHOLD: u32 = 10_000;

/// Default number of games in a batch.
pub const DEFAULT_GAMES: u32 = 10_000;

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of distinct card ranks. Must be even and at least 2.
    pub card_count: u32,

    /// A game ends as `TooLong` once its turn counter exceeds this.
    pub turn_threshold: u32,

    /// Number of games to play.
    pub games: u32,

    /// Master seed; each game forks its own stream from it.
    pub seed: u64,

    /// Emit per-turn trace events.
    pub trace_enabled: bool,

    /// Run games on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            turn_threshold: DEFAULT_TURN_THRESHOLD,
            games: DEFAULT_GAMES,
            seed: 0,
            trace_enabled: false,
            parallel: false,
        }
    }
}

impl SimConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_card_count(mut self, count: u32) -> Self {
        self.card_count = count;
        self
    }

    /// Set the turn threshold.
    #[must_use]
    pub fn with_turn_threshold(mut self, threshold: u32) -> Self {
        self.turn_threshold = threshold;
        self
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable per-turn tracing.
    #[must_use]
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace_enabled = enabled;
        self
    }

    /// Enable or disable parallel execution.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check the configuration before any game starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_card_count(self.card_count)?;
        if self.turn_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.games == 0 {
            return Err(ConfigError::ZeroGames);
        }
        Ok(())
    }
}

/// Deck sizes must be even and hold at least one card per player.
pub(crate) fn validate_card_count(count: u32) -> Result<(), ConfigError> {
    if count < 2 {
        return Err(ConfigError::TooFewCards { count });
    }
    if count % 2 != 0 {
        return Err(ConfigError::OddCardCount { count });
    }
    Ok(())
}
