//! Batch runner and summary statistics.
//!
//! Every game draws from its own `GameRng`, forked from a master stream
//! seeded by `SimConfig::seed`. Forks are taken up front in game order, so a
//! batch produces the same results whether it runs serially or on rayon.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::DeckBuilder;
use crate::core::{ConfigError, GameRng, SimConfig};
use crate::rules::{EndState, GameEngine, GameResult, NoopObserver, TracingObserver};

/// Runs a batch of games described by a `SimConfig`.
#[derive(Clone, Debug)]
pub struct BatchRunner {
    config: SimConfig,
    deck: DeckBuilder,
}

impl BatchRunner {
    /// Validate the configuration and prepare a runner.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let deck = DeckBuilder::new(config.card_count)?;
        Ok(Self { config, deck })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Play every game and return the raw result records, in game order.
    pub fn results(&self) -> Vec<GameResult> {
        let mut master = GameRng::new(self.config.seed);
        let streams: Vec<GameRng> = (0..self.config.games).map(|_| master.fork()).collect();

        if self.config.parallel {
            streams
                .into_par_iter()
                .map(|rng| self.play_one(rng))
                .collect()
        } else {
            streams.into_iter().map(|rng| self.play_one(rng)).collect()
        }
    }

    /// Play every game and summarize.
    pub fn run(&self) -> BatchSummary {
        info!(
            games = self.config.games,
            card_count = self.config.card_count,
            turn_threshold = self.config.turn_threshold,
            seed = self.config.seed,
            parallel = self.config.parallel,
            "Starting batch"
        );
        let started = Instant::now();

        let results = self.results();
        let summary = BatchSummary::from_results(self.config.card_count, &results);

        if summary.valid_games == 0 {
            warn!(
                turn_threshold = self.config.turn_threshold,
                "Every game exceeded the turn threshold"
            );
        }
        info!(
            valid_games = summary.valid_games,
            too_long = summary.too_long,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Batch finished"
        );

        summary
    }

    fn play_one(&self, mut rng: GameRng) -> GameResult {
        let deal = self.deck.deal(&mut rng);
        let engine = GameEngine::new(deal, self.config.turn_threshold);

        if self.config.trace_enabled {
            engine.play(&mut rng, &mut TracingObserver)
        } else {
            engine.play(&mut rng, &mut NoopObserver)
        }
    }
}

/// Aggregate statistics over a batch.
///
/// Games that ended `TooLong` are counted but excluded from the mean and
/// from the win counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub card_count: u32,
    pub games: usize,
    pub valid_games: usize,
    pub too_long: usize,
    /// Mean turns over decided games; `None` if there were none.
    pub mean_turns: Option<f64>,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
}

impl BatchSummary {
    /// Aggregate a set of result records.
    pub fn from_results(card_count: u32, results: &[GameResult]) -> Self {
        let mut summary = Self {
            card_count,
            games: results.len(),
            valid_games: 0,
            too_long: 0,
            mean_turns: None,
            player_one_wins: 0,
            player_two_wins: 0,
        };

        let mut total_turns: u64 = 0;
        for result in results {
            match result.end_state {
                EndState::PlayerOneWin => summary.player_one_wins += 1,
                EndState::PlayerTwoWin => summary.player_two_wins += 1,
                EndState::TooLong => {
                    summary.too_long += 1;
                    continue;
                }
            }
            summary.valid_games += 1;
            total_turns += u64::from(result.turns);
        }

        if summary.valid_games > 0 {
            summary.mean_turns = Some(total_turns as f64 / summary.valid_games as f64);
        }

        summary
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mean_turns {
            Some(mean) => write!(
                f,
                "After {} games with {} cards, on average the game took {} turns. \
                 P1 won {} times, P2 won {} times.",
                self.valid_games, self.card_count, mean, self.player_one_wins, self.player_two_wins
            ),
            None => write!(
                f,
                "All {} games with {} cards exceeded the turn threshold.",
                self.games, self.card_count
            ),
        }
    }
}
