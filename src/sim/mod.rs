//! Batch simulation: many independent games and their aggregate statistics.
//!
//! ## Usage
//!
//! ```
//! use war_sim::core::SimConfig;
//! use war_sim::sim::BatchRunner;
//!
//! let config = SimConfig::new().with_games(20).with_seed(7);
//! let runner = BatchRunner::new(config).unwrap();
//! let summary = runner.run();
//!
//! assert_eq!(summary.games, 20);
//! assert_eq!(summary.valid_games + summary.too_long, 20);
//! ```

pub mod batch;

pub use batch::{BatchRunner, BatchSummary};
