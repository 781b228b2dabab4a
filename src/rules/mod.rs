//! Game rules: the turn-resolution state machine and its observation hooks.
//!
//! `GameEngine` owns both hands for the duration of one game and produces a
//! `GameResult` when it ends. `TurnObserver` implementations watch a game
//! without influencing it.

pub mod engine;
pub mod trace;

pub use engine::{EndState, GameEngine, GamePhase, GameResult, TurnOutcome};
pub use trace::{
    GameStart, LoggedTurn, NoopObserver, TracingObserver, TurnLog, TurnObserver, TurnRecord,
};
