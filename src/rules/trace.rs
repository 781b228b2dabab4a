//! Per-game observation hooks.
//!
//! The engine reports game start, every resolved turn, and game end to a
//! `TurnObserver`. Observers only see borrowed state; they cannot touch the
//! hands or the RNG, so enabling one never changes a game's outcome.

use tracing::debug;

use crate::cards::{Card, Hand};
use crate::core::{PlayerId, PlayerMap};

use super::engine::GameResult;

/// Snapshot of a game right after dealing.
#[derive(Clone, Copy, Debug)]
pub struct GameStart<'a> {
    pub card_count: usize,
    pub strength_diff: i64,
    pub hands: &'a PlayerMap<Hand>,
}

/// One resolved turn, seen after the pool was handed to the winner.
#[derive(Clone, Debug)]
pub struct TurnRecord<'a> {
    pub turn: u32,
    pub played: PlayerMap<Card>,
    pub winner: PlayerId,
    /// Running score: +1 per turn won by player one, -1 per turn won by player two.
    pub score: i64,
    pub hands: &'a PlayerMap<Hand>,
}

/// Receives game events. All methods default to doing nothing.
pub trait TurnObserver {
    fn on_game_start(&mut self, _start: &GameStart<'_>) {}

    fn on_turn(&mut self, _turn: &TurnRecord<'_>) {}

    fn on_game_end(&mut self, _result: &GameResult) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}

/// Emits every game event as a `tracing` debug event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl TurnObserver for TracingObserver {
    fn on_game_start(&mut self, start: &GameStart<'_>) {
        let one = &start.hands[PlayerId::One];
        let two = &start.hands[PlayerId::Two];
        let total_strength = one.strength() + two.strength();

        debug!(
            "[Game start] with {} total cards, {} total strength, {} strength difference. \
             P1: {} cards, {}pts {}, P2: {} cards, {}pts {}",
            start.card_count,
            total_strength,
            start.strength_diff,
            one.len(),
            one.strength(),
            format_hand(one),
            two.len(),
            two.strength(),
            format_hand(two),
        );
        debug!(
            "{:<12}score {}, deck size {}:{}, decks: {} vs {}",
            "[Turn 0]",
            format_score(0),
            one.len(),
            two.len(),
            format_hand(one),
            format_hand(two),
        );
    }

    fn on_turn(&mut self, turn: &TurnRecord<'_>) {
        let one = &turn.hands[PlayerId::One];
        let two = &turn.hands[PlayerId::Two];

        debug!(
            "{:<12}score {}, deck size {}:{}, cards: {} vs {} ({} wins), decks: {} vs {}",
            format!("[Turn {}]", turn.turn),
            format_score(turn.score),
            one.len(),
            two.len(),
            turn.played[PlayerId::One],
            turn.played[PlayerId::Two],
            turn.winner.short(),
            format_hand(one),
            format_hand(two),
        );
    }

    fn on_game_end(&mut self, result: &GameResult) {
        debug!(
            "{}! The game took {} turns to end given initial strength difference of {}",
            result.end_state,
            result.turns,
            result.strength_diff.abs(),
        );
    }
}

/// Owned summary of one turn, as collected by `TurnLog`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggedTurn {
    pub turn: u32,
    pub played: PlayerMap<Card>,
    pub winner: PlayerId,
    pub score: i64,
    pub hand_sizes: PlayerMap<usize>,
}

/// Observer that keeps a record of every turn in memory.
#[derive(Clone, Debug, Default)]
pub struct TurnLog {
    pub start_sizes: Option<PlayerMap<usize>>,
    pub turns: Vec<LoggedTurn>,
    pub result: Option<GameResult>,
}

impl TurnLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TurnObserver for TurnLog {
    fn on_game_start(&mut self, start: &GameStart<'_>) {
        self.start_sizes = Some(start.hands.map(Hand::len));
    }

    fn on_turn(&mut self, turn: &TurnRecord<'_>) {
        self.turns.push(LoggedTurn {
            turn: turn.turn,
            played: turn.played.clone(),
            winner: turn.winner,
            score: turn.score,
            hand_sizes: turn.hands.map(Hand::len),
        });
    }

    fn on_game_end(&mut self, result: &GameResult) {
        self.result = Some(result.clone());
    }
}

/// `[3, 17, 0]`
fn format_hand(hand: &Hand) -> String {
    let ranks: Vec<String> = hand.iter().map(ToString::to_string).collect();
    format!("[{}]", ranks.join(", "))
}

/// Leading `+` when player one is ahead, `=` when level.
fn format_score(score: i64) -> String {
    match score {
        s if s > 0 => format!("+{s}"),
        0 => "=0".to_string(),
        s => s.to_string(),
    }
}
