//! The War state machine.
//!
//! A game starts `InProgress` with two non-empty hands. Each turn both
//! players play their front card; the higher rank takes both cards, which
//! are shuffled and appended to the back of the winner's hand. The game
//! ends when a hand runs dry, or as `TooLong` once the turn counter exceeds
//! the configured threshold.
//!
//! ## Invariants
//!
//! - Cards are only ever transferred, so the two hand sizes always sum to
//!   the deal's card count.
//! - Ranks are unique across a deal, so the two played cards are never equal
//!   and there is no tie rule.
//! - Exactly one card changes owner per turn, so both hands can never be
//!   empty at the same time.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deal, Hand};
use crate::core::{GameRng, PlayerId, PlayerMap};

use super::trace::{GameStart, TurnObserver, TurnRecord};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndState {
    PlayerOneWin,
    PlayerTwoWin,
    /// The turn counter passed the threshold before either hand emptied.
    TooLong,
}

impl EndState {
    /// The winning player, if the game finished naturally.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            EndState::PlayerOneWin => Some(PlayerId::One),
            EndState::PlayerTwoWin => Some(PlayerId::Two),
            EndState::TooLong => None,
        }
    }

    /// Natural win for `player`.
    #[must_use]
    pub fn win_for(player: PlayerId) -> Self {
        match player {
            PlayerId::One => EndState::PlayerOneWin,
            PlayerId::Two => EndState::PlayerTwoWin,
        }
    }
}

impl std::fmt::Display for EndState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndState::PlayerOneWin => write!(f, "P1 win"),
            EndState::PlayerTwoWin => write!(f, "P2 win"),
            EndState::TooLong => write!(f, "Game too long"),
        }
    }
}

/// Current position in the game's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    InProgress,
    PlayerOneWin,
    PlayerTwoWin,
    TooLong,
}

impl GamePhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GamePhase::InProgress
    }

    /// The end state for a terminal phase, `None` while in progress.
    #[must_use]
    pub fn end_state(self) -> Option<EndState> {
        match self {
            GamePhase::InProgress => None,
            GamePhase::PlayerOneWin => Some(EndState::PlayerOneWin),
            GamePhase::PlayerTwoWin => Some(EndState::PlayerTwoWin),
            GamePhase::TooLong => Some(EndState::TooLong),
        }
    }
}

impl From<EndState> for GamePhase {
    fn from(end: EndState) -> Self {
        match end {
            EndState::PlayerOneWin => GamePhase::PlayerOneWin,
            EndState::PlayerTwoWin => GamePhase::PlayerTwoWin,
            EndState::TooLong => GamePhase::TooLong,
        }
    }
}

/// Outcome record of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Turns executed, including the one that crossed the threshold.
    pub turns: u32,
    /// Player one's starting strength minus player two's.
    pub strength_diff: i64,
    pub end_state: EndState,
    /// Running score at the end of the game.
    pub score: i64,
    /// Hand sizes at the end of the game.
    pub final_sizes: PlayerMap<usize>,
}

impl GameResult {
    /// Whether this result should count towards duration statistics.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.end_state != EndState::TooLong
    }
}

/// What happened in one call to `GameEngine::step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub turn: u32,
    pub played: PlayerMap<Card>,
    pub winner: PlayerId,
    pub score: i64,
    /// Phase after this turn.
    pub phase: GamePhase,
}

/// One game of War, from deal to result.
#[derive(Clone, Debug)]
pub struct GameEngine {
    hands: PlayerMap<Hand>,
    phase: GamePhase,
    turns: u32,
    score: i64,
    strength_diff: i64,
    card_count: usize,
    turn_threshold: u32,
}

impl GameEngine {
    /// Start a game from a deal.
    ///
    /// `turn_threshold` is taken as given, including 0; configuration-level
    /// validation lives in `SimConfig::validate`.
    #[must_use]
    pub fn new(deal: Deal, turn_threshold: u32) -> Self {
        let strength_diff = deal.strength_diff();
        let card_count = deal.card_count();

        Self {
            hands: deal.into_hands(),
            phase: GamePhase::InProgress,
            turns: 0,
            score: 0,
            strength_diff,
            card_count,
            turn_threshold,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn strength_diff(&self) -> i64 {
        self.strength_diff
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    #[must_use]
    pub fn turn_threshold(&self) -> u32 {
        self.turn_threshold
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// The result record, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let end_state = self.phase.end_state()?;
        Some(GameResult {
            turns: self.turns,
            strength_diff: self.strength_diff,
            end_state,
            score: self.score,
            final_sizes: self.hands.map(Hand::len),
        })
    }

    /// Resolve a single turn.
    ///
    /// Returns `None` without touching any state if the game is already over.
    pub fn step<O>(&mut self, rng: &mut GameRng, observer: &mut O) -> Option<TurnOutcome>
    where
        O: TurnObserver + ?Sized,
    {
        if self.phase.is_terminal() {
            return None;
        }

        let (one, two) = self.hands.both_mut();
        let (Some(card_one), Some(card_two)) = (one.draw_front(), two.draw_front()) else {
            // Unreachable: the phase leaves InProgress as soon as a hand empties.
            debug_assert!(false, "turn started with an empty hand");
            return None;
        };
        self.turns += 1;

        debug_assert_ne!(card_one, card_two, "ranks are unique within a deal");
        let winner = if card_one > card_two {
            PlayerId::One
        } else {
            PlayerId::Two
        };

        let mut pool = [card_one, card_two];
        rng.shuffle(&mut pool);
        self.hands[winner].extend_back(pool);

        self.score += match winner {
            PlayerId::One => 1,
            PlayerId::Two => -1,
        };

        debug_assert_eq!(
            self.hands[PlayerId::One].len() + self.hands[PlayerId::Two].len(),
            self.card_count,
            "cards are conserved"
        );

        let played = PlayerMap::from_pair(card_one, card_two);
        observer.on_turn(&TurnRecord {
            turn: self.turns,
            played: played.clone(),
            winner,
            score: self.score,
            hands: &self.hands,
        });

        self.phase = self.next_phase();

        Some(TurnOutcome {
            turn: self.turns,
            played,
            winner,
            score: self.score,
            phase: self.phase,
        })
    }

    /// Play until the game ends and return its result.
    pub fn play<O>(mut self, rng: &mut GameRng, observer: &mut O) -> GameResult
    where
        O: TurnObserver + ?Sized,
    {
        observer.on_game_start(&GameStart {
            card_count: self.card_count,
            strength_diff: self.strength_diff,
            hands: &self.hands,
        });

        let result = loop {
            if let Some(result) = self.result() {
                break result;
            }
            self.step(rng, observer);
        };

        observer.on_game_end(&result);
        result
    }

    /// Threshold first: a game that crosses it is `TooLong` even if the
    /// same turn emptied a hand.
    fn next_phase(&self) -> GamePhase {
        if self.turns > self.turn_threshold {
            GamePhase::TooLong
        } else if self.hands[PlayerId::Two].is_empty() {
            GamePhase::PlayerOneWin
        } else if self.hands[PlayerId::One].is_empty() {
            GamePhase::PlayerTwoWin
        } else {
            GamePhase::InProgress
        }
    }
}
