//! Error types for configuration and dealing.
//!
//! Both are detected before any turn is played. A game that exceeds its
//! turn threshold is not an error; see `EndState::TooLong`.

use thiserror::Error;

/// Invalid simulation parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("card count must be even (got={count})")]
    OddCardCount { count: u32 },
    #[error("card count must be at least 2 (got={count})")]
    TooFewCards { count: u32 },
    #[error("turn threshold must be positive")]
    ZeroThreshold,
    #[error("game count must be positive")]
    ZeroGames,
}

/// Hands that do not form a valid deal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error("both hands must hold at least one card")]
    EmptyHand,
    #[error("hands must be the same size (first={first}, second={second})")]
    UnevenHands { first: usize, second: usize },
    #[error("rank {rank} dealt more than once")]
    DuplicateRank { rank: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::OddCardCount { count: 51 }.to_string(),
            "card count must be even (got=51)"
        );
        assert_eq!(
            DealError::UnevenHands { first: 3, second: 1 }.to_string(),
            "hands must be the same size (first=3, second=1)"
        );
        assert_eq!(
            DealError::DuplicateRank { rank: 7 }.to_string(),
            "rank 7 dealt more than once"
        );
    }
}
