//! Deck construction and dealing.
//!
//! A deck is the ranks `0..N`, each exactly once. Dealing shuffles the deck
//! and splits it into two equal halves: the first half goes to player one.

use rustc_hash::FxHashSet;

use crate::core::config::validate_card_count;
use crate::core::{ConfigError, DealError, GameRng, PlayerId, PlayerMap};

use super::card::Card;
use super::hand::Hand;

/// Builds shuffled deals for a fixed deck size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckBuilder {
    card_count: u32,
}

impl DeckBuilder {
    /// Create a builder for a deck of `card_count` distinct ranks.
    ///
    /// Fails if the count is odd or below 2.
    pub fn new(card_count: u32) -> Result<Self, ConfigError> {
        validate_card_count(card_count)?;
        Ok(Self { card_count })
    }

    #[must_use]
    pub fn card_count(&self) -> u32 {
        self.card_count
    }

    /// Shuffle the full deck and split it into two hands.
    pub fn deal(&self, rng: &mut GameRng) -> Deal {
        let mut deck: Vec<Card> = (0..self.card_count).map(Card::new).collect();
        rng.shuffle(&mut deck);

        let second = deck.split_off(deck.len() / 2);
        Deal {
            hands: PlayerMap::from_pair(Hand::from(deck), Hand::from(second)),
        }
    }
}

/// Two starting hands that partition a set of unique ranks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deal {
    hands: PlayerMap<Hand>,
}

impl Deal {
    /// Build a deal from explicit hands.
    ///
    /// Both hands must be non-empty, of equal size, and share no rank.
    pub fn from_hands(first: Hand, second: Hand) -> Result<Self, DealError> {
        if first.is_empty() || second.is_empty() {
            return Err(DealError::EmptyHand);
        }
        if first.len() != second.len() {
            return Err(DealError::UnevenHands {
                first: first.len(),
                second: second.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for card in first.iter().chain(second.iter()) {
            if !seen.insert(*card) {
                return Err(DealError::DuplicateRank { rank: card.rank() });
            }
        }

        Ok(Self {
            hands: PlayerMap::from_pair(first, second),
        })
    }

    /// Convenience for tests and tools: build from raw ranks.
    pub fn from_ranks(first: &[u32], second: &[u32]) -> Result<Self, DealError> {
        Self::from_hands(
            first.iter().copied().map(Card::new).collect(),
            second.iter().copied().map(Card::new).collect(),
        )
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Total number of cards across both hands.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(|(_, h)| h.len()).sum()
    }

    /// Player one's strength minus player two's.
    #[must_use]
    pub fn strength_diff(&self) -> i64 {
        self.hands[PlayerId::One].strength() - self.hands[PlayerId::Two].strength()
    }

    pub(crate) fn into_hands(self) -> PlayerMap<Hand> {
        self.hands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_validation() {
        assert!(DeckBuilder::new(52).is_ok());
        assert!(DeckBuilder::new(2).is_ok());
        assert_eq!(
            DeckBuilder::new(7),
            Err(ConfigError::OddCardCount { count: 7 })
        );
        assert_eq!(DeckBuilder::new(0), Err(ConfigError::TooFewCards { count: 0 }));
    }

    #[test]
    fn test_deal_partitions_deck() {
        let builder = DeckBuilder::new(52).unwrap();
        let mut rng = GameRng::new(42);
        let deal = builder.deal(&mut rng);

        assert_eq!(deal.hand(PlayerId::One).len(), 26);
        assert_eq!(deal.hand(PlayerId::Two).len(), 26);
        assert_eq!(deal.card_count(), 52);

        let mut all: Vec<u32> = deal
            .hand(PlayerId::One)
            .iter()
            .chain(deal.hand(PlayerId::Two).iter())
            .map(|c| c.rank())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..52).collect::<Vec<_>>());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let builder = DeckBuilder::new(20).unwrap();
        let deal1 = builder.deal(&mut GameRng::new(7));
        let deal2 = builder.deal(&mut GameRng::new(7));
        let deal3 = builder.deal(&mut GameRng::new(8));

        assert_eq!(deal1, deal2);
        assert_ne!(deal1, deal3);
    }

    #[test]
    fn test_strength_diff() {
        let deal = Deal::from_ranks(&[5, 3], &[1, 0]).unwrap();
        assert_eq!(deal.strength_diff(), 7);

        let deal = Deal::from_ranks(&[0], &[1]).unwrap();
        assert_eq!(deal.strength_diff(), -1);
    }

    #[test]
    fn test_from_hands_rejects_invalid() {
        assert_eq!(Deal::from_ranks(&[], &[1]), Err(DealError::EmptyHand));
        assert_eq!(
            Deal::from_ranks(&[0, 2], &[1]),
            Err(DealError::UnevenHands { first: 2, second: 1 })
        );
        assert_eq!(
            Deal::from_ranks(&[0, 4], &[4, 1]),
            Err(DealError::DuplicateRank { rank: 4 })
        );
    }
}
