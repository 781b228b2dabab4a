//! A player's hand as a FIFO queue.
//!
//! Cards are played from the front; cards won in a turn join at the back and
//! are not seen again until everything queued ahead of them has been played.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Ordered queue of a player's remaining cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: VecDeque<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the front card, if any.
    pub fn draw_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append a card at the back.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Append several cards at the back, preserving their order.
    pub fn extend_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of all ranks held.
    #[must_use]
    pub fn strength(&self) -> i64 {
        self.cards.iter().map(|c| i64::from(c.rank())).sum()
    }

    /// Cards in play order (front first).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Copy of the cards in play order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}
