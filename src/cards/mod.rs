//! Cards, hands, and dealing.
//!
//! ## Key Types
//!
//! - `Card`: A uniquely ranked card
//! - `Hand`: FIFO queue of a player's cards
//! - `DeckBuilder`: Shuffles `0..N` and splits it into two hands
//! - `Deal`: Two validated starting hands

pub mod card;
pub mod deck;
pub mod hand;

pub use card::Card;
pub use deck::{Deal, DeckBuilder};
pub use hand::Hand;
