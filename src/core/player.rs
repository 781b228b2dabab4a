//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! War is strictly a two-seat game, so `PlayerId` is a closed enum
//! rather than an open index.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage backed by `[T; 2]`.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players in seating order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Short label used in trace output ("P1" / "P2").
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            PlayerId::One => "P1",
            PlayerId::Two => "P2",
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use war_sim::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_default();
/// wins[PlayerId::Two] += 3;
///
/// assert_eq!(wins[PlayerId::One], 0);
/// assert_eq!(wins[PlayerId::Two], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Create from explicit per-player values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable access to both entries at once.
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        let [one, two] = &mut self.data;
        (one, two)
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Apply `f` to each entry, producing a new map.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(self.get(p)))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(format!("{}", PlayerId::One), "Player 1");
        assert_eq!(PlayerId::Two.short(), "P2");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::One], 0);
        assert_eq!(map[PlayerId::Two], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_default();

        map[PlayerId::One] = 10;
        *map.get_mut(PlayerId::Two) = 20;

        assert_eq!(map[PlayerId::One], 10);
        assert_eq!(map[PlayerId::Two], 20);
    }

    #[test]
    fn test_player_map_both_mut() {
        let mut map = PlayerMap::from_pair(vec![1], vec![2]);
        let (one, two) = map.both_mut();
        one.push(3);
        two.clear();

        assert_eq!(map[PlayerId::One], vec![1, 3]);
        assert!(map[PlayerId::Two].is_empty());
    }

    #[test]
    fn test_player_map_iter_and_map() {
        let map = PlayerMap::from_pair(3, 5);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::One, &3), (PlayerId::Two, &5)]);

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled, PlayerMap::from_pair(6, 10));
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair(26usize, 0usize);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
