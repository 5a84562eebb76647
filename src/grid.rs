// SPDX-License-Identifier: MPL-2.0
//! Player grid.
//!
//! The grid owns between one and four independent [`Player`]s. Changing the
//! count replaces the whole set: every existing player is dropped (releasing
//! its session) before the new ones are built.

use crate::domain::video::PlayerCount;
use crate::error::Result;
use crate::video_player::Player;
use tracing::info;

/// Holds the selected number of players, built by a factory closure.
pub struct GridController<F>
where
    F: FnMut() -> Player,
{
    count: PlayerCount,
    players: Vec<Player>,
    factory: F,
}

impl<F> GridController<F>
where
    F: FnMut() -> Player,
{
    /// Creates a grid with the default player count.
    pub fn new(factory: F) -> Self {
        Self::with_count(PlayerCount::default(), factory)
    }

    /// Creates a grid with `count` players, e.g. from `Config::player_count`.
    pub fn with_count(count: PlayerCount, factory: F) -> Self {
        let mut grid = Self {
            count,
            players: Vec::new(),
            factory,
        };
        grid.rebuild();
        grid
    }

    /// Values offered by the selector.
    pub fn options() -> [PlayerCount; 4] {
        PlayerCount::ALL
    }

    pub fn count(&self) -> PlayerCount {
        self.count
    }

    /// Replaces the player set with `count` fresh players.
    pub fn select(&mut self, count: PlayerCount) {
        self.count = count;
        self.rebuild();
    }

    /// Applies a selector value such as `"3"`.
    pub fn select_value(&mut self, value: &str) -> Result<()> {
        let count = value.parse::<PlayerCount>()?;
        self.select(count);
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Drains queued events on every player. Returns the total handled.
    pub fn pump_all(&mut self) -> usize {
        self.players.iter_mut().map(Player::pump).sum()
    }

    fn rebuild(&mut self) {
        let dropped = self.players.len();
        self.players.clear();
        self.players = (0..self.count.as_usize())
            .map(|_| (self.factory)())
            .collect();
        info!(count = %self.count, dropped, "player grid rebuilt");
    }
}
