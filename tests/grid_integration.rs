// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the player grid.

mod common;

use common::{InstantEngine, STREAM_URL};
use hls_grid::config::{Config, PlayerSettings};
use hls_grid::domain::video::PlayerCount;
use hls_grid::grid::GridController;
use hls_grid::video_player::create_player;
use std::collections::HashSet;
use std::sync::Arc;

#[test]
fn test_switching_counts_recreates_every_session() {
    let engine = Arc::new(InstantEngine::new(60.0));
    let shared = engine.clone();
    let mut grid = GridController::new(move || {
        create_player(shared.clone(), PlayerSettings::default())
    });

    let mut seen = HashSet::new();
    for (from, to) in [(1, 4), (4, 2), (2, 3), (3, 3), (3, 1)] {
        grid.select(PlayerCount::new(from).unwrap());
        for player in grid.players_mut() {
            player.set_source_url(STREAM_URL);
        }
        grid.pump_all();

        grid.select(PlayerCount::new(to).unwrap());
        assert_eq!(grid.players().len(), usize::from(to));
        assert_eq!(engine.live_sessions(), 0, "old sessions must be released");

        for player in grid.players() {
            assert!(seen.insert(player.id()), "player {} was reused", player.id());
        }
    }
}

#[test]
fn test_grid_from_config() {
    let config = Config {
        player_count: Some(3),
        ..Config::default()
    };
    let settings = config.player_settings();
    let engine = Arc::new(InstantEngine::new(60.0));

    let grid = GridController::with_count(config.player_count(), move || {
        create_player(engine.clone(), settings.clone())
    });

    assert_eq!(grid.count().value(), 3);
    assert_eq!(grid.players().len(), 3);
}

#[test]
fn test_invalid_selector_value_keeps_grid() {
    let engine = Arc::new(InstantEngine::new(60.0));
    let mut grid = GridController::new(move || {
        create_player(engine.clone(), PlayerSettings::default())
    });
    grid.select_value("2").unwrap();

    assert!(grid.select_value("0").is_err());
    assert!(grid.select_value("four").is_err());
    assert_eq!(grid.players().len(), 2);
}
